//! The compiled-in district committee schedule.
//!
//! Entries are kept exactly as they were circulated, including the odd typo
//! in the year; the normalizer flags those rather than this table fixing them.

use crate::types::RawRecord;

/// (date text, mandalam, suspect, tbd)
type Row = (&'static str, Option<&'static str>, bool, bool);

const ROWS: &[Row] = &[
    ("01.08.2025", Some("Thiruvananthapuram"), false, false),
    ("04.08.2025", Some("Vattiyoorkavu"), false, false),
    ("07.08.2025", Some("Kazhakkoottam"), false, false),
    ("11.08.2025", Some("Nemom"), false, false),
    ("15.08.2025", Some("Neyyattinkara"), false, false),
    ("18.08.2025", Some("Parassala"), false, false),
    ("21.08.2025", Some("Kovalam"), false, false),
    ("25.08.2025", Some("Aruvikkara"), false, false),
    ("28.08.2025", Some("Kattakkada"), false, false),
    ("01.09.2025", Some("Nedumangad"), false, false),
    ("04.09.2025", Some("Vamanapuram"), false, false),
    ("08.09.2025", Some("Attingal"), false, false),
    ("11.09.2025", Some("Chirayinkeezhu"), false, false),
    ("15.09.2025", Some("Varkala"), false, false),
    ("18.09.2025", None, false, true),
    ("22.09.2024", Some("Kilimanoor"), false, false),
    ("25.09.2025", Some("Vellarada"), false, false),
    ("29.09.2025", Some("Pothencode"), false, false),
    ("02.10.2025", Some("Balaramapuram"), false, false),
    ("06.10.2025", Some("Vizhinjam"), false, false),
    ("09.10.2025", Some("Peroorkada"), false, false),
    ("13.10.2025", Some("Sreekaryam"), false, false),
    ("16.10.2025", Some("Kudappanakunnu"), false, true),
    ("16.10.2025", Some("Vattappara"), false, false),
    ("20.10.2025", Some("Poovar"), false, false),
    ("23.10.2025", Some("Kallambalam"), true, false),
    ("27.10.2025", Some("Venjaramoodu"), false, false),
    ("30.10.2025", Some("Palode"), false, false),
    ("03.11.2025", Some("Vithura"), false, false),
    ("06.11.2025", Some("Aryanad"), false, false),
    ("10.11.2025", Some("Malayinkeezhu"), false, false),
    ("13.11.2025", Some("Pallichal"), false, false),
    ("17.11.2025", Some("Kadakkavoor"), false, false),
    ("20.11.2025", None, false, true),
    ("24.11.2025", Some("Kanjiramkulam"), false, false),
    ("27.11.2025", Some("Ottasekharamangalam"), false, false),
    ("01.12.2025", Some("Kunnathukal"), false, false),
    ("04.12.2025", Some("Anad"), false, false),
    ("08.12.2025", Some("Kazhakkoottam North"), false, false),
    ("11.12.2025", Some("Manacaud"), false, false),
    ("15.12.2025", Some("Karakulam"), false, true),
    ("18.12.2025", None, false, true),
    ("22.12.2025", Some("Pangode"), false, false),
    ("05.01.2026", Some("District Convention"), false, true),
    ("TBD", Some("Fort"), false, true),
];

/// The raw schedule in dataset order.
pub fn raw_schedule() -> Vec<RawRecord> {
    ROWS.iter()
        .map(|&(date_text, mandalam, suspect, tbd)| {
            RawRecord::new(date_text, mandalam)
                .with_suspect(suspect)
                .with_tbd(tbd)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::Schedule;

    #[test]
    fn dataset_has_unique_keys() {
        let schedule = Schedule::build(&raw_schedule(), 2025).unwrap();
        assert_eq!(schedule.len(), ROWS.len());
    }

    #[test]
    fn dataset_flags_the_odd_year() {
        let schedule = Schedule::build(&raw_schedule(), 2025).unwrap();
        let odd = schedule.get("22.09.2024-Kilimanoor").unwrap();
        assert!(odd.suspect);
    }
}
