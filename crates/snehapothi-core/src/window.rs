//! Day-window selector — the today / tomorrow / day-after hero view.
//!
//! Target days are computed by calendar-day increment, so the window is
//! correct across month ends and daylight-saving transitions. Each slot holds
//! the first record in input order whose date falls on that day; any further
//! records for the same day are only visible in the month table.

use chrono::{Local, NaiveDate};

use crate::types::EnrichedRecord;

/// The three hero slots, borrowed from the schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayWindow<'a> {
    pub reference: NaiveDate,
    pub today: Option<&'a EnrichedRecord>,
    pub tomorrow: Option<&'a EnrichedRecord>,
    pub day_after: Option<&'a EnrichedRecord>,
}

impl<'a> DayWindow<'a> {
    /// Select the window starting at `today`.
    pub fn select(records: &'a [EnrichedRecord], today: NaiveDate) -> Self {
        let tomorrow = today.succ_opt();
        let day_after = tomorrow.and_then(|d| d.succ_opt());

        Self {
            reference: today,
            today: first_on(records, Some(today)),
            tomorrow: first_on(records, tomorrow),
            day_after: first_on(records, day_after),
        }
    }

    /// Select the window for the host's local date, read fresh on each call.
    pub fn for_now(records: &'a [EnrichedRecord]) -> Self {
        Self::select(records, Local::now().date_naive())
    }

    /// Slots paired with their display labels, in order.
    pub fn slots(&self) -> [(&'static str, Option<&'a EnrichedRecord>); 3] {
        [
            ("Today", self.today),
            ("Tomorrow", self.tomorrow),
            ("Day After", self.day_after),
        ]
    }
}

fn first_on(records: &[EnrichedRecord], day: Option<NaiveDate>) -> Option<&EnrichedRecord> {
    let day = day?;
    records.iter().find(|r| r.date == Some(day))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::normalize;
    use crate::types::RawRecord;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_slots_when_nothing_matches() {
        let records = normalize(&[RawRecord::new("01.09.2025", Some("A"))], 2025);
        let w = DayWindow::select(&records, ymd(2025, 8, 1));
        assert!(w.today.is_none() && w.tomorrow.is_none() && w.day_after.is_none());
    }

    #[test]
    fn first_record_wins_per_day() {
        let records = normalize(
            &[
                RawRecord::new("15.08.2025", Some("First")),
                RawRecord::new("15.08.2025", Some("Second")),
                RawRecord::new("17.08.2025", Some("Third")),
            ],
            2025,
        );
        let w = DayWindow::select(&records, ymd(2025, 8, 15));
        assert_eq!(w.today.map(|r| r.mandalam_label()), Some("First"));
        assert!(w.tomorrow.is_none());
        assert_eq!(w.day_after.map(|r| r.mandalam_label()), Some("Third"));
    }

    #[test]
    fn crosses_month_boundary_by_calendar_day() {
        let records = normalize(
            &[
                RawRecord::new("01.09.2025", Some("Sep1")),
                RawRecord::new("02.09.2025", Some("Sep2")),
            ],
            2025,
        );
        let w = DayWindow::select(&records, ymd(2025, 8, 31));
        assert!(w.today.is_none());
        assert_eq!(w.tomorrow.map(|r| r.mandalam_label()), Some("Sep1"));
        assert_eq!(w.day_after.map(|r| r.mandalam_label()), Some("Sep2"));
    }

    #[test]
    fn unparseable_dates_never_match() {
        let records = normalize(&[RawRecord::new("bad-date", None)], 2025);
        let w = DayWindow::select(&records, ymd(2025, 8, 15));
        assert_eq!(w.slots().iter().filter(|(_, r)| r.is_some()).count(), 0);
    }

    #[test]
    fn slot_labels_in_order() {
        let w = DayWindow::select(&[], ymd(2025, 8, 15));
        let labels: Vec<_> = w.slots().iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, vec!["Today", "Tomorrow", "Day After"]);
    }
}
