//! Test builders — ergonomic constructors for raw records and schedules.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use chrono::NaiveDate;
use snehapothi::{core::config::Config, Dashboard, EnrichedRecord, RawRecord, Schedule};

/// Year every fixture treats as "current".
pub const YEAR: i32 = 2025;

/// `NaiveDate` shorthand; panics on an invalid date.
pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("fixture date must be valid")
}

/// A raw record at `date_text` in `mandalam`.
pub fn raw(date_text: &str, mandalam: &str) -> RawRecord {
    RawRecord::new(date_text, Some(mandalam))
}

/// Raw records from `(date_text, mandalam)` pairs, in order.
pub fn raws(rows: &[(&str, &str)]) -> Vec<RawRecord> {
    rows.iter().map(|(d, m)| raw(d, m)).collect()
}

/// Enriched records (lenient: duplicate keys allowed).
pub fn enriched(rows: &[(&str, &str)]) -> Vec<EnrichedRecord> {
    snehapothi::core::normalizer::normalize(&raws(rows), YEAR)
}

/// Validated schedule; panics on duplicate keys.
pub fn schedule(rows: &[(&str, &str)]) -> Schedule {
    Schedule::build(&raws(rows), YEAR).expect("fixture keys must be unique")
}

/// Dashboard over `rows` with the built-in config.
pub fn dashboard(rows: &[(&str, &str)]) -> Dashboard {
    Dashboard::new(schedule(rows), Config::defaults())
}

/// Mandalam labels of `records`, in order.
pub fn labels(records: &[EnrichedRecord]) -> Vec<&str> {
    records.iter().map(EnrichedRecord::mandalam_label).collect()
}
