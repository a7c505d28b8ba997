//! Core types for snehapothi-core.
//!
//! This module defines the two record shapes shared across all layers: the
//! compiled-in [`RawRecord`] and the derived [`EnrichedRecord`] produced by
//! the normalizer.

use chrono::NaiveDate;
use serde::Serialize;

/// Placeholder shown (and used in keys) when a record has no mandalam yet.
pub const TBD_LABEL: &str = "TBD";

/// Month name assigned to records whose date text failed to parse.
pub const UNKNOWN_MONTH: &str = "Unknown";

/// A schedule entry exactly as it appears in the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawRecord {
    /// Expected `DD.MM.YYYY`; whitespace around the dots is tolerated.
    pub date_text: String,
    /// Constituency name. `None` means not yet determined.
    pub mandalam: Option<String>,
    /// Explicit "needs review" marker.
    pub suspect: bool,
    /// Provisional entry.
    pub tbd: bool,
}

impl RawRecord {
    pub fn new(date_text: impl Into<String>, mandalam: Option<&str>) -> Self {
        Self {
            date_text: date_text.into(),
            mandalam: mandalam.map(str::to_string),
            suspect: false,
            tbd: false,
        }
    }

    pub fn with_suspect(mut self, suspect: bool) -> Self {
        self.suspect = suspect;
        self
    }

    pub fn with_tbd(mut self, tbd: bool) -> Self {
        self.tbd = tbd;
        self
    }
}

/// A [`RawRecord`] plus everything derived from its date text.
///
/// Built once by [`crate::normalizer::enrich`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedRecord {
    /// Row identity: `date_text-mandalam`, with [`TBD_LABEL`] standing in for
    /// a missing mandalam.
    pub key: String,
    pub date_text: String,
    pub mandalam: Option<String>,
    pub tbd: bool,
    /// `None` when `date_text` could not be parsed.
    pub date: Option<NaiveDate>,
    pub year: Option<i32>,
    /// Raw flag OR'd with the year-mismatch heuristic.
    pub suspect: bool,
    /// Short weekday (`"Fri"`), empty when the date is unknown.
    pub weekday: String,
    /// Long month name (`"August"`), or [`UNKNOWN_MONTH`].
    pub month: String,
}

impl EnrichedRecord {
    /// Mandalam for display, falling back to [`TBD_LABEL`].
    pub fn mandalam_label(&self) -> &str {
        self.mandalam.as_deref().unwrap_or(TBD_LABEL)
    }

    /// Days since 1970-01-01, with an unknown date counting as zero.
    ///
    /// This is the ordering key used for chronological sorting.
    pub fn sort_key(&self) -> i64 {
        self.date
            .map(|d| (d - NaiveDate::default()).num_days())
            .unwrap_or(0)
    }
}
