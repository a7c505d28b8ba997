//! Normalizer — turns [`RawRecord`]s into [`EnrichedRecord`]s and collects
//! them into a validated [`Schedule`].
//!
//! Every derived field is a pure function of the raw record and the expected
//! year, so the whole schedule is computed once at startup and shared
//! read-only afterwards.

use std::collections::HashMap;

use chrono::Datelike;

use crate::date::parse_dmy;
use crate::error::ScheduleError;
use crate::types::{EnrichedRecord, RawRecord, TBD_LABEL, UNKNOWN_MONTH};

/// Derive an [`EnrichedRecord`] from a raw entry.
///
/// `suspect` is set when the raw flag is set or when the parsed year differs
/// from `expected_year`. An unparseable date has no year and is therefore
/// always suspect.
pub fn enrich(raw: &RawRecord, expected_year: i32) -> EnrichedRecord {
    let date = parse_dmy(&raw.date_text);
    if date.is_none() {
        tracing::debug!(date_text = %raw.date_text, "unparseable schedule date");
    }

    let year = date.map(|d| d.year());
    let suspect = raw.suspect || year != Some(expected_year);
    let key = format!(
        "{}-{}",
        raw.date_text,
        raw.mandalam.as_deref().unwrap_or(TBD_LABEL)
    );
    let weekday = date
        .map(|d| d.format("%a").to_string())
        .unwrap_or_default();
    let month = date
        .map(|d| d.format("%B").to_string())
        .unwrap_or_else(|| UNKNOWN_MONTH.to_string());

    EnrichedRecord {
        key,
        date_text: raw.date_text.clone(),
        mandalam: raw.mandalam.clone(),
        tbd: raw.tbd,
        date,
        year,
        suspect,
        weekday,
        month,
    }
}

/// Enrich every record, preserving input order. Duplicate keys pass through.
pub fn normalize(raws: &[RawRecord], expected_year: i32) -> Vec<EnrichedRecord> {
    raws.iter().map(|r| enrich(r, expected_year)).collect()
}

// ---------------------------------------------------------------------------
// Schedule
// ---------------------------------------------------------------------------

/// The enriched dataset, in input order, with unique keys.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    records: Vec<EnrichedRecord>,
    index: HashMap<String, usize>,
}

impl Schedule {
    /// Normalize `raws` and reject the dataset if two records share a key.
    pub fn build(raws: &[RawRecord], expected_year: i32) -> Result<Self, ScheduleError> {
        let records = normalize(raws, expected_year);

        let mut index = HashMap::with_capacity(records.len());
        for (pos, record) in records.iter().enumerate() {
            if let Some(&first) = index.get(&record.key) {
                return Err(ScheduleError::DuplicateKey {
                    key: record.key.clone(),
                    first,
                    second: pos,
                });
            }
            index.insert(record.key.clone(), pos);
        }

        let suspects = records.iter().filter(|r| r.suspect).count();
        tracing::info!(
            records = records.len(),
            suspects,
            expected_year,
            "schedule built"
        );

        Ok(Self { records, index })
    }

    pub fn records(&self) -> &[EnrichedRecord] {
        &self.records
    }

    pub fn get(&self, key: &str) -> Option<&EnrichedRecord> {
        self.index.get(key).map(|&i| &self.records[i])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
