//! Month grouper — partitions the schedule by month name for the full
//! schedule view.
//!
//! Partitions keep input order on insert and are then stable-sorted by date,
//! so records on the same day stay in dataset order. Unknown dates sort as
//! 1970-01-01.
//!
//! Display order starts from a preferred month list (from config). Months
//! that have records but are missing from that list are appended after it in
//! chronological order, with `Unknown` always last, so no partition is ever
//! hidden.

use std::collections::HashMap;

use chrono::NaiveDate;
use phf::phf_map;

use crate::types::{EnrichedRecord, UNKNOWN_MONTH};

/// Lowercase month names and abbreviations → canonical month name.
static MONTHS: phf::Map<&'static str, &'static str> = phf_map! {
    "january" => "January", "jan" => "January",
    "february" => "February", "feb" => "February",
    "march" => "March", "mar" => "March",
    "april" => "April", "apr" => "April",
    "may" => "May",
    "june" => "June", "jun" => "June",
    "july" => "July", "jul" => "July",
    "august" => "August", "aug" => "August",
    "september" => "September", "sep" => "September", "sept" => "September",
    "october" => "October", "oct" => "October",
    "november" => "November", "nov" => "November",
    "december" => "December", "dec" => "December",
    "unknown" => "Unknown",
};

/// Resolve a user-typed month (`"sep"`, `"AUGUST"`) to its canonical name.
pub fn month_from_name(name: &str) -> Option<&'static str> {
    MONTHS.get(name.trim().to_ascii_lowercase().as_str()).copied()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthGroups {
    groups: HashMap<String, Vec<EnrichedRecord>>,
}

impl MonthGroups {
    pub fn build(records: &[EnrichedRecord]) -> Self {
        let mut groups: HashMap<String, Vec<EnrichedRecord>> = HashMap::new();
        for record in records {
            groups
                .entry(record.month.clone())
                .or_default()
                .push(record.clone());
        }
        for partition in groups.values_mut() {
            partition.sort_by_key(EnrichedRecord::sort_key);
        }
        Self { groups }
    }

    pub fn get(&self, month: &str) -> Option<&[EnrichedRecord]> {
        self.groups.get(month).map(Vec::as_slice)
    }

    /// Month names that have at least one record, in no particular order.
    pub fn months(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Months to render, in order: `preferred` first (skipping months with no
    /// records), then any remaining months chronologically, `Unknown` last.
    pub fn display_order(&self, preferred: &[String]) -> Vec<String> {
        let mut order: Vec<String> = Vec::with_capacity(self.groups.len());
        for month in preferred {
            if self.groups.contains_key(month) && !order.contains(month) {
                order.push(month.clone());
            }
        }

        let mut rest: Vec<(&String, i64)> = self
            .groups
            .iter()
            .filter(|(month, _)| !order.contains(month))
            .map(|(month, records)| {
                let earliest = records.first().map(EnrichedRecord::sort_key).unwrap_or(0);
                (month, earliest)
            })
            .collect();
        rest.sort_by(|(a, ea), (b, eb)| {
            (a.as_str() == UNKNOWN_MONTH, ea, a).cmp(&(b.as_str() == UNKNOWN_MONTH, eb, b))
        });

        if !rest.is_empty() {
            tracing::debug!(
                unlisted = ?rest.iter().map(|(m, _)| m.as_str()).collect::<Vec<_>>(),
                "appending months missing from the preferred order"
            );
        }
        order.extend(rest.into_iter().map(|(m, _)| m.clone()));
        order
    }
}

/// The panel to open first: the current month when it has records, otherwise
/// the first month in `order`.
pub fn default_open_month(order: &[String], today: NaiveDate) -> Option<String> {
    let current = today.format("%B").to_string();
    if order.contains(&current) {
        Some(current)
    } else {
        order.first().cloned()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
