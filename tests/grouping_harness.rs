#![allow(unused)]
//! Month-grouping integration harness.
//!
//! # What this covers
//!
//! - **Partitioning**: every record lands in exactly one partition named by
//!   its month; unparseable dates go to `Unknown`.
//! - **Ordering**: partitions are chronological and stable for same-day
//!   records; unknown dates sort first.
//! - **Display order**: the preferred list leads, unlisted months follow
//!   chronologically, `Unknown` trails them.
//! - **Default panel**: the current month when present, else the first.
//! - **Properties**: grouping is idempotent and loses no records.
//!
//! # Running
//!
//! ```sh
//! cargo test --test grouping_harness
//! ```

mod common;
use common::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use snehapothi::core::grouper::default_open_month;
use snehapothi::MonthGroups;

fn strings(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn partitions_are_consistent() {
    let records = enriched(SCHEDULE_ROWS);
    let groups = MonthGroups::build(&records);
    assert_partitions_consistent(&groups, records.len());
    assert_eq!(groups.len(), 4);
}

#[test]
fn partition_sorted_with_stable_ties() {
    let groups = MonthGroups::build(&enriched(SCHEDULE_ROWS));
    assert_eq!(
        labels(groups.get("August").unwrap_or_default()),
        [
            "Thiruvananthapuram",
            "Neyyattinkara",
            "Parassala",
            "Kattakkada",
            "Kovalam",
            "Nemom",
        ]
    );
}

#[test]
fn unknown_partition_holds_unparseable_dates() {
    let groups = MonthGroups::build(&enriched(SCHEDULE_ROWS));
    assert_eq!(labels(groups.get("Unknown").unwrap_or_default()), ["Fort"]);
}

#[test]
fn display_order_appends_unlisted_months() {
    let records = enriched(&[
        ("05.01.2026", "Convention"),
        ("01.08.2025", "A"),
        ("bad", "B"),
        ("01.07.2025", "C"),
    ]);
    let groups = MonthGroups::build(&records);
    let order = groups.display_order(&strings(&["August", "September"]));
    assert_eq!(order, ["August", "July", "January", "Unknown"]);
}

#[test]
fn display_order_respects_listed_unknown() {
    let groups = MonthGroups::build(&enriched(SCHEDULE_ROWS));
    let order = groups.display_order(&strings(&["Unknown", "October", "August"]));
    assert_eq!(order, ["Unknown", "October", "August", "September"]);
}

#[test]
fn default_panel_prefers_current_month() {
    let order = strings(&["August", "September", "Unknown"]);
    assert_eq!(
        default_open_month(&order, ymd(2025, 9, 10)).as_deref(),
        Some("September")
    );
    assert_eq!(
        default_open_month(&order, ymd(2025, 12, 1)).as_deref(),
        Some("August")
    );
    assert_eq!(default_open_month(&[], ymd(2025, 12, 1)), None);
}

#[test]
fn dashboard_wires_config_order() {
    let d = dashboard(SCHEDULE_ROWS);
    assert_eq!(d.order, ["August", "September", "October", "Unknown"]);
    assert_eq!(d.order[d.default_panel(ymd(2025, 10, 3))], "October");
    assert!(d.rows("December").is_empty());
}

proptest! {
    #[test]
    fn grouping_is_idempotent(
        rows in prop::collection::vec((1u32..=31, 1u32..=12, 2024i32..=2026), 0..40)
    ) {
        let texts: Vec<(String, String)> = rows
            .iter()
            .enumerate()
            .map(|(i, (d, m, y))| (format!("{d:02}.{m:02}.{y}"), format!("M{i}")))
            .collect();
        let pairs: Vec<(&str, &str)> =
            texts.iter().map(|(d, m)| (d.as_str(), m.as_str())).collect();
        let records = enriched(&pairs);

        let once = MonthGroups::build(&records);
        assert_partitions_consistent(&once, records.len());

        let flattened: Vec<_> = once
            .months()
            .flat_map(|m| once.get(m).unwrap_or_default().to_vec())
            .collect();
        let twice = MonthGroups::build(&flattened);
        prop_assert_eq!(once, twice);
    }
}
