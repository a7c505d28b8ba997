//! Domain-specific assertions for snehapothi harnesses.
//!
//! These add context-rich failure messages that make it clear *which*
//! schedule invariant was violated.

use snehapothi::{EnrichedRecord, MonthGroups};

/// Assert that records are in non-decreasing date order (unknown = epoch).
pub fn assert_chronological(records: &[EnrichedRecord]) {
    for pair in records.windows(2) {
        assert!(
            pair[0].sort_key() <= pair[1].sort_key(),
            "records out of order: {:?} ({:?}) before {:?} ({:?})",
            pair[0].key,
            pair[0].date,
            pair[1].key,
            pair[1].date
        );
    }
}

/// Assert that every record of every partition carries that partition's
/// month name, and that partitions together hold exactly `expected` records.
pub fn assert_partitions_consistent(groups: &MonthGroups, expected: usize) {
    let mut total = 0;
    for month in groups.months() {
        let records = groups.get(month).unwrap_or_default();
        for record in records {
            assert_eq!(
                record.month, month,
                "record {:?} filed under {:?} but its month is {:?}",
                record.key, month, record.month
            );
        }
        assert_chronological(records);
        total += records.len();
    }
    assert_eq!(total, expected, "partitions lost or duplicated records");
}
