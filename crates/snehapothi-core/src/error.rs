//! Load-time errors for the schedule.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// Two records share the same `date_text-mandalam` key.
    #[error("duplicate schedule entry `{key}` at positions {first} and {second}")]
    DuplicateKey {
        key: String,
        first: usize,
        second: usize,
    },
}
