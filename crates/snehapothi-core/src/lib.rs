//! snehapothi-core — schedule model for the Sneha Pothi dashboard.
//!
//! This crate exposes the pipeline stages as public modules, plus the shared
//! record types.
//!
//! # Architecture
//!
//! ```text
//! dataset ──► normalizer ──► Schedule ──┬──► window  (today / tomorrow / day after)
//!                                       └──► grouper (month panels)
//! ```
//!
//! Everything is computed synchronously from the compiled-in dataset. The
//! schedule and month groups are built once at startup; the day window is
//! re-selected whenever the caller asks, since it depends on the clock.

pub mod config;
pub mod dataset;
pub mod date;
pub mod error;
pub mod grouper;
pub mod normalizer;
pub mod types;
pub mod window;

pub use error::ScheduleError;
pub use grouper::MonthGroups;
pub use normalizer::Schedule;
pub use types::{EnrichedRecord, RawRecord};
pub use window::DayWindow;
