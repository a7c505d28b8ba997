//! snehapothi — Sneha Pothi schedule dashboard.
//!
//! Terminal dashboard for the district committee's event schedule: a
//! today / tomorrow / day-after hero row and the full schedule grouped by
//! month. This crate re-exports the workspace layers so integration tests and
//! the binary share one import path.
//!
//! # Architecture
//!
//! ```text
//! dataset ──► Schedule ──┬──► DayWindow  ──┐
//!                        └──► MonthGroups ─┴──► TUI / headless report
//! ```

pub use snehapothi_core as core;
pub use snehapothi_tui as tui;

pub use snehapothi_core::{
    DayWindow, EnrichedRecord, MonthGroups, RawRecord, Schedule, ScheduleError,
};
pub use snehapothi_tui::Dashboard;

/// Build the dashboard from the compiled-in dataset.
pub fn load_dashboard(config: core::config::Config) -> Result<Dashboard, ScheduleError> {
    let schedule = Schedule::build(
        &core::dataset::raw_schedule(),
        config.schedule.expected_year,
    )?;
    Ok(Dashboard::new(schedule, config))
}
