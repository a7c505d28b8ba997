//! snehapothi TUI — ratatui dashboard shell and headless report.

pub mod app;
pub mod commands;
pub mod dashboard;
pub mod event;
pub mod headless;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use dashboard::Dashboard;

use chrono::NaiveDate;

/// Start the interactive dashboard. `today` pins the reference date; `None`
/// follows the local clock.
pub fn run(dashboard: Dashboard, theme: theme::Theme, today: Option<NaiveDate>) -> anyhow::Result<()> {
    App::new(dashboard, theme, today).run()
}
