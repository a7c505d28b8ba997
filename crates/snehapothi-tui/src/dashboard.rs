//! The read-only view model shared by the TUI and the headless report.
//!
//! Month groups and their display order are computed once here; the day
//! window depends on the reference date and is selected on demand.

use chrono::NaiveDate;
use snehapothi_core::{
    config::Config, grouper::default_open_month, DayWindow, EnrichedRecord, MonthGroups,
    Schedule,
};

pub struct Dashboard {
    pub schedule: Schedule,
    pub groups: MonthGroups,
    /// Month panels in display order.
    pub order: Vec<String>,
    pub config: Config,
}

impl Dashboard {
    pub fn new(schedule: Schedule, config: Config) -> Self {
        let groups = MonthGroups::build(schedule.records());
        let order = groups.display_order(&config.schedule.month_order);
        tracing::debug!(months = ?order, "month panels");
        Self {
            schedule,
            groups,
            order,
            config,
        }
    }

    pub fn window(&self, today: NaiveDate) -> DayWindow<'_> {
        DayWindow::select(self.schedule.records(), today)
    }

    /// Records of a month panel, sorted by date. Empty for unknown months.
    pub fn rows(&self, month: &str) -> &[EnrichedRecord] {
        self.groups.get(month).unwrap_or(&[])
    }

    /// Index into [`Dashboard::order`] of the panel to open first.
    pub fn default_panel(&self, today: NaiveDate) -> usize {
        default_open_month(&self.order, today)
            .and_then(|m| self.order.iter().position(|o| *o == m))
            .unwrap_or(0)
    }
}
