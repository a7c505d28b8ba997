//! Schedule table — the paginated table inside the open month panel.
//!
//! # Navigation
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k` | Move the row cursor up (wraps to the previous page) |
//! | `↓` / `j` | Move the row cursor down (wraps to the next page) |
//! | `PageUp` / `Ctrl+u` | Previous page |
//! | `PageDown` / `Ctrl+d` | Next page |
//!
//! `page` is zero-based; `cursor` is the row index within the current page.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use crate::widgets::flag_spans;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::Line,
    widgets::{Block, Cell, Row, Table, Widget},
};
use snehapothi_core::{date::display_numeric, EnrichedRecord};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScheduleTableState {
    pub page: usize,
    pub cursor: usize,
}

/// Number of pages needed for `total` rows; at least one.
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

impl ScheduleTableState {
    pub fn reset(&mut self) {
        self.page = 0;
        self.cursor = 0;
    }

    /// Rows on the current page.
    fn rows_on_page(&self, total: usize, page_size: usize) -> usize {
        let start = self.page * page_size;
        total.saturating_sub(start).min(page_size)
    }

    /// Handle a navigation event for a table of `total` rows.
    pub fn handle(&mut self, event: &AppEvent, total: usize, page_size: usize) {
        let page_size = page_size.max(1);
        let pages = page_count(total, page_size);
        if total == 0 {
            self.reset();
            return;
        }

        match event {
            AppEvent::Nav(Direction::Up) => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                } else if self.page > 0 {
                    self.page -= 1;
                    self.cursor = page_size - 1;
                }
            }
            AppEvent::Nav(Direction::Down) => {
                if self.cursor + 1 < self.rows_on_page(total, page_size) {
                    self.cursor += 1;
                } else if self.page + 1 < pages {
                    self.page += 1;
                    self.cursor = 0;
                }
            }
            AppEvent::PageUp => {
                self.page = self.page.saturating_sub(1);
                self.cursor = 0;
            }
            AppEvent::PageDown => {
                if self.page + 1 < pages {
                    self.page += 1;
                    self.cursor = 0;
                } else {
                    self.cursor = self.rows_on_page(total, page_size).saturating_sub(1);
                }
            }
            _ => return,
        }
        tracing::debug!(page = self.page, cursor = self.cursor, "table: moved");
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct ScheduleTable<'a> {
    title: &'a str,
    records: &'a [EnrichedRecord],
    state: &'a ScheduleTableState,
    page_size: usize,
    theme: &'a Theme,
}

impl<'a> ScheduleTable<'a> {
    pub fn new(
        title: &'a str,
        records: &'a [EnrichedRecord],
        state: &'a ScheduleTableState,
        page_size: usize,
        theme: &'a Theme,
    ) -> Self {
        Self {
            title,
            records,
            state,
            page_size: page_size.max(1),
            theme,
        }
    }
}

impl Widget for ScheduleTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let pages = page_count(self.records.len(), self.page_size);
        let start = (self.state.page * self.page_size).min(self.records.len());
        let end = (start + self.page_size).min(self.records.len());

        let rows: Vec<Row> = self.records[start..end]
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let row = record_row(record, self.theme);
                if i == self.state.cursor {
                    row.style(self.theme.table_cursor)
                } else {
                    row
                }
            })
            .collect();

        let header = Row::new(["Date", "Day", "Mandalam", "Flags"]).style(self.theme.table_header);
        let pager = Line::styled(
            format!(" page {}/{} ", self.state.page + 1, pages),
            self.theme.table_pager,
        )
        .right_aligned();
        let block = Block::bordered()
            .title(format!(" {} ", self.title))
            .title_bottom(pager)
            .border_style(self.theme.border_focused);

        Table::new(
            rows,
            [
                Constraint::Length(12),
                Constraint::Length(5),
                Constraint::Fill(1),
                Constraint::Length(20),
            ],
        )
        .header(header)
        .block(block)
        .render(area, buf);
    }
}

/// Date (numeric, or the raw text when unparseable), weekday, mandalam, flags.
fn record_row(record: &EnrichedRecord, theme: &Theme) -> Row<'static> {
    let date = record
        .date
        .map(display_numeric)
        .unwrap_or_else(|| record.date_text.clone());
    Row::new(vec![
        Cell::from(date),
        Cell::from(record.weekday.clone()),
        Cell::from(record.mandalam.clone().unwrap_or_default()),
        Cell::from(Line::from(flag_spans(record, theme))),
    ])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
