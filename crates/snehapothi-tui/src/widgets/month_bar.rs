//! Month bar — the accordion headers of the full schedule.
//!
//! One entry per month panel with its record count. The open panel is marked
//! `▾` (or `▸` when collapsed) and highlighted. Keybinding hints are
//! right-aligned in the same row.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Tabs, Widget},
};

pub struct MonthBar<'a> {
    /// `(month, record count)` in display order.
    months: &'a [(String, usize)],
    open: usize,
    expanded: bool,
    theme: &'a Theme,
}

impl<'a> MonthBar<'a> {
    pub fn new(months: &'a [(String, usize)], open: usize, expanded: bool, theme: &'a Theme) -> Self {
        Self { months, open, expanded, theme }
    }
}

impl Widget for MonthBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let labels: Vec<Line> = self
            .months
            .iter()
            .enumerate()
            .map(|(i, (month, count))| {
                let marker = if i == self.open && self.expanded { "▾" } else { "▸" };
                Line::from(format!(" {marker} {month} ({count}) "))
            })
            .collect();

        Tabs::new(labels)
            .select(self.open)
            .style(self.theme.accordion_closed)
            .highlight_style(self.theme.accordion_open)
            .divider("")
            .render(area, buf);

        let hint = " tab:month  t:today  ?:help ";
        let hint_x = area.right().saturating_sub(hint.chars().count() as u16);
        buf.set_string(
            hint_x,
            area.y,
            hint,
            Style::default().add_modifier(Modifier::DIM),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::test_support::rows;

    #[test]
    fn marks_open_panel() {
        let theme = Theme::load_default();
        let months = vec![("August".to_string(), 3), ("September".to_string(), 2)];
        let area = Rect::new(0, 0, 120, 1);
        let mut buf = Buffer::empty(area);
        MonthBar::new(&months, 1, true, &theme).render(area, &mut buf);

        let row = &rows(&buf)[0];
        assert!(row.contains("▸ August (3)"));
        assert!(row.contains("▾ September (2)"));
    }

    #[test]
    fn collapsed_panel_uses_closed_marker() {
        let theme = Theme::load_default();
        let months = vec![("August".to_string(), 3)];
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        MonthBar::new(&months, 0, false, &theme).render(area, &mut buf);
        assert!(rows(&buf)[0].contains("▸ August (3)"));
    }
}
