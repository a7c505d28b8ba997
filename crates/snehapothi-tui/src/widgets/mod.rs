//! Ratatui widgets for the snehapothi dashboard.

pub mod command_bar;
pub mod header;
pub mod help;
pub mod hero;
pub mod month_bar;
pub mod schedule_table;

use crate::theme::Theme;
use ratatui::text::Span;
use snehapothi_core::EnrichedRecord;

/// Tag shown for records flagged for review.
pub const SUSPECT_TAG: &str = " Check year ";
/// Tag shown for provisional records.
pub const TBD_TAG: &str = " TBD ";

/// Flag tags for a record, separated by a space. Empty when unflagged.
pub fn flag_spans(record: &EnrichedRecord, theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    if record.tbd {
        spans.push(Span::styled(TBD_TAG, theme.flag_tbd));
    }
    if record.suspect {
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(SUSPECT_TAG, theme.flag_suspect));
    }
    spans
}
