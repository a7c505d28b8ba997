//! Hero card — one of the Today / Tomorrow / Day After boxes.
//!
//! The first inner row is a three-band stripe with the card label on top;
//! below it the mandalam, the long-form date and any flag tags. A slot with
//! no record shows `No entry`.

use crate::theme::Theme;
use crate::widgets::flag_spans;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};
use snehapothi_core::{date::display_long, EnrichedRecord};

pub struct HeroCard<'a> {
    label: &'a str,
    record: Option<&'a EnrichedRecord>,
    theme: &'a Theme,
}

impl<'a> HeroCard<'a> {
    pub fn new(label: &'a str, record: Option<&'a EnrichedRecord>, theme: &'a Theme) -> Self {
        Self { label, record, theme }
    }
}

impl Widget for HeroCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().border_style(self.theme.border_unfocused);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 {
            return;
        }

        let [stripe, body] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(inner);
        let bands = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(stripe);
        for (band, style) in bands.iter().zip(self.theme.hero_stripes.iter()) {
            buf.set_style(*band, *style);
        }
        buf.set_string(stripe.x + 1, stripe.y, self.label, self.theme.hero_label);

        let lines = match self.record {
            Some(record) => {
                let date = record
                    .date
                    .map(display_long)
                    .unwrap_or_else(|| record.date_text.clone());
                vec![
                    Line::from(Span::styled(
                        record.mandalam_label().to_string(),
                        self.theme.hero_mandalam,
                    )),
                    Line::from(Span::styled(date, self.theme.hero_date)),
                    Line::from(flag_spans(record, self.theme)),
                ]
            }
            None => vec![Line::from(Span::styled("No entry", self.theme.hero_empty))],
        };
        Paragraph::new(lines).render(body, buf);
    }
}
