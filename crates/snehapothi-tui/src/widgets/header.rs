//! Header and footer strips.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use snehapothi_core::config::BrandingConfig;

/// Three-row header: organisation and title on the left, meeting-time and
/// venue tags right-aligned on the title row.
pub struct Header<'a> {
    branding: &'a BrandingConfig,
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(branding: &'a BrandingConfig, theme: &'a Theme) -> Self {
        Self { branding, theme }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(Span::styled(
                self.branding.organisation.as_str(),
                self.theme.header_organisation,
            )),
            Line::from(Span::styled(
                self.branding.title.as_str(),
                self.theme.header_title,
            )),
        ];
        Paragraph::new(lines).render(area, buf);

        let tags = Line::from(vec![
            Span::styled(
                format!(" {} ", self.branding.meeting_time),
                self.theme.header_time_tag,
            ),
            Span::raw(" "),
            Span::styled(format!(" {} ", self.branding.venue), self.theme.header_venue_tag),
            Span::raw(" "),
        ]);
        let width = tags.width() as u16;
        if area.height > 1 && width <= area.width {
            buf.set_line(area.right() - width, area.y + 1, &tags, width);
        }
    }
}

/// One-row footer: `© <year> <text>`, centred.
pub struct Footer<'a> {
    text: &'a str,
    year: i32,
    theme: &'a Theme,
}

impl<'a> Footer<'a> {
    pub fn new(text: &'a str, year: i32, theme: &'a Theme) -> Self {
        Self { text, year, theme }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::from(format!("© {} {}", self.year, self.text)).centered())
            .style(self.theme.footer)
            .render(area, buf);
    }
}
