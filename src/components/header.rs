use crate::domain::models::IconRef;
use crate::theme::glyphs::{self, IconStyle};
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub const BRAND: &str = "Haven";
pub const TITLE: &str = "Moderation Features";
pub const SUBTITLE: &str = "Select a category to learn more about available features and commands";

pub struct Header<'a> {
    pub theme: &'a Theme,
    pub icon_style: IconStyle,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;

        // Separator styles: fg = current segment bg, bg = next segment bg
        let title_bg = theme.header_title.bg.unwrap_or(Color::Reset);
        let base_bg = theme.header.bg.unwrap_or(Color::Reset);
        let sep = glyphs::separator(self.icon_style);

        let logo = glyphs::resolve(&IconRef::new("shield"), self.icon_style);
        let title = Line::from(vec![
            Span::styled(format!(" {logo} {BRAND}"), theme.header_logo),
            Span::styled(TITLE, theme.header_title),
            Span::styled(" ", theme.header_title),
            Span::styled(sep, Style::default().fg(title_bg).bg(base_bg)),
        ]);
        let subtitle = Line::from(Span::styled(format!(" {SUBTITLE}"), theme.header_subtitle));

        Paragraph::new(vec![title, subtitle])
            .style(theme.header)
            .render(area, buf);
    }
}
