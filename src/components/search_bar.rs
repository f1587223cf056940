use crate::app::state::AppTextArea;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

pub const PLACEHOLDER: &str = "Search commands...";

pub struct SearchBar<'a> {
    pub input: &'a AppTextArea<'a>,
    pub query: &'a str,
    pub theme: &'a Theme,
    pub active: bool,
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let border_style = if self.active {
            theme.search_active
        } else {
            theme.border
        };

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("SEARCH", border_style),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.active {
            Widget::render(self.input, inner, buf);
        } else if self.query.is_empty() {
            Paragraph::new(Line::from(vec![
                Span::styled(PLACEHOLDER, theme.search_placeholder),
                Span::styled(" (press ", theme.dimmed),
                Span::styled("/", theme.footer_segment_key),
                Span::styled(")", theme.dimmed),
            ]))
            .render(inner, buf);
        } else {
            Paragraph::new(Span::styled(self.query, theme.search_idle)).render(inner, buf);
        }
    }
}
