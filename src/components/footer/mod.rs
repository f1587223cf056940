mod groups;
mod types;

use crate::app::state::{AppMode, AppState, StatusSeverity};
pub use types::{FooterGroup, FooterItem};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Footer<'a> {
    pub state: &'a AppState<'a>,
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.state;
        let theme = &state.theme;

        let mode_label = match state.mode {
            AppMode::Browse => " BROWSE ",
            AppMode::Search => " SEARCH ",
            AppMode::Help => " HELP ",
        };

        let mut spans = vec![Span::styled(mode_label, theme.header_logo), Span::raw(" ")];

        // Status segment
        if let Some(status) = &state.status {
            let style = match status.severity {
                StatusSeverity::Info => theme.status_info,
                StatusSeverity::Error => theme.status_error,
            };
            spans.push(Span::styled(
                format!(" {} {} ", status.timestamp.format("%H:%M:%S"), status.text),
                style,
            ));
            spans.push(Span::raw("  "));
        }

        let available_width = area.width.saturating_sub(2) as usize;
        let mut current_width = spans.iter().map(Span::width).sum::<usize>();

        for group in groups::get_groups(state) {
            let Some(first_item) = group.items.first() else {
                continue;
            };
            let first_item_width = first_item.key.len() + first_item.desc.len() + 4;
            if current_width + first_item_width > available_width {
                break;
            }

            // Group labels only when there is room to spare
            if area.width > 100 {
                let label = Span::styled(format!("{}: ", group.name), theme.dimmed);
                current_width += label.width();
                spans.push(label);
            }

            for item in group.items {
                let key_str = format!(" {} ", item.key);
                let desc_str = format!(" {} ", item.desc);
                let item_width = key_str.chars().count() + desc_str.chars().count();
                if current_width + item_width + 1 > available_width {
                    break;
                }

                let (key_style, val_style) = if item.highlighted {
                    (
                        theme.border_focus.add_modifier(Modifier::BOLD | Modifier::REVERSED),
                        theme.footer_segment_val.add_modifier(Modifier::BOLD),
                    )
                } else {
                    (theme.footer_segment_key, theme.footer_segment_val)
                };

                spans.push(Span::styled(key_str, key_style));
                spans.push(Span::styled(desc_str, val_style));
                spans.push(Span::raw(" "));
                current_width += item_width + 1;
            }
            spans.push(Span::raw(" "));
            current_width += 1;
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::StatusMessage;

    fn render(state: &AppState, width: u16) -> String {
        let mut buf = Buffer::empty(Rect::new(0, 0, width, 1));
        Footer { state }.render(buf.area, &mut buf);
        (0..width).map(|x| buf[(x, 0)].symbol()).collect()
    }

    #[test]
    fn test_footer_shows_mode_and_status() {
        let mut state = AppState::default();
        state.set_status(StatusMessage::error("Copy failed: no tool"));
        let line = render(&state, 120);
        assert!(line.contains("BROWSE"));
        assert!(line.contains("Copy failed: no tool"));
    }

    #[test]
    fn test_narrow_footer_drops_hints() {
        let state = AppState::default();
        let line = render(&state, 12);
        assert!(line.contains("BROWSE"));
        assert!(!line.contains("quit"));
    }
}
