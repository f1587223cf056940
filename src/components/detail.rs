use crate::domain::models::{BotCommand, Category};
use crate::theme::glyphs::{self, IconStyle};
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget,
    },
};

pub const SECTION_TITLE: &str = "Available Commands:";
pub const EMPTY_MESSAGE: &str = "No matching commands.";

/// Frame of the detail panel: title, description and the section heading.
/// The command list itself is drawn separately into the panel's list area.
pub struct DetailPanel<'a> {
    pub category: &'a Category,
    pub theme: &'a Theme,
    pub icon_style: IconStyle,
    pub focused: bool,
    pub visible: usize,
}

impl Widget for DetailPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let accent = theme.accent(self.category.accent);
        let icon = glyphs::resolve(&self.category.icon, self.icon_style);
        let total = self.category.commands.len();

        let counter = if self.visible == total {
            format!(" {total} commands ")
        } else {
            format!(" {} of {total} commands ", self.visible)
        };

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(format!("{icon} "), accent),
                Span::styled(self.category.title.as_str(), theme.detail_title),
                Span::raw(" "),
            ]))
            .title_bottom(Line::from(Span::styled(counter, theme.dimmed)).right_aligned())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused {
                theme.border_focus
            } else {
                theme.border
            });

        let inner = block.inner(area);
        block.render(area, buf);

        let padded = Rect {
            x: inner.x.saturating_add(1),
            width: inner.width.saturating_sub(2),
            ..inner
        };
        if padded.width == 0 || padded.height == 0 {
            return;
        }

        let lines = vec![
            Line::from(Span::styled(
                self.category.description.as_str(),
                theme.detail_description,
            )),
            Line::from(""),
            Line::from(Span::styled(SECTION_TITLE, theme.section_title)),
        ];
        Paragraph::new(lines).render(padded, buf);
    }
}

pub struct CommandList<'a> {
    pub commands: &'a [&'a BotCommand],
    pub theme: &'a Theme,
}

impl StatefulWidget for CommandList<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ListState) {
        let theme = self.theme;
        let items: Vec<ListItem> = self
            .commands
            .iter()
            .map(|cmd| {
                ListItem::new(vec![
                    Line::from(Span::styled(cmd.name.as_str(), theme.command_name)),
                    Line::from(Span::styled(format!("  {}", cmd.desc), theme.command_desc)),
                ])
            })
            .collect();

        let list = List::new(items)
            .highlight_style(theme.command_selected)
            .highlight_symbol("\u{258c} ");
        StatefulWidget::render(list, area, buf, state);
    }
}

/// Shown in place of the command list when the filter leaves nothing.
pub struct EmptyState<'a> {
    pub theme: &'a Theme,
    pub query: &'a str,
}

impl Widget for EmptyState<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(EMPTY_MESSAGE, self.theme.empty_state)),
        ];
        if !self.query.is_empty() {
            lines.push(Line::from(vec![
                Span::styled("Press ", self.theme.dimmed),
                Span::styled("x", self.theme.footer_segment_key),
                Span::styled(" to clear the search", self.theme.dimmed),
            ]));
        }
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
