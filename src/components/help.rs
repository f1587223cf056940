use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, Row, Table, Widget},
};

use super::helpers::{centered_rect, draw_drop_shadow};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Categories",
        &[
            (" h / \u{2190}", "Previous category"),
            (" l / \u{2192}", "Next category"),
            (" 1-9", "Jump to category N"),
            (" click", "Select a category card"),
        ],
    ),
    (
        "Commands",
        &[
            (" j / \u{2193}", "Next command"),
            (" k / \u{2191}", "Previous command"),
            (" y / Enter", "Copy command to clipboard"),
            (" Tab", "Switch focused panel"),
        ],
    ),
    (
        "Search",
        &[
            (" /", "Search names and descriptions"),
            (" Enter", "Keep the query"),
            (" Esc", "Clear the query"),
            (" x", "Clear the query (browse mode)"),
        ],
    ),
    (
        "General",
        &[
            (" t", "Cycle color theme"),
            (" ?", "Show this help"),
            (" Esc", "Close help / dismiss status"),
            (" q", "Quit"),
        ],
    ),
];

pub struct HelpModal<'a> {
    pub theme: &'a Theme,
}

impl Widget for HelpModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let help_area = centered_rect(70, 80, area);
        if help_area.width == 0 || help_area.height == 0 {
            return;
        }
        draw_drop_shadow(buf, help_area, area);
        Clear.render(help_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" HELP - KEYBINDINGS ", self.theme.detail_title),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let key_style = self.theme.footer_segment_key;
        let desc_style = self.theme.command_desc;
        let section_style = self.theme.help_section;

        let mut rows = Vec::new();
        for (i, (section, entries)) in SECTIONS.iter().enumerate() {
            if i > 0 {
                rows.push(Row::new(vec![Cell::from(""), Cell::from("")]));
            }
            rows.push(Row::new(vec![
                Cell::from(Span::styled(*section, section_style)),
                Cell::from(""),
            ]));
            for (key, desc) in *entries {
                rows.push(Row::new(vec![
                    Cell::from(Span::styled(*key, key_style)),
                    Cell::from(Span::styled(*desc, desc_style)),
                ]));
            }
        }

        let table = Table::new(
            rows,
            [Constraint::Percentage(30), Constraint::Percentage(70)],
        )
        .block(block);

        table.render(help_area, buf);
    }
}
