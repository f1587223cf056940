use crate::domain::models::Category;
use crate::theme::glyphs::{self, IconStyle};
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// One tile in the category grid: number hint, icon, title and a description line when it fits.
pub struct CategoryCard<'a> {
    pub category: &'a Category,
    pub theme: &'a Theme,
    pub icon_style: IconStyle,
    pub number: usize,
    pub selected: bool,
    pub focused: bool,
}

impl Widget for CategoryCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let accent = theme.accent(self.category.accent);

        let (border_style, border_type, body_style) = if self.focused {
            (
                accent.add_modifier(Modifier::BOLD),
                BorderType::Thick,
                theme.card_selected,
            )
        } else if self.selected {
            (accent, BorderType::Rounded, theme.card_selected)
        } else {
            (theme.border, BorderType::Rounded, theme.card)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(border_style)
            .style(body_style);

        let icon = glyphs::resolve(&self.category.icon, self.icon_style);
        let mut lines = vec![Line::from(vec![
            Span::styled(format!("{} ", self.number), theme.dimmed),
            Span::styled(format!("{icon} "), accent),
            Span::styled(self.category.title.as_str(), theme.card_title),
        ])];
        if area.height > 3 {
            lines.push(Line::from(Span::styled(
                self.category.description.as_str(),
                theme.card_description,
            )));
        }

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::CatalogStore;

    #[test]
    fn test_card_shows_description_only_when_tall_enough() {
        let store = CatalogStore::builtin();
        let category = store.get("staff").unwrap();
        let theme = Theme::default();

        let mut buf = Buffer::empty(Rect::new(0, 0, 60, 4));
        CategoryCard {
            category,
            theme: &theme,
            icon_style: IconStyle::Ascii,
            number: 3,
            selected: true,
            focused: false,
        }
        .render(buf.area, &mut buf);
        let row1: String = (0..60).map(|x| buf[(x, 1)].symbol()).collect();
        let row2: String = (0..60).map(|x| buf[(x, 2)].symbol()).collect();
        assert!(row1.contains("3 * Staff Management"));
        assert!(row2.contains("Enroll and manage staff"));

        let mut buf = Buffer::empty(Rect::new(0, 0, 60, 3));
        CategoryCard {
            category,
            theme: &theme,
            icon_style: IconStyle::Ascii,
            number: 3,
            selected: false,
            focused: false,
        }
        .render(buf.area, &mut buf);
        let row1: String = (0..60).map(|x| buf[(x, 1)].symbol()).collect();
        assert!(row1.contains("Staff Management"));
        assert!(!row1.contains("Enroll"));
    }
}
