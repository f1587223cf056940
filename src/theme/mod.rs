use crate::domain::models::Accent;
use ratatui::style::{Modifier, Style};
use serde::{Deserialize, Serialize};

pub mod catppuccin;
pub mod glyphs;
pub mod gruvbox;
pub mod nord;
pub mod palette;

pub use palette::{dim_color, Palette};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub header_logo: Style,
    pub header_title: Style,
    pub header_subtitle: Style,
    pub header: Style,

    pub card: Style,
    pub card_selected: Style,
    pub card_title: Style,
    pub card_description: Style,
    pub accents: Vec<Style>,

    pub detail_title: Style,
    pub detail_description: Style,
    pub section_title: Style,
    pub command_name: Style,
    pub command_desc: Style,
    pub command_selected: Style,
    pub empty_state: Style,

    pub search_active: Style,
    pub search_idle: Style,
    pub search_placeholder: Style,

    pub status_info: Style,
    pub status_error: Style,

    pub footer_segment_key: Style,
    pub footer_segment_val: Style,
    pub footer: Style,

    pub help_section: Style,
    pub dimmed: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaletteType {
    #[default]
    CatppuccinMocha,
    Nord,
    Gruvbox,
}

impl PaletteType {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PaletteType::CatppuccinMocha => "Catppuccin (Mocha)",
            PaletteType::Nord => "Nord",
            PaletteType::Gruvbox => "Gruvbox",
        }
    }

    #[must_use]
    pub fn all() -> &'static [PaletteType] {
        &[
            PaletteType::CatppuccinMocha,
            PaletteType::Nord,
            PaletteType::Gruvbox,
        ]
    }

    #[must_use]
    pub fn next(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|p| *p == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }
}

impl Theme {
    #[must_use]
    pub fn from_palette_type(t: PaletteType) -> Self {
        match t {
            PaletteType::CatppuccinMocha => Self::from_palette(&catppuccin::CATPPUCCIN_MOCHA),
            PaletteType::Nord => Self::from_palette(&nord::NORD),
            PaletteType::Gruvbox => Self::from_palette(&gruvbox::GRUVBOX),
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border: Style::default().fg(p.surface2),
            border_focus: Style::default().fg(p.blue),

            header_logo: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_title: Style::default()
                .bg(p.surface1)
                .fg(p.text)
                .add_modifier(Modifier::BOLD),
            header_subtitle: Style::default().bg(p.surface0).fg(p.subtext1),
            header: Style::default().bg(p.base).fg(p.text),

            card: Style::default().fg(p.text),
            card_selected: Style::default().bg(dim_color(p.blue, 0.35)).fg(p.text),
            card_title: Style::default().fg(p.text).add_modifier(Modifier::BOLD),
            card_description: Style::default().fg(p.subtext0),
            // Indexed by `Accent::index`.
            accents: vec![
                Style::default().fg(p.blue),
                Style::default().fg(p.red),
                Style::default().fg(p.yellow),
                Style::default().fg(p.green),
                Style::default().fg(p.mauve),
            ],

            detail_title: Style::default().fg(p.text).add_modifier(Modifier::BOLD),
            detail_description: Style::default().fg(p.subtext0),
            section_title: Style::default().fg(p.subtext1).add_modifier(Modifier::BOLD),
            command_name: Style::default().fg(p.blue).add_modifier(Modifier::BOLD),
            command_desc: Style::default().fg(p.subtext0),
            command_selected: Style::default()
                .bg(p.surface0)
                .add_modifier(Modifier::BOLD),
            empty_state: Style::default()
                .fg(p.overlay1)
                .add_modifier(Modifier::ITALIC),

            search_active: Style::default().fg(p.yellow),
            search_idle: Style::default().fg(p.text),
            search_placeholder: Style::default().fg(p.overlay0).add_modifier(Modifier::DIM),

            status_info: Style::default()
                .bg(p.green)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_error: Style::default()
                .bg(p.red)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),

            footer_segment_key: Style::default()
                .bg(p.surface0)
                .fg(p.blue)
                .add_modifier(Modifier::BOLD),
            footer_segment_val: Style::default().bg(p.crust).fg(p.text),
            footer: Style::default().bg(p.crust).fg(p.subtext0),

            help_section: Style::default().bg(p.surface0).fg(p.text),
            dimmed: Style::default().fg(p.overlay0).add_modifier(Modifier::DIM),
        }
    }

    #[must_use]
    pub fn accent(&self, accent: Accent) -> Style {
        self.accents
            .get(accent.index())
            .copied()
            .unwrap_or(self.command_name)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette_type(PaletteType::CatppuccinMocha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycle_visits_all() {
        let mut p = PaletteType::CatppuccinMocha;
        let mut seen = vec![p];
        for _ in 0..PaletteType::all().len() - 1 {
            p = p.next();
            seen.push(p);
        }
        assert_eq!(seen, PaletteType::all());
        assert_eq!(p.next(), PaletteType::CatppuccinMocha);
    }

    #[test]
    fn test_every_accent_has_a_style() {
        let theme = Theme::default();
        for accent in [
            Accent::Blue,
            Accent::Red,
            Accent::Yellow,
            Accent::Green,
            Accent::Mauve,
        ] {
            assert!(accent.index() < theme.accents.len());
        }
    }
}
