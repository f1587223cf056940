use super::palette::Palette;
use ratatui::style::Color;

pub const GRUVBOX: Palette = Palette {
    base: Color::Rgb(40, 40, 40),
    crust: Color::Rgb(29, 32, 33),
    text: Color::Rgb(235, 219, 178),
    subtext0: Color::Rgb(189, 174, 147),
    subtext1: Color::Rgb(213, 196, 161),
    surface0: Color::Rgb(60, 56, 54),
    surface1: Color::Rgb(80, 73, 69),
    surface2: Color::Rgb(102, 92, 84),
    overlay0: Color::Rgb(124, 111, 100),
    overlay1: Color::Rgb(146, 131, 116),
    blue: Color::Rgb(131, 165, 152),
    red: Color::Rgb(251, 73, 52),
    yellow: Color::Rgb(250, 189, 47),
    green: Color::Rgb(184, 187, 38),
    mauve: Color::Rgb(211, 134, 155),
};
