use crate::domain::models::IconRef;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconStyle {
    /// Font Awesome code points shipped with Nerd Fonts.
    NerdFont,
    #[default]
    Ascii,
}

pub const FALLBACK: &str = "\u{2022}";

pub fn resolve(icon: &IconRef, style: IconStyle) -> &'static str {
    match style {
        IconStyle::NerdFont => match icon.as_str() {
            "users" => "\u{f0c0}",
            "shield" => "\u{f132}",
            "award" => "\u{f091}",
            "target" => "\u{f140}",
            "brain" => "\u{f0eb}",
            _ => FALLBACK,
        },
        IconStyle::Ascii => match icon.as_str() {
            "users" => "@",
            "shield" => "#",
            "award" => "*",
            "target" => "o",
            "brain" => "?",
            _ => FALLBACK,
        },
    }
}

/// Powerline-style separator for the header segments.
pub fn separator(style: IconStyle) -> &'static str {
    match style {
        IconStyle::NerdFont => "\u{e0b0}",
        IconStyle::Ascii => " ",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_icons_resolve_in_both_styles() {
        for name in ["users", "shield", "award", "target", "brain"] {
            let icon = IconRef::new(name);
            assert_ne!(resolve(&icon, IconStyle::NerdFont), FALLBACK);
            assert_ne!(resolve(&icon, IconStyle::Ascii), FALLBACK);
        }
    }

    #[test]
    fn test_unknown_icon_falls_back() {
        let icon = IconRef::new("rocket");
        assert_eq!(resolve(&icon, IconStyle::NerdFont), FALLBACK);
        assert_eq!(resolve(&icon, IconStyle::Ascii), FALLBACK);
    }
}
