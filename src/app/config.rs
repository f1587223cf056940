use super::keymap::KeyConfig;
use crate::theme::glyphs::IconStyle;
use crate::theme::PaletteType;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "haven-features";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Category shown at startup. Unknown ids fall back to the built-in default.
    pub default_category: Option<String>,
    pub theme: PaletteType,
    pub icons: IconStyle,
    pub log_level: String,
    /// Program plus arguments that receive copied text on stdin.
    pub clipboard_command: Option<Vec<String>>,
    pub keys: KeyConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_category: None,
            theme: PaletteType::default(),
            icons: IconStyle::default(),
            log_level: "info".to_string(),
            clipboard_command: None,
            keys: KeyConfig::default(),
        }
    }
}

pub fn config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push(APP_NAME);
        path
    })
}

pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

impl AppConfig {
    /// Reads the user config, falling back to defaults on any problem.
    ///
    /// The problem is handed back rather than logged, since logging itself is
    /// configured from the result.
    pub fn load() -> (Self, Option<anyhow::Error>) {
        let Some(path) = config_path() else {
            return (Self::default(), None);
        };
        match Self::load_from(&path) {
            Ok(config) => (config, None),
            Err(err) => (Self::default(), Some(err)),
        }
    }

    /// A missing file is not an error; it yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config = toml::from_str::<Self>(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
default_category = "moderation"
theme = "nord"
icons = "nerdfont"

[keys.custom]
"ctrl+f" = "search"
"#
        )
        .unwrap();

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.default_category.as_deref(), Some("moderation"));
        assert_eq!(config.theme, PaletteType::Nord);
        assert_eq!(config.icons, IconStyle::NerdFont);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.keys.profile, "vim");
        assert_eq!(
            config
                .keys
                .custom
                .as_ref()
                .and_then(|c| c.get("ctrl+f"))
                .map(String::as_str),
            Some("search")
        );
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "theme = \"solarized\"").unwrap();
        let err = AppConfig::load_from(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("parsing"));
    }

    #[test]
    fn test_round_trips_through_toml() {
        let config = AppConfig {
            default_category: Some("staff".to_string()),
            theme: PaletteType::Gruvbox,
            clipboard_command: Some(vec!["wl-copy".to_string()]),
            ..AppConfig::default()
        };
        let text = toml::to_string(&config).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }
}
