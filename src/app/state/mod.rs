use super::config::AppConfig;
use super::keymap::{KeyConfig, KeyMap};
use super::view_model::ViewModel;
use crate::domain::catalog::CatalogStore;
use crate::theme::glyphs::IconStyle;
use crate::theme::{PaletteType, Theme};
use ratatui::widgets::ListState;
use std::sync::Arc;
use std::time::Instant;

pub mod input;
pub mod status;

// Re-exports
pub use input::AppTextArea;
pub use status::{StatusMessage, StatusSeverity};

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AppMode {
    Browse, // Moving between categories and commands
    Search, // Typing into the search box
    Help,   // Showing the help overlay
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Panel {
    Categories,
    Commands,
}

#[derive(Debug, Clone)]
pub struct AppState<'a> {
    // --- Lifecycle & Status ---
    pub should_quit: bool,
    pub mode: AppMode,
    pub status: Option<StatusMessage>,
    pub status_clear_time: Option<Instant>,

    // --- Catalog View ---
    pub view: ViewModel,
    pub command_list: ListState,
    pub focused_panel: Panel,

    // --- Input Handling ---
    pub search: AppTextArea<'a>,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub palette_type: PaletteType,
    pub theme: Theme,
    pub icon_style: IconStyle,
}

impl AppState<'_> {
    pub fn new(view: ViewModel, config: &AppConfig) -> Self {
        let mut state = Self {
            view,
            keymap: Arc::new(KeyMap::from_config(&config.keys)),
            palette_type: config.theme,
            theme: Theme::from_palette_type(config.theme),
            icon_style: config.icons,
            ..Default::default()
        };
        state.reset_command_cursor();
        state
    }

    /// State the binary starts with. A logging setup failure does not stop the
    /// app; it is shown on the status line instead.
    pub fn bootstrap(
        catalog: Arc<CatalogStore>,
        config: &AppConfig,
        logging_error: Option<&anyhow::Error>,
    ) -> Self {
        let mut state = Self::new(ViewModel::from_config(catalog, config), config);
        if let Some(err) = logging_error {
            state.set_status(StatusMessage::error(format!("Logging disabled: {err:#}")));
        }
        state
    }

    /// Name of the command under the cursor, if the derived list has one.
    pub fn selected_command_name(&self) -> Option<String> {
        let idx = self.command_list.selected()?;
        self.view
            .derive()
            .commands
            .get(idx)
            .map(|cmd| cmd.name.clone())
    }

    /// Puts the cursor on the first visible command, or nowhere.
    pub fn reset_command_cursor(&mut self) {
        let len = self.view.derive().len();
        self.command_list = ListState::default();
        if len > 0 {
            self.command_list.select(Some(0));
        }
    }

    /// Keeps the cursor inside the derived list after it shrank or grew.
    pub fn clamp_command_cursor(&mut self) {
        let len = self.view.derive().len();
        match self.command_list.selected() {
            _ if len == 0 => self.command_list.select(None),
            Some(i) if i >= len => self.command_list.select(Some(len - 1)),
            None => self.command_list.select(Some(0)),
            Some(_) => {}
        }
    }

    pub fn set_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
        self.status_clear_time = Some(Instant::now());
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        let view = ViewModel::default();
        let len = view.derive().len();
        let mut command_list = ListState::default();
        if len > 0 {
            command_list.select(Some(0));
        }
        Self {
            should_quit: false,
            mode: AppMode::Browse,
            status: None,
            status_clear_time: None,
            view,
            command_list,
            focused_panel: Panel::Categories,
            search: AppTextArea::default(),
            keymap: Arc::new(KeyMap::from_config(&KeyConfig::default())),
            palette_type: PaletteType::default(),
            theme: Theme::default(),
            icon_style: IconStyle::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_points_at_first_command() {
        let state = AppState::default();
        assert_eq!(state.view.selected_id(), "teams");
        assert_eq!(state.command_list.selected(), Some(0));
        assert_eq!(state.selected_command_name().as_deref(), Some("/team create"));
    }

    #[test]
    fn test_clamp_after_filtering() {
        let mut state = AppState::default();
        state.command_list.select(Some(4));
        state.view.set_query("lead");
        state.clamp_command_cursor();
        assert_eq!(state.command_list.selected(), Some(1));

        state.view.set_query("zzz");
        state.clamp_command_cursor();
        assert_eq!(state.command_list.selected(), None);
        assert_eq!(state.selected_command_name(), None);

        state.view.set_query("");
        state.clamp_command_cursor();
        assert_eq!(state.command_list.selected(), Some(0));
    }

    #[test]
    fn test_bootstrap_survives_bad_config_and_logging() {
        let config = AppConfig {
            default_category: Some("nope".to_string()),
            ..AppConfig::default()
        };
        let err = anyhow::anyhow!("creating /proc/haven-features");
        let state = AppState::bootstrap(Arc::new(CatalogStore::builtin()), &config, Some(&err));

        assert_eq!(state.view.selected_id(), "teams");
        assert_eq!(state.command_list.selected(), Some(0));
        let status = state.status.unwrap();
        assert_eq!(status.severity, StatusSeverity::Error);
        assert!(status.text.contains("Logging disabled"));
    }

    #[test]
    fn test_bootstrap_without_problems_has_no_status() {
        let config = AppConfig {
            default_category: Some("utility".to_string()),
            ..AppConfig::default()
        };
        let state = AppState::bootstrap(Arc::new(CatalogStore::builtin()), &config, None);
        assert_eq!(state.view.selected_id(), "utility");
        assert!(state.status.is_none());
    }

    #[test]
    fn test_new_applies_config() {
        let config = AppConfig {
            theme: PaletteType::Nord,
            icons: IconStyle::NerdFont,
            ..AppConfig::default()
        };
        let state = AppState::new(ViewModel::default(), &config);
        assert_eq!(state.palette_type, PaletteType::Nord);
        assert_eq!(state.theme, Theme::from_palette_type(PaletteType::Nord));
        assert_eq!(state.icon_style, IconStyle::NerdFont);
    }
}
