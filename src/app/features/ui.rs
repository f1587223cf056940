use crate::app::{
    action::{Action, UpdateResult},
    state::{AppMode, AppState, Panel},
};
use crate::theme::Theme;
use std::time::Duration;

pub const STATUS_TIMEOUT: Duration = Duration::from_secs(3);

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::Tick => {
            if let Some(since) = state.status_clear_time {
                if since.elapsed() >= STATUS_TIMEOUT {
                    state.status = None;
                    state.status_clear_time = None;
                }
            }
            UpdateResult::Handled(None)
        }
        Action::Resize(_, _) => UpdateResult::Handled(None),
        Action::Quit => {
            state.should_quit = true;
            UpdateResult::Handled(None)
        }
        Action::ToggleHelp => {
            state.mode = if state.mode == AppMode::Help {
                AppMode::Browse
            } else {
                AppMode::Help
            };
            UpdateResult::Handled(None)
        }
        Action::ToggleFocus => {
            state.focused_panel = match state.focused_panel {
                Panel::Categories => Panel::Commands,
                Panel::Commands => Panel::Categories,
            };
            UpdateResult::Handled(None)
        }
        Action::CycleTheme => {
            state.palette_type = state.palette_type.next();
            state.theme = Theme::from_palette_type(state.palette_type);
            tracing::info!(theme = state.palette_type.label(), "theme switched");
            UpdateResult::Handled(None)
        }
        Action::CancelMode => {
            state.mode = AppMode::Browse;
            state.status = None;
            state.status_clear_time = None;
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}
