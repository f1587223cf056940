use crate::app::{
    action::{Action, UpdateResult},
    state::{AppMode, AppState},
};
use crossterm::event::KeyCode;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::EnterSearchMode => {
            state.mode = AppMode::Search;
            state.search.set_text(state.view.query());
            UpdateResult::Handled(None)
        }
        Action::SearchInput(key) => {
            // The box is single-line; Enter is mapped to ConfirmSearch upstream.
            if key.code != KeyCode::Enter {
                state.search.input(*key);
                let text = state.search.text();
                apply_query(state, text);
            }
            UpdateResult::Handled(None)
        }
        Action::SetQuery(text) => {
            state.search.set_text(text);
            apply_query(state, text.clone());
            UpdateResult::Handled(None)
        }
        Action::ConfirmSearch => {
            state.mode = AppMode::Browse;
            UpdateResult::Handled(None)
        }
        Action::ClearSearch => {
            state.search.set_text("");
            apply_query(state, String::new());
            if state.mode == AppMode::Search {
                state.mode = AppMode::Browse;
            }
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

fn apply_query(state: &mut AppState, text: String) {
    if text == state.view.query() {
        return;
    }
    state.view.set_query(text);
    state.clamp_command_cursor();
    tracing::debug!(
        query = state.view.query(),
        visible = state.view.derive().len(),
        "search query changed"
    );
}
