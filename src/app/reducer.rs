use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    state::AppState,
};

type FeatureUpdate = fn(&mut AppState, &Action) -> UpdateResult;

const FEATURES: &[FeatureUpdate] = &[
    features::navigation::update,
    features::search::update,
    features::clipboard::update,
    features::ui::update,
];

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    for feature in FEATURES {
        if let UpdateResult::Handled(command) = feature(state, &action) {
            return command;
        }
    }
    tracing::trace!(?action, "action not handled");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::AppMode;
    use crate::app::view_model::Listing;

    #[test]
    fn test_browse_search_copy_flow() {
        let mut state = AppState::default();

        update(&mut state, Action::SelectCategory("moderation".to_string()));
        update(&mut state, Action::EnterSearchMode);
        update(&mut state, Action::SetQuery("view".to_string()));
        update(&mut state, Action::ConfirmSearch);
        assert_eq!(state.mode, AppMode::Browse);

        update(&mut state, Action::SelectNextCommand);
        let command = update(&mut state, Action::CopySelectedCommand);
        assert_eq!(
            command,
            Some(Command::CopyToClipboard("/blacklist view".to_string()))
        );
    }

    #[test]
    fn test_switching_category_reapplies_query() {
        let mut state = AppState::default();
        update(&mut state, Action::SetQuery("view".to_string()));
        assert_eq!(state.view.derive().listing(), Listing::NoResults);
        assert_eq!(update(&mut state, Action::CopySelectedCommand), None);

        update(&mut state, Action::NextCategory);
        assert_eq!(state.view.derive().len(), 2);
        assert_eq!(state.selected_command_name().as_deref(), Some("/strike view"));
    }

    #[test]
    fn test_quit_sets_flag() {
        let mut state = AppState::default();
        assert_eq!(update(&mut state, Action::Quit), None);
        assert!(state.should_quit);
    }

    #[test]
    fn test_cancel_in_search_keeps_query_visible_state_consistent() {
        let mut state = AppState::default();
        update(&mut state, Action::EnterSearchMode);
        update(&mut state, Action::SetQuery("swap".to_string()));
        update(&mut state, Action::ClearSearch);
        assert_eq!(state.mode, AppMode::Browse);
        assert_eq!(state.view.query(), "");
        assert_eq!(state.command_list.selected(), Some(0));
    }
}
