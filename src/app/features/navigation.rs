use crate::app::{
    action::{Action, UpdateResult},
    state::{AppState, Panel},
};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::SelectCategory(id) => {
            if state.view.select_category(id) {
                on_category_changed(state);
            } else {
                tracing::debug!(id = %id, "ignoring unknown category");
            }
            UpdateResult::Handled(None)
        }
        Action::SelectCategoryIndex(idx) => {
            if state.view.select_index(*idx) {
                on_category_changed(state);
            }
            UpdateResult::Handled(None)
        }
        Action::NextCategory => {
            state.view.select_next();
            on_category_changed(state);
            UpdateResult::Handled(None)
        }
        Action::PrevCategory => {
            state.view.select_prev();
            on_category_changed(state);
            UpdateResult::Handled(None)
        }
        Action::SelectNextCommand => {
            move_command_cursor(state, 1);
            UpdateResult::Handled(None)
        }
        Action::SelectPrevCommand => {
            move_command_cursor(state, -1);
            UpdateResult::Handled(None)
        }
        Action::SelectCommandIndex(idx) => {
            if *idx < state.view.derive().len() {
                state.command_list.select(Some(*idx));
                state.focused_panel = Panel::Commands;
            }
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

fn on_category_changed(state: &mut AppState) {
    tracing::debug!(category = state.view.selected_id(), "category selected");
    state.reset_command_cursor();
}

fn move_command_cursor(state: &mut AppState, delta: isize) {
    let len = state.view.derive().len();
    let new_index = calculate_new_index(state.command_list.selected(), delta, len);
    state.command_list.select(new_index);
    state.focused_panel = Panel::Commands;
}

fn calculate_new_index(current: Option<usize>, delta: isize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match current {
        Some(i) => Some((i as isize + delta).rem_euclid(len as isize) as usize),
        None => Some(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_new_index_wraps() {
        assert_eq!(calculate_new_index(Some(4), 1, 5), Some(0));
        assert_eq!(calculate_new_index(Some(0), -1, 5), Some(4));
        assert_eq!(calculate_new_index(None, -1, 5), Some(0));
        assert_eq!(calculate_new_index(Some(2), 1, 0), None);
    }

    #[test]
    fn test_select_category_resets_cursor_and_keeps_query() {
        let mut state = AppState::default();
        state.view.set_query("view");
        state.command_list.select(None);

        update(&mut state, &Action::SelectCategory("moderation".to_string()));

        assert_eq!(state.view.selected_id(), "moderation");
        assert_eq!(state.view.query(), "view");
        assert_eq!(state.command_list.selected(), Some(0));
        assert_eq!(state.selected_command_name().as_deref(), Some("/strike view"));
    }

    #[test]
    fn test_unknown_category_changes_nothing() {
        let mut state = AppState::default();
        update(&mut state, &Action::NextCategory);
        update(&mut state, &Action::SelectNextCommand);
        let before_cursor = state.command_list.selected();

        update(&mut state, &Action::SelectCategory("nonexistent".to_string()));

        assert_eq!(state.view.selected_id(), "moderation");
        assert_eq!(state.command_list.selected(), before_cursor);
    }

    #[test]
    fn test_index_out_of_range_is_ignored() {
        let mut state = AppState::default();
        update(&mut state, &Action::SelectCategoryIndex(2));
        assert_eq!(state.view.selected_id(), "staff");
        update(&mut state, &Action::SelectCategoryIndex(42));
        assert_eq!(state.view.selected_id(), "staff");
    }

    #[test]
    fn test_command_cursor_moves_within_filtered_list() {
        let mut state = AppState::default();
        state.view.set_query("lead");
        state.clamp_command_cursor();

        update(&mut state, &Action::SelectNextCommand);
        assert_eq!(
            state.selected_command_name().as_deref(),
            Some("/team edit team_lead")
        );
        update(&mut state, &Action::SelectNextCommand);
        assert_eq!(state.selected_command_name().as_deref(), Some("/team create"));
        assert_eq!(state.focused_panel, Panel::Commands);

        update(&mut state, &Action::SelectCommandIndex(7));
        assert_eq!(state.command_list.selected(), Some(0));
    }
}
