use crate::app::{
    action::Action,
    state::{AppMode, AppState},
    ui,
};
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};
use ratatui::layout::{Position, Rect, Size};

/// Maps a click inside the command list to an index in the derived list.
pub fn resolve_clicked_command(
    app_state: &AppState<'_>,
    list_area: Rect,
    row: u16,
) -> Option<usize> {
    if row < list_area.y || row >= list_area.y + list_area.height {
        return None;
    }
    let offset = app_state.command_list.offset();
    let idx = offset + ((row - list_area.y) / ui::COMMAND_ROW_HEIGHT) as usize;
    (idx < app_state.view.derive().len()).then_some(idx)
}

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    if let Event::Key(key) = &event {
        if key.kind == KeyEventKind::Release {
            return None;
        }
    }
    if let Event::Resize(w, h) = event {
        return Some(Action::Resize(w, h));
    }

    match app_state.mode {
        AppMode::Search => match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc => Some(Action::ClearSearch),
                KeyCode::Enter => Some(Action::ConfirmSearch),
                KeyCode::Up => Some(Action::SelectPrevCommand),
                KeyCode::Down => Some(Action::SelectNextCommand),
                _ => Some(Action::SearchInput(key)),
            },
            Event::Mouse(_) => map_mouse(event, app_state, terminal_size),
            _ => None,
        },
        AppMode::Help => match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc | KeyCode::Char('q' | '?') => Some(Action::ToggleHelp),
                _ => None,
            },
            _ => None,
        },
        AppMode::Browse => match event {
            Event::Key(key) => {
                if let Some(action) = app_state.keymap.get_action(key) {
                    return Some(action);
                }
                match key.code {
                    KeyCode::Char(c @ '1'..='9') if key.modifiers == KeyModifiers::NONE => {
                        let n = c.to_digit(10)? as usize;
                        Some(Action::SelectCategoryIndex(n - 1))
                    }
                    _ => None,
                }
            }
            Event::Mouse(_) => map_mouse(event, app_state, terminal_size),
            _ => None,
        },
    }
}

fn map_mouse(event: Event, app_state: &AppState<'_>, terminal_size: Size) -> Option<Action> {
    let Event::Mouse(mouse) = event else {
        return None;
    };
    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
    let layout = ui::get_layout(area, app_state);
    let pos = Position::new(mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::ScrollUp => Some(Action::SelectPrevCommand),
        MouseEventKind::ScrollDown => Some(Action::SelectNextCommand),
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(idx) = layout.cards.iter().position(|card| card.contains(pos)) {
                let category = app_state.view.catalog().category_at(idx)?;
                return Some(Action::SelectCategory(category.id.clone()));
            }
            if layout.search.contains(pos) && app_state.mode != AppMode::Search {
                return Some(Action::EnterSearchMode);
            }
            if layout.command_list.contains(pos) {
                return resolve_clicked_command(app_state, layout.command_list, mouse.row)
                    .map(Action::SelectCommandIndex);
            }
            None
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::reducer;
    use crossterm::event::{KeyEvent, MouseEvent};

    const SIZE: Size = Size {
        width: 120,
        height: 40,
    };

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_release_events_are_ignored() {
        let state = AppState::default();
        let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(map_event_to_action(Event::Key(release), &state, SIZE), None);
    }

    #[test]
    fn test_browse_keys() {
        let state = AppState::default();
        assert_eq!(
            map_event_to_action(key(KeyCode::Char('l')), &state, SIZE),
            Some(Action::NextCategory)
        );
        assert_eq!(
            map_event_to_action(key(KeyCode::Char('3')), &state, SIZE),
            Some(Action::SelectCategoryIndex(2))
        );
        assert_eq!(map_event_to_action(key(KeyCode::Char('0')), &state, SIZE), None);
    }

    #[test]
    fn test_search_mode_routes_text_to_input() {
        let state = AppState {
            mode: AppMode::Search,
            ..AppState::default()
        };
        let typed = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(
            map_event_to_action(Event::Key(typed), &state, SIZE),
            Some(Action::SearchInput(typed))
        );
        assert_eq!(
            map_event_to_action(key(KeyCode::Esc), &state, SIZE),
            Some(Action::ClearSearch)
        );
        assert_eq!(
            map_event_to_action(key(KeyCode::Enter), &state, SIZE),
            Some(Action::ConfirmSearch)
        );
    }

    #[test]
    fn test_help_mode_only_closes() {
        let state = AppState {
            mode: AppMode::Help,
            ..AppState::default()
        };
        assert_eq!(
            map_event_to_action(key(KeyCode::Char('q')), &state, SIZE),
            Some(Action::ToggleHelp)
        );
        assert_eq!(map_event_to_action(key(KeyCode::Char('j')), &state, SIZE), None);
    }

    #[test]
    fn test_click_on_card_selects_category() {
        let state = AppState::default();
        let area = Rect::new(0, 0, SIZE.width, SIZE.height);
        let layout = ui::get_layout(area, &state);
        let card = layout.cards[3];
        assert_eq!(
            map_event_to_action(click(card.x + 2, card.y + 1), &state, SIZE),
            Some(Action::SelectCategory("tracking".to_string()))
        );
    }

    #[test]
    fn test_click_on_command_row() {
        let mut state = AppState::default();
        let area = Rect::new(0, 0, SIZE.width, SIZE.height);
        let list = ui::get_layout(area, &state).command_list;

        // Second line of the third command still hits the third command.
        assert_eq!(
            map_event_to_action(click(list.x + 1, list.y + 5), &state, SIZE),
            Some(Action::SelectCommandIndex(2))
        );

        reducer::update(&mut state, Action::SetQuery("lead".to_string()));
        assert_eq!(
            map_event_to_action(click(list.x + 1, list.y + 5), &state, SIZE),
            None
        );
    }

    #[test]
    fn test_click_on_search_bar_enters_search() {
        let state = AppState::default();
        let area = Rect::new(0, 0, SIZE.width, SIZE.height);
        let search = ui::get_layout(area, &state).search;
        assert_eq!(
            map_event_to_action(click(search.x + 3, search.y + 1), &state, SIZE),
            Some(Action::EnterSearchMode)
        );
    }
}
