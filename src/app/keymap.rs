use super::action::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeyConfig {
    pub profile: String,
    /// Key spec (`"ctrl+f"`, `"esc"`, `"c"`) to action name (`"copy"`).
    pub custom: Option<HashMap<String, String>>,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            profile: "vim".to_string(),
            custom: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct KeyMap {
    pub browse: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    pub fn from_config(config: &KeyConfig) -> Self {
        let mut browse = HashMap::new();

        match config.profile.as_str() {
            "vim" => {
                browse.insert(ch('h'), Action::PrevCategory);
                browse.insert(ch('l'), Action::NextCategory);
                browse.insert(ch('j'), Action::SelectNextCommand);
                browse.insert(ch('k'), Action::SelectPrevCommand);
            }
            "arrows" => {}
            other => {
                tracing::warn!(profile = other, "unknown key profile, falling back to vim");
                return Self::from_config(&KeyConfig {
                    profile: "vim".to_string(),
                    custom: config.custom.clone(),
                });
            }
        }

        browse.insert(ch('q'), Action::Quit);
        browse.insert(key(KeyCode::Left), Action::PrevCategory);
        browse.insert(key(KeyCode::Right), Action::NextCategory);
        browse.insert(key(KeyCode::BackTab), Action::PrevCategory);
        browse.insert(key(KeyCode::Down), Action::SelectNextCommand);
        browse.insert(key(KeyCode::Up), Action::SelectPrevCommand);
        browse.insert(key(KeyCode::Tab), Action::ToggleFocus);
        browse.insert(ch('/'), Action::EnterSearchMode);
        browse.insert(ch('x'), Action::ClearSearch);
        browse.insert(ch('y'), Action::CopySelectedCommand);
        browse.insert(key(KeyCode::Enter), Action::CopySelectedCommand);
        browse.insert(ch('t'), Action::CycleTheme);
        browse.insert(ch('?'), Action::ToggleHelp);
        browse.insert(key(KeyCode::Esc), Action::CancelMode);

        if let Some(custom) = &config.custom {
            for (spec, name) in custom {
                match (parse_key(spec), parse_action(name)) {
                    (Some(event), Some(action)) => {
                        browse.insert(event, action);
                    }
                    (None, _) => tracing::warn!(key = %spec, "ignoring unparseable key binding"),
                    (_, None) => tracing::warn!(action = %name, "ignoring unknown action binding"),
                }
            }
        }

        Self { browse }
    }

    pub fn get_action(&self, event: KeyEvent) -> Option<Action> {
        if let Some(action) = self.browse.get(&event) {
            return Some(action.clone());
        }
        // Shifted punctuation ('?', ':') arrives with SHIFT on some terminals.
        if let KeyCode::Char(c) = event.code {
            if event.modifiers.contains(KeyModifiers::SHIFT) && !c.is_alphabetic() {
                let plain =
                    KeyEvent::new(event.code, event.modifiers.difference(KeyModifiers::SHIFT));
                return self.browse.get(&plain).cloned();
            }
        }
        None
    }
}

pub fn parse_key(spec: &str) -> Option<KeyEvent> {
    let mut modifiers = KeyModifiers::empty();
    let mut parts: Vec<&str> = spec.split('+').collect();
    // A bare "+" splits into two empty strings.
    let last = if spec.ends_with("++") || spec == "+" {
        parts.truncate(parts.len().saturating_sub(2));
        "+".to_string()
    } else {
        parts.pop()?.to_string()
    };

    for m in parts {
        match m.to_lowercase().as_str() {
            "ctrl" | "control" => modifiers.insert(KeyModifiers::CONTROL),
            "alt" => modifiers.insert(KeyModifiers::ALT),
            "shift" => modifiers.insert(KeyModifiers::SHIFT),
            _ => return None,
        }
    }

    let code = match last.to_lowercase().as_str() {
        "esc" | "escape" => KeyCode::Esc,
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "space" => KeyCode::Char(' '),
        "backspace" => KeyCode::Backspace,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        lower => {
            if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                KeyCode::F(n)
            } else {
                let mut chars = last.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return None,
                }
            }
        }
    };

    Some(KeyEvent::new(code, modifiers))
}

pub fn parse_action(name: &str) -> Option<Action> {
    let action = match name {
        "quit" => Action::Quit,
        "next_category" => Action::NextCategory,
        "prev_category" => Action::PrevCategory,
        "next_command" => Action::SelectNextCommand,
        "prev_command" => Action::SelectPrevCommand,
        "search" => Action::EnterSearchMode,
        "clear_search" => Action::ClearSearch,
        "copy" => Action::CopySelectedCommand,
        "help" => Action::ToggleHelp,
        "theme" => Action::CycleTheme,
        "focus" => Action::ToggleFocus,
        _ => return None,
    };
    Some(action)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn ch(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}
