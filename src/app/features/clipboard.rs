use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppState, StatusMessage},
};
use crate::domain::clipboard::ClipboardWriter;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::CopySelectedCommand => match state.selected_command_name() {
            Some(name) => UpdateResult::Handled(Some(Command::CopyToClipboard(name))),
            None => UpdateResult::Handled(None),
        },
        Action::CopyCompleted(Ok(text)) => {
            state.set_status(StatusMessage::info(format!("Copied {text}")));
            UpdateResult::Handled(None)
        }
        Action::CopyCompleted(Err(err)) => {
            state.set_status(StatusMessage::error(format!("Copy failed: {err}")));
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

pub fn handle_command(
    command: Command,
    clipboard: Arc<dyn ClipboardWriter>,
    tx: mpsc::Sender<Action>,
) -> Result<()> {
    match command {
        Command::CopyToClipboard(text) => {
            tokio::spawn(async move {
                let result = match clipboard.copy(&text).await {
                    Ok(()) => {
                        tracing::info!(command = %text, "copied to clipboard");
                        Ok(text)
                    }
                    Err(e) => {
                        tracing::error!(command = %text, error = ?e, "clipboard copy failed");
                        Err(format!("{e:#}"))
                    }
                };
                let _ = tx.send(Action::CopyCompleted(result)).await;
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::StatusSeverity;

    #[test]
    fn test_copy_emits_selected_name() {
        let mut state = AppState::default();
        state.view.select_category("moderation");
        state.reset_command_cursor();
        let result = update(&mut state, &Action::CopySelectedCommand);
        assert!(matches!(
            result,
            UpdateResult::Handled(Some(Command::CopyToClipboard(ref name))) if name == "/strike add"
        ));
    }

    #[test]
    fn test_copy_with_empty_list_does_nothing() {
        let mut state = AppState::default();
        state.view.set_query("zzz-no-match");
        state.clamp_command_cursor();
        let result = update(&mut state, &Action::CopySelectedCommand);
        assert!(matches!(result, UpdateResult::Handled(None)));
    }

    #[test]
    fn test_completion_sets_status() {
        let mut state = AppState::default();
        update(&mut state, &Action::CopyCompleted(Ok("/fire".to_string())));
        let status = state.status.clone().unwrap();
        assert_eq!(status.severity, StatusSeverity::Info);
        assert!(status.text.contains("/fire"));

        update(&mut state, &Action::CopyCompleted(Err("no tool".to_string())));
        let status = state.status.unwrap();
        assert_eq!(status.severity, StatusSeverity::Error);
        assert!(status.text.contains("no tool"));
    }
}
