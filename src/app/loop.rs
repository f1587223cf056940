use crate::app::{
    action::Action, command::Command, features, input::map_event_to_action, reducer,
    state::AppState, ui,
};
use crate::domain::clipboard::ClipboardWriter;

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

const TICK_RATE: Duration = Duration::from_millis(250);

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'_>,
    clipboard: Arc<dyn ClipboardWriter>,
) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, clipboard, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'_>,
    clipboard: Arc<dyn ClipboardWriter>,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut interval = interval(TICK_RATE);

    tracing::info!(
        category = app_state.view.selected_id(),
        theme = app_state.palette_type.label(),
        "event loop started"
    );

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &mut app_state);
        })?;

        // --- 2. Event Handling (TEA Runtime) ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = res?;
                map_event_to_action(event, &app_state, terminal.size()?)
            },

            // Async Results
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            let command = reducer::update(&mut app_state, action);

            if app_state.should_quit {
                break;
            }

            if let Some(cmd) = command {
                handle_command(cmd, clipboard.clone(), action_tx.clone())?;
            }
        }
    }

    tracing::info!("event loop finished");
    Ok(())
}

pub(crate) fn handle_command(
    command: Command,
    clipboard: Arc<dyn ClipboardWriter>,
    tx: mpsc::Sender<Action>,
) -> Result<()> {
    features::clipboard::handle_command(command, clipboard, tx)
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
