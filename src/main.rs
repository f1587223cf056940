use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;

use haven_features::app::{config::AppConfig, r#loop::run_loop, state::AppState};
use haven_features::domain::catalog::CatalogStore;
use haven_features::infrastructure::{clipboard::SystemClipboard, logging};

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_hook();

    // Everything that can fail runs before the terminal enters raw mode.
    let (config, config_err) = AppConfig::load();
    let logging_err = match logging::init(&config) {
        Ok(log_path) => {
            tracing::info!(log = ?log_path, theme = config.theme.label(), "starting");
            None
        }
        Err(err) => Some(err),
    };
    if let Some(err) = config_err {
        tracing::warn!(error = ?err, "ignoring config file, using defaults");
    }

    let catalog = Arc::new(CatalogStore::builtin());
    let app_state = AppState::bootstrap(catalog, &config, logging_err.as_ref());
    let clipboard = Arc::new(SystemClipboard::new(config.clipboard_command.clone()));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, clipboard).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "event loop failed");
        eprintln!("{err:?}");
    }

    Ok(())
}
