use crate::app::config::{config_dir, AppConfig, APP_NAME};
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "HAVEN_FEATURES_LOG";

/// `HAVEN_FEATURES_LOG` wins over the configured level.
pub fn build_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber writing to the log file under the config dir.
///
/// The terminal belongs to the TUI, so nothing is ever written to stdout or stderr.
/// Returns the log path, or `None` when there is no home directory.
pub fn init(config: &AppConfig) -> Result<Option<PathBuf>> {
    let Some(dir) = config_dir() else {
        return Ok(None);
    };
    let path = init_at(&dir, config)?;
    Ok(Some(path))
}

pub fn init_at(dir: &Path, config: &AppConfig) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let path = dir.join(format!("{APP_NAME}.log"));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening {}", path.display()))?;

    // A subscriber may already be installed (tests); keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(config))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init();

    Ok(path)
}
