//! File logging.
//!
//! The TUI owns the terminal, so logs go to `chatdeck.log` in the data
//! directory instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use color_eyre::{eyre::WrapErr, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use super::config::LOG_FILE;

/// Install the global subscriber writing to `<data_dir>/chatdeck.log`.
///
/// Returns the log file path. An invalid filter directive falls back to
/// the default filter.
pub fn init_logging(data_dir: &Path, filter: &str) -> Result<PathBuf> {
    fs::create_dir_all(data_dir)
        .wrap_err_with(|| format!("Failed to create data directory {:?}", data_dir))?;

    let log_path = data_dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .wrap_err_with(|| format!("Failed to open log file {:?}", log_path))?;

    let env_filter = EnvFilter::try_new(filter)
        .unwrap_or_else(|_| EnvFilter::new(super::config::DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .try_init()
        .wrap_err("Failed to install log subscriber")?;

    tracing::info!("chatdeck {} starting", env!("CARGO_PKG_VERSION"));
    Ok(log_path)
}
