//! File-backed logging for the terminal application.
//!
//! A raw-mode terminal cannot share stdout with log output, so events are
//! appended to `varview.log` inside the data directory. The `VARVIEW_LOG`
//! environment variable selects the filter and defaults to `info`.

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::app_dirs;

const LOG_FILE_NAME: &str = "varview.log";
const LOG_FILTER_ENV: &str = "VARVIEW_LOG";

/// Install the global tracing subscriber. Call once at startup.
pub fn initialize() -> Result<()> {
    let data_dir = app_dirs::get_data_dir()?;
    fs::create_dir_all(&data_dir)
        .with_context(|| format!("creating data directory {}", data_dir.display()))?;

    let log_path = data_dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("opening log file {}", log_path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
