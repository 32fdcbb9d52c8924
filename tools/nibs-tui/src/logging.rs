//! Logging setup.
//!
//! The alternate screen owns stdout/stderr while the TUI runs, so the
//! interactive mode logs to a file or not at all. Headless mode logs to stderr.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::TuiConfig;

/// Logging initialization errors
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to open log file {}: {source}", .path.display())]
    OpenFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid log filter: {0}")]
    Filter(String),

    #[error("Failed to install subscriber: {0}")]
    Install(String),
}

/// Where log output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    Disabled,
}

impl LogTarget {
    /// Pick the target for a run mode.
    pub fn for_mode(config: &TuiConfig, headless: bool) -> Self {
        match (&config.log_file, headless) {
            (Some(path), _) => LogTarget::File(path.clone()),
            (None, true) => LogTarget::Stderr,
            (None, false) => LogTarget::Disabled,
        }
    }
}

/// Install the global `tracing` subscriber.
pub fn init_logging(config: &TuiConfig, target: &LogTarget) -> Result<(), LoggingError> {
    let env_filter = EnvFilter::try_new(&config.log_level)
        .map_err(|e| LoggingError::Filter(e.to_string()))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true);

    match target {
        LogTarget::Disabled => return Ok(()),
        LogTarget::Stderr => builder
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| LoggingError::Install(e.to_string()))?,
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| LoggingError::OpenFile {
                    path: path.clone(),
                    source,
                })?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| LoggingError::Install(e.to_string()))?
        }
    }

    tracing::debug!(level = %config.log_level, output = ?target, "Logging initialized");
    Ok(())
}
