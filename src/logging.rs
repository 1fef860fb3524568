//! File logging for the terminal binary.
//!
//! The terminal belongs to the UI, so events go to
//! `~/.local/share/lawvriksh-onboard/onboard.log` instead of stdout.

use std::fs;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Log file name inside the log directory.
pub const LOG_FILE: &str = "onboard.log";

/// Errors that can occur while installing the subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The platform does not provide a data directory.
    #[error("could not determine XDG data directory")]
    NoDataDir,

    /// The log directory could not be created.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The filter directive does not parse.
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    /// A global subscriber was already installed.
    #[error("logging already initialised: {0}")]
    AlreadyInitialised(#[from] tracing_subscriber::util::TryInitError),
}

/// Default log directory (`~/.local/share/lawvriksh-onboard`).
pub fn log_dir() -> Result<PathBuf, LoggingError> {
    let data_dir = dirs::data_dir().ok_or(LoggingError::NoDataDir)?;
    Ok(data_dir.join("lawvriksh-onboard"))
}

/// Parses a filter directive such as `"info"` or `"lawvriksh_onboard=debug"`.
pub fn parse_filter(directive: &str) -> Result<EnvFilter, LoggingError> {
    Ok(EnvFilter::try_new(directive)?)
}

/// Installs a non-blocking file subscriber writing to `dir/onboard.log`.
///
/// `RUST_LOG` wins over `directive` when set. Keep the returned guard
/// alive until exit or buffered lines are lost.
pub fn init(dir: &Path, directive: &str) -> Result<WorkerGuard, LoggingError> {
    fs::create_dir_all(dir)?;
    let filter = match std::env::var("RUST_LOG") {
        Ok(env) if !env.trim().is_empty() => parse_filter(&env)?,
        _ => parse_filter(directive)?,
    };

    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(writer)
                .with_filter(filter),
        )
        .try_init()?;

    Ok(guard)
}
