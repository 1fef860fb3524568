use crate::api::SubmitError;
use crate::config::ConfigError;
use crate::logging::LoggingError;

/// Errors that can occur in the terminal host.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An I/O error occurred (terminal, event reading, runtime startup).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// File logging could not be set up.
    #[error("logging error: {0}")]
    Logging(#[from] LoggingError),

    /// The backend did not pass the `--check` probe.
    #[error("backend check failed: {0}")]
    Backend(#[from] SubmitError),
}
