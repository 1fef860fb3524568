/// Errors that can occur while submitting a form to the backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The backend answered with a non-2xx status.
    ///
    /// `message` is the body's `error` string when one could be extracted,
    /// otherwise a generic description of the failed operation.
    #[error("HTTP {status}: {message}")]
    Http {
        /// Response status code.
        status: u16,
        /// Best available explanation of the failure.
        message: String,
    },

    /// No response was received (connection refused, DNS, TLS, reset).
    #[error("network error: {0}")]
    Network(String),
}

impl SubmitError {
    /// Returns the HTTP status if the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Network(_) => None,
        }
    }
}
