//! Observability setup errors.

use thiserror::Error;

/// Result type used by the observability setup.
pub type ObservabilityResult<T> = Result<T, ObservabilityError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ObservabilityError {
    /// `KVSTREAM_LOG_FORMAT` named no known format.
    #[error("unknown log format: {0} (expected json, pretty or compact)")]
    UnknownFormat(String),

    /// The filter directive could not be parsed.
    #[error("invalid log filter: {0}")]
    InvalidFilter(String),

    /// A global subscriber is already installed.
    #[error("a global tracing subscriber is already installed")]
    AlreadyInitialized,
}

impl ObservabilityError {
    pub fn unknown_format(msg: impl Into<String>) -> Self {
        Self::UnknownFormat(msg.into())
    }

    pub fn invalid_filter(msg: impl Into<String>) -> Self {
        Self::InvalidFilter(msg.into())
    }
}
