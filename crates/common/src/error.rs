//! Common error types and handling for Folio

/// Common result type
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Folio application
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unexpected error: {0}")]
    Unexpected(#[from] anyhow::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Get the error code for structured log fields
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::Unexpected(_) => "UNEXPECTED_ERROR",
            Error::Serialization(_) => "SERIALIZATION_ERROR",
            Error::Configuration(_) => "CONFIGURATION_ERROR",
            Error::Validation(_) => "VALIDATION_ERROR",
            Error::Transport(_) => "TRANSPORT_ERROR",
            Error::NotFound(_) => "NOT_FOUND",
            Error::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether the failure is recoverable by user action (edit, resubmit,
    /// retry) rather than an internal defect
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Validation(_) | Error::Transport(_) | Error::NotFound(_)
        )
    }
}
