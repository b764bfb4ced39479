//! GenAI error types

use thiserror::Error;

/// Errors that can occur when talking to the hosted generation service
#[derive(Debug, Error)]
pub enum GenAiError {
    /// Credential or endpoint missing at client construction.
    /// Fatal to any call; surfaced immediately, never retried.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GenAiError {
    /// Check if this is a configuration error (bad setup, not a bad call)
    pub fn is_configuration(&self) -> bool {
        matches!(self, GenAiError::Configuration(_))
    }

    /// Check if this error came from a generation call
    ///
    /// Everything except configuration; these map to a panel failure
    /// with a fixed user-facing message.
    pub fn is_generation(&self) -> bool {
        !self.is_configuration()
    }
}
