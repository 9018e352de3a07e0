//! Error types for the Sandy domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error type.

use std::path::PathBuf;
use thiserror::Error;

/// Failures loading caller-owned domain data, such as a stored profile.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

/// Failures raised by a concrete completion backend.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError {
        status_code: u16,
        message: String,
    },

    #[error("Rate limited by provider, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),
}

/// The uniform failure surfaced by the completion gateway.
///
/// Whatever went wrong on the way to the completion API, callers only ever
/// see this type with a human-readable message.
#[derive(Debug, Clone, Error)]
#[error("Completion failed: {message}")]
pub struct CompletionFailure {
    pub message: String,
}

impl CompletionFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<ProviderError> for CompletionFailure {
    fn from(err: ProviderError) -> Self {
        Self::new(err.to_string())
    }
}

/// Model output that does not have the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("no numbered recommendations found in model output")]
    NoNumberedItems,

    #[error("model output was empty")]
    EmptyInput,
}
