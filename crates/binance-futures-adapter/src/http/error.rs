/*
[INPUT]:  Error sources (validation, HTTP, API, serialization, configuration)
[OUTPUT]: Structured error types mapped onto the order outcome taxonomy
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

use crate::order::FailureKind;

/// Main error type for the Binance futures adapter
#[derive(Error, Debug)]
pub enum FuturesError {
    /// Order fields are missing or out of range; never sent to the exchange
    #[error("{0}")]
    Validation(String),

    /// Exchange returned a structured error response
    #[error("API error (code {code}): {message}")]
    Api { code: i64, message: String },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Signed endpoint called on a client without API credentials
    #[error("API credentials are required for signed endpoints")]
    MissingCredentials,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl FuturesError {
    /// Outcome category for this error.
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            FuturesError::Validation(_) => FailureKind::Validation,
            FuturesError::Api { .. } => FailureKind::Exchange,
            _ => FailureKind::Transport,
        }
    }

    /// Exchange error code, when the exchange supplied one.
    pub fn code(&self) -> Option<i64> {
        match self {
            FuturesError::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Text shown to the operator. Exchange messages are passed through verbatim.
    pub fn operator_message(&self) -> String {
        match self {
            FuturesError::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, FuturesError>;
