/*
[INPUT]:  Error sources (validation, transport, HTTP status, decoding, cancellation)
[OUTPUT]: Structured error kinds with retry and auth hints
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or changing status mapping
*/

use reqwest::StatusCode;
use thiserror::Error;

use crate::http::transport::TransportError;

/// Main error type for the SPWorlds client
#[derive(Error, Debug)]
pub enum SpError {
    /// Credentials or client configuration are missing or malformed
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A caller-supplied argument breaks a documented provider constraint
    #[error("Validation error: {0}")]
    Validation(String),

    /// The provider could not be reached
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The provider rejected the card id or token (HTTP 401)
    #[error("Authentication failed: invalid card id or token")]
    Authentication,

    /// The looked-up user or account does not exist (HTTP 404)
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// Any other non-success status
    #[error("Provider error (status {status}): {body}")]
    Provider { status: u16, body: String },

    /// A success body did not match the expected schema
    #[error("Failed to decode {endpoint} response: {reason}")]
    Decoding {
        endpoint: &'static str,
        reason: String,
    },

    /// The call was cancelled before the provider answered
    #[error("Request cancelled")]
    Cancelled,
}

impl SpError {
    /// Check if the error is worth retrying with the same arguments
    pub fn is_retryable(&self) -> bool {
        match self {
            SpError::Transport(_) => true,
            SpError::Provider { status, .. } => {
                *status == StatusCode::TOO_MANY_REQUESTS.as_u16() || *status >= 500
            }
            _ => false,
        }
    }

    /// Check if error indicates rejected credentials
    pub fn is_auth_error(&self) -> bool {
        matches!(self, SpError::Authentication)
    }

    /// HTTP status returned by the provider, if it answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            SpError::Authentication => Some(StatusCode::UNAUTHORIZED.as_u16()),
            SpError::NotFound { .. } => Some(StatusCode::NOT_FOUND.as_u16()),
            SpError::Provider { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Create a provider error from status code and raw body
    pub fn provider(status: StatusCode, body: impl Into<String>) -> Self {
        SpError::Provider {
            status: status.as_u16(),
            body: body.into(),
        }
    }

    pub(crate) fn decoding(endpoint: &'static str, err: &serde_json::Error) -> Self {
        SpError::Decoding {
            endpoint,
            reason: err.to_string(),
        }
    }
}

impl From<url::ParseError> for SpError {
    fn from(err: url::ParseError) -> Self {
        SpError::Configuration(format!("Invalid base URL: {err}"))
    }
}

/// Result type alias for SPWorlds operations
pub type Result<T> = std::result::Result<T, SpError>;
