//! Client error types

use reqwest::StatusCode;
use shared::ErrorBody;
use thiserror::Error;

use crate::form::ValidationError;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connection refused, timeout, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON
    #[error("Invalid response: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request rejected by the server (400 / 422)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Any other non-2xx status
    #[error("Server error ({status}): {message}")]
    Status { status: u16, message: String },

    /// Form input could not be turned into a payload; nothing was sent
    #[error(transparent)]
    InvalidInput(#[from] ValidationError),
}

impl ClientError {
    /// Map a non-2xx response to an error, reading `{"detail": ...}` bodies
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let message = match serde_json::from_str::<ErrorBody>(body) {
            Ok(err) => err.message(),
            Err(_) if body.trim().is_empty() => status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string(),
            Err(_) => body.trim().to_string(),
        };

        match status {
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ClientError::Validation(message)
            }
            _ => ClientError::Status {
                status: status.as_u16(),
                message,
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound(_))
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
