//! Client error types

use reqwest::StatusCode;
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Non-success status, with the backend's message
    #[error("{message}")]
    Api { status: StatusCode, message: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    pub fn from_status(status: StatusCode, message: String) -> Self {
        ClientError::Api { status, message }
    }

    /// Status the backend answered with, if it answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http(e) => e.status(),
            _ => None,
        }
    }
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Http(e) if e.is_timeout() => AppError::timeout(),
            ClientError::Http(e) if e.is_decode() => {
                AppError::internal(format!("Invalid response body: {e}"))
            }
            ClientError::Http(e) => {
                AppError::new(ErrorCode::NetworkError).with_detail("cause", e.to_string())
            }
            ClientError::Api { status, message } => {
                AppError::with_message(ErrorCode::from_http_status(status), message)
                    .with_detail("status", status.as_u16())
            }
            e @ (ClientError::InvalidResponse(_) | ClientError::Serialization(_)) => {
                AppError::internal(e.to_string())
            }
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
