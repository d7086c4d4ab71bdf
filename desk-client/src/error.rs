//! Failures seen by API callers

use http::StatusCode;
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Everything a call through the desk client can fail with.
///
/// `Validation` and `Io` never involve the network. The `Display` text of
/// `Validation` and `Api` is meant to be shown to the operator unchanged.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{0}")]
    Validation(#[from] AppError),

    /// Failure status with the API's own message
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Connection, TLS or timeout failure
    #[error("could not reach the server: {0}")]
    Http(#[from] reqwest::Error),

    #[error("session expired, please log in again")]
    Unauthorized,

    /// 404 without a JSON message; holds the raw body
    #[error("record not found {0}")]
    NotFound(String),

    #[error("unexpected response: {0}")]
    InvalidResponse(String),

    #[error("malformed JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid client configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// Whether the error was raised locally, with nothing sent
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Closest error code for this failure
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::Validation(e) => e.code,
            Self::Api { status, .. } => StatusCode::from_u16(*status)
                .map(ErrorCode::from_http_status)
                .unwrap_or(ErrorCode::Unknown),
            Self::Http(e) if e.is_timeout() => ErrorCode::TimeoutError,
            Self::Http(_) => ErrorCode::NetworkError,
            Self::Unauthorized => ErrorCode::NotAuthenticated,
            Self::NotFound(_) => ErrorCode::NotFound,
            Self::InvalidResponse(_) | Self::Serialization(_) => ErrorCode::InvalidFormat,
            Self::Io(_) => ErrorCode::InternalError,
            Self::Config(_) => ErrorCode::ConfigError,
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
