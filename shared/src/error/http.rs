//! Mapping between error codes and HTTP statuses

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Status an API would answer with for this code
    pub fn http_status(&self) -> StatusCode {
        use ErrorCode::*;
        match self {
            Success => StatusCode::OK,
            NotFound | LineItemNotFound => StatusCode::NOT_FOUND,
            AlreadyExists => StatusCode::CONFLICT,
            NotAuthenticated => StatusCode::UNAUTHORIZED,
            NetworkError => StatusCode::BAD_GATEWAY,
            TimeoutError => StatusCode::GATEWAY_TIMEOUT,
            Unknown | InternalError | DatabaseError | ConfigError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => StatusCode::BAD_REQUEST,
        }
    }

    /// Classify a status returned by the API.
    pub fn from_http_status(status: StatusCode) -> Self {
        match status.as_u16() {
            200..=299 => Self::Success,
            400 | 422 => Self::ValidationFailed,
            401 | 403 => Self::NotAuthenticated,
            404 => Self::NotFound,
            409 => Self::AlreadyExists,
            408 | 504 => Self::TimeoutError,
            502 | 503 => Self::NetworkError,
            500..=599 => Self::DatabaseError,
            _ => Self::Unknown,
        }
    }
}
