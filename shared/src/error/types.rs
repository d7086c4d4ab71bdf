//! `AppError`, the error every billing operation returns

use super::codes::ErrorCode;
use http::StatusCode;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// A coded, user-facing failure.
///
/// `message` is shown to the operator verbatim. `details` carries the
/// offending field, value or line so a form can highlight it.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Error carrying the code's stock message
    pub fn new(code: ErrorCode) -> Self {
        Self::with_message(code, code.message())
    }

    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Attach one `key = value` detail, replacing any earlier value for `key`.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let details = self.details.get_or_insert_with(HashMap::new);
        details.insert(key.into(), value.into());
        self
    }

    /// Look up a detail by key
    pub fn detail(&self, key: &str) -> Option<&Value> {
        self.details.as_ref()?.get(key)
    }

    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    /// Raised by local checks, before anything is sent to the API.
    pub fn is_validation(&self) -> bool {
        matches!(
            self.code,
            ErrorCode::ValidationFailed | ErrorCode::RequiredField | ErrorCode::PartyRequired
        ) || self.code.category().is_validation()
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// `"<field> is required"`, with the field name in `details`
    pub fn required(field: impl Into<String>) -> Self {
        let field = field.into();
        Self::with_message(ErrorCode::RequiredField, format!("{field} is required"))
            .with_detail("field", field)
    }

    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }

    pub fn empty_transaction() -> Self {
        Self::new(ErrorCode::TransactionEmpty)
    }

    pub fn bank_required() -> Self {
        Self::new(ErrorCode::BankRequired).with_detail("field", "bank_id")
    }
}

pub type AppResult<T> = Result<T, AppError>;
