//! Input validation helpers
//!
//! Centralized text length constants and validation functions used when
//! building transaction records and master-data payloads.

use crate::error::{AppError, ErrorCode};
use rust_decimal::Decimal;

// ── Text length limits ──────────────────────────────────────────────

/// Party, item, bank and company names
pub const MAX_NAME_LEN: usize = 200;

/// Invoice / purchase / bill numbers, vehicle numbers
pub const MAX_REFERENCE_LEN: usize = 64;

/// Phone numbers, GSTIN, IFSC, account numbers
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Remarks
pub const MAX_NOTE_LEN: usize = 500;

/// Addresses
pub const MAX_ADDRESS_LEN: usize = 500;

// ── Money limits ────────────────────────────────────────────────────

/// Maximum allowed unit price (₹1,00,00,000)
pub const MAX_PRICE: Decimal = Decimal::from_parts(10_000_000, 0, 0, false, 0);

/// Maximum allowed line quantity
pub const MAX_QUANTITY: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Maximum allowed single payment amount
pub const MAX_PAYMENT_AMOUNT: Decimal = Decimal::from_parts(100_000_000, 0, 0, false, 0);

// ── Text helpers ────────────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::required(field));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Trim a free-text field, mapping blank input to `None`.
pub fn normalize_optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

// ── Amount helpers ──────────────────────────────────────────────────

/// Validate that an amount is zero or positive and within `max`.
pub fn validate_non_negative(
    value: Decimal,
    field: &str,
    code: ErrorCode,
    max: Decimal,
) -> Result<(), AppError> {
    if value < Decimal::ZERO {
        return Err(AppError::with_message(
            code,
            format!("{field} must be non-negative, got {value}"),
        )
        .with_detail("field", field));
    }
    if value > max {
        return Err(AppError::with_message(
            code,
            format!("{field} exceeds maximum allowed ({max}), got {value}"),
        )
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that an amount is strictly positive and within `max`.
pub fn validate_positive(
    value: Decimal,
    field: &str,
    code: ErrorCode,
    max: Decimal,
) -> Result<(), AppError> {
    if value <= Decimal::ZERO {
        return Err(AppError::with_message(
            code,
            format!("{field} must be positive, got {value}"),
        )
        .with_detail("field", field));
    }
    validate_non_negative(value, field, code, max)
}
