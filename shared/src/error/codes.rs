//! Numeric error codes
//!
//! Codes are grouped by the thousands digit:
//! - 0xxx: General
//! - 1xxx: Authentication
//! - 4xxx: Transaction (line items, totals, submission)
//! - 5xxx: Payment (settlement, receipts)
//! - 6xxx: Master data
//! - 9xxx: System

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declares `ErrorCode` together with its stock message and the reverse
/// `u16` lookup, so the three can never drift apart.
macro_rules! error_codes {
    ($($(#[$doc:meta])* $name:ident = $value:literal => $message:literal,)+) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(into = "u16", try_from = "u16")]
        #[repr(u16)]
        pub enum ErrorCode {
            $($(#[$doc])* $name = $value,)+
        }

        impl ErrorCode {
            pub const ALL: &'static [ErrorCode] = &[$(ErrorCode::$name,)+];

            /// Default operator-facing message
            pub const fn message(&self) -> &'static str {
                match self {
                    $(ErrorCode::$name => $message,)+
                }
            }
        }

        impl TryFrom<u16> for ErrorCode {
            type Error = InvalidErrorCode;

            fn try_from(value: u16) -> Result<Self, Self::Error> {
                match value {
                    $($value => Ok(ErrorCode::$name),)+
                    other => Err(InvalidErrorCode(other)),
                }
            }
        }
    };
}

error_codes! {
    Success = 0 => "OK",
    Unknown = 1 => "Something went wrong",
    ValidationFailed = 2 => "Please check the entered values",
    NotFound = 3 => "Record not found",
    AlreadyExists = 4 => "Record already exists",
    InvalidRequest = 5 => "Request was not accepted",
    /// Response or file body could not be decoded
    InvalidFormat = 6 => "Unexpected data format",
    RequiredField = 7 => "A required field is empty",

    NotAuthenticated = 1001 => "Please log in again",

    TransactionEmpty = 4001 => "Add at least one item",
    ItemNotSelected = 4002 => "Select an item",
    InvalidQuantity = 4003 => "Enter a valid quantity",
    InvalidPrice = 4004 => "Enter a valid price",
    InvalidDiscount = 4005 => "Discount must not be negative",
    InvalidGst = 4006 => "Invalid GST value",
    /// Percentage GST on a bill, or a flat amount on a sale or purchase
    GstModeMismatch = 4007 => "GST input does not match the transaction type",
    LineItemNotFound = 4008 => "Line item not found",

    BankRequired = 5001 => "Select a bank when online payment is used",
    InvalidPaymentAmount = 5002 => "Invalid payment amount",
    /// Receipts cannot be recorded as credit
    PaymentInvalidMethod = 5003 => "Invalid payment type",

    PartyRequired = 6001 => "Party name is required",

    InternalError = 9001 => "Internal error",
    /// The API answered with a 5xx
    DatabaseError = 9002 => "The server could not save the record",
    NetworkError = 9003 => "Could not reach the server",
    TimeoutError = 9004 => "The server took too long to answer",
    ConfigError = 9005 => "Client configuration is invalid",
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

/// A `u16` that names no [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown error code {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges() {
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::NotAuthenticated.code(), 1001);
        assert_eq!(ErrorCode::TransactionEmpty.code(), 4001);
        assert_eq!(ErrorCode::BankRequired.code(), 5001);
        assert_eq!(ErrorCode::PartyRequired.code(), 6001);
        assert_eq!(ErrorCode::ConfigError.code(), 9005);
    }

    #[test]
    fn test_codes_are_unique_and_reversible() {
        let mut seen = std::collections::HashSet::new();
        for code in ErrorCode::ALL {
            assert!(seen.insert(code.code()), "duplicate {}", code.code());
            assert_eq!(ErrorCode::try_from(code.code()), Ok(*code));
            assert!(!code.message().is_empty());
        }
        assert_eq!(ErrorCode::try_from(4999), Err(InvalidErrorCode(4999)));
    }

    #[test]
    fn test_only_success_is_success() {
        let successes: Vec<_> = ErrorCode::ALL.iter().filter(|c| c.is_success()).collect();
        assert_eq!(successes, [&ErrorCode::Success]);
    }

    #[test]
    fn test_json_is_numeric() {
        assert_eq!(serde_json::to_string(&ErrorCode::BankRequired).unwrap(), "5001");
        let code: ErrorCode = serde_json::from_str("4003").unwrap();
        assert_eq!(code, ErrorCode::InvalidQuantity);
        assert!(serde_json::from_str::<ErrorCode>("1234").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::Success.to_string(), "E0000");
        assert_eq!(ErrorCode::InvalidQuantity.to_string(), "E4003");
        assert_eq!(InvalidErrorCode(42).to_string(), "unknown error code 42");
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(ErrorCode::TransactionEmpty.message(), "Add at least one item");
        assert_eq!(
            ErrorCode::BankRequired.message(),
            "Select a bank when online payment is used"
        );
    }
}
