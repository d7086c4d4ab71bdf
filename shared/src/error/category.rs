//! Grouping of error codes by their thousands digit

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    General,
    Auth,
    /// Line items, totals and submission
    Transaction,
    /// Settlement and receipts
    Payment,
    /// Items, parties, banks and companies
    Master,
    System,
}

impl ErrorCategory {
    /// Unassigned ranges count as `General` below 9000 and `System` above.
    pub fn from_code(code: u16) -> Self {
        match code / 1000 {
            1 => Self::Auth,
            4 => Self::Transaction,
            5 => Self::Payment,
            6 => Self::Master,
            9..=u16::MAX => Self::System,
            _ => Self::General,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Auth => "auth",
            Self::Transaction => "transaction",
            Self::Payment => "payment",
            Self::Master => "master",
            Self::System => "system",
        }
    }

    /// Transaction and payment codes come only from local checks.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Transaction | Self::Payment)
    }
}

impl ErrorCode {
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        let cases = [
            (0, ErrorCategory::General),
            (2500, ErrorCategory::General),
            (1001, ErrorCategory::Auth),
            (4008, ErrorCategory::Transaction),
            (5999, ErrorCategory::Payment),
            (6001, ErrorCategory::Master),
            (9001, ErrorCategory::System),
            (u16::MAX, ErrorCategory::System),
        ];
        for (code, category) in cases {
            assert_eq!(ErrorCategory::from_code(code), category, "{code}");
        }
    }

    #[test]
    fn test_every_code_lands_in_its_range() {
        for code in ErrorCode::ALL {
            let expected = match code.code() {
                0..1000 => ErrorCategory::General,
                1000..2000 => ErrorCategory::Auth,
                4000..5000 => ErrorCategory::Transaction,
                5000..6000 => ErrorCategory::Payment,
                6000..7000 => ErrorCategory::Master,
                _ => ErrorCategory::System,
            };
            assert_eq!(code.category(), expected);
        }
    }

    #[test]
    fn test_validation_categories() {
        assert!(ErrorCode::GstModeMismatch.category().is_validation());
        assert!(ErrorCode::BankRequired.category().is_validation());
        assert!(!ErrorCode::PartyRequired.category().is_validation());
        assert!(!ErrorCode::NetworkError.category().is_validation());
    }

    #[test]
    fn test_serde_name() {
        let category = ErrorCategory::Payment;
        let json = serde_json::to_string(&category).unwrap();
        assert_eq!(json, format!("\"{}\"", category.as_str()));
        let back: ErrorCategory = serde_json::from_str("\"master\"").unwrap();
        assert_eq!(back, ErrorCategory::Master);
    }
}
