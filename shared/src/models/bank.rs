//! Bank Model

use crate::error::AppResult;
use crate::validation::{MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text, validate_required_text};
use serde::{Deserialize, Serialize};

/// Bank account entity
///
/// Reads arrive with either casing depending on the endpoint, so both are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bank {
    pub id: i64,
    #[serde(alias = "bankName")]
    pub bank_name: String,
    #[serde(default, alias = "accountNo")]
    pub account_no: Option<String>,
    #[serde(default)]
    pub ifsc: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,
}

/// Create bank payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankCreate {
    pub bank_name: String,
    pub account_no: String,
    pub ifsc: Option<String>,
    pub branch: Option<String>,
}

impl BankCreate {
    pub fn validate(&self) -> AppResult<()> {
        validate_required_text(&self.bank_name, "bank_name", MAX_NAME_LEN)?;
        validate_required_text(&self.account_no, "account_no", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&self.ifsc, "ifsc", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&self.branch, "branch", MAX_NAME_LEN)?;
        Ok(())
    }
}
