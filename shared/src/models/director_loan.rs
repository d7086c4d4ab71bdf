//! Director Loan Model

use crate::billing::PaymentMode;
use crate::error::{AppError, AppResult, ErrorCode};
use crate::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_PAYMENT_AMOUNT, normalize_optional_text,
    validate_optional_text, validate_positive, validate_required_text,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether the company borrowed from or repaid a director
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LoanDirection {
    #[default]
    Received,
    Given,
}

/// Director loan list row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectorLoan {
    pub id: i64,
    #[serde(default)]
    pub loan_date: Option<String>,
    pub director_name: String,
    #[serde(default)]
    pub amount: Decimal,
    #[serde(default)]
    pub payment_type: Option<PaymentMode>,
    #[serde(default)]
    pub transaction_type: LoanDirection,
    #[serde(default)]
    pub bank_id: Option<i64>,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub account_no: Option<String>,
    #[serde(default)]
    pub remark: Option<String>,
}

/// Create director loan payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectorLoanCreate {
    pub loan_date: NaiveDate,
    pub director_name: String,
    pub amount: Decimal,
    pub payment_type: PaymentMode,
    pub bank_id: Option<i64>,
    pub transaction_type: LoanDirection,
    pub remark: Option<String>,
}

impl DirectorLoanCreate {
    /// Cash loan received from a director
    pub fn new(director_name: impl Into<String>, amount: Decimal, loan_date: NaiveDate) -> Self {
        Self {
            loan_date,
            director_name: director_name.into(),
            amount,
            payment_type: PaymentMode::Cash,
            bank_id: None,
            transaction_type: LoanDirection::Received,
            remark: None,
        }
    }

    pub fn direction(mut self, transaction_type: LoanDirection) -> Self {
        self.transaction_type = transaction_type;
        self
    }

    /// Set the payment mode; the bank is kept only for `Online`.
    pub fn paid_by(mut self, payment_type: PaymentMode, bank_id: Option<i64>) -> Self {
        self.payment_type = payment_type;
        self.bank_id = match payment_type {
            PaymentMode::Online => bank_id,
            _ => None,
        };
        self
    }

    pub fn with_remark(mut self, remark: &str) -> Self {
        self.remark = normalize_optional_text(Some(remark));
        self
    }

    pub fn validate(&self) -> AppResult<()> {
        validate_required_text(&self.director_name, "director_name", MAX_NAME_LEN)?;
        validate_positive(
            self.amount,
            "amount",
            ErrorCode::InvalidPaymentAmount,
            MAX_PAYMENT_AMOUNT,
        )?;
        match self.payment_type {
            PaymentMode::Credit => {
                return Err(AppError::with_message(
                    ErrorCode::PaymentInvalidMethod,
                    "Director loans move cash or bank money",
                )
                .with_detail("field", "payment_type"));
            }
            PaymentMode::Online if !matches!(self.bank_id, Some(id) if id > 0) => {
                return Err(AppError::bank_required());
            }
            _ => {}
        }
        validate_optional_text(&self.remark, "remark", MAX_NOTE_LEN)
    }
}
