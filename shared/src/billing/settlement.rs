//! Cash / online settlement and outstanding balance

use super::money::money_eq;
use crate::error::{AppError, AppResult, ErrorCode};
use crate::validation::{MAX_PAYMENT_AMOUNT, validate_non_negative};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// `payment_type` as stored by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaymentMode {
    Cash,
    Online,
    #[default]
    Credit,
}

impl PaymentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::Online => "Online",
            Self::Credit => "Credit",
        }
    }
}

impl std::fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment side of a transaction as entered
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentInput {
    #[serde(default)]
    pub cash_received: Decimal,
    #[serde(default)]
    pub online_received: Decimal,
    #[serde(default)]
    pub bank_id: Option<i64>,
    #[serde(default)]
    pub payment_mode: PaymentMode,
}

impl Default for PaymentInput {
    fn default() -> Self {
        Self {
            cash_received: Decimal::ZERO,
            online_received: Decimal::ZERO,
            bank_id: None,
            payment_mode: PaymentMode::default(),
        }
    }
}

impl PaymentInput {
    /// A bank is needed when money arrives online or the mode says so.
    pub fn requires_bank(&self) -> bool {
        self.online_received > Decimal::ZERO || self.payment_mode == PaymentMode::Online
    }

    /// Amount bounds only, without the bank rule
    pub fn validate_amounts(&self) -> AppResult<()> {
        validate_non_negative(
            self.cash_received,
            "cash_received",
            ErrorCode::InvalidPaymentAmount,
            MAX_PAYMENT_AMOUNT,
        )?;
        validate_non_negative(
            self.online_received,
            "online_received",
            ErrorCode::InvalidPaymentAmount,
            MAX_PAYMENT_AMOUNT,
        )
    }

    pub fn validate(&self) -> AppResult<()> {
        self.validate_amounts()?;
        if self.requires_bank() && !matches!(self.bank_id, Some(id) if id > 0) {
            return Err(AppError::bank_required());
        }
        Ok(())
    }
}

/// Derived settlement of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub cash_received: Decimal,
    pub online_received: Decimal,
    /// `cash_received + online_received`
    pub amount_received: Decimal,
    /// `final_amount - amount_received`; negative means overpaid
    pub outstanding: Decimal,
    /// Only present when a bank is required
    pub bank_id: Option<i64>,
}

impl Settlement {
    pub fn compute(final_amount: Decimal, payment: &PaymentInput) -> Self {
        let amount_received = payment.cash_received + payment.online_received;
        Self {
            cash_received: payment.cash_received,
            online_received: payment.online_received,
            amount_received,
            outstanding: final_amount - amount_received,
            bank_id: if payment.requires_bank() {
                payment.bank_id
            } else {
                None
            },
        }
    }

    pub fn is_settled(&self) -> bool {
        money_eq(self.outstanding, Decimal::ZERO)
    }

    pub fn is_overpaid(&self) -> bool {
        self.outstanding < Decimal::ZERO && !self.is_settled()
    }
}

/// Free-function form of [`Settlement::compute`]
pub fn compute_settlement(final_amount: Decimal, payment: &PaymentInput) -> Settlement {
    Settlement::compute(final_amount, payment)
}

/// Free-function form of [`PaymentInput::validate`]
pub fn validate_settlement(payment: &PaymentInput) -> AppResult<()> {
    payment.validate()
}
