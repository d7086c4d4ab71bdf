//! Outstanding balances and payments received against them

use crate::billing::PaymentMode;
use crate::error::{AppError, AppResult, ErrorCode};
use crate::validation::{MAX_NAME_LEN, MAX_PAYMENT_AMOUNT, validate_positive, validate_required_text};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-customer outstanding row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesOutstanding {
    pub customer_name: String,
    #[serde(default)]
    pub total_sale: Decimal,
    #[serde(default)]
    pub outstanding: Decimal,
}

/// Per-supplier outstanding row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOutstanding {
    pub supplier_name: String,
    #[serde(default)]
    pub total_purchase: Decimal,
    #[serde(default)]
    pub outstanding: Decimal,
}

/// Which side of the books a receipt settles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counterparty {
    Customer,
    Supplier,
}

/// Payment against an outstanding balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub amount: Decimal,
    pub payment_type: PaymentMode,
    pub bank_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_name: Option<String>,
}

impl PaymentReceipt {
    /// Money received from a customer
    pub fn from_customer(
        customer_name: impl Into<String>,
        amount: Decimal,
        payment_type: PaymentMode,
        bank_id: Option<i64>,
    ) -> Self {
        Self {
            amount,
            payment_type,
            bank_id: Self::bank_for(payment_type, bank_id),
            customer_name: Some(customer_name.into()),
            supplier_name: None,
        }
    }

    /// Money paid to a supplier
    pub fn to_supplier(
        supplier_name: impl Into<String>,
        amount: Decimal,
        payment_type: PaymentMode,
        bank_id: Option<i64>,
    ) -> Self {
        Self {
            amount,
            payment_type,
            bank_id: Self::bank_for(payment_type, bank_id),
            customer_name: None,
            supplier_name: Some(supplier_name.into()),
        }
    }

    fn bank_for(payment_type: PaymentMode, bank_id: Option<i64>) -> Option<i64> {
        match payment_type {
            PaymentMode::Online => bank_id,
            _ => None,
        }
    }

    pub fn counterparty(&self) -> Option<Counterparty> {
        match (&self.customer_name, &self.supplier_name) {
            (Some(_), None) => Some(Counterparty::Customer),
            (None, Some(_)) => Some(Counterparty::Supplier),
            _ => None,
        }
    }

    pub fn validate(&self) -> AppResult<()> {
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
                    "A receipt must be paid by Cash or Online",
                ));
            }
            PaymentMode::Online if !matches!(self.bank_id, Some(id) if id > 0) => {
                return Err(AppError::bank_required());
            }
            _ => {}
        }
        match self.counterparty() {
            Some(Counterparty::Customer) => validate_required_text(
                self.customer_name.as_deref().unwrap_or_default(),
                "customer_name",
                MAX_NAME_LEN,
            ),
            Some(Counterparty::Supplier) => validate_required_text(
                self.supplier_name.as_deref().unwrap_or_default(),
                "supplier_name",
                MAX_NAME_LEN,
            ),
            None => Err(AppError::new(ErrorCode::PartyRequired)),
        }
    }
}
