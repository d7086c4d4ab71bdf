//! Expense Model

use crate::billing::PaymentMode;
use crate::error::{AppError, AppResult, ErrorCode};
use crate::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_PAYMENT_AMOUNT, MAX_REFERENCE_LEN, normalize_optional_text,
    validate_optional_text, validate_positive, validate_required_text,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Categories offered on the expense form
pub const EXPENSE_CATEGORIES: [&str; 10] = [
    "Rent & Utilities",
    "Fuel",
    "Transport",
    "Salary",
    "Bank Charges",
    "Maintenance",
    "Marketing",
    "Software / SaaS",
    "Purchase Related",
    "Misc",
];

/// Expense list row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub expense_name: String,
    #[serde(default)]
    pub expense_category: Option<String>,
    #[serde(default)]
    pub amount: Decimal,
    /// Date as returned by the server (may carry a time part)
    #[serde(default)]
    pub expense_date: Option<String>,
    #[serde(default)]
    pub payment_type: Option<PaymentMode>,
    #[serde(default)]
    pub vendor_name: Option<String>,
    #[serde(default)]
    pub invoice_number: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub bank_id: Option<i64>,
}

/// Create expense payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseCreate {
    pub expense_name: String,
    pub expense_category: String,
    pub amount: Decimal,
    pub expense_date: NaiveDate,
    pub payment_type: PaymentMode,
    pub bank_id: Option<i64>,
    pub vendor_name: Option<String>,
    pub invoice_number: Option<String>,
    pub remarks: Option<String>,
}

impl ExpenseCreate {
    /// Cash expense with no optional details
    pub fn new(
        expense_name: impl Into<String>,
        expense_category: impl Into<String>,
        amount: Decimal,
        expense_date: NaiveDate,
    ) -> Self {
        Self {
            expense_name: expense_name.into(),
            expense_category: expense_category.into(),
            amount,
            expense_date,
            payment_type: PaymentMode::Cash,
            bank_id: None,
            vendor_name: None,
            invoice_number: None,
            remarks: None,
        }
    }

    /// Set how the expense was paid; the bank is kept only for `Online`.
    pub fn paid_by(mut self, payment_type: PaymentMode, bank_id: Option<i64>) -> Self {
        self.payment_type = payment_type;
        self.bank_id = match payment_type {
            PaymentMode::Online => bank_id,
            _ => None,
        };
        self
    }

    pub fn with_vendor(mut self, vendor_name: &str, invoice_number: Option<&str>) -> Self {
        self.vendor_name = normalize_optional_text(Some(vendor_name));
        self.invoice_number = normalize_optional_text(invoice_number);
        self
    }

    pub fn validate(&self) -> AppResult<()> {
        validate_required_text(&self.expense_name, "expense_name", MAX_NAME_LEN)?;
        validate_required_text(&self.expense_category, "expense_category", MAX_NAME_LEN)?;
        let category = self.expense_category.trim();
        if !EXPENSE_CATEGORIES.iter().any(|c| *c == category) {
            return Err(AppError::validation(format!(
                "Unknown expense category '{}'",
                self.expense_category
            ))
            .with_detail("field", "expense_category"));
        }
        validate_positive(
            self.amount,
            "amount",
            ErrorCode::InvalidPaymentAmount,
            MAX_PAYMENT_AMOUNT,
        )?;
        if self.payment_type == PaymentMode::Online && !matches!(self.bank_id, Some(id) if id > 0) {
            return Err(AppError::bank_required());
        }
        validate_optional_text(&self.vendor_name, "vendor_name", MAX_NAME_LEN)?;
        validate_optional_text(&self.invoice_number, "invoice_number", MAX_REFERENCE_LEN)?;
        validate_optional_text(&self.remarks, "remarks", MAX_NOTE_LEN)
    }
}
