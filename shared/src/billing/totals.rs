//! Discount and GST adjustment
//!
//! `final_amount = sub_total - discount_amount + gst_amount`. Totals are
//! never cached: every call derives them from the current inputs.

use super::money::{percent_of, round_money};
use crate::error::{AppError, AppResult, ErrorCode};
use crate::validation::{MAX_PAYMENT_AMOUNT, validate_non_negative};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How GST is entered for a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GstMode {
    /// A rate applied to the GST base
    Percentage,
    /// An absolute amount
    Flat,
}

/// What a GST percentage is applied to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GstBase {
    #[default]
    SubTotal,
    AfterDiscount,
}

/// GST as entered
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "snake_case")]
pub enum GstInput {
    Percentage(Decimal),
    Flat(Decimal),
}

impl GstInput {
    /// Zero GST in the given mode
    pub fn zero(mode: GstMode) -> Self {
        match mode {
            GstMode::Percentage => Self::Percentage(Decimal::ZERO),
            GstMode::Flat => Self::Flat(Decimal::ZERO),
        }
    }

    pub fn mode(&self) -> GstMode {
        match self {
            Self::Percentage(_) => GstMode::Percentage,
            Self::Flat(_) => GstMode::Flat,
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        match *self {
            Self::Percentage(rate) => validate_non_negative(
                rate,
                "gst_percentage",
                ErrorCode::InvalidGst,
                Decimal::ONE_HUNDRED,
            ),
            Self::Flat(amount) => {
                validate_non_negative(amount, "gst_amount", ErrorCode::InvalidGst, MAX_PAYMENT_AMOUNT)
            }
        }
    }
}

/// Discount and GST inputs of one transaction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Adjustment {
    #[serde(default)]
    pub discount_amount: Decimal,
    pub gst: GstInput,
    #[serde(default)]
    pub gst_base: GstBase,
}

impl Adjustment {
    /// No discount and zero GST in `mode`
    pub fn new(mode: GstMode) -> Self {
        Self {
            discount_amount: Decimal::ZERO,
            gst: GstInput::zero(mode),
            gst_base: GstBase::default(),
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        validate_non_negative(
            self.discount_amount,
            "discount_amount",
            ErrorCode::InvalidDiscount,
            MAX_PAYMENT_AMOUNT,
        )?;
        self.gst.validate()
    }
}

/// Derived totals of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransactionTotals {
    /// Sum of line amounts
    pub sub_total: Decimal,
    /// Flat discount
    pub discount_amount: Decimal,
    /// Rate used, present only in percentage mode
    pub gst_percentage: Option<Decimal>,
    /// Tax amount (rounded to 2 places in percentage mode)
    pub gst_amount: Decimal,
    /// Amount payable; negative when over-discounted
    pub final_amount: Decimal,
}

impl Default for TransactionTotals {
    fn default() -> Self {
        Self {
            sub_total: Decimal::ZERO,
            discount_amount: Decimal::ZERO,
            gst_percentage: None,
            gst_amount: Decimal::ZERO,
            final_amount: Decimal::ZERO,
        }
    }
}

impl TransactionTotals {
    /// Apply `adjustment` to `sub_total`.
    ///
    /// Over-discount is not rejected here; callers check
    /// [`is_over_discounted`](Self::is_over_discounted).
    pub fn compute(sub_total: Decimal, adjustment: &Adjustment) -> Self {
        let discount_amount = adjustment.discount_amount;
        let (gst_percentage, gst_amount) = match adjustment.gst {
            GstInput::Percentage(rate) => {
                let base = match adjustment.gst_base {
                    GstBase::SubTotal => sub_total,
                    GstBase::AfterDiscount => sub_total - discount_amount,
                };
                (Some(rate), round_money(percent_of(base, rate)))
            }
            GstInput::Flat(amount) => (None, amount),
        };

        Self {
            sub_total,
            discount_amount,
            gst_percentage,
            gst_amount,
            final_amount: sub_total - discount_amount + gst_amount,
        }
    }

    pub fn is_over_discounted(&self) -> bool {
        self.final_amount < Decimal::ZERO
    }

    /// Copy with the components rounded to 2 places and `final_amount`
    /// recomputed from them, so the final-amount identity holds after rounding.
    pub fn rounded(&self) -> Self {
        let sub_total = round_money(self.sub_total);
        let discount_amount = round_money(self.discount_amount);
        let gst_amount = round_money(self.gst_amount);
        Self {
            sub_total,
            discount_amount,
            gst_percentage: self.gst_percentage,
            gst_amount,
            final_amount: sub_total - discount_amount + gst_amount,
        }
    }
}

/// Free-function form of [`TransactionTotals::compute`]
pub fn compute_totals(sub_total: Decimal, adjustment: &Adjustment) -> TransactionTotals {
    TransactionTotals::compute(sub_total, adjustment)
}

pub(crate) fn mode_mismatch(expected: GstMode) -> AppError {
    let msg = match expected {
        GstMode::Percentage => "GST is entered as a percentage for this transaction",
        GstMode::Flat => "GST is entered as a flat amount for this transaction",
    };
    AppError::with_message(ErrorCode::GstModeMismatch, msg)
}
