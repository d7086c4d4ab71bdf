//! Transaction draft: one editing session of a sale, purchase or bill
//!
//! The draft owns raw inputs only. Totals and settlement are derived on
//! every read, so the order in which inputs were changed never matters.

use super::line_item::{LineItem, LineItemInput, sub_total};
use super::settlement::{PaymentInput, PaymentMode, Settlement};
use super::totals::{Adjustment, GstBase, GstInput, GstMode, TransactionTotals, mode_mismatch};
use crate::error::{AppError, AppResult, ErrorCode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kind of transaction being drafted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Sale,
    Purchase,
    Bill,
}

impl TransactionKind {
    /// GST entry mode, fixed per kind
    pub fn gst_mode(&self) -> GstMode {
        match self {
            Self::Sale | Self::Purchase => GstMode::Percentage,
            Self::Bill => GstMode::Flat,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Sale => "sale",
            Self::Purchase => "purchase",
            Self::Bill => "bill",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A line in a draft, with its local handle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftLine {
    /// Local handle for removal; never sent to the API
    pub line_id: u32,
    #[serde(flatten)]
    pub item: LineItem,
}

/// Totals and settlement read together
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DraftSummary {
    pub totals: TransactionTotals,
    pub settlement: Settlement,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    kind: TransactionKind,
    lines: Vec<DraftLine>,
    adjustment: Adjustment,
    payment: PaymentInput,
    next_line_id: u32,
}

impl TransactionDraft {
    pub fn new(kind: TransactionKind) -> Self {
        Self {
            kind,
            lines: Vec::new(),
            adjustment: Adjustment::new(kind.gst_mode()),
            payment: PaymentInput::default(),
            next_line_id: 1,
        }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn lines(&self) -> &[DraftLine] {
        &self.lines
    }

    pub fn items(&self) -> impl Iterator<Item = &LineItem> {
        self.lines.iter().map(|l| &l.item)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn adjustment(&self) -> &Adjustment {
        &self.adjustment
    }

    pub fn payment(&self) -> &PaymentInput {
        &self.payment
    }

    // ==================== Input events ====================

    /// Validate and append a line, returning its handle.
    pub fn add_item(&mut self, input: LineItemInput) -> AppResult<u32> {
        let item = input.validate()?;
        let line_id = self.next_line_id;
        self.next_line_id += 1;
        self.lines.push(DraftLine { line_id, item });
        Ok(line_id)
    }

    pub fn remove_item(&mut self, line_id: u32) -> AppResult<LineItem> {
        let pos = self
            .lines
            .iter()
            .position(|l| l.line_id == line_id)
            .ok_or_else(|| {
                AppError::new(ErrorCode::LineItemNotFound).with_detail("line_id", line_id)
            })?;
        Ok(self.lines.remove(pos).item)
    }

    pub fn set_discount(&mut self, discount_amount: Decimal) -> AppResult<()> {
        let next = Adjustment {
            discount_amount,
            ..self.adjustment
        };
        next.validate()?;
        self.adjustment = next;
        Ok(())
    }

    pub fn set_gst_percentage(&mut self, rate: Decimal) -> AppResult<()> {
        self.set_gst(GstInput::Percentage(rate))
    }

    pub fn set_gst_amount(&mut self, amount: Decimal) -> AppResult<()> {
        self.set_gst(GstInput::Flat(amount))
    }

    /// Set GST; the input's mode must match the kind's mode.
    pub fn set_gst(&mut self, gst: GstInput) -> AppResult<()> {
        let expected = self.kind.gst_mode();
        if gst.mode() != expected {
            return Err(mode_mismatch(expected));
        }
        gst.validate()?;
        self.adjustment.gst = gst;
        Ok(())
    }

    pub fn set_gst_base(&mut self, base: GstBase) {
        self.adjustment.gst_base = base;
    }

    pub fn set_cash_received(&mut self, amount: Decimal) -> AppResult<()> {
        let next = PaymentInput {
            cash_received: amount,
            ..self.payment
        };
        next.validate_amounts()?;
        self.payment = next;
        Ok(())
    }

    pub fn set_online_received(&mut self, amount: Decimal) -> AppResult<()> {
        let next = PaymentInput {
            online_received: amount,
            ..self.payment
        };
        next.validate_amounts()?;
        self.payment = next;
        Ok(())
    }

    pub fn set_bank(&mut self, bank_id: Option<i64>) {
        self.payment.bank_id = bank_id;
    }

    pub fn set_payment_mode(&mut self, mode: PaymentMode) {
        self.payment.payment_mode = mode;
    }

    // ==================== Derived values ====================

    pub fn sub_total(&self) -> Decimal {
        sub_total(self.items())
    }

    pub fn totals(&self) -> TransactionTotals {
        TransactionTotals::compute(self.sub_total(), &self.adjustment)
    }

    pub fn settlement(&self) -> Settlement {
        Settlement::compute(self.totals().final_amount, &self.payment)
    }

    pub fn summary(&self) -> DraftSummary {
        let totals = self.totals();
        DraftSummary {
            settlement: Settlement::compute(totals.final_amount, &self.payment),
            totals,
        }
    }

    /// Checks run before anything is composed or sent.
    pub fn validate_for_submit(&self) -> AppResult<()> {
        if self.lines.is_empty() {
            return Err(AppError::empty_transaction());
        }
        self.adjustment.validate()?;
        self.payment.validate()
    }

    /// Back to an empty draft of the same kind.
    pub fn reset(&mut self) {
        *self = Self::new(self.kind);
    }
}
