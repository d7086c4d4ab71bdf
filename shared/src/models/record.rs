//! Composition of API records from a draft

use crate::billing::{PaymentMode, TransactionDraft, TransactionKind, TransactionTotals, round_money};
use crate::error::{AppError, AppResult};
use rust_decimal::Decimal;
use serde::Serialize;

/// A record ready to be posted for one kind of transaction
pub trait TransactionRecord: Serialize + Send + Sync {
    const KIND: TransactionKind;

    /// Invoice, purchase or bill number
    fn reference(&self) -> &str;

    fn final_amount(&self) -> Decimal;

    fn outstanding(&self) -> Decimal;
}

/// Amounts of a draft, rounded to 2 places
#[derive(Debug, Clone, Copy)]
pub(crate) struct RecordAmounts {
    pub totals: TransactionTotals,
    pub cash: Decimal,
    pub online: Decimal,
    pub received: Decimal,
    pub outstanding: Decimal,
    pub bank_id: Option<i64>,
    pub payment_type: PaymentMode,
}

/// Validate `draft` and round its amounts for a record of `kind`.
///
/// Outstanding is derived from the rounded figures so the record stays
/// internally consistent.
pub(crate) fn compose_amounts(
    draft: &TransactionDraft,
    kind: TransactionKind,
) -> AppResult<RecordAmounts> {
    if draft.kind() != kind {
        return Err(AppError::invalid_request(format!(
            "Cannot build a {kind} record from a {} draft",
            draft.kind()
        )));
    }
    draft.validate_for_submit()?;

    let summary = draft.summary();
    let totals = summary.totals.rounded();
    let cash = round_money(summary.settlement.cash_received);
    let online = round_money(summary.settlement.online_received);
    let received = cash + online;

    Ok(RecordAmounts {
        totals,
        cash,
        online,
        received,
        outstanding: totals.final_amount - received,
        bank_id: summary.settlement.bank_id,
        payment_type: draft.payment().payment_mode,
    })
}

/// Remarks are always sent, blank when absent.
pub(crate) fn remarks_or_blank(remarks: &Option<String>) -> String {
    remarks.as_deref().map(str::trim).unwrap_or_default().to_string()
}
