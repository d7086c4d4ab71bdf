//! JSON draft files read by the `desk` tool
//!
//! ```json
//! {
//!   "kind": "sale",
//!   "header": { "invoice_number": "INV-1", "sale_date": "2024-03-15", "customer_name": "Patil" },
//!   "items": [ { "item_id": 1, "item_name": "Sand", "quantity": 2, "unit_price": 50 } ],
//!   "discount": 5,
//!   "gst": 5,
//!   "payment": { "cash_received": 200, "payment_mode": "Cash" }
//! }
//! ```
//!
//! `gst` is a rate for sales and purchases and an amount for bills.

use crate::submit::TransactionHeader;
use crate::{ClientError, ClientResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::billing::{GstBase, LineItemInput, PaymentInput, TransactionDraft, TransactionKind};
use shared::error::AppResult;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftFile {
    pub kind: TransactionKind,
    pub header: serde_json::Value,
    #[serde(default)]
    pub items: Vec<LineItemInput>,
    #[serde(default)]
    pub discount: Decimal,
    #[serde(default)]
    pub gst: Decimal,
    #[serde(default)]
    pub gst_base: GstBase,
    #[serde(default)]
    pub payment: PaymentInput,
}

impl DraftFile {
    pub fn from_json(text: &str) -> ClientResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> ClientResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Replay the file's inputs into a fresh draft.
    pub fn to_draft(&self) -> AppResult<TransactionDraft> {
        let mut draft = TransactionDraft::new(self.kind);
        for (index, item) in self.items.iter().enumerate() {
            draft
                .add_item(item.clone())
                .map_err(|e| e.with_detail("line", index + 1))?;
        }
        draft.set_discount(self.discount)?;
        match self.kind {
            TransactionKind::Sale | TransactionKind::Purchase => draft.set_gst_percentage(self.gst)?,
            TransactionKind::Bill => draft.set_gst_amount(self.gst)?,
        }
        draft.set_gst_base(self.gst_base);
        draft.set_cash_received(self.payment.cash_received)?;
        draft.set_online_received(self.payment.online_received)?;
        draft.set_bank(self.payment.bank_id);
        draft.set_payment_mode(self.payment.payment_mode);
        Ok(draft)
    }

    /// Typed header for the file's kind
    pub fn header(&self) -> ClientResult<TransactionHeader> {
        let value = self.header.clone();
        let header = match self.kind {
            TransactionKind::Sale => TransactionHeader::Sale(serde_json::from_value(value)?),
            TransactionKind::Purchase => {
                TransactionHeader::Purchase(serde_json::from_value(value)?)
            }
            TransactionKind::Bill => TransactionHeader::Bill(serde_json::from_value(value)?),
        };
        Ok(header)
    }

    /// Draft and header together, as the submit command needs them
    pub fn load(&self) -> ClientResult<(TransactionHeader, TransactionDraft)> {
        let header = self.header()?;
        let draft = self.to_draft().map_err(ClientError::Validation)?;
        Ok((header, draft))
    }
}
