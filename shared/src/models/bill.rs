//! Bill Model
//!
//! Bills carry a flat GST amount instead of a rate.

use super::record::{TransactionRecord, compose_amounts, remarks_or_blank};
use crate::billing::{PaymentMode, TransactionDraft, TransactionKind};
use crate::error::AppResult;
use crate::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_REFERENCE_LEN, MAX_SHORT_TEXT_LEN,
    normalize_optional_text, validate_optional_text, validate_required_text,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillHeader {
    pub bill_number: String,
    pub bill_date: NaiveDate,
    pub customer_name: String,
    #[serde(default)]
    pub customer_contact: Option<String>,
    #[serde(default)]
    pub customer_address: Option<String>,
    #[serde(default)]
    pub vehicle_no: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
}

impl BillHeader {
    pub fn validate(&self) -> AppResult<()> {
        validate_required_text(&self.bill_number, "bill_number", MAX_REFERENCE_LEN)?;
        validate_required_text(&self.customer_name, "customer_name", MAX_NAME_LEN)?;
        validate_optional_text(&self.customer_contact, "customer_contact", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&self.customer_address, "customer_address", MAX_ADDRESS_LEN)?;
        validate_optional_text(&self.vehicle_no, "vehicle_no", MAX_REFERENCE_LEN)?;
        validate_optional_text(&self.remarks, "remarks", MAX_NOTE_LEN)
    }
}

/// Bill line as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillItem {
    pub item_id: i64,
    pub item_name: String,
    pub unit: Option<String>,
    pub quantity: Decimal,
    pub sale_price: Decimal,
}

/// Create bill payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillCreate {
    pub bill_number: String,
    pub bill_date: NaiveDate,
    pub customer_name: String,
    pub customer_contact: Option<String>,
    pub customer_address: Option<String>,
    pub vehicle_no: Option<String>,
    pub sub_total: Decimal,
    pub discount_amount: Decimal,
    pub gst_amount: Decimal,
    pub final_amount: Decimal,
    pub cash_received: Decimal,
    pub online_received: Decimal,
    pub amount_received: Decimal,
    pub outstanding: Decimal,
    pub bank_id: Option<i64>,
    pub payment_type: PaymentMode,
    pub remarks: String,
    pub items: Vec<BillItem>,
}

impl BillCreate {
    pub fn from_draft(header: &BillHeader, draft: &TransactionDraft) -> AppResult<Self> {
        header.validate()?;
        let amounts = compose_amounts(draft, TransactionKind::Bill)?;

        Ok(Self {
            bill_number: header.bill_number.trim().to_string(),
            bill_date: header.bill_date,
            customer_name: header.customer_name.trim().to_string(),
            customer_contact: normalize_optional_text(header.customer_contact.as_deref()),
            customer_address: normalize_optional_text(header.customer_address.as_deref()),
            vehicle_no: normalize_optional_text(header.vehicle_no.as_deref()),
            sub_total: amounts.totals.sub_total,
            discount_amount: amounts.totals.discount_amount,
            gst_amount: amounts.totals.gst_amount,
            final_amount: amounts.totals.final_amount,
            cash_received: amounts.cash,
            online_received: amounts.online,
            amount_received: amounts.received,
            outstanding: amounts.outstanding,
            bank_id: amounts.bank_id,
            payment_type: amounts.payment_type,
            remarks: remarks_or_blank(&header.remarks),
            items: draft
                .items()
                .map(|it| BillItem {
                    item_id: it.item_id,
                    item_name: it.item_name.clone(),
                    unit: it.unit.clone(),
                    quantity: it.quantity,
                    sale_price: it.unit_price,
                })
                .collect(),
        })
    }
}

impl TransactionRecord for BillCreate {
    const KIND: TransactionKind = TransactionKind::Bill;

    fn reference(&self) -> &str {
        &self.bill_number
    }

    fn final_amount(&self) -> Decimal {
        self.final_amount
    }

    fn outstanding(&self) -> Decimal {
        self.outstanding
    }
}

/// Bill entity (list / detail views)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub id: i64,
    pub bill_number: String,
    #[serde(default)]
    pub bill_date: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_contact: Option<String>,
    #[serde(default)]
    pub customer_address: Option<String>,
    #[serde(default)]
    pub vehicle_no: Option<String>,
    #[serde(default)]
    pub sub_total: Decimal,
    #[serde(default)]
    pub discount_amount: Decimal,
    #[serde(default)]
    pub gst_amount: Decimal,
    #[serde(default)]
    pub final_amount: Decimal,
    #[serde(default)]
    pub outstanding: Decimal,
    #[serde(default)]
    pub payment_type: Option<PaymentMode>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub items: Vec<BillItem>,
}
