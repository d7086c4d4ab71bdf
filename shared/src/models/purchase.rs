//! Purchase Model

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

/// Header fields of a purchase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseHeader {
    pub purchase_number: String,
    pub purchase_date: NaiveDate,
    /// Party id when the supplier was picked from the master list
    #[serde(default)]
    pub supplier_id: Option<i64>,
    pub supplier_name: String,
    #[serde(default)]
    pub supplier_contact: Option<String>,
    #[serde(default)]
    pub supplier_address: Option<String>,
    #[serde(default)]
    pub vehicle_no: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
}

impl PurchaseHeader {
    pub fn validate(&self) -> AppResult<()> {
        validate_required_text(&self.purchase_number, "purchase_number", MAX_REFERENCE_LEN)?;
        validate_required_text(&self.supplier_name, "supplier_name", MAX_NAME_LEN)?;
        validate_optional_text(&self.supplier_contact, "supplier_contact", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&self.supplier_address, "supplier_address", MAX_ADDRESS_LEN)?;
        validate_optional_text(&self.vehicle_no, "vehicle_no", MAX_REFERENCE_LEN)?;
        validate_optional_text(&self.remarks, "remarks", MAX_NOTE_LEN)
    }
}

/// Purchase line as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseItem {
    pub item_id: i64,
    pub item_name: String,
    pub unit: Option<String>,
    pub quantity: Decimal,
    pub purchase_price: Decimal,
}

/// Create / update purchase payload
///
/// The collaborator names the settlement columns `*_paid` on this side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseCreate {
    pub purchase_number: String,
    pub purchase_date: NaiveDate,
    pub supplier_id: Option<i64>,
    pub supplier_name: String,
    pub supplier_contact: Option<String>,
    pub supplier_address: Option<String>,
    pub vehicle_no: Option<String>,
    pub sub_total: Decimal,
    pub discount_amount: Decimal,
    pub gst_amount: Decimal,
    pub final_amount: Decimal,
    pub cash_paid: Decimal,
    pub online_paid: Decimal,
    pub amount_paid: Decimal,
    pub outstanding: Decimal,
    pub bank_id: Option<i64>,
    pub payment_type: PaymentMode,
    pub remarks: String,
    pub items: Vec<PurchaseItem>,
}

impl PurchaseCreate {
    pub fn from_draft(header: &PurchaseHeader, draft: &TransactionDraft) -> AppResult<Self> {
        header.validate()?;
        let amounts = compose_amounts(draft, TransactionKind::Purchase)?;

        Ok(Self {
            purchase_number: header.purchase_number.trim().to_string(),
            purchase_date: header.purchase_date,
            supplier_id: header.supplier_id.filter(|id| *id > 0),
            supplier_name: header.supplier_name.trim().to_string(),
            supplier_contact: normalize_optional_text(header.supplier_contact.as_deref()),
            supplier_address: normalize_optional_text(header.supplier_address.as_deref()),
            vehicle_no: normalize_optional_text(header.vehicle_no.as_deref()),
            sub_total: amounts.totals.sub_total,
            discount_amount: amounts.totals.discount_amount,
            gst_amount: amounts.totals.gst_amount,
            final_amount: amounts.totals.final_amount,
            cash_paid: amounts.cash,
            online_paid: amounts.online,
            amount_paid: amounts.received,
            outstanding: amounts.outstanding,
            bank_id: amounts.bank_id,
            payment_type: amounts.payment_type,
            remarks: remarks_or_blank(&header.remarks),
            items: draft
                .items()
                .map(|it| PurchaseItem {
                    item_id: it.item_id,
                    item_name: it.item_name.clone(),
                    unit: it.unit.clone(),
                    quantity: it.quantity,
                    purchase_price: it.unit_price,
                })
                .collect(),
        })
    }
}

impl TransactionRecord for PurchaseCreate {
    const KIND: TransactionKind = TransactionKind::Purchase;

    fn reference(&self) -> &str {
        &self.purchase_number
    }

    fn final_amount(&self) -> Decimal {
        self.final_amount
    }

    fn outstanding(&self) -> Decimal {
        self.outstanding
    }
}

/// Purchase entity (list / detail views)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    pub id: i64,
    pub purchase_number: String,
    #[serde(default)]
    pub purchase_date: Option<String>,
    #[serde(default)]
    pub supplier_id: Option<i64>,
    #[serde(default)]
    pub supplier_name: Option<String>,
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
    pub cash_paid: Decimal,
    #[serde(default)]
    pub online_paid: Decimal,
    #[serde(default)]
    pub amount_paid: Decimal,
    #[serde(default)]
    pub outstanding: Decimal,
    #[serde(default)]
    pub bank_id: Option<i64>,
    #[serde(default)]
    pub payment_type: Option<PaymentMode>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub items: Vec<PurchaseItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::billing::LineItemInput;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_draft_uses_paid_columns() {
        let header = PurchaseHeader {
            purchase_number: "PO-7".into(),
            purchase_date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            supplier_id: Some(0),
            supplier_name: "Shree Traders".into(),
            supplier_contact: None,
            supplier_address: Some("Pune".into()),
            vehicle_no: None,
            remarks: Some(" diesel ".into()),
        };
        let mut draft = TransactionDraft::new(TransactionKind::Purchase);
        draft
            .add_item(LineItemInput {
                item_id: Some(12),
                item_name: "Diesel".into(),
                unit: Some("ltr".into()),
                quantity: dec!(100),
                unit_price: dec!(89.625),
            })
            .unwrap();
        draft.set_gst_percentage(dec!(18)).unwrap();
        draft.set_cash_received(dec!(5000)).unwrap();
        draft.set_online_received(dec!(1000)).unwrap();
        draft.set_bank(Some(2));
        draft.set_payment_mode(PaymentMode::Online);

        let record = PurchaseCreate::from_draft(&header, &draft).unwrap();
        assert_eq!(record.supplier_id, None);
        assert_eq!(record.sub_total, dec!(8962.50));
        assert_eq!(record.gst_amount, dec!(1613.25));
        assert_eq!(record.final_amount, dec!(10575.75));
        assert_eq!(record.amount_paid, dec!(6000));
        assert_eq!(record.outstanding, dec!(4575.75));
        assert_eq!(record.bank_id, Some(2));
        assert_eq!(record.remarks, "diesel");
        assert_eq!(record.items[0].unit.as_deref(), Some("ltr"));

        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("cash_paid").is_some());
        assert!(json.get("cash_received").is_none());
        assert_eq!(json["items"][0]["purchase_price"], 89.625);
    }
}
