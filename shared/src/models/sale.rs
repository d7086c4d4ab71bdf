//! Sale Model

use super::record::{TransactionRecord, compose_amounts, remarks_or_blank};
use crate::billing::{PaymentMode, TransactionDraft, TransactionKind};
use crate::error::AppResult;
use crate::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_REFERENCE_LEN, MAX_SHORT_TEXT_LEN, normalize_optional_text,
    validate_optional_text, validate_required_text,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Header fields of a sale, entered alongside the lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleHeader {
    pub invoice_number: String,
    pub sale_date: NaiveDate,
    pub customer_name: String,
    #[serde(default)]
    pub customer_contact: Option<String>,
    #[serde(default)]
    pub vehicle_no: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
}

impl SaleHeader {
    pub fn validate(&self) -> AppResult<()> {
        validate_required_text(&self.invoice_number, "invoice_number", MAX_REFERENCE_LEN)?;
        validate_required_text(&self.customer_name, "customer_name", MAX_NAME_LEN)?;
        validate_optional_text(&self.customer_contact, "customer_contact", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&self.vehicle_no, "vehicle_no", MAX_REFERENCE_LEN)?;
        validate_optional_text(&self.remarks, "remarks", MAX_NOTE_LEN)
    }
}

/// Sale line as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleItem {
    pub item_id: i64,
    pub quantity: Decimal,
    pub sale_price: Decimal,
}

/// Create / update sale payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleCreate {
    pub invoice_number: String,
    pub sale_date: NaiveDate,
    pub customer_name: String,
    pub customer_contact: Option<String>,
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
    pub items: Vec<SaleItem>,
}

impl SaleCreate {
    pub fn from_draft(header: &SaleHeader, draft: &TransactionDraft) -> AppResult<Self> {
        header.validate()?;
        let amounts = compose_amounts(draft, TransactionKind::Sale)?;

        Ok(Self {
            invoice_number: header.invoice_number.trim().to_string(),
            sale_date: header.sale_date,
            customer_name: header.customer_name.trim().to_string(),
            customer_contact: normalize_optional_text(header.customer_contact.as_deref()),
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
                .map(|it| SaleItem {
                    item_id: it.item_id,
                    quantity: it.quantity,
                    sale_price: it.unit_price,
                })
                .collect(),
        })
    }
}

impl TransactionRecord for SaleCreate {
    const KIND: TransactionKind = TransactionKind::Sale;

    fn reference(&self) -> &str {
        &self.invoice_number
    }

    fn final_amount(&self) -> Decimal {
        self.final_amount
    }

    fn outstanding(&self) -> Decimal {
        self.outstanding
    }
}

/// Sale entity (list / detail views)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: i64,
    pub invoice_number: String,
    /// Date as returned by the server (may carry a time part)
    #[serde(default)]
    pub sale_date: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_contact: Option<String>,
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
    pub cash_received: Decimal,
    #[serde(default)]
    pub online_received: Decimal,
    #[serde(default)]
    pub amount_received: Decimal,
    #[serde(default)]
    pub outstanding: Decimal,
    #[serde(default)]
    pub bank_id: Option<i64>,
    #[serde(default)]
    pub payment_type: Option<PaymentMode>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub items: Vec<SaleItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::billing::LineItemInput;
    use crate::error::ErrorCode;
    use rust_decimal_macros::dec;

    fn header() -> SaleHeader {
        SaleHeader {
            invoice_number: " INV-101 ".into(),
            sale_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            customer_name: "Patil Constructions".into(),
            customer_contact: Some("".into()),
            vehicle_no: Some("MH12 AB 1234".into()),
            remarks: None,
        }
    }

    fn line(id: i64, qty: Decimal, price: Decimal) -> LineItemInput {
        LineItemInput {
            item_id: Some(id),
            item_name: format!("Item {id}"),
            unit: None,
            quantity: qty,
            unit_price: price,
        }
    }

    fn scenario_draft() -> TransactionDraft {
        let mut draft = TransactionDraft::new(TransactionKind::Sale);
        draft.add_item(line(1, dec!(2), dec!(50))).unwrap();
        draft.add_item(line(2, dec!(1), dec!(100))).unwrap();
        draft.add_item(line(3, dec!(3), dec!(10))).unwrap();
        draft.set_discount(dec!(5)).unwrap();
        draft.set_gst_percentage(dec!(5)).unwrap();
        draft.set_cash_received(dec!(200)).unwrap();
        draft
    }

    #[test]
    fn test_from_draft() {
        let record = SaleCreate::from_draft(&header(), &scenario_draft()).unwrap();
        assert_eq!(record.invoice_number, "INV-101");
        assert_eq!(record.customer_contact, None);
        assert_eq!(record.sub_total, dec!(230));
        assert_eq!(record.gst_amount, dec!(11.5));
        assert_eq!(record.final_amount, dec!(236.5));
        assert_eq!(record.amount_received, dec!(200));
        assert_eq!(record.outstanding, dec!(36.5));
        assert_eq!(record.bank_id, None);
        assert_eq!(record.payment_type, PaymentMode::Credit);
        assert_eq!(record.remarks, "");
        assert_eq!(record.items.len(), 3);
        assert_eq!(record.items[1].sale_price, dec!(100));
    }

    #[test]
    fn test_sub_paisa_inputs_keep_final_identity() {
        let mut draft = TransactionDraft::new(TransactionKind::Sale);
        draft.add_item(line(1, dec!(1), dec!(10.005))).unwrap();
        draft.set_discount(dec!(0.004)).unwrap();
        draft.set_cash_received(dec!(4.999)).unwrap();

        let record = SaleCreate::from_draft(&header(), &draft).unwrap();
        assert_eq!(record.sub_total, dec!(10.01));
        assert_eq!(record.discount_amount, dec!(0.00));
        assert_eq!(record.gst_amount, dec!(0));
        assert_eq!(record.final_amount, dec!(10.01));
        assert_eq!(
            record.final_amount,
            record.sub_total - record.discount_amount + record.gst_amount
        );
        assert_eq!(record.amount_received, dec!(5.00));
        assert_eq!(record.outstanding, dec!(5.01));
    }

    #[test]
    fn test_record_json_shape() {
        let record = SaleCreate::from_draft(&header(), &scenario_draft()).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["sale_date"], "2024-03-15");
        assert_eq!(json["final_amount"], 236.5);
        assert_eq!(json["payment_type"], "Credit");
        assert!(json["bank_id"].is_null());
        assert_eq!(json["items"][0]["item_id"], 1);
        assert!(json["items"][0].get("item_name").is_none());
    }

    #[test]
    fn test_empty_draft_rejected() {
        let draft = TransactionDraft::new(TransactionKind::Sale);
        let err = SaleCreate::from_draft(&header(), &draft).unwrap_err();
        assert_eq!(err.code, ErrorCode::TransactionEmpty);
    }

    #[test]
    fn test_header_required_fields() {
        let mut h = header();
        h.customer_name = "  ".into();
        let err = SaleCreate::from_draft(&h, &scenario_draft()).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
    }

    #[test]
    fn test_online_split_keeps_bank() {
        let mut draft = scenario_draft();
        draft.set_online_received(dec!(36.5)).unwrap();
        draft.set_bank(Some(4));
        let record = SaleCreate::from_draft(&header(), &draft).unwrap();
        assert_eq!(record.amount_received, dec!(236.5));
        assert_eq!(record.outstanding, dec!(0));
        assert_eq!(record.bank_id, Some(4));
    }

    #[test]
    fn test_wrong_kind_rejected() {
        let mut draft = TransactionDraft::new(TransactionKind::Purchase);
        draft.add_item(line(1, dec!(1), dec!(1))).unwrap();
        let err = SaleCreate::from_draft(&header(), &draft).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidRequest);
    }

    #[test]
    fn test_sale_list_row() {
        let sale: Sale = serde_json::from_str(
            r#"{"id":9,"invoice_number":"INV-9","sale_date":"2024-03-15T00:00:00.000Z","final_amount":236.5,"payment_type":"Cash"}"#,
        )
        .unwrap();
        assert_eq!(sale.final_amount, dec!(236.5));
        assert_eq!(sale.payment_type, Some(PaymentMode::Cash));
        assert!(sale.items.is_empty());
    }
}
