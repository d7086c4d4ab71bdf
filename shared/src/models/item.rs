//! Item Model

use crate::billing::TransactionKind;
use crate::error::{AppResult, ErrorCode};
use crate::validation::{
    MAX_NAME_LEN, MAX_PRICE, MAX_REFERENCE_LEN, MAX_SHORT_TEXT_LEN, validate_non_negative,
    validate_required_text,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which transactions an item is offered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemCategory {
    Selling,
    Purchase,
}

impl ItemCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Selling => "Selling",
            Self::Purchase => "Purchase",
        }
    }

    /// Lenient parse of the stored category; unknown or blank gives `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "Selling" => Some(Self::Selling),
            "Purchase" => Some(Self::Purchase),
            _ => None,
        }
    }
}

/// Item entity
///
/// The item master is free-form on the server, so `category` stays a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: i64,
    #[serde(default)]
    pub item_code: String,
    pub item_name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub price: Option<Decimal>,
}

impl Item {
    pub fn category_kind(&self) -> Option<ItemCategory> {
        self.category.as_deref().and_then(ItemCategory::parse)
    }

    /// Sales list Selling items, purchases list Purchase items, bills list all.
    pub fn is_offered_for(&self, kind: TransactionKind) -> bool {
        match kind {
            TransactionKind::Sale => self.category_kind() == Some(ItemCategory::Selling),
            TransactionKind::Purchase => self.category_kind() == Some(ItemCategory::Purchase),
            TransactionKind::Bill => true,
        }
    }
}

/// Create / update item payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemCreate {
    pub item_code: String,
    pub item_name: String,
    pub category: Option<ItemCategory>,
    pub unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
}

impl ItemCreate {
    pub fn validate(&self) -> AppResult<()> {
        validate_required_text(&self.item_code, "itemCode", MAX_REFERENCE_LEN)?;
        validate_required_text(&self.item_name, "itemName", MAX_NAME_LEN)?;
        validate_required_text(&self.unit, "unit", MAX_SHORT_TEXT_LEN)?;
        if let Some(price) = self.price {
            validate_non_negative(price, "price", ErrorCode::InvalidPrice, MAX_PRICE)?;
        }
        Ok(())
    }
}
