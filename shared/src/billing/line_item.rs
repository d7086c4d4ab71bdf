//! Line items and the subtotal aggregator

use crate::error::{AppError, AppResult, ErrorCode};
use crate::models::item::Item;
use crate::validation::{MAX_NAME_LEN, MAX_PRICE, MAX_QUANTITY, validate_non_negative, validate_positive};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A validated line of a transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub item_id: i64,
    pub item_name: String,
    #[serde(default)]
    pub unit: Option<String>,
    pub quantity: Decimal,
    pub unit_price: Decimal,
}

impl LineItem {
    /// `quantity × unit_price` at full precision
    pub fn amount(&self) -> Decimal {
        self.quantity * self.unit_price
    }
}

/// A line as entered, before validation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItemInput {
    /// `None` until an item is picked from the master list
    #[serde(default)]
    pub item_id: Option<i64>,
    #[serde(default)]
    pub item_name: String,
    #[serde(default)]
    pub unit: Option<String>,
    pub quantity: Decimal,
    #[serde(default)]
    pub unit_price: Decimal,
}

impl LineItemInput {
    /// Pre-fill a line from a master item: quantity 1 at the item's list price.
    pub fn from_item(item: &Item) -> Self {
        Self {
            item_id: Some(item.id),
            item_name: item.item_name.clone(),
            unit: item.unit.clone(),
            quantity: Decimal::ONE,
            unit_price: item.price.unwrap_or_default(),
        }
    }

    pub fn with_quantity(mut self, quantity: Decimal) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_unit_price(mut self, unit_price: Decimal) -> Self {
        self.unit_price = unit_price;
        self
    }

    /// Reject unselected items, non-positive quantities and negative prices.
    pub fn validate(self) -> AppResult<LineItem> {
        let item_id = match self.item_id {
            Some(id) if id > 0 => id,
            _ => return Err(AppError::new(ErrorCode::ItemNotSelected)),
        };
        validate_positive(self.quantity, "quantity", ErrorCode::InvalidQuantity, MAX_QUANTITY)?;
        validate_non_negative(self.unit_price, "unit_price", ErrorCode::InvalidPrice, MAX_PRICE)?;
        if self.item_name.len() > MAX_NAME_LEN {
            return Err(AppError::validation(format!(
                "item_name is too long ({} chars, max {MAX_NAME_LEN})",
                self.item_name.len()
            ))
            .with_detail("field", "item_name"));
        }

        Ok(LineItem {
            item_id,
            item_name: self.item_name.trim().to_string(),
            unit: crate::validation::normalize_optional_text(self.unit.as_deref()),
            quantity: self.quantity,
            unit_price: self.unit_price,
        })
    }
}

/// Sum of line amounts. Order independent and unrounded; empty input is zero.
pub fn sub_total<'a>(items: impl IntoIterator<Item = &'a LineItem>) -> Decimal {
    items.into_iter().map(LineItem::amount).sum()
}
