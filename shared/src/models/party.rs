//! Party Model (customers and suppliers)

use crate::error::AppResult;
use crate::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
    validate_required_text,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartyType {
    Customer,
    Supplier,
}

/// Party entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Party {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub zipcode: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub party_type: Option<PartyType>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub gstin: Option<String>,
}

impl Party {
    pub fn is_customer(&self) -> bool {
        self.party_type == Some(PartyType::Customer)
    }

    pub fn is_supplier(&self) -> bool {
        self.party_type == Some(PartyType::Supplier)
    }
}

/// Create / update party payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartyCreate {
    pub name: String,
    pub address: Option<String>,
    pub zipcode: Option<String>,
    pub contact: Option<String>,
    pub contact_person: Option<String>,
    pub party_type: PartyType,
    pub email: Option<String>,
    pub gstin: Option<String>,
}

impl PartyCreate {
    pub fn validate(&self) -> AppResult<()> {
        validate_required_text(&self.name, "name", MAX_NAME_LEN)?;
        validate_optional_text(&self.address, "address", MAX_ADDRESS_LEN)?;
        validate_optional_text(&self.zipcode, "zipcode", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&self.contact, "contact", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&self.contact_person, "contact_person", MAX_NAME_LEN)?;
        validate_optional_text(&self.email, "email", MAX_NAME_LEN)?;
        validate_optional_text(&self.gstin, "gstin", MAX_SHORT_TEXT_LEN)?;
        Ok(())
    }
}
