//! Company Model

use crate::error::AppResult;
use crate::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
    validate_required_text,
};
use serde::{Deserialize, Serialize};

/// Company profile printed on bills
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub zipcode: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default, alias = "contactPerson")]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub gstin: Option<String>,
}

/// Create / update company payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyCreate {
    pub name: String,
    pub address: Option<String>,
    pub zipcode: Option<String>,
    pub contact: Option<String>,
    pub contact_person: Option<String>,
    pub gstin: Option<String>,
}

impl CompanyCreate {
    pub fn validate(&self) -> AppResult<()> {
        validate_required_text(&self.name, "name", MAX_NAME_LEN)?;
        validate_optional_text(&self.address, "address", MAX_ADDRESS_LEN)?;
        validate_optional_text(&self.zipcode, "zipcode", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&self.contact, "contact", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&self.contact_person, "contact_person", MAX_NAME_LEN)?;
        validate_optional_text(&self.gstin, "gstin", MAX_SHORT_TEXT_LEN)
    }
}
