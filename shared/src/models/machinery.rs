//! Machinery and machine usage records

use crate::error::{AppError, AppResult, ErrorCode};
use crate::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_QUANTITY, MAX_REFERENCE_LEN, normalize_optional_text,
    validate_non_negative, validate_optional_text,
};
use chrono::{NaiveDate, NaiveTime};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Whether a machine is owned or hired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MachineOwnership {
    #[default]
    Own,
    Rented,
}

/// Machinery list row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Machinery {
    pub id: i64,
    #[serde(default)]
    pub date: Option<String>,
    pub machinery_name: String,
    #[serde(default)]
    pub machinery_no: Option<String>,
    #[serde(default)]
    pub machinery_type: MachineOwnership,
    #[serde(default)]
    pub remark: Option<String>,
}

/// Register machinery payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineryCreate {
    pub date: NaiveDate,
    pub machinery_name: String,
    pub machinery_no: String,
    pub machinery_type: MachineOwnership,
    pub remark: Option<String>,
}

impl MachineryCreate {
    pub fn new(
        machinery_name: impl Into<String>,
        machinery_no: impl Into<String>,
        machinery_type: MachineOwnership,
        date: NaiveDate,
    ) -> Self {
        Self {
            date,
            machinery_name: machinery_name.into(),
            machinery_no: machinery_no.into(),
            machinery_type,
            remark: None,
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.machinery_name.trim().is_empty() || self.machinery_no.trim().is_empty() {
            return Err(AppError::with_message(
                ErrorCode::RequiredField,
                "Machinery name and number are required",
            )
            .with_detail(
                "field",
                if self.machinery_name.trim().is_empty() {
                    "machinery_name"
                } else {
                    "machinery_no"
                },
            ));
        }
        if self.machinery_name.len() > MAX_NAME_LEN || self.machinery_no.len() > MAX_REFERENCE_LEN
        {
            return Err(AppError::validation("Machinery name or number is too long"));
        }
        validate_optional_text(&self.remark, "remark", MAX_NOTE_LEN)
    }
}

/// Machine usage list row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineRecord {
    pub id: i64,
    #[serde(default)]
    pub date: Option<String>,
    pub machinery_id: i64,
    #[serde(default)]
    pub machinery_name: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub total_hours: Decimal,
    #[serde(default)]
    pub fuel_intake: Decimal,
    #[serde(default)]
    pub units: Decimal,
    #[serde(default)]
    pub remark: Option<String>,
}

/// Log machine usage payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineRecordCreate {
    pub date: NaiveDate,
    pub machinery_id: i64,
    #[serde(with = "clock_time")]
    pub start_time: NaiveTime,
    #[serde(with = "clock_time")]
    pub end_time: NaiveTime,
    pub total_hours: Decimal,
    pub fuel_intake: Decimal,
    pub units: Decimal,
    pub remark: Option<String>,
}

impl MachineRecordCreate {
    pub fn new(machinery_id: i64, date: NaiveDate, start_time: NaiveTime, end_time: NaiveTime) -> Self {
        Self {
            date,
            machinery_id,
            start_time,
            end_time,
            total_hours: running_hours(start_time, end_time),
            fuel_intake: Decimal::ZERO,
            units: Decimal::ZERO,
            remark: None,
        }
    }

    pub fn with_usage(mut self, fuel_intake: Decimal, units: Decimal) -> Self {
        self.fuel_intake = fuel_intake;
        self.units = units;
        self
    }

    pub fn with_remark(mut self, remark: &str) -> Self {
        self.remark = normalize_optional_text(Some(remark));
        self
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.machinery_id <= 0 {
            return Err(AppError::required("machinery_id"));
        }
        validate_non_negative(self.fuel_intake, "fuel_intake", ErrorCode::InvalidQuantity, MAX_QUANTITY)?;
        validate_non_negative(self.units, "units", ErrorCode::InvalidQuantity, MAX_QUANTITY)?;
        validate_optional_text(&self.remark, "remark", MAX_NOTE_LEN)
    }
}

/// Hours between two clock times, to 2 dp; zero when `end` is not after `start`.
pub fn running_hours(start: NaiveTime, end: NaiveTime) -> Decimal {
    let minutes = (end - start).num_minutes();
    if minutes <= 0 {
        return Decimal::ZERO;
    }
    (Decimal::from(minutes) / Decimal::from(60))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// `HH:MM` on the wire; `HH:MM:SS` is accepted on input.
mod clock_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M:%S"))
            .map_err(serde::de::Error::custom)
    }
}
