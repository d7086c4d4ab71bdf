//! Shared types for Trade Desk
//!
//! Error system, master-data and transaction models, response envelopes
//! and the billing core used by the API client and the `desk` tool.

pub mod billing;
pub mod client;
pub mod error;
pub mod models;
pub mod response;
pub mod validation;

// Re-exports
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};

pub use billing::{
    DraftSummary, LineItem, LineItemInput, PaymentInput, PaymentMode, Settlement,
    TransactionDraft, TransactionKind, TransactionTotals,
};
pub use error::{AppError, AppResult, ErrorCode};
pub use response::{ListResponse, MutationResponse, PageQuery};
