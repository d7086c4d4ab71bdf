//! Data models
//!
//! Master data, payments, ledgers and the per-kind transaction records exchanged
//! with the persistence API. All IDs are `i64`.

pub mod balance;
pub mod bank;
pub mod bill;
pub mod company;
pub mod director_loan;
pub mod expense;
pub mod item;
pub mod machinery;
pub mod party;
pub mod payment;
pub mod purchase;
pub mod record;
pub mod sale;

// Re-exports
pub use balance::*;
pub use bank::*;
pub use bill::*;
pub use company::*;
pub use director_loan::*;
pub use expense::*;
pub use item::*;
pub use machinery::*;
pub use party::*;
pub use payment::*;
pub use purchase::*;
pub use record::TransactionRecord;
pub use sale::*;
