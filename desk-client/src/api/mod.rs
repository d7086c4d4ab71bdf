//! Typed wrappers over the persistence API endpoints
//!
//! Each function takes any [`HttpClient`](crate::HttpClient), so tests can
//! substitute an in-memory client.

pub mod auth;
pub mod balances;
pub mod bills;
pub mod director_loans;
pub mod expenses;
pub mod machinery;
pub mod master;
pub mod payments;
pub mod purchases;
pub mod sales;

use shared::TransactionKind;

/// Collection path for a transaction kind
pub fn transaction_path(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Sale => "sales",
        TransactionKind::Purchase => "purchase",
        TransactionKind::Bill => "bill",
    }
}
