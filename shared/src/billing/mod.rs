//! Billing core
//!
//! Pure, synchronous calculation shared by sales, purchases and bills:
//!
//! - [`line_item`]: validated lines and the subtotal aggregator
//! - [`totals`]: discount and GST adjustment
//! - [`settlement`]: cash/online split and signed outstanding balance
//! - [`draft`]: one editing session that owns the inputs
//!
//! The only difference between transaction kinds is the GST entry mode
//! ([`TransactionKind::gst_mode`]).

pub mod draft;
pub mod line_item;
pub mod money;
pub mod settlement;
pub mod totals;


pub use draft::{DraftLine, DraftSummary, TransactionDraft, TransactionKind};
pub use line_item::{LineItem, LineItemInput, sub_total};
pub use money::{DECIMAL_PLACES, MONEY_TOLERANCE, money_eq, round_money};
pub use settlement::{PaymentInput, PaymentMode, Settlement, compute_settlement, validate_settlement};
pub use totals::{Adjustment, GstBase, GstInput, GstMode, TransactionTotals, compute_totals};
