//! Cash and bank balances
//!
//! Read-only views; the API computes every figure.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Company-wide cash and online balance
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TotalBalances {
    #[serde(default)]
    pub cash_balance: Decimal,
    #[serde(default)]
    pub online_balance: Decimal,
}

impl TotalBalances {
    pub fn total(&self) -> Decimal {
        self.cash_balance + self.online_balance
    }
}

/// Cash in hand
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CashBalance {
    #[serde(default, alias = "balance", alias = "cash")]
    pub cash_balance: Decimal,
}

/// One movement in the cash ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashLedgerEntry {
    #[serde(default, alias = "date")]
    pub entry_date: Option<String>,
    #[serde(default, alias = "description", alias = "source")]
    pub particulars: Option<String>,
    #[serde(default, alias = "cash_in", alias = "credit")]
    pub inflow: Decimal,
    #[serde(default, alias = "cash_out", alias = "debit")]
    pub outflow: Decimal,
    #[serde(default)]
    pub balance: Option<Decimal>,
}

impl CashLedgerEntry {
    /// Inflow minus outflow
    pub fn net(&self) -> Decimal {
        self.inflow - self.outflow
    }
}

/// Cash received against sales and paid against purchases
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CashSummary {
    #[serde(default, alias = "cash_received", alias = "total_received")]
    pub received: Decimal,
    #[serde(default, alias = "cash_paid", alias = "total_paid")]
    pub paid: Decimal,
    #[serde(default, alias = "cash_balance")]
    pub balance: Decimal,
}

/// Per-bank balance row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankBalance {
    pub bank_id: i64,
    pub bank_name: String,
    #[serde(default)]
    pub account_no: Option<String>,
    #[serde(default)]
    pub online_received: Decimal,
    #[serde(default)]
    pub account_balance: Decimal,
}
