//! Cash and bank balances

use crate::{ClientResult, HttpClient};
use shared::models::{CashBalance, CashLedgerEntry, TotalBalances};
use shared::response::{DataResponse, ListResponse};

/// Ledger rows fetched when no limit is given
pub const DEFAULT_LEDGER_LIMIT: u32 = 20;

pub async fn totals<C: HttpClient>(client: &C) -> ClientResult<TotalBalances> {
    let resp: DataResponse<TotalBalances> = client.get("balance/balances").await?;
    Ok(resp.data)
}

pub async fn cash<C: HttpClient>(client: &C) -> ClientResult<CashBalance> {
    let resp: DataResponse<CashBalance> = client.get("balances/cash").await?;
    Ok(resp.data)
}

/// Most recent cash movements, newest first as the API orders them.
pub async fn cash_ledger<C: HttpClient>(
    client: &C,
    limit: Option<u32>,
) -> ClientResult<Vec<CashLedgerEntry>> {
    let limit = limit.unwrap_or(DEFAULT_LEDGER_LIMIT).max(1);
    let resp: ListResponse<CashLedgerEntry> = client
        .get(&format!("balances/cash/ledger?limit={limit}"))
        .await?;
    Ok(resp.data)
}
