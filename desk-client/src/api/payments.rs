//! Outstanding balances, payment receipts and where the money sits

use crate::{ClientError, ClientResult, HttpClient};
use shared::error::AppError;
use shared::models::{
    BankBalance, CashSummary, Counterparty, PaymentReceipt, PurchaseOutstanding, SalesOutstanding,
};
use shared::response::{DataResponse, ListResponse, MutationResponse};

pub async fn sales_outstanding<C: HttpClient>(client: &C) -> ClientResult<Vec<SalesOutstanding>> {
    let resp: ListResponse<SalesOutstanding> = client.get("payments/sales-outstanding").await?;
    Ok(resp.data)
}

pub async fn purchase_outstanding<C: HttpClient>(
    client: &C,
) -> ClientResult<Vec<PurchaseOutstanding>> {
    let resp: ListResponse<PurchaseOutstanding> =
        client.get("payments/purchase-outstanding").await?;
    Ok(resp.data)
}

/// Record a receipt against a customer's or supplier's balance.
///
/// The endpoint follows the receipt's counterparty.
pub async fn receive<C: HttpClient>(
    client: &C,
    receipt: &PaymentReceipt,
) -> ClientResult<MutationResponse> {
    receipt.validate()?;
    let path = match receipt.counterparty() {
        Some(Counterparty::Customer) => "payments/receive",
        Some(Counterparty::Supplier) => "payments/purchase-receive",
        None => return Err(ClientError::Validation(AppError::new(
            shared::ErrorCode::PartyRequired,
        ))),
    };
    tracing::info!(
        path,
        amount = %receipt.amount,
        payment_type = %receipt.payment_type,
        "Recording payment"
    );
    client.post(path, receipt).await
}

pub async fn cash_summary<C: HttpClient>(client: &C) -> ClientResult<CashSummary> {
    let resp: DataResponse<CashSummary> = client.get("payments/cash-summary").await?;
    Ok(resp.data)
}

/// Balance of every bank account, including online receipts
pub async fn bank_balances<C: HttpClient>(client: &C) -> ClientResult<Vec<BankBalance>> {
    let resp: ListResponse<BankBalance> = client.get("banks/balances").await?;
    Ok(resp.data)
}
