//! Director loans API

use crate::{ClientResult, HttpClient};
use shared::models::{DirectorLoan, DirectorLoanCreate};
use shared::response::{ListResponse, MutationResponse};

pub async fn list<C: HttpClient>(client: &C) -> ClientResult<Vec<DirectorLoan>> {
    let resp: ListResponse<DirectorLoan> = client.get("director-loan/list").await?;
    Ok(resp.data)
}

pub async fn create<C: HttpClient>(
    client: &C,
    loan: &DirectorLoanCreate,
) -> ClientResult<MutationResponse> {
    loan.validate()?;
    tracing::info!(
        director = %loan.director_name,
        amount = %loan.amount,
        direction = ?loan.transaction_type,
        "Recording director loan"
    );
    client.post("director-loan/add", loan).await
}
