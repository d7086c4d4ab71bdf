//! Bill API

use crate::{ClientResult, HttpClient};
use shared::models::{Bill, BillCreate};
use shared::response::{DataResponse, ListResponse, MutationResponse};

pub async fn list<C: HttpClient>(client: &C) -> ClientResult<ListResponse<Bill>> {
    client.get("bill").await
}

pub async fn get<C: HttpClient>(client: &C, id: i64) -> ClientResult<Bill> {
    let resp: DataResponse<Bill> = client.get(&format!("bill/{id}")).await?;
    Ok(resp.data)
}

pub async fn create<C: HttpClient>(client: &C, bill: &BillCreate) -> ClientResult<MutationResponse> {
    client.post("bill", bill).await
}
