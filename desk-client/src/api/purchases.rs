//! Purchase API

use crate::{ClientResult, HttpClient};
use shared::models::{Purchase, PurchaseCreate};
use shared::response::{DataResponse, ListResponse, MutationResponse, PageQuery};

pub async fn list<C: HttpClient>(
    client: &C,
    page: PageQuery,
) -> ClientResult<ListResponse<Purchase>> {
    client
        .get(&format!("purchase?page={}&limit={}", page.page, page.limit))
        .await
}

pub async fn get<C: HttpClient>(client: &C, id: i64) -> ClientResult<Purchase> {
    let resp: DataResponse<Purchase> = client.get(&format!("purchase/{id}")).await?;
    Ok(resp.data)
}

pub async fn create<C: HttpClient>(
    client: &C,
    purchase: &PurchaseCreate,
) -> ClientResult<MutationResponse> {
    client.post("purchase", purchase).await
}

pub async fn update<C: HttpClient>(
    client: &C,
    id: i64,
    purchase: &PurchaseCreate,
) -> ClientResult<MutationResponse> {
    client.put(&format!("purchase/{id}"), purchase).await
}

pub async fn delete<C: HttpClient>(client: &C, id: i64) -> ClientResult<MutationResponse> {
    client.delete(&format!("purchase/{id}")).await
}
