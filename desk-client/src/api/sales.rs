//! Sales API

use crate::{ClientResult, HttpClient};
use shared::models::{Sale, SaleCreate};
use shared::response::{DataResponse, ListResponse, MutationResponse, PageQuery};

pub async fn list<C: HttpClient>(client: &C, page: PageQuery) -> ClientResult<ListResponse<Sale>> {
    client
        .get(&format!("sales?page={}&limit={}", page.page, page.limit))
        .await
}

pub async fn get<C: HttpClient>(client: &C, id: i64) -> ClientResult<Sale> {
    let resp: DataResponse<Sale> = client.get(&format!("sales/{id}")).await?;
    Ok(resp.data)
}

pub async fn create<C: HttpClient>(client: &C, sale: &SaleCreate) -> ClientResult<MutationResponse> {
    client.post("sales", sale).await
}

pub async fn update<C: HttpClient>(
    client: &C,
    id: i64,
    sale: &SaleCreate,
) -> ClientResult<MutationResponse> {
    client.put(&format!("sales/{id}"), sale).await
}

pub async fn delete<C: HttpClient>(client: &C, id: i64) -> ClientResult<MutationResponse> {
    client.delete(&format!("sales/{id}")).await
}
