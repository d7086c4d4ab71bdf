//! Expenses API
//!
//! The expense list counts pages from zero.

use crate::{ClientResult, HttpClient};
use shared::models::{Expense, ExpenseCreate};
use shared::response::{ListResponse, MutationResponse, PageQuery, PagedBody};

/// Path for a 1-based page request
pub fn list_path(page: PageQuery) -> String {
    format!(
        "expense?page={}&limit={}",
        page.page.saturating_sub(1),
        page.limit
    )
}

pub async fn list<C: HttpClient>(client: &C, page: PageQuery) -> ClientResult<ListResponse<Expense>> {
    let body: PagedBody<Expense> = client.get(&list_path(page)).await?;
    Ok(body.into())
}

pub async fn create<C: HttpClient>(
    client: &C,
    expense: &ExpenseCreate,
) -> ClientResult<MutationResponse> {
    expense.validate()?;
    tracing::info!(
        category = %expense.expense_category,
        amount = %expense.amount,
        payment_type = %expense.payment_type,
        "Recording expense"
    );
    client.post("expense", expense).await
}

pub async fn delete<C: HttpClient>(client: &C, id: i64) -> ClientResult<MutationResponse> {
    client.delete(&format!("expense/{id}")).await
}
