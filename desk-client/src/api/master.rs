//! Master data API (items, parties, banks, company)

use crate::{ClientError, ClientResult, HttpClient};
use rust_decimal::Decimal;
use shared::billing::LineItemInput;
use shared::models::{
    Bank, BankCreate, Company, CompanyCreate, Item, ItemCreate, Party, PartyCreate, PartyType,
};
use shared::response::{ListResponse, MutationResponse};
use shared::TransactionKind;

const ITEM_PATH: &str = "master/item";
const PARTY_PATH: &str = "master/party";
const BANK_PATH: &str = "master/bank";
const COMPANY_PATH: &str = "master/company";

// ========== Items ==========

pub async fn list_items<C: HttpClient>(client: &C) -> ClientResult<Vec<Item>> {
    let resp: ListResponse<Item> = client.get(ITEM_PATH).await?;
    Ok(resp.data)
}

/// Items that may be picked for a transaction of `kind`
pub async fn items_for<C: HttpClient>(client: &C, kind: TransactionKind) -> ClientResult<Vec<Item>> {
    let mut items = list_items(client).await?;
    items.retain(|it| it.is_offered_for(kind));
    Ok(items)
}

/// Pick item `item_id` for a `kind` draft: a line at the item's list price.
///
/// Items not offered for `kind` are treated as missing.
pub async fn pick_item<C: HttpClient>(
    client: &C,
    kind: TransactionKind,
    item_id: i64,
    quantity: Decimal,
) -> ClientResult<LineItemInput> {
    let items = items_for(client, kind).await?;
    let item = items
        .iter()
        .find(|it| it.id == item_id)
        .ok_or_else(|| ClientError::NotFound(format!("item {item_id} for {kind}")))?;
    Ok(LineItemInput::from_item(item).with_quantity(quantity))
}

pub async fn create_item<C: HttpClient>(client: &C, item: &ItemCreate) -> ClientResult<MutationResponse> {
    item.validate()?;
    client.post(ITEM_PATH, item).await
}

pub async fn update_item<C: HttpClient>(
    client: &C,
    id: i64,
    item: &ItemCreate,
) -> ClientResult<MutationResponse> {
    item.validate()?;
    client.put(&format!("{ITEM_PATH}/{id}"), item).await
}

pub async fn delete_item<C: HttpClient>(client: &C, id: i64) -> ClientResult<MutationResponse> {
    client.delete(&format!("{ITEM_PATH}/{id}")).await
}

// ========== Parties ==========

pub async fn list_parties<C: HttpClient>(client: &C) -> ClientResult<Vec<Party>> {
    let resp: ListResponse<Party> = client.get(PARTY_PATH).await?;
    Ok(resp.data)
}

/// Parties of one type (customers for sales, suppliers for purchases)
pub async fn parties_of<C: HttpClient>(client: &C, party_type: PartyType) -> ClientResult<Vec<Party>> {
    let mut parties = list_parties(client).await?;
    parties.retain(|p| p.party_type == Some(party_type));
    Ok(parties)
}

pub async fn create_party<C: HttpClient>(
    client: &C,
    party: &PartyCreate,
) -> ClientResult<MutationResponse> {
    party.validate()?;
    client.post(PARTY_PATH, party).await
}

pub async fn update_party<C: HttpClient>(
    client: &C,
    id: i64,
    party: &PartyCreate,
) -> ClientResult<MutationResponse> {
    party.validate()?;
    client.put(&format!("{PARTY_PATH}/{id}"), party).await
}

pub async fn delete_party<C: HttpClient>(client: &C, id: i64) -> ClientResult<MutationResponse> {
    client.delete(&format!("{PARTY_PATH}/{id}")).await
}

// ========== Banks ==========

pub async fn list_banks<C: HttpClient>(client: &C) -> ClientResult<Vec<Bank>> {
    let resp: ListResponse<Bank> = client.get(BANK_PATH).await?;
    Ok(resp.data)
}

pub async fn create_bank<C: HttpClient>(client: &C, bank: &BankCreate) -> ClientResult<MutationResponse> {
    bank.validate()?;
    client.post(BANK_PATH, bank).await
}

pub async fn delete_bank<C: HttpClient>(client: &C, id: i64) -> ClientResult<MutationResponse> {
    client.delete(&format!("{BANK_PATH}/{id}")).await
}

// ========== Company ==========

pub async fn list_companies<C: HttpClient>(client: &C) -> ClientResult<Vec<Company>> {
    let resp: ListResponse<Company> = client.get(COMPANY_PATH).await?;
    Ok(resp.data)
}

pub async fn create_company<C: HttpClient>(
    client: &C,
    company: &CompanyCreate,
) -> ClientResult<MutationResponse> {
    company.validate()?;
    client.post(COMPANY_PATH, company).await
}

pub async fn update_company<C: HttpClient>(
    client: &C,
    id: i64,
    company: &CompanyCreate,
) -> ClientResult<MutationResponse> {
    company.validate()?;
    client.put(&format!("{COMPANY_PATH}/{id}"), company).await
}

pub async fn delete_company<C: HttpClient>(client: &C, id: i64) -> ClientResult<MutationResponse> {
    client.delete(&format!("{COMPANY_PATH}/{id}")).await
}
