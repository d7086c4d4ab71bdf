mod common;

use chrono::NaiveDate;
use desk_client::api::{auth, bills, master, payments, sales};
use desk_client::{
    ClientConfig, ClientError, HttpClient, LoginRequest, NetworkHttpClient, TransactionService,
};
use rust_decimal_macros::dec;
use shared::billing::{LineItemInput, PaymentMode, TransactionDraft, TransactionKind};
use shared::models::{PaymentReceipt, SaleHeader};
use shared::response::PageQuery;

async fn logged_in_client() -> (NetworkHttpClient, common::SharedState) {
    let (base_url, state) = common::spawn_server().await;
    let mut client = NetworkHttpClient::new(&ClientConfig::new(base_url)).unwrap();
    auth::login(&mut client, &LoginRequest::new("owner@desk.in", common::PASSWORD))
        .await
        .unwrap();
    (client, state)
}

fn draft() -> TransactionDraft {
    let mut draft = TransactionDraft::new(TransactionKind::Sale);
    draft
        .add_item(LineItemInput {
            item_id: Some(1),
            item_name: "Sand".into(),
            unit: Some("brass".into()),
            quantity: dec!(2),
            unit_price: dec!(3500),
        })
        .unwrap();
    draft.set_gst_percentage(dec!(5)).unwrap();
    draft.set_cash_received(dec!(7000)).unwrap();
    draft
}

fn header(invoice_number: &str) -> SaleHeader {
    SaleHeader {
        invoice_number: invoice_number.into(),
        sale_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        customer_name: "Patil".into(),
        customer_contact: Some("98200 00000".into()),
        vehicle_no: None,
        remarks: Some("site 4".into()),
    }
}

#[tokio::test]
async fn test_login_stores_token() {
    let (client, _) = logged_in_client().await;
    assert_eq!(client.token(), Some(common::TOKEN));
}

#[tokio::test]
async fn test_login_failure_message() {
    let (base_url, _) = common::spawn_server().await;
    let mut client = NetworkHttpClient::new(&ClientConfig::new(base_url)).unwrap();
    let err = auth::login(&mut client, &LoginRequest::new("owner@desk.in", "wrong-pass"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid credentials");
    assert!(client.token().is_none());
}

#[tokio::test]
async fn test_login_validated_locally() {
    let (base_url, _) = common::spawn_server().await;
    let mut client = NetworkHttpClient::new(&ClientConfig::new(base_url)).unwrap();
    let err = auth::login(&mut client, &LoginRequest::new("owner", "secret1"))
        .await
        .unwrap_err();
    assert!(err.is_validation());
}

#[tokio::test]
async fn test_submit_sale_over_network() {
    let (client, state) = logged_in_client().await;
    let service = TransactionService::new(client);
    let mut draft = draft();

    let outcome = service.submit_sale(&header("INV-7"), &mut draft).await.unwrap();
    assert_eq!(outcome.message(), "Saved");
    assert!(draft.is_empty());

    let posted = state.posted.lock().unwrap();
    let (collection, body) = &posted[0];
    assert_eq!(collection, "sales");
    assert_eq!(body["invoice_number"], "INV-7");
    assert_eq!(body["sale_date"], "2024-03-15");
    assert_eq!(body["final_amount"], 7350.0);
    assert_eq!(body["outstanding"], 350.0);
    assert_eq!(body["remarks"], "site 4");
    assert_eq!(body["items"][0]["sale_price"], 3500.0);
}

#[tokio::test]
async fn test_rejected_sale_keeps_draft() {
    let (client, state) = logged_in_client().await;
    let service = TransactionService::new(client);
    let mut draft = draft();
    let before = draft.clone();

    let err = service
        .submit_sale(&header(common::DUPLICATE_REFERENCE), &mut draft)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "DUP-1 already exists");
    assert_eq!(draft, before);
    assert!(state.posted.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_token_is_rejected() {
    let (base_url, _) = common::spawn_server().await;
    let service = TransactionService::new(NetworkHttpClient::new(&ClientConfig::new(base_url)).unwrap());
    let mut draft = draft();

    let err = service.submit_sale(&header("INV-8"), &mut draft).await.unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 401, .. }));
    assert!(!draft.is_empty());
}

#[tokio::test]
async fn test_list_sales_page() {
    let (client, _) = logged_in_client().await;
    let list = sales::list(&client, PageQuery::new(2, 10)).await.unwrap();
    assert_eq!(list.data.len(), 1);
    assert_eq!(list.data[0].outstanding, dec!(36.5));
    assert_eq!(list.page_count(10), 2);
}

#[tokio::test]
async fn test_get_bill() {
    let (client, _) = logged_in_client().await;
    let bill = bills::get(&client, 3).await.unwrap();
    assert_eq!(bill.id, 3);
    assert_eq!(bill.final_amount, dec!(1180));

    let err = bills::get(&client, 404).await.unwrap_err();
    assert_eq!(err.to_string(), "Bill not found");
}

#[tokio::test]
async fn test_items_filtered_by_kind() {
    let (client, _) = logged_in_client().await;
    let all = master::list_items(&client).await.unwrap();
    assert_eq!(all.len(), 3);

    let selling = master::items_for(&client, TransactionKind::Sale).await.unwrap();
    assert_eq!(selling.len(), 1);
    assert_eq!(selling[0].item_name, "Sand");

    let purchase = master::items_for(&client, TransactionKind::Purchase).await.unwrap();
    assert_eq!(purchase[0].item_name, "Diesel");
}

#[tokio::test]
async fn test_pick_item_prefills_line() {
    let (client, _) = logged_in_client().await;

    let line = master::pick_item(&client, TransactionKind::Sale, 1, dec!(2)).await.unwrap();
    assert_eq!(line.item_name, "Sand");
    assert_eq!(line.unit.as_deref(), Some("brass"));
    assert_eq!(line.unit_price, dec!(3500));

    let mut draft = TransactionDraft::new(TransactionKind::Sale);
    draft.add_item(line).unwrap();
    assert_eq!(draft.sub_total(), dec!(7000));

    // Diesel is a purchase item
    let err = master::pick_item(&client, TransactionKind::Sale, 2, dec!(1)).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)));
}

#[tokio::test]
async fn test_receipts_route_by_counterparty() {
    let (client, state) = logged_in_client().await;

    let rows = payments::sales_outstanding(&client).await.unwrap();
    assert_eq!(rows[0].customer_name, "Patil");

    let receipt = PaymentReceipt::from_customer("Patil", dec!(1250), PaymentMode::Online, Some(2));
    let resp = payments::receive(&client, &receipt).await.unwrap();
    assert_eq!(resp.message(), Some("Payment recorded"));

    let receipt = PaymentReceipt::to_supplier("Shree", dec!(300), PaymentMode::Cash, Some(2));
    payments::receive(&client, &receipt).await.unwrap();

    let posted = state.posted.lock().unwrap();
    assert_eq!(posted[0].0, "payments/receive");
    assert_eq!(posted[0].1["bank_id"], 2);
    assert_eq!(posted[1].0, "payments/purchase-receive");
    assert!(posted[1].1["bank_id"].is_null());
    assert_eq!(posted[1].1["supplier_name"], "Shree");
}

#[tokio::test]
async fn test_invalid_receipt_not_sent() {
    let (client, state) = logged_in_client().await;
    let receipt = PaymentReceipt::from_customer("Patil", dec!(100), PaymentMode::Online, None);
    let err = payments::receive(&client, &receipt).await.unwrap_err();
    assert!(err.is_validation());
    assert!(state.posted.lock().unwrap().is_empty());
}
