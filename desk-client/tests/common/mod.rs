//! Test helpers: an in-memory `HttpClient` and an axum mock of the API

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, Uri},
    routing::{delete, get, post},
};
use desk_client::{ClientError, ClientResult, HttpClient};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

pub const TOKEN: &str = "test-token";
pub const PASSWORD: &str = "secret1";
pub const DUPLICATE_REFERENCE: &str = "DUP-1";

// ==================== In-memory client ====================

/// A recorded call: method, path, body
pub type Call = (String, String, Value);

#[derive(Default)]
pub struct MockClient {
    calls: Mutex<Vec<Call>>,
    reply: Value,
    failure: Option<(u16, String)>,
    token: Option<String>,
}

impl MockClient {
    pub fn replying(reply: Value) -> Self {
        Self {
            reply,
            ..Default::default()
        }
    }

    pub fn failing(status: u16, message: &str) -> Self {
        Self {
            failure: Some((status, message.to_string())),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn respond<T: DeserializeOwned>(&self, method: &str, path: &str, body: Value) -> ClientResult<T> {
        self.calls
            .lock()
            .unwrap()
            .push((method.to_string(), path.to_string(), body));
        if let Some((status, message)) = &self.failure {
            return Err(ClientError::Api {
                status: *status,
                message: message.clone(),
            });
        }
        Ok(serde_json::from_value(self.reply.clone())?)
    }
}

#[async_trait]
impl HttpClient for MockClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.respond("GET", path, Value::Null)
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let body = serde_json::to_value(body)?;
        self.respond("POST", path, body)
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let body = serde_json::to_value(body)?;
        self.respond("PUT", path, body)
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.respond("DELETE", path, Value::Null)
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }
}

// ==================== Mock API server ====================

#[derive(Default)]
pub struct MockState {
    pub posted: Mutex<Vec<(String, Value)>>,
    /// Path and query of every ledger read
    pub requested: Mutex<Vec<String>>,
}

pub type SharedState = Arc<MockState>;

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {TOKEN}"))
}

fn unauthorized() -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "message": "No token, authorization denied" })),
    )
}

async fn login(Json(req): Json<Value>) -> (StatusCode, Json<Value>) {
    if req["password"] == PASSWORD {
        (
            StatusCode::OK,
            Json(json!({ "token": TOKEN, "user": { "id": 1, "name": "Asha" } })),
        )
    } else {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "msg": "Invalid credentials" })),
        )
    }
}

fn create_transaction(
    state: &MockState,
    collection: &str,
    headers: &HeaderMap,
    body: Value,
) -> (StatusCode, Json<Value>) {
    if !authorized(headers) {
        return unauthorized();
    }
    let reference = ["invoice_number", "purchase_number", "bill_number"]
        .iter()
        .find_map(|k| body[*k].as_str())
        .unwrap_or_default()
        .to_string();
    if reference == DUPLICATE_REFERENCE {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "msg": format!("{reference} already exists") })),
        );
    }
    let mut posted = state.posted.lock().unwrap();
    posted.push((collection.to_string(), body));
    (
        StatusCode::CREATED,
        Json(json!({ "message": "Saved", "id": posted.len() })),
    )
}

async fn create_sale(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    create_transaction(&state, "sales", &headers, body)
}

async fn create_purchase(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    create_transaction(&state, "purchase", &headers, body)
}

async fn create_bill(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    create_transaction(&state, "bill", &headers, body)
}

async fn list_sales(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return unauthorized();
    }
    (
        StatusCode::OK,
        Json(json!({
            "data": [
                { "id": 1, "invoice_number": "INV-1", "final_amount": 236.5, "outstanding": 36.5, "payment_type": "Credit" }
            ],
            "total": 11
        })),
    )
}

async fn get_bill(Path(id): Path<i64>) -> (StatusCode, Json<Value>) {
    if id == 404 {
        return (StatusCode::NOT_FOUND, Json(json!({ "msg": "Bill not found" })));
    }
    (
        StatusCode::OK,
        Json(json!({ "data": { "id": id, "bill_number": "B-1", "final_amount": 1180 } })),
    )
}

async fn list_items() -> Json<Value> {
    Json(json!({
        "data": [
            { "id": 1, "itemCode": "SND", "itemName": "Sand", "category": "Selling", "unit": "brass", "price": 3500 },
            { "id": 2, "itemCode": "DSL", "itemName": "Diesel", "category": "Purchase", "unit": "ltr" },
            { "id": 3, "itemCode": "MSC", "itemName": "Misc", "category": "" }
        ]
    }))
}

async fn sales_outstanding() -> Json<Value> {
    Json(json!({ "data": [ { "customer_name": "Patil", "total_sale": 5000, "outstanding": 1250 } ] }))
}

async fn receive(
    State(state): State<SharedState>,
    Path(route): Path<String>,
    Json(body): Json<Value>,
) -> Json<Value> {
    state.posted.lock().unwrap().push((format!("payments/{route}"), body));
    Json(json!({ "msg": "Payment recorded" }))
}

async fn register(Json(req): Json<Value>) -> (StatusCode, Json<Value>) {
    if req["email"] == "taken@desk.in" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "msg": "User already exists" })),
        );
    }
    (
        StatusCode::CREATED,
        Json(json!({ "msg": "Registered successfully" })),
    )
}

/// Store any posted ledger entry under its path without `/api/`.
async fn record_entry(
    State(state): State<SharedState>,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return unauthorized();
    }
    let path = uri.path().trim_start_matches("/api/").to_string();
    let mut posted = state.posted.lock().unwrap();
    posted.push((path, body));
    (
        StatusCode::CREATED,
        Json(json!({ "message": "Saved", "id": posted.len() })),
    )
}

fn remember(state: &MockState, uri: &Uri) {
    let seen = uri
        .path_and_query()
        .map(|pq| pq.as_str().trim_start_matches("/api/").to_string())
        .unwrap_or_default();
    state.requested.lock().unwrap().push(seen);
}

async fn list_expenses(State(state): State<SharedState>, uri: Uri) -> Json<Value> {
    remember(&state, &uri);
    Json(json!({
        "data": {
            "records": [
                { "id": 9, "expense_name": "Rent", "expense_category": "Rent & Utilities", "amount": 12000, "payment_type": "Online", "bank_id": 2 },
                { "id": 10, "expense_name": "Diesel", "expense_category": "Fuel", "amount": 4500.5, "payment_type": "Cash" }
            ],
            "total": 12
        }
    }))
}

async fn delete_expense(Path(id): Path<i64>) -> (StatusCode, Json<Value>) {
    if id == 404 {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "msg": "Expense not found" })),
        );
    }
    (StatusCode::OK, Json(json!({ "message": "Expense deleted" })))
}

async fn list_director_loans() -> Json<Value> {
    Json(json!({
        "data": [
            { "id": 1, "loan_date": "2024-05-10", "director_name": "R. Patil", "amount": 200000, "payment_type": "Cash", "transaction_type": "Received" },
            { "id": 2, "loan_date": "2024-06-01", "director_name": "R. Patil", "amount": 50000, "payment_type": "Online", "transaction_type": "Given", "bank_id": 1, "bank_name": "SBI", "account_no": "00123" }
        ]
    }))
}

async fn list_machines() -> Json<Value> {
    Json(json!({
        "data": [ { "id": 4, "date": "2024-01-05", "machinery_name": "JCB 3DX", "machinery_no": "MH12 AB 1234", "machinery_type": "Rented" } ]
    }))
}

async fn list_machine_records() -> Json<Value> {
    Json(json!({
        "data": [ { "id": 1, "machinery_id": 4, "machinery_name": "JCB 3DX", "start_time": "07:45", "end_time": "11:00", "total_hours": 3.25, "fuel_intake": 20, "units": 3 } ]
    }))
}

async fn total_balances() -> Json<Value> {
    Json(json!({ "data": { "cash_balance": 15250.5, "online_balance": 82000 } }))
}

async fn cash_balance() -> Json<Value> {
    Json(json!({ "data": { "cash_balance": 15250.5 } }))
}

async fn cash_ledger(State(state): State<SharedState>, uri: Uri) -> Json<Value> {
    remember(&state, &uri);
    Json(json!({
        "data": [
            { "date": "2024-06-02", "description": "Sale INV-7", "cash_in": 5000, "balance": 15250.5 },
            { "date": "2024-06-01", "description": "Expense Diesel", "cash_out": 4500.5, "balance": 10250.5 }
        ]
    }))
}

async fn cash_summary() -> Json<Value> {
    Json(json!({ "data": { "cash_received": 25000, "cash_paid": 9750, "cash_balance": 15250 } }))
}

async fn bank_balances() -> Json<Value> {
    Json(json!({
        "data": [ { "bank_id": 2, "bank_name": "HDFC", "account_no": "5010", "online_received": 300, "account_balance": 10300 } ]
    }))
}

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/sales", get(list_sales).post(create_sale))
        .route("/api/purchase", post(create_purchase))
        .route("/api/bill", post(create_bill))
        .route("/api/bill/{id}", get(get_bill))
        .route("/api/master/item", get(list_items))
        .route("/api/payments/sales-outstanding", get(sales_outstanding))
        .route("/api/payments/cash-summary", get(cash_summary))
        .route("/api/payments/{route}", post(receive))
        .route("/api/auth/register", post(register))
        .route("/api/expense", get(list_expenses).post(record_entry))
        .route("/api/expense/{id}", delete(delete_expense))
        .route("/api/director-loan/add", post(record_entry))
        .route("/api/director-loan/list", get(list_director_loans))
        .route("/api/machine/add", post(record_entry))
        .route("/api/machine/list", get(list_machines))
        .route("/api/machine/record/add", post(record_entry))
        .route("/api/machine/record/list", get(list_machine_records))
        .route("/api/balance/balances", get(total_balances))
        .route("/api/balances/cash", get(cash_balance))
        .route("/api/balances/cash/ledger", get(cash_ledger))
        .route("/api/banks/balances", get(bank_balances))
        .with_state(state)
}

/// Start the mock API on an ephemeral port; returns its `/api` root.
pub async fn spawn_server() -> (String, SharedState) {
    let state = SharedState::default();
    let app = router(state.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}/api"), state)
}
