//! In-process dashboard backend for end-to-end runs.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch};
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::net::TcpListener;

/// Ways the backend can deviate from the dashboard contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct Quirks {
    /// List endpoints ignore their query filters.
    pub ignore_filters: bool,
    /// `system-health` reports this uptime instead of 99.95.
    pub uptime: Option<f64>,
}

struct Backend {
    quirks: Quirks,
    merchants: Vec<Value>,
    alerts: Vec<Value>,
    settlements: Vec<Value>,
    next_merchant: u32,
}

type Shared = Arc<Mutex<Backend>>;

impl Backend {
    fn seeded(quirks: Quirks) -> Self {
        Self {
            quirks,
            merchants: vec![
                json!({ "id": "m1", "name": "FiberLink Networks", "vertical": "ISP",
                        "kyc_status": "approved", "status": "active" }),
                json!({ "id": "m2", "name": "LearnSphere", "vertical": "Education",
                        "kyc_status": "pending", "status": "active" }),
                json!({ "id": "m3", "name": "NetWave Broadband", "vertical": "ISP",
                        "kyc_status": "pending", "status": "inactive" }),
            ],
            alerts: vec![
                json!({ "id": "a1", "title": "Churn spike",
                        "status": "active", "severity": "high" }),
                json!({ "id": "a2", "title": "Late settlement",
                        "status": "resolved", "severity": "low" }),
            ],
            settlements: vec![
                json!({ "id": "s1", "merchant_id": "m1",
                        "amount": 125_000, "status": "completed" }),
                json!({ "id": "s2", "merchant_id": "m2", "amount": 48_000, "status": "pending" }),
            ],
            next_merchant: 4,
        }
    }

    fn filtered(&self, items: &[Value], query: &HashMap<String, String>) -> Vec<Value> {
        if self.quirks.ignore_filters {
            return items.to_vec();
        }
        items
            .iter()
            .filter(|item| {
                query
                    .iter()
                    .all(|(key, value)| item.get(key).and_then(Value::as_str) == Some(value))
            })
            .cloned()
            .collect()
    }
}

fn data(value: impl Into<Value>) -> Response {
    Json(json!({ "data": value.into() })).into_response()
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" }))).into_response()
}

fn find<'a>(items: &'a mut [Value], id: &str) -> Option<&'a mut Value> {
    items
        .iter_mut()
        .find(|item| item.get("id").and_then(Value::as_str) == Some(id))
}

async fn overview(State(state): State<Shared>) -> Response {
    let backend = state.lock().unwrap();
    let total = backend.merchants.len();
    let active = backend
        .merchants
        .iter()
        .filter(|m| m["status"] == "active")
        .count();
    data(json!({
        "total_merchants": total,
        "active_merchants": active,
        "pending_kyc": 2,
        "total_subscribers": 15_400,
        "total_tpv": 4_250_000.0,
        "avg_churn_rate": 3.2,
        "active_alerts": 1,
        "monthly_growth": 12.5
    }))
}

async fn list_merchants(
    State(state): State<Shared>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let backend = state.lock().unwrap();
    data(backend.filtered(&backend.merchants, &query))
}

async fn create_merchant(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut backend = state.lock().unwrap();
    let mut merchant = body;
    merchant["id"] = json!(format!("m{}", backend.next_merchant));
    merchant["kyc_status"] = json!("pending");
    merchant["status"] = json!("active");
    backend.next_merchant += 1;
    backend.merchants.push(merchant.clone());
    (StatusCode::CREATED, data(merchant)).into_response()
}

async fn get_merchant(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    let mut backend = state.lock().unwrap();
    find(&mut backend.merchants, &id).map_or_else(not_found, |m| data(m.clone()))
}

async fn update_kyc(
    State(state): State<Shared>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut backend = state.lock().unwrap();
    let Some(merchant) = find(&mut backend.merchants, &id) else {
        return not_found();
    };
    merchant["kyc_status"] = body["status"].clone();
    data(merchant.clone())
}

async fn merchant_analytics(State(state): State<Shared>) -> Response {
    let backend = state.lock().unwrap();
    let scored: Vec<Value> = backend
        .merchants
        .iter()
        .enumerate()
        .map(|(i, m)| json!({ "id": m["id"], "name": m["name"], "health_score": 60 + i * 10 }))
        .collect();
    data(scored)
}

async fn verticals() -> Response {
    data(json!([
        { "name": "ISP", "merchants": 2, "subscribers": 12_000, "tpv": 3_100_000,
          "avg_churn": 2.8, "avg_growth": 9.1 },
        { "name": "Education", "merchants": 1, "subscribers": 3_400, "tpv": 1_150_000,
          "avg_churn": 4.1, "avg_growth": 15.3 }
    ]))
}

async fn list_alerts(
    State(state): State<Shared>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let backend = state.lock().unwrap();
    data(backend.filtered(&backend.alerts, &query))
}

async fn update_alert(
    State(state): State<Shared>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut backend = state.lock().unwrap();
    let Some(alert) = find(&mut backend.alerts, &id) else {
        return not_found();
    };
    alert["status"] = body["status"].clone();
    data(alert.clone())
}

async fn list_settlements(
    State(state): State<Shared>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let backend = state.lock().unwrap();
    data(backend.filtered(&backend.settlements, &query))
}

async fn system_health(State(state): State<Shared>) -> Response {
    let uptime = state.lock().unwrap().quirks.uptime.unwrap_or(99.95);
    data(json!({
        "api_uptime": uptime,
        "razorpay_status": "operational",
        "supabase_status": "degraded",
        "avg_response_time": 142,
        "total_requests_today": 48_210,
        "failed_requests_today": 12,
        "last_updated": "2026-10-16T09:30:00Z"
    }))
}

/// Starts a backend with the given quirks and returns its API base URL.
pub async fn spawn_backend(quirks: Quirks) -> String {
    let state: Shared = Arc::new(Mutex::new(Backend::seeded(quirks)));
    let api = Router::new()
        .route("/analytics/overview", get(overview))
        .route("/analytics/merchants", get(merchant_analytics))
        .route("/analytics/verticals", get(verticals))
        .route("/merchants", get(list_merchants).post(create_merchant))
        .route("/merchants/{id}", get(get_merchant))
        .route("/merchants/{id}/kyc", patch(update_kyc))
        .route("/alerts", get(list_alerts))
        .route("/alerts/{id}", patch(update_alert))
        .route("/settlements", get(list_settlements))
        .route("/system-health", get(system_health))
        .fallback(|| async { not_found() })
        .with_state(state);
    let router = Router::new().nest("/api", api).fallback(|| async { not_found() });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/api")
}

/// Base URL on a local port nothing listens on.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/api")
}
