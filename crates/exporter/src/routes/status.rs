use axum::extract::State;
use axum::{routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::state::AppState;

/// Status response payload: what was scanned, and when.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub status: &'static str,
    pub last_scan_time: Option<DateTime<Utc>>,
    pub scanned_urls: Vec<String>,
    pub metrics_endpoint: &'static str,
    pub scan_endpoint: &'static str,
}

/// GET /status -- last-scan bookkeeping and endpoint discovery.
async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let scan_state = state.scan_state.read().await;

    Json(StatusResponse {
        status: "running",
        last_scan_time: scan_state.last_scan_time,
        scanned_urls: scan_state.scanned_urls.iter().cloned().collect(),
        metrics_endpoint: "/metrics",
        scan_endpoint: "/scan (POST)",
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/status", get(status))
}
