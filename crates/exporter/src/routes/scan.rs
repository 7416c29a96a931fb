use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{routing::post, Json, Router};
use serde_json::{json, Value};

use crate::background;
use crate::state::AppState;

/// POST /scan -- validate the URL list and start a background scan.
///
/// The response is immediate; metrics appear on `/metrics` once the
/// background scan completes.
async fn trigger_scan(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    let Some(urls) = parse_urls(&body) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "Please provide an array of URLs to scan",
                "example": { "urls": ["https://example.com", "https://example.com/about"] }
            })),
        )
            .into_response();
    };

    tracing::info!(count = urls.len(), "Scan requested");
    tokio::spawn(background::run_scan(state, urls.clone()));

    Json(json!({
        "message": "Scan started",
        "urls": urls,
        "note": "Metrics will be available at /metrics once scan completes"
    }))
    .into_response()
}

/// Extract a non-empty list of string URLs from the request body.
fn parse_urls(body: &Value) -> Option<Vec<String>> {
    let urls = body.get("urls")?.as_array()?;
    if urls.is_empty() {
        return None;
    }
    urls.iter()
        .map(|u| u.as_str().map(String::from))
        .collect()
}

pub fn router() -> Router<AppState> {
    Router::new().route("/scan", post(trigger_scan))
}
