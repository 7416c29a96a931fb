use axum::extract::State;
use axum::response::IntoResponse;
use axum::{routing::post, Json, Router};
use serde::Deserialize;
use serde_json::json;

use a11ymon_core::metric_names::SOURCE_AXE;
use a11ymon_core::MetricEvent;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct AxeIngestBody {
    #[serde(default)]
    metrics: Vec<MetricEvent>,
}

/// POST /axe -- ingest axe metric events.
///
/// Each event increments the counter by its `count` (default 1) under its
/// `page` (default `/`).
async fn ingest_axe(
    State(state): State<AppState>,
    Json(body): Json<AxeIngestBody>,
) -> AppResult<impl IntoResponse> {
    if body.metrics.is_empty() {
        return Err(AppError::BadRequest("No metrics".to_string()));
    }

    for event in &body.metrics {
        state.metrics.record(
            &event.event_type,
            event.page.as_deref().unwrap_or("/"),
            SOURCE_AXE,
            event.count.unwrap_or(1),
        );
    }

    tracing::debug!(events = body.metrics.len(), "Axe metrics received");

    Ok(Json(json!({ "message": "Axe metrics received" })))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/axe", post(ingest_axe))
}
