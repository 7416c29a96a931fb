use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use axum::{routing::get, Router};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /metrics -- Prometheus text exposition of the event counters.
async fn metrics(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let body = state
        .metrics
        .render()
        .map_err(|e| AppError::InternalError(format!("Failed to encode metrics: {e}")))?;

    Ok(([(CONTENT_TYPE, prometheus::TEXT_FORMAT)], body))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/metrics", get(metrics))
}
