use axum::extract::State;
use axum::response::IntoResponse;
use axum::{routing::post, Json, Router};
use serde_json::json;

use a11ymon_core::metric_names::SOURCE_RUM;
use a11ymon_core::RumBatch;

use crate::error::{AppError, AppResult};
use crate::forward::rum_stream;
use crate::state::AppState;

/// POST /rum -- ingest a tracker event batch.
///
/// Events are counted first, then forwarded to Loki as one stream. A
/// forward failure still leaves the counters updated -- the caller gets a
/// 500 and the tracker will retry with its next flush.
async fn ingest_rum(
    State(state): State<AppState>,
    Json(batch): Json<RumBatch>,
) -> AppResult<impl IntoResponse> {
    if batch.events.is_empty() {
        return Err(AppError::BadRequest("No events".to_string()));
    }

    for event in &batch.events {
        state.metrics.record(
            &event.event_type,
            event.url.as_deref().unwrap_or("/"),
            SOURCE_RUM,
            1,
        );
    }

    if let Some(loki) = &state.loki {
        let stream = rum_stream(&batch);
        if let Err(e) = loki.push(vec![stream]).await {
            tracing::error!(
                session_id = %batch.session_id,
                error = %e,
                "Failed to forward RUM events to Loki"
            );
            return Err(AppError::LokiForward);
        }
    }

    tracing::debug!(
        session_id = %batch.session_id,
        events = batch.events.len(),
        "RUM events received"
    );

    Ok(Json(json!({ "message": "RUM events received" })))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/rum", post(ingest_rum))
}
