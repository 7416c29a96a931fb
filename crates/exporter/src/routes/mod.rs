pub mod health;
pub mod metrics;
pub mod scan;
pub mod status;

use axum::Router;

use crate::state::AppState;

/// Build the exporter's route tree. All endpoints live at the root:
///
/// ```text
/// GET  /health    service liveness
/// GET  /metrics   Prometheus text exposition
/// GET  /status    last-scan bookkeeping
/// POST /scan      trigger a background scan
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(metrics::router())
        .merge(status::router())
        .merge(scan::router())
}
