pub mod axe;
pub mod health;
pub mod metrics;
pub mod rum;
pub mod tracker;

use axum::Router;

use crate::state::AppState;

/// Build the collector's route tree. All endpoints live at the root:
///
/// ```text
/// POST /rum         ingest a tracker event batch, forward to Loki
/// POST /axe         ingest axe metric events
/// GET  /metrics     Prometheus text exposition
/// GET  /tracker.js  the browser RUM tracker script
/// GET  /health      service liveness
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(rum::router())
        .merge(axe::router())
        .merge(metrics::router())
        .merge(tracker::router())
        .merge(health::router())
}
