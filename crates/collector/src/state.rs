use std::sync::Arc;

use a11ymon_push::LokiClient;

use crate::config::CollectorConfig;
use crate::metrics::EventMetrics;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The collector's event counter registry.
    pub metrics: Arc<EventMetrics>,
    /// Loki push client; `None` when forwarding is not configured.
    pub loki: Option<Arc<LokiClient>>,
    /// Server configuration.
    pub config: Arc<CollectorConfig>,
}
