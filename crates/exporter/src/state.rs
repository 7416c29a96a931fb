use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use a11ymon_scanner::Scanner;

use crate::config::ServerConfig;
use crate::metrics::ScanMetrics;

/// Last-scan bookkeeping surfaced by `GET /status`.
#[derive(Debug, Default)]
pub struct ScanState {
    /// Completion time of the most recent scan run.
    pub last_scan_time: Option<DateTime<Utc>>,
    /// Every URL scanned since the process started.
    pub scanned_urls: BTreeSet<String>,
}

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The exporter's metric registry.
    pub metrics: Arc<ScanMetrics>,
    /// Last-scan bookkeeping.
    pub scan_state: Arc<RwLock<ScanState>>,
    /// The axe scan runner used by background scans.
    pub scanner: Arc<Scanner>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
