//! Background scan execution.
//!
//! `POST /scan` answers immediately; the actual scan runs on a spawned
//! task so a slow page never ties up the request path. Per-URL failures
//! are logged inside the scanner and skipped.

use chrono::Utc;

use crate::state::AppState;

/// Scan `urls`, fold the results into the registry, and update the
/// last-scan bookkeeping.
pub async fn run_scan(state: AppState, urls: Vec<String>) {
    tracing::info!(count = urls.len(), "Starting background scan");

    let scans = state.scanner.scan_all(&urls).await;

    for scan in &scans {
        state.metrics.update(scan);
    }

    let completed_at = Utc::now();
    let mut scan_state = state.scan_state.write().await;
    scan_state.last_scan_time = Some(completed_at);
    for scan in scans {
        scan_state.scanned_urls.insert(scan.url);
    }

    tracing::info!(completed_at = %completed_at.to_rfc3339(), "Scan completed");
}
