//! `a11ymon-report` -- convert an axe JSON report into collector events.
//!
//! Reads a report produced by a separate axe run (e.g. a CI job), converts
//! its violations to `axe_violation` events, writes an audit copy next to
//! the report, and posts the batch to the collector's `/rum` endpoint.
//!
//! # Environment variables
//!
//! | Variable          | Required | Default                       |
//! |-------------------|----------|-------------------------------|
//! | `COLLECTOR_URL`   | yes      | --                            |
//! | `AXE_REPORT_PATH` | no       | `axe-output/axe-report.json`  |
//! | `REPORT_SESSION`  | no       | `ci-report`                   |

use std::path::PathBuf;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use a11ymon_push::EventPushSink;
use a11ymon_worker::report::{self, DEFAULT_REPORT_PATH};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "a11ymon_worker=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let collector_url = std::env::var("COLLECTOR_URL").unwrap_or_else(|_| {
        tracing::error!("COLLECTOR_URL environment variable is required");
        std::process::exit(1);
    });

    let report_path = PathBuf::from(
        std::env::var("AXE_REPORT_PATH").unwrap_or_else(|_| DEFAULT_REPORT_PATH.to_string()),
    );

    let session_id =
        std::env::var("REPORT_SESSION").unwrap_or_else(|_| "ci-report".to_string());

    let report = report::load_report(&report_path).unwrap_or_else(|e| {
        tracing::error!(path = %report_path.display(), error = %e, "Failed to load axe report");
        std::process::exit(1);
    });

    let events = report::convert_report(&report);
    tracing::info!(
        violations = events.len(),
        path = %report_path.display(),
        "Converted axe report to events"
    );

    match report::write_audit_copy(&report_path, &events) {
        Ok(audit_path) => {
            tracing::info!(path = %audit_path.display(), "Wrote audit copy");
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to write audit copy");
        }
    }

    let sink = EventPushSink::new(collector_url);
    if let Err(e) = sink.push_batch(&session_id, &events).await {
        tracing::error!(error = %e, "Failed to send events to collector");
        std::process::exit(1);
    }

    tracing::info!(events = events.len(), "Report events sent");
}
