//! `a11ymon-worker` -- one-shot accessibility scan-and-push.
//!
//! Scans the configured URL list with axe-core in a headless browser and
//! pushes the reduced metrics to exactly one backend, then exits. Meant
//! to run from cron or a CI schedule; the exit code reflects whether the
//! push succeeded.
//!
//! # Environment variables
//!
//! | Variable              | Required | Description                              |
//! |-----------------------|----------|------------------------------------------|
//! | `SCAN_URLS`           | yes      | Comma-separated URLs to scan             |
//! | `PROMETHEUS_URL`      | no       | Remote-write endpoint (needs user+pass)  |
//! | `PROMETHEUS_USER`     | with URL | Remote-write basic-auth user             |
//! | `PROMETHEUS_PASSWORD` | with URL | Remote-write basic-auth password         |
//! | `ALLOY_URL`           | no       | Exposition-text push endpoint            |
//! | `COLLECTOR_URL`       | no       | Collector `/axe` endpoint                |
//! | `AXE_SOURCE_PATH`     | no       | Path to `axe.min.js` (default `assets/axe.min.js`) |

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use a11ymon_push::{EventPushSink, LinePushSink, MetricsSink, RemoteWriteSink};
use a11ymon_scanner::{Scanner, ScannerConfig};
use a11ymon_worker::config::{SinkConfig, WorkerConfig};

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

    let config = WorkerConfig::from_env().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid worker configuration");
        std::process::exit(1);
    });

    let scanner = Scanner::new(ScannerConfig::from_env()).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to initialise axe scanner");
        std::process::exit(1);
    });

    let sink: Box<dyn MetricsSink> = match config.sink {
        SinkConfig::RemoteWrite {
            endpoint,
            user,
            password,
        } => Box::new(RemoteWriteSink::new(endpoint, user, password)),
        SinkConfig::LinePush { endpoint } => Box::new(LinePushSink::new(endpoint)),
        SinkConfig::EventPush { endpoint } => Box::new(EventPushSink::new(endpoint)),
    };

    tracing::info!(
        urls = config.urls.len(),
        sink = sink.name(),
        "Starting accessibility scan"
    );

    let scans = scanner.scan_all(&config.urls).await;

    if scans.is_empty() {
        tracing::info!("No results to push");
        return;
    }

    if let Err(e) = sink.push(&scans).await {
        tracing::error!(sink = sink.name(), error = %e, "Failed to push metrics");
        std::process::exit(1);
    }

    tracing::info!("Accessibility scan complete");
}
