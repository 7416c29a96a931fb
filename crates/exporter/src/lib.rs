//! Pull-style Prometheus exporter for accessibility scans.
//!
//! Exposes the core building blocks (config, state, error handling,
//! metrics registry, routes) so integration tests and the binary
//! entrypoint can both access them.
//!
//! The service accepts ad-hoc scan requests on `POST /scan`, runs them in
//! the background, retains last-scan state in memory, and serves the
//! resulting gauges on `GET /metrics` for Prometheus to scrape.

pub mod background;
pub mod config;
pub mod error;
pub mod metrics;
pub mod routes;
pub mod state;
