//! Collector service for real-user accessibility events.
//!
//! Ingests RUM batches from the browser tracker (`POST /rum`) and axe
//! metric events (`POST /axe`), counts everything in a Prometheus
//! registry served on `GET /metrics`, and forwards RUM events to a Loki
//! push endpoint. Also serves the browser tracker script itself on
//! `GET /tracker.js` so sites can load it straight from the collector.

pub mod config;
pub mod error;
pub mod forward;
pub mod metrics;
pub mod routes;
pub mod state;
