//! Shared domain types for the a11ymon accessibility-monitoring platform.
//!
//! Everything here is plain data: scan results as returned by axe-core,
//! the severity reduction applied before metrics are emitted, the event
//! shapes accepted by the collector service, and the canonical metric and
//! label names used across all services.

pub mod error;
pub mod events;
pub mod metric_names;
pub mod scan;

pub use error::CoreError;
pub use events::{MetricEvent, RumBatch, RumEvent};
pub use scan::{AxeFinding, AxeResults, PageScan, Severity, SeverityCounts};
