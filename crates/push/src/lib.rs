//! Outbound metric transports.
//!
//! Every sink takes the same input -- a slice of completed [`PageScan`]s --
//! and differs only in wire format and destination:
//!
//! - [`RemoteWriteSink`] posts a remote-write-style JSON timeseries payload
//!   to a hosted Prometheus endpoint with basic auth.
//! - [`LinePushSink`] posts exposition-format text lines to an Alloy-style
//!   push endpoint.
//! - [`EventPushSink`] posts JSON metric events to the collector service.
//! - [`LokiClient`] posts log streams to a Loki push endpoint; it is used
//!   by the collector's RUM forwarder rather than by the scan workers.
//!
//! All pushes are single best-effort HTTP calls: no retry, no queueing.
//! Failure is returned to the caller, who logs it and decides whether the
//! process exit code should reflect it.
//!
//! [`PageScan`]: a11ymon_core::PageScan

pub mod error;
pub mod event_push;
pub mod line_push;
pub mod loki;
pub mod remote_write;
mod series;
pub mod sink;

pub use error::PushError;
pub use event_push::EventPushSink;
pub use line_push::LinePushSink;
pub use loki::{LokiClient, LokiStream};
pub use remote_write::RemoteWriteSink;
pub use sink::MetricsSink;
