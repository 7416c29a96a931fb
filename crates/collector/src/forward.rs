//! RUM batch to Loki stream conversion.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use a11ymon_core::{RumBatch, RumEvent};
use a11ymon_push::LokiStream;

/// Stream labels attached to every forwarded RUM batch.
const STREAM_JOB: &str = "accessibility-rum";
const STREAM_SOURCE: &str = "website";

/// Convert a RUM batch into a single Loki stream.
///
/// Each event becomes one `[nanosecond-timestamp, line]` entry; the line
/// is the event object with the batch's session id folded in. An event
/// without a parseable timestamp is stamped at ingest time.
pub fn rum_stream(batch: &RumBatch) -> LokiStream {
    let mut labels = BTreeMap::new();
    labels.insert("job".to_string(), STREAM_JOB.to_string());
    labels.insert("source".to_string(), STREAM_SOURCE.to_string());

    let values = batch
        .events
        .iter()
        .map(|event| (event_nanos(event).to_string(), event_line(batch, event)))
        .collect();

    LokiStream {
        stream: labels,
        values,
    }
}

/// Event capture time as nanoseconds since the epoch.
fn event_nanos(event: &RumEvent) -> i64 {
    event
        .timestamp
        .as_deref()
        .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
        .and_then(|ts| ts.timestamp_nanos_opt())
        .unwrap_or_else(|| Utc::now().timestamp_nanos_opt().unwrap_or(0))
}

/// The log line: the serialized event with `sessionId` added.
fn event_line(batch: &RumBatch, event: &RumEvent) -> String {
    let mut value = serde_json::to_value(event).unwrap_or_default();
    if let Some(object) = value.as_object_mut() {
        object.insert(
            "sessionId".to_string(),
            serde_json::Value::String(batch.session_id.clone()),
        );
    }
    value.to_string()
}
