//! Event shapes accepted by the collector service.
//!
//! Field names are camelCase on the wire because the payloads originate in
//! browser JavaScript (the RUM tracker) and CI tooling.

use serde::{Deserialize, Serialize};

/// A single interaction event captured by the browser RUM tracker.
///
/// The tracker attaches event-specific fields (tab direction, focus
/// duration, media-query hints, …) that the collector forwards verbatim;
/// they are kept in the open `extra` map rather than modelled one by one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RumEvent {
    pub event_type: String,
    /// ISO 8601 capture time, stamped by the tracker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// Page path the event was captured on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A batch of RUM events flushed by one tracker session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RumBatch {
    pub session_id: String,
    pub events: Vec<RumEvent>,
}

/// An axe-derived metric event.
///
/// Two producers share this shape: live scans pushed to the collector's
/// `/axe` endpoint carry `page` and `count`; violations converted from an
/// axe report file carry `rule`, `impact`, `nodes`, `url`, and `timestamp`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricEvent {
    pub event_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodes: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl MetricEvent {
    /// New event with only a type; producers fill in what they know.
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            page: None,
            count: None,
            rule: None,
            impact: None,
            nodes: None,
            url: None,
            timestamp: None,
        }
    }
}
