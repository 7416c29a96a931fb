//! Canonical metric, label, and event name constants.
//!
//! These names appear on the wire in three places: the pull exporter's
//! Prometheus registry, the rendered payloads produced by the push sinks,
//! and the collector's event counter. Keeping them here means a dashboard
//! query never silently diverges from what a service emits.

/// Node-weighted violation count, labelled by page URL and severity.
pub const METRIC_VIOLATIONS_TOTAL: &str = "accessibility_violations_total";

/// Number of passed axe checks, labelled by page URL.
pub const METRIC_PASSES_TOTAL: &str = "accessibility_passes_total";

/// Number of incomplete axe checks, labelled by page URL.
pub const METRIC_INCOMPLETE_TOTAL: &str = "accessibility_incomplete_total";

/// Per-rule violation count, labelled by page URL, rule id, and impact.
pub const METRIC_VIOLATIONS_BY_TYPE: &str = "accessibility_violations_by_type";

/// Collector-side counter of ingested events (RUM and axe combined).
pub const METRIC_EVENTS_TOTAL: &str = "a11y_events_total";

pub const LABEL_URL: &str = "url";
pub const LABEL_SEVERITY: &str = "severity";
pub const LABEL_VIOLATION_ID: &str = "violation_id";
pub const LABEL_IMPACT: &str = "impact";
pub const LABEL_EVENT_TYPE: &str = "event_type";
pub const LABEL_PAGE: &str = "page";
pub const LABEL_SOURCE: &str = "source";

/// `source` label value for events captured by the browser RUM tracker.
pub const SOURCE_RUM: &str = "rum";

/// `source` label value for events derived from axe-core scans.
pub const SOURCE_AXE: &str = "axe";

/// Event type emitted for each violation converted from an axe report.
pub const EVENT_AXE_VIOLATION: &str = "axe_violation";

/// Event types emitted when a live scan is pushed to the collector.
pub const EVENT_VIOLATION: &str = "violation";
pub const EVENT_PASS: &str = "pass";
pub const EVENT_INCOMPLETE: &str = "incomplete";
