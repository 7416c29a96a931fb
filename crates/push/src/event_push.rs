//! JSON event push to the collector service.
//!
//! Live scans post `{ "metrics": [...] }` to the collector's `/axe`
//! endpoint; the report-conversion worker posts `{ "sessionId", "events" }`
//! batches to `/rum` via [`EventPushSink::push_batch`].

use a11ymon_core::metric_names::{EVENT_INCOMPLETE, EVENT_PASS, EVENT_VIOLATION};
use a11ymon_core::{MetricEvent, PageScan};
use serde::Serialize;

use crate::error::PushError;
use crate::sink::MetricsSink;

#[derive(Debug, Serialize)]
struct MetricsBody<'a> {
    metrics: &'a [MetricEvent],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchBody<'a> {
    session_id: &'a str,
    events: &'a [MetricEvent],
}

/// Pushes scan results to the collector as metric events.
pub struct EventPushSink {
    client: reqwest::Client,
    endpoint: String,
}

impl EventPushSink {
    /// `endpoint` is the full collector URL, e.g. `http://host:10000/axe`.
    pub fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    /// Reduce one scan to three count events: violations (node-weighted),
    /// passes, and incompletes.
    pub fn scan_events(scan: &PageScan) -> Vec<MetricEvent> {
        let mut violation = MetricEvent::new(EVENT_VIOLATION);
        violation.page = Some(scan.url.clone());
        violation.count = Some(scan.severity_counts().total());

        let mut pass = MetricEvent::new(EVENT_PASS);
        pass.page = Some(scan.url.clone());
        pass.count = Some(scan.results.passes.len() as u64);

        let mut incomplete = MetricEvent::new(EVENT_INCOMPLETE);
        incomplete.page = Some(scan.url.clone());
        incomplete.count = Some(scan.results.incomplete.len() as u64);

        vec![violation, pass, incomplete]
    }

    /// POST a `{ "sessionId", "events" }` batch (report-conversion path).
    pub async fn push_batch(
        &self,
        session_id: &str,
        events: &[MetricEvent],
    ) -> Result<(), PushError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&BatchBody { session_id, events })
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(events = events.len(), "Pushed event batch to collector");
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(PushError::Rejected {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[async_trait::async_trait]
impl MetricsSink for EventPushSink {
    fn name(&self) -> &'static str {
        "event-push"
    }

    async fn push(&self, scans: &[PageScan]) -> Result<(), PushError> {
        let metrics: Vec<MetricEvent> = scans.iter().flat_map(Self::scan_events).collect();

        let response = self
            .client
            .post(&self.endpoint)
            .json(&MetricsBody { metrics: &metrics })
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(events = metrics.len(), "Pushed scan events to collector");
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(PushError::Rejected {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::test_fixtures::sample_scan;

    #[test]
    fn scan_reduces_to_three_count_events() {
        let events = EventPushSink::scan_events(&sample_scan("https://example.com/"));

        assert_eq!(events.len(), 3);
        assert_eq!(events[0].event_type, "violation");
        assert_eq!(events[0].count, Some(4)); // 3 serious + 1 minor nodes
        assert_eq!(events[0].page.as_deref(), Some("https://example.com/"));
        assert_eq!(events[1].event_type, "pass");
        assert_eq!(events[1].count, Some(2));
        assert_eq!(events[2].event_type, "incomplete");
        assert_eq!(events[2].count, Some(1));
    }

    #[test]
    fn batch_body_uses_camel_case_session_id() {
        let events = vec![MetricEvent::new("axe_violation")];
        let body = BatchBody {
            session_id: "ci-report",
            events: &events,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["sessionId"], "ci-report");
        assert_eq!(json["events"][0]["eventType"], "axe_violation");
    }
}
