//! Prometheus registry wrapper for the event counter.

use prometheus::{IntCounterVec, Opts, Registry, TextEncoder};

use a11ymon_core::metric_names::{
    LABEL_EVENT_TYPE, LABEL_PAGE, LABEL_SOURCE, METRIC_EVENTS_TOTAL,
};

/// Counts every ingested event, labelled by type, page, and source
/// (`rum` for tracker batches, `axe` for scan-derived events).
pub struct EventMetrics {
    registry: Registry,
    events: IntCounterVec,
}

impl EventMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let events = IntCounterVec::new(
            Opts::new(
                METRIC_EVENTS_TOTAL,
                "Total number of accessibility events received (RUM + axe-core)",
            ),
            &[LABEL_EVENT_TYPE, LABEL_PAGE, LABEL_SOURCE],
        )?;
        registry.register(Box::new(events.clone()))?;

        Ok(Self { registry, events })
    }

    /// Count `amount` events of `event_type` on `page` from `source`.
    pub fn record(&self, event_type: &str, page: &str, source: &str, amount: u64) {
        self.events
            .with_label_values(&[event_type, page, source])
            .inc_by(amount);
    }

    /// Render the registry in the Prometheus text exposition format.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let mut buffer = String::new();
        TextEncoder::new().encode_utf8(&self.registry.gather(), &mut buffer)?;
        Ok(buffer)
    }
}
