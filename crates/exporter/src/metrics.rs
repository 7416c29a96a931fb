//! Prometheus registry wrapper for scan gauges.
//!
//! Gauge values are overwritten on every scan, never cleared: a URL that
//! was scanned once keeps reporting its last-known counts until the next
//! scan replaces them.

use prometheus::{IntGaugeVec, Opts, Registry, TextEncoder};

use a11ymon_core::metric_names::{
    LABEL_IMPACT, LABEL_SEVERITY, LABEL_URL, LABEL_VIOLATION_ID, METRIC_INCOMPLETE_TOTAL,
    METRIC_PASSES_TOTAL, METRIC_VIOLATIONS_BY_TYPE, METRIC_VIOLATIONS_TOTAL,
};
use a11ymon_core::PageScan;

/// The exporter's metric families, registered on a private registry.
pub struct ScanMetrics {
    registry: Registry,
    violations: IntGaugeVec,
    passes: IntGaugeVec,
    incomplete: IntGaugeVec,
    violations_by_type: IntGaugeVec,
}

impl ScanMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let violations = IntGaugeVec::new(
            Opts::new(
                METRIC_VIOLATIONS_TOTAL,
                "Total number of accessibility violations",
            ),
            &[LABEL_URL, LABEL_SEVERITY],
        )?;
        registry.register(Box::new(violations.clone()))?;

        let passes = IntGaugeVec::new(
            Opts::new(
                METRIC_PASSES_TOTAL,
                "Total number of accessibility checks passed",
            ),
            &[LABEL_URL],
        )?;
        registry.register(Box::new(passes.clone()))?;

        let incomplete = IntGaugeVec::new(
            Opts::new(
                METRIC_INCOMPLETE_TOTAL,
                "Total number of incomplete accessibility checks",
            ),
            &[LABEL_URL],
        )?;
        registry.register(Box::new(incomplete.clone()))?;

        let violations_by_type = IntGaugeVec::new(
            Opts::new(METRIC_VIOLATIONS_BY_TYPE, "Number of violations by type"),
            &[LABEL_URL, LABEL_VIOLATION_ID, LABEL_IMPACT],
        )?;
        registry.register(Box::new(violations_by_type.clone()))?;

        // Process metrics (CPU, memory, fds) alongside the scan gauges.
        #[cfg(target_os = "linux")]
        registry.register(Box::new(
            prometheus::process_collector::ProcessCollector::for_self(),
        ))?;

        Ok(Self {
            registry,
            violations,
            passes,
            incomplete,
            violations_by_type,
        })
    }

    /// Overwrite the gauges for one scanned URL.
    pub fn update(&self, scan: &PageScan) {
        let counts = scan.severity_counts();
        for (severity, value) in counts.iter() {
            self.violations
                .with_label_values(&[scan.url.as_str(), severity.as_str()])
                .set(value as i64);
        }

        for violation in &scan.results.violations {
            self.violations_by_type
                .with_label_values(&[
                    scan.url.as_str(),
                    violation.id.as_str(),
                    violation.severity().as_str(),
                ])
                .set(violation.node_count() as i64);
        }

        self.passes
            .with_label_values(&[scan.url.as_str()])
            .set(scan.results.passes.len() as i64);
        self.incomplete
            .with_label_values(&[scan.url.as_str()])
            .set(scan.results.incomplete.len() as i64);

        tracing::info!(
            url = %scan.url,
            violations = counts.total(),
            passes = scan.results.passes.len(),
            incomplete = scan.results.incomplete.len(),
            "Updated metrics"
        );
    }

    /// Render the registry in the Prometheus text exposition format.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let mut buffer = String::new();
        TextEncoder::new().encode_utf8(&self.registry.gather(), &mut buffer)?;
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use a11ymon_core::AxeResults;

    fn scan(url: &str, serious_nodes: usize) -> PageScan {
        let results: AxeResults = serde_json::from_value(serde_json::json!({
            "violations": [
                {"id": "color-contrast", "impact": "serious",
                 "nodes": vec![serde_json::json!({}); serious_nodes]}
            ],
            "passes": [{"id": "document-title", "nodes": [{}]}],
            "incomplete": []
        }))
        .unwrap();
        PageScan {
            url: url.to_string(),
            results,
        }
    }

    #[test]
    fn update_sets_gauges_for_all_severity_buckets() {
        let metrics = ScanMetrics::new().unwrap();
        metrics.update(&scan("https://example.com/", 3));

        let rendered = metrics.render().unwrap();
        assert!(rendered.contains(
            r#"accessibility_violations_total{severity="serious",url="https://example.com/"} 3"#
        ));
        assert!(rendered.contains(
            r#"accessibility_violations_total{severity="critical",url="https://example.com/"} 0"#
        ));
        assert!(rendered
            .contains(r#"accessibility_passes_total{url="https://example.com/"} 1"#));
        assert!(rendered.contains(
            r#"accessibility_violations_by_type{impact="serious",url="https://example.com/",violation_id="color-contrast"} 3"#
        ));
    }

    #[test]
    fn update_overwrites_rather_than_accumulates() {
        let metrics = ScanMetrics::new().unwrap();
        metrics.update(&scan("https://example.com/", 5));
        metrics.update(&scan("https://example.com/", 2));

        let rendered = metrics.render().unwrap();
        assert!(rendered.contains(
            r#"accessibility_violations_total{severity="serious",url="https://example.com/"} 2"#
        ));
        assert!(!rendered.contains(
            r#"accessibility_violations_total{severity="serious",url="https://example.com/"} 7"#
        ));
    }
}
