//! Axe report-file conversion.
//!
//! CI pipelines that run axe separately leave a JSON report on disk; this
//! module converts its violations into metric events for the collector
//! and writes the converted events next to the report for audit.

use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Deserialize;

use a11ymon_core::metric_names::EVENT_AXE_VIOLATION;
use a11ymon_core::{AxeResults, MetricEvent};

/// Default report location, matching the CI workflow layout.
pub const DEFAULT_REPORT_PATH: &str = "axe-output/axe-report.json";

/// File name of the audit copy written next to the report.
const AUDIT_FILE_NAME: &str = "axe-metrics.json";

/// An axe report file: the standard result lists plus the scanned URL.
#[derive(Debug, Deserialize)]
pub struct AxeReport {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(flatten)]
    pub results: AxeResults,
}

/// Errors from loading or converting a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Axe report not found at {0}")]
    NotFound(PathBuf),

    #[error("Failed to read axe report: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse axe report: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load a report file from disk.
pub fn load_report(path: &Path) -> Result<AxeReport, ReportError> {
    if !path.exists() {
        return Err(ReportError::NotFound(path.to_path_buf()));
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Convert each violation into an `axe_violation` event.
pub fn convert_report(report: &AxeReport) -> Vec<MetricEvent> {
    let url = report.url.clone().unwrap_or_else(|| "/".to_string());
    let timestamp = Utc::now().to_rfc3339();

    report
        .results
        .violations
        .iter()
        .map(|violation| {
            let mut event = MetricEvent::new(EVENT_AXE_VIOLATION);
            event.rule = Some(violation.id.clone());
            event.impact = violation.impact.clone();
            event.nodes = Some(violation.node_count());
            event.url = Some(url.clone());
            event.timestamp = Some(timestamp.clone());
            event
        })
        .collect()
}

/// Write the converted events next to the report for debugging / audit.
pub fn write_audit_copy(report_path: &Path, events: &[MetricEvent]) -> Result<PathBuf, ReportError> {
    let dir = report_path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)?;

    let audit_path = dir.join(AUDIT_FILE_NAME);
    std::fs::write(&audit_path, serde_json::to_string_pretty(events)?)?;
    Ok(audit_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> AxeReport {
        serde_json::from_value(serde_json::json!({
            "url": "https://example.com/works/",
            "violations": [
                {"id": "image-alt", "impact": "critical", "nodes": [{}, {}]},
                {"id": "region", "impact": null, "nodes": [{}]}
            ],
            "passes": [],
            "incomplete": []
        }))
        .unwrap()
    }

    #[test]
    fn violations_become_axe_violation_events() {
        let events = convert_report(&report());

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event_type, "axe_violation");
        assert_eq!(events[0].rule.as_deref(), Some("image-alt"));
        assert_eq!(events[0].impact.as_deref(), Some("critical"));
        assert_eq!(events[0].nodes, Some(2));
        assert_eq!(events[0].url.as_deref(), Some("https://example.com/works/"));
        assert!(events[0].timestamp.is_some());

        assert_eq!(events[1].impact, None);
        assert_eq!(events[1].nodes, Some(1));
    }

    #[test]
    fn report_without_url_falls_back_to_root() {
        let report: AxeReport = serde_json::from_value(serde_json::json!({
            "violations": [{"id": "label", "impact": "serious", "nodes": [{}]}]
        }))
        .unwrap();

        let events = convert_report(&report);
        assert_eq!(events[0].url.as_deref(), Some("/"));
    }

    #[test]
    fn load_report_errors_on_missing_file() {
        let err = load_report(Path::new("/definitely/not/here/axe-report.json")).unwrap_err();
        assert!(matches!(err, ReportError::NotFound(_)));
    }

    #[test]
    fn audit_copy_round_trips() {
        let dir = std::env::temp_dir().join("a11ymon-report-test");
        std::fs::create_dir_all(&dir).unwrap();
        let report_path = dir.join("axe-report.json");

        let events = convert_report(&report());
        let audit_path = write_audit_copy(&report_path, &events).unwrap();

        let raw = std::fs::read_to_string(audit_path).unwrap();
        let parsed: Vec<MetricEvent> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].rule.as_deref(), Some("image-alt"));
    }
}
