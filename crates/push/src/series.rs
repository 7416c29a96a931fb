//! Shared scan-to-series reduction used by the remote-write and line sinks.

use a11ymon_core::metric_names::{
    LABEL_SEVERITY, LABEL_URL, METRIC_INCOMPLETE_TOTAL, METRIC_PASSES_TOTAL,
    METRIC_VIOLATIONS_TOTAL,
};
use a11ymon_core::PageScan;

/// One metric sample: name, labels in emission order, value.
pub(crate) struct Series {
    pub name: &'static str,
    pub labels: Vec<(&'static str, String)>,
    pub value: u64,
}

/// Render the canonical series for one scan: violation counts per severity
/// bucket, then passes, then incompletes.
pub(crate) fn scan_series(scan: &PageScan) -> Vec<Series> {
    let counts = scan.severity_counts();
    let mut series: Vec<Series> = counts
        .iter()
        .map(|(severity, value)| Series {
            name: METRIC_VIOLATIONS_TOTAL,
            labels: vec![
                (LABEL_URL, scan.url.clone()),
                (LABEL_SEVERITY, severity.as_str().to_string()),
            ],
            value,
        })
        .collect();

    series.push(Series {
        name: METRIC_PASSES_TOTAL,
        labels: vec![(LABEL_URL, scan.url.clone())],
        value: scan.results.passes.len() as u64,
    });
    series.push(Series {
        name: METRIC_INCOMPLETE_TOTAL,
        labels: vec![(LABEL_URL, scan.url.clone())],
        value: scan.results.incomplete.len() as u64,
    });

    series
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    use a11ymon_core::{AxeResults, PageScan};

    /// A scan with 3 serious nodes, 1 minor node, 2 passes, 1 incomplete.
    pub(crate) fn sample_scan(url: &str) -> PageScan {
        let results: AxeResults = serde_json::from_value(serde_json::json!({
            "violations": [
                {"id": "color-contrast", "impact": "serious", "nodes": [{}, {}, {}]},
                {"id": "region", "impact": "minor", "nodes": [{}]}
            ],
            "passes": [
                {"id": "document-title", "nodes": [{}]},
                {"id": "html-has-lang", "nodes": [{}]}
            ],
            "incomplete": [
                {"id": "aria-hidden-focus", "impact": "serious", "nodes": [{}]}
            ]
        }))
        .unwrap();

        PageScan {
            url: url.to_string(),
            results,
        }
    }
}
