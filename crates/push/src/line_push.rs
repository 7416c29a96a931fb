//! Exposition-format text push to an Alloy-style endpoint.

use a11ymon_core::PageScan;
use chrono::Utc;
use reqwest::header::CONTENT_TYPE;

use crate::error::PushError;
use crate::series::scan_series;
use crate::sink::MetricsSink;

/// Pushes scan metrics as `name{labels} value timestamp` text lines.
pub struct LinePushSink {
    client: reqwest::Client,
    endpoint: String,
}

impl LinePushSink {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    /// Render the full text body for a set of scans.
    pub(crate) fn render(scans: &[PageScan], timestamp: i64) -> String {
        let mut body = String::new();
        for scan in scans {
            for series in scan_series(scan) {
                body.push_str(series.name);
                body.push('{');
                for (i, (name, value)) in series.labels.iter().enumerate() {
                    if i > 0 {
                        body.push(',');
                    }
                    body.push_str(name);
                    body.push_str("=\"");
                    body.push_str(&escape_label_value(value));
                    body.push('"');
                }
                body.push_str(&format!("}} {} {}\n", series.value, timestamp));
            }
        }
        body
    }
}

/// Escape a label value per the exposition format.
fn escape_label_value(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

#[async_trait::async_trait]
impl MetricsSink for LinePushSink {
    fn name(&self) -> &'static str {
        "line-push"
    }

    async fn push(&self, scans: &[PageScan]) -> Result<(), PushError> {
        let body = Self::render(scans, Utc::now().timestamp_millis());
        let line_count = body.lines().count();

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "text/plain")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(lines = line_count, "Pushed metrics to push endpoint");
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
