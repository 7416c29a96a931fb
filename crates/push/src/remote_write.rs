//! Remote-write-style push to a hosted Prometheus endpoint.
//!
//! The payload is the JSON rendering of the remote-write timeseries shape:
//! each series carries its labels (with `__name__` first) and exactly one
//! sample, all stamped with the same push timestamp.

use a11ymon_core::PageScan;
use chrono::Utc;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;

use crate::error::PushError;
use crate::series::scan_series;
use crate::sink::MetricsSink;

const REMOTE_WRITE_VERSION_HEADER: &str = "X-Prometheus-Remote-Write-Version";
const REMOTE_WRITE_VERSION: &str = "0.1.0";
const REMOTE_WRITE_CONTENT_TYPE: &str = "application/x-protobuf";

#[derive(Debug, Serialize, PartialEq)]
pub(crate) struct Label {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct Sample {
    pub value: f64,
    pub timestamp: i64,
}

#[derive(Debug, Serialize)]
pub(crate) struct TimeSeries {
    pub labels: Vec<Label>,
    pub samples: Vec<Sample>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RemoteWritePayload {
    pub timeseries: Vec<TimeSeries>,
}

/// Pushes scan metrics to a remote-write endpoint with basic auth.
pub struct RemoteWriteSink {
    client: reqwest::Client,
    endpoint: String,
    user: String,
    password: String,
}

impl RemoteWriteSink {
    pub fn new(endpoint: String, user: String, password: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            user,
            password,
        }
    }

    pub(crate) fn build_payload(scans: &[PageScan], timestamp: i64) -> RemoteWritePayload {
        let timeseries = scans
            .iter()
            .flat_map(scan_series)
            .map(|series| {
                let mut labels = vec![Label {
                    name: "__name__".to_string(),
                    value: series.name.to_string(),
                }];
                labels.extend(series.labels.into_iter().map(|(name, value)| Label {
                    name: name.to_string(),
                    value,
                }));

                TimeSeries {
                    labels,
                    samples: vec![Sample {
                        value: series.value as f64,
                        timestamp,
                    }],
                }
            })
            .collect();

        RemoteWritePayload { timeseries }
    }
}

#[async_trait::async_trait]
impl MetricsSink for RemoteWriteSink {
    fn name(&self) -> &'static str {
        "remote-write"
    }

    async fn push(&self, scans: &[PageScan]) -> Result<(), PushError> {
        let payload = Self::build_payload(scans, Utc::now().timestamp_millis());
        let body = serde_json::to_vec(&payload)?;

        let response = self
            .client
            .post(&self.endpoint)
            .basic_auth(&self.user, Some(&self.password))
            .header(CONTENT_TYPE, REMOTE_WRITE_CONTENT_TYPE)
            .header(REMOTE_WRITE_VERSION_HEADER, REMOTE_WRITE_VERSION)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(
                series = payload.timeseries.len(),
                "Pushed metrics to remote-write endpoint"
            );
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
    fn payload_has_name_label_first_and_shared_timestamp() {
        let scans = vec![sample_scan("https://example.com/")];
        let payload = RemoteWriteSink::build_payload(&scans, 1_700_000_000_000);

        assert_eq!(payload.timeseries.len(), 6);
        for ts in &payload.timeseries {
            assert_eq!(ts.labels[0].name, "__name__");
            assert_eq!(ts.samples.len(), 1);
            assert_eq!(ts.samples[0].timestamp, 1_700_000_000_000);
        }

        let first = &payload.timeseries[0];
        assert_eq!(first.labels[0].value, "accessibility_violations_total");
        assert_eq!(
            first.labels[1],
            Label {
                name: "url".into(),
                value: "https://example.com/".into()
            }
        );
        assert_eq!(
            first.labels[2],
            Label {
                name: "severity".into(),
                value: "critical".into()
            }
        );
    }

    #[test]
    fn payload_serializes_to_the_wire_shape() {
        let scans = vec![sample_scan("https://example.com/")];
        let payload = RemoteWriteSink::build_payload(&scans, 42);
        let json = serde_json::to_value(&payload).unwrap();

        let serious = &json["timeseries"][1];
        assert_eq!(serious["labels"][2]["value"], "serious");
        assert_eq!(serious["samples"][0]["value"], 3.0);
        assert_eq!(serious["samples"][0]["timestamp"], 42);
    }
}
