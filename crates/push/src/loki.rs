//! Loki push-API client.
//!
//! One JSON POST per push: `{ "streams": [{ "stream": {labels}, "values":
//! [[<ns timestamp>, <line>], ...] }] }`. Timestamps are nanosecond
//! strings per the Loki push API.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::PushError;

#[derive(Debug, Serialize)]
pub struct LokiStream {
    /// Stream labels. Ordered map so payloads are stable across pushes.
    pub stream: BTreeMap<String, String>,
    /// `[nanosecond-timestamp, log-line]` pairs.
    pub values: Vec<(String, String)>,
}

#[derive(Debug, Serialize)]
struct LokiPushBody {
    streams: Vec<LokiStream>,
}

/// Best-effort Loki push client with optional API-key basic auth.
pub struct LokiClient {
    client: reqwest::Client,
    url: String,
    api_key: Option<String>,
}

impl LokiClient {
    /// `url` is the full push endpoint, e.g.
    /// `https://logs.example.net/loki/api/v1/push`. When `api_key` is set
    /// it is sent as the basic-auth username with an empty password.
    pub fn new(url: String, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
            api_key,
        }
    }

    pub async fn push(&self, streams: Vec<LokiStream>) -> Result<(), PushError> {
        let entry_count: usize = streams.iter().map(|s| s.values.len()).sum();

        let mut request = self.client.post(&self.url).json(&LokiPushBody { streams });
        if let Some(key) = &self.api_key {
            request = request.basic_auth(key, Some(""));
        }

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            tracing::debug!(entries = entry_count, "Pushed log entries to Loki");
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
