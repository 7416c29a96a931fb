//! Worker configuration: the URL list and the sink selection.
//!
//! The sink is chosen from the environment, most specific first:
//! remote-write credentials, then the Alloy-style push endpoint, then the
//! collector. Exactly one sink is used per run.

/// Which backend this run pushes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkConfig {
    /// Remote-write endpoint with basic auth.
    RemoteWrite {
        endpoint: String,
        user: String,
        password: String,
    },
    /// Alloy-style exposition text push.
    LinePush { endpoint: String },
    /// Collector `/axe` event push.
    EventPush { endpoint: String },
}

/// Errors from assembling the worker configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("SCAN_URLS environment variable is required (comma-separated URLs)")]
    MissingUrls,

    #[error("SCAN_URLS contained no URLs")]
    EmptyUrls,

    #[error("PROMETHEUS_URL is set but {0} is missing")]
    IncompleteRemoteWrite(&'static str),

    #[error(
        "No push destination configured; set PROMETHEUS_URL (+ user/password), \
         ALLOY_URL, or COLLECTOR_URL"
    )]
    NoSink,
}

/// Full configuration for one scan-and-push run.
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    pub urls: Vec<String>,
    pub sink: SinkConfig,
}

impl WorkerConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var               | Required | Description                          |
    /// |-----------------------|----------|--------------------------------------|
    /// | `SCAN_URLS`           | yes      | Comma-separated URLs to scan         |
    /// | `PROMETHEUS_URL`      | no       | Remote-write endpoint                |
    /// | `PROMETHEUS_USER`     | with URL | Remote-write basic-auth user         |
    /// | `PROMETHEUS_PASSWORD` | with URL | Remote-write basic-auth password     |
    /// | `ALLOY_URL`           | no       | Exposition-text push endpoint        |
    /// | `COLLECTOR_URL`       | no       | Collector `/axe` endpoint            |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Testable core of [`from_env`](Self::from_env).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_urls = lookup("SCAN_URLS").ok_or(ConfigError::MissingUrls)?;
        let urls = parse_urls(&raw_urls);
        if urls.is_empty() {
            return Err(ConfigError::EmptyUrls);
        }

        let sink = if let Some(endpoint) = lookup("PROMETHEUS_URL") {
            let user = lookup("PROMETHEUS_USER")
                .ok_or(ConfigError::IncompleteRemoteWrite("PROMETHEUS_USER"))?;
            let password = lookup("PROMETHEUS_PASSWORD")
                .ok_or(ConfigError::IncompleteRemoteWrite("PROMETHEUS_PASSWORD"))?;
            SinkConfig::RemoteWrite {
                endpoint,
                user,
                password,
            }
        } else if let Some(endpoint) = lookup("ALLOY_URL") {
            SinkConfig::LinePush { endpoint }
        } else if let Some(endpoint) = lookup("COLLECTOR_URL") {
            SinkConfig::EventPush { endpoint }
        } else {
            return Err(ConfigError::NoSink);
        };

        Ok(Self { urls, sink })
    }
}

/// Split a comma-separated URL list, trimming and dropping empty entries.
pub fn parse_urls(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
