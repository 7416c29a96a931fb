/// Collector configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `10000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Loki push endpoint, e.g. `https://logs.example.net/loki/api/v1/push`.
    /// When unset, RUM events are counted but not forwarded.
    pub loki_url: Option<String>,
    /// Loki API key, sent as the basic-auth username with an empty password.
    pub loki_api_key: Option<String>,
}

impl CollectorConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default   |
    /// |------------------------|-----------|
    /// | `HOST`                 | `0.0.0.0` |
    /// | `PORT`                 | `10000`   |
    /// | `REQUEST_TIMEOUT_SECS` | `30`      |
    /// | `LOKI_URL`             | --        |
    /// | `LOKI_API_KEY`         | --        |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "10000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let loki_url = std::env::var("LOKI_URL").ok().filter(|v| !v.is_empty());
        let loki_api_key = std::env::var("LOKI_API_KEY").ok().filter(|v| !v.is_empty());

        Self {
            host,
            port,
            request_timeout_secs,
            loki_url,
            loki_api_key,
        }
    }
}
