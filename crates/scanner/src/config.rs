use std::time::Duration;

/// Default location of the vendored axe-core bundle.
const DEFAULT_AXE_SOURCE_PATH: &str = "assets/axe.min.js";

/// Default navigation deadline in seconds.
const DEFAULT_NAV_TIMEOUT_SECS: u64 = 30;

/// Scanner configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ScannerConfig {
    /// Path to a local `axe.min.js` bundle injected into every page.
    pub axe_source_path: String,
    /// Deadline for a page navigation to settle.
    pub nav_timeout: Duration,
    /// Launch Chromium with `--no-sandbox`.
    pub no_sandbox: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            axe_source_path: DEFAULT_AXE_SOURCE_PATH.to_string(),
            nav_timeout: Duration::from_secs(DEFAULT_NAV_TIMEOUT_SECS),
            no_sandbox: true,
        }
    }
}

impl ScannerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var              | Default             |
    /// |----------------------|---------------------|
    /// | `AXE_SOURCE_PATH`    | `assets/axe.min.js` |
    /// | `NAV_TIMEOUT_SECS`   | `30`                |
    /// | `BROWSER_NO_SANDBOX` | `true`              |
    pub fn from_env() -> Self {
        let axe_source_path = std::env::var("AXE_SOURCE_PATH")
            .unwrap_or_else(|_| DEFAULT_AXE_SOURCE_PATH.to_string());

        let nav_timeout_secs: u64 = std::env::var("NAV_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_NAV_TIMEOUT_SECS);

        let no_sandbox = std::env::var("BROWSER_NO_SANDBOX")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(true);

        Self {
            axe_source_path,
            nav_timeout: Duration::from_secs(nav_timeout_secs),
            no_sandbox,
        }
    }
}
