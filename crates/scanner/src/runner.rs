//! The scan sequence: launch, navigate, inject axe, run, collect.

use a11ymon_browser::{evaluate_json, BrowserError, BrowserSession, SessionConfig};
use a11ymon_core::{AxeResults, PageScan};

use crate::config::ScannerConfig;

/// Expression that confirms the axe bundle actually defined `window.axe`.
const AXE_PRESENT_EXPRESSION: &str = "typeof axe !== 'undefined'";

/// Expression that runs axe against the whole document and resolves to
/// its results object.
const AXE_RUN_EXPRESSION: &str = "(async () => axe.run(document))()";

/// Errors from a single page scan.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error(transparent)]
    Browser(#[from] BrowserError),

    /// The axe bundle could not be read at scanner construction.
    #[error("Failed to read axe bundle at {path}: {source}")]
    AxeSource {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The injected bundle did not define `window.axe`.
    #[error("axe is not defined after injecting the bundle")]
    AxeMissing,

    /// Axe ran but returned something that is not an axe results object.
    #[error("Failed to deserialize axe results: {0}")]
    Results(#[from] serde_json::Error),
}

/// Runs axe-core scans against pages in a dedicated headless browser.
#[derive(Debug)]
pub struct Scanner {
    axe_source: String,
    session_config: SessionConfig,
}

impl Scanner {
    /// Build a scanner, reading the axe bundle from disk.
    ///
    /// Fails when the bundle is missing or empty.
    pub fn new(config: ScannerConfig) -> Result<Self, ScanError> {
        let axe_source =
            std::fs::read_to_string(&config.axe_source_path).map_err(|source| {
                ScanError::AxeSource {
                    path: config.axe_source_path.clone(),
                    source,
                }
            })?;

        if axe_source.trim().is_empty() {
            return Err(ScanError::AxeSource {
                path: config.axe_source_path.clone(),
                source: std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    "axe bundle is empty",
                ),
            });
        }

        tracing::debug!(
            path = %config.axe_source_path,
            bytes = axe_source.len(),
            "Loaded axe bundle"
        );

        Ok(Self {
            axe_source,
            session_config: SessionConfig {
                no_sandbox: config.no_sandbox,
                nav_timeout: config.nav_timeout,
            },
        })
    }

    /// Scan a single URL.
    ///
    /// A fresh browser is launched per scan and closed on every path.
    pub async fn scan_page(&self, url: &str) -> Result<PageScan, ScanError> {
        tracing::info!(url, "Scanning");

        let session = BrowserSession::launch(&self.session_config).await?;
        let outcome = self.run_axe(&session, url).await;
        session.close().await;

        let results = outcome?;
        Ok(PageScan {
            url: url.to_string(),
            results,
        })
    }

    /// Scan every URL in order.
    ///
    /// A failing URL is logged and skipped; the remaining URLs are still
    /// scanned. Returns only the successful scans.
    pub async fn scan_all(&self, urls: &[String]) -> Vec<PageScan> {
        tracing::info!(count = urls.len(), "Starting scan of URL list");

        let mut scans = Vec::with_capacity(urls.len());
        for url in urls {
            match self.scan_page(url).await {
                Ok(scan) => {
                    tracing::info!(
                        url = %url,
                        violations = scan.results.violations.len(),
                        passes = scan.results.passes.len(),
                        incomplete = scan.results.incomplete.len(),
                        "Scan finished"
                    );
                    scans.push(scan);
                }
                Err(e) => {
                    tracing::error!(url = %url, error = %e, "Scan failed, skipping URL");
                }
            }
        }

        scans
    }

    async fn run_axe(
        &self,
        session: &BrowserSession,
        url: &str,
    ) -> Result<AxeResults, ScanError> {
        let page = session.open(url).await?;

        // Inject the bundle, then confirm it took -- a page with a strict
        // CSP can swallow the injection without raising an error.
        evaluate_json::<serde_json::Value>(&page, &self.axe_source)
            .await
            .ok();
        let present: bool = evaluate_json(&page, AXE_PRESENT_EXPRESSION).await?;
        if !present {
            return Err(ScanError::AxeMissing);
        }

        let raw: serde_json::Value = evaluate_json(&page, AXE_RUN_EXPRESSION).await?;
        Ok(serde_json::from_value(raw)?)
    }
}
