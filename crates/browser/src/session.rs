//! Browser lifecycle: launch, open a page, evaluate, close.

use std::time::Duration;

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::Page;
use futures::StreamExt;
use serde::de::DeserializeOwned;

use crate::error::BrowserError;

/// Default navigation deadline, matching the scanner's page-load budget.
const DEFAULT_NAV_TIMEOUT: Duration = Duration::from_secs(30);

/// Launch options for a scan browser.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Run with `--no-sandbox`. Required in most container images where
    /// the browser runs as root.
    pub no_sandbox: bool,
    /// Deadline for navigation to settle.
    pub nav_timeout: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            no_sandbox: true,
            nav_timeout: DEFAULT_NAV_TIMEOUT,
        }
    }
}

/// A running headless Chromium instance.
///
/// Owns the browser process and the spawned task that pumps DevTools
/// protocol events. Call [`close`](Self::close) when done; dropping the
/// session without closing leaves process reaping to chromiumoxide's
/// `Drop` handling, which is less graceful.
pub struct BrowserSession {
    browser: Browser,
    handler_task: tokio::task::JoinHandle<()>,
    nav_timeout: Duration,
}

impl BrowserSession {
    /// Launch a headless Chromium process.
    pub async fn launch(config: &SessionConfig) -> Result<Self, BrowserError> {
        let mut builder = BrowserConfig::builder();
        if config.no_sandbox {
            builder = builder.no_sandbox();
        }
        let browser_config = builder.build().map_err(BrowserError::Launch)?;

        let (browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|e| BrowserError::Launch(e.to_string()))?;

        // The handler future must be polled for the connection to make
        // progress; it ends when the browser closes.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    tracing::debug!(error = %e, "CDP handler event error");
                }
            }
        });

        tracing::debug!("Headless browser launched");

        Ok(Self {
            browser,
            handler_task,
            nav_timeout: config.nav_timeout,
        })
    }

    /// Open a new page and navigate to `url`, waiting for the load to
    /// settle within the session's navigation deadline.
    pub async fn open(&self, url: &str) -> Result<Page, BrowserError> {
        let page = self
            .browser
            .new_page("about:blank")
            .await
            .map_err(|e| BrowserError::Navigation {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let navigate = async {
            page.goto(url).await?;
            page.wait_for_navigation().await?;
            Ok::<(), chromiumoxide::error::CdpError>(())
        };

        match tokio::time::timeout(self.nav_timeout, navigate).await {
            Ok(Ok(())) => Ok(page),
            Ok(Err(e)) => Err(BrowserError::Navigation {
                url: url.to_string(),
                message: e.to_string(),
            }),
            Err(_) => Err(BrowserError::Timeout {
                url: url.to_string(),
                secs: self.nav_timeout.as_secs(),
            }),
        }
    }

    /// Close the browser process and stop the event-handler task.
    ///
    /// Close failures are logged, not propagated.
    pub async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            tracing::warn!(error = %e, "Browser close failed");
        }
        if let Err(e) = self.browser.wait().await {
            tracing::warn!(error = %e, "Browser process wait failed");
        }
        self.handler_task.abort();
    }
}

/// Evaluate a JS expression on `page` and deserialize its JSON result.
///
/// Promises are awaited by the underlying `Runtime.evaluate` call, so the
/// expression may be an async IIFE.
pub async fn evaluate_json<T: DeserializeOwned>(page: &Page, expr: &str) -> Result<T, BrowserError> {
    let evaluation = page
        .evaluate(expr)
        .await
        .map_err(|e| BrowserError::Evaluation(e.to_string()))?;

    evaluation
        .into_value::<T>()
        .map_err(|e| BrowserError::Evaluation(e.to_string()))
}
