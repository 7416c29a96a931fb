/// Errors from launching or driving a headless Chromium instance.
#[derive(Debug, thiserror::Error)]
pub enum BrowserError {
    /// The browser process could not be started.
    #[error("Browser launch failed: {0}")]
    Launch(String),

    /// Navigation failed or the page never settled.
    #[error("Navigation to {url} failed: {message}")]
    Navigation { url: String, message: String },

    /// Navigation did not complete within the configured deadline.
    #[error("Navigation to {url} timed out after {secs}s")]
    Timeout { url: String, secs: u64 },

    /// A script evaluation failed or returned an undeserializable value.
    #[error("Script evaluation failed: {0}")]
    Evaluation(String),
}
