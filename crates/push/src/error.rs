/// Errors from a metrics push.
#[derive(Debug, thiserror::Error)]
pub enum PushError {
    /// The HTTP request itself failed (DNS, connect, TLS, timeout).
    #[error("Push transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("Push rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },

    /// The payload could not be serialized.
    #[error("Failed to serialize push payload: {0}")]
    Payload(#[from] serde_json::Error),
}
