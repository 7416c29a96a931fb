use a11ymon_core::PageScan;

use crate::error::PushError;

/// A destination for scan metrics.
///
/// Implementations make exactly one outbound request per `push` call;
/// callers own the failure policy (log and continue, or exit nonzero).
#[async_trait::async_trait]
pub trait MetricsSink: Send + Sync {
    /// Short sink name for logs.
    fn name(&self) -> &'static str;

    /// Format `scans` for this backend and send them.
    async fn push(&self, scans: &[PageScan]) -> Result<(), PushError>;
}
