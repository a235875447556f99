//! Seam between the dashboard shell and the metrics transport.

use async_trait::async_trait;
use shopdash_shared::FetchResult;

use crate::dashboard::DashboardSummary;

/// Anything that can produce the dashboard summary with a single request.
///
/// Implementations issue exactly one request per call: no retries and no
/// pagination. Failures are reported, never recovered here.
#[async_trait]
pub trait MetricsSource: Send + Sync {
    /// Retrieves the dashboard summary.
    async fn fetch_dashboard_summary(&self) -> FetchResult<DashboardSummary>;
}
