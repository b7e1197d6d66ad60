//! Fetching the report over HTTP.
//!
//! One GET per page load, against a fixed local endpoint. Deliberately no
//! retry, no timeout, no caching: the aggregation service is a localhost
//! sibling and the dashboard's contract is "show the report or show the
//! failure".

use crate::error::{FetchError, FetchResult};
use crate::report::AnalyticsReport;

/// Where the aggregation service serves the report.
pub const ANALYTICS_ENDPOINT: &str = "http://localhost:5000/api/analytics";

/// Fetches and decodes the analytics report from [`ANALYTICS_ENDPOINT`].
pub async fn fetch_analytics() -> FetchResult<AnalyticsReport> {
    fetch_analytics_from(ANALYTICS_ENDPOINT).await
}

/// Same operation against an explicit endpoint.
///
/// Integration tests point this at a throwaway fixture server; production
/// callers go through [`fetch_analytics`].
pub async fn fetch_analytics_from(endpoint: &str) -> FetchResult<AnalyticsReport> {
    #[cfg(debug_assertions)]
    println!("[fetch] GET {endpoint}");

    let response = reqwest::get(endpoint)
        .await
        .map_err(FetchError::Transport)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status { status });
    }

    response
        .json::<AnalyticsReport>()
        .await
        .map_err(FetchError::Decode)
}
