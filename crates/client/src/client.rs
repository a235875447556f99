//! Dashboard metrics client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use shopdash_core::{DashboardSummary, MetricsSource};
use shopdash_shared::config::ApiConfig;
use shopdash_shared::{FetchError, FetchResult};
use tracing::{debug, warn};

/// Path of the summary endpoint, relative to the API base URL.
pub const DASHBOARD_PATH: &str = "admin/dashboard-data";

/// Longest error body kept in [`FetchError::Status`], in characters.
const MAX_ERROR_MESSAGE_CHARS: usize = 512;

/// Issues the single `GET /admin/dashboard-data` request.
///
/// No retries and no pagination. The configured timeout bounds every
/// request, so a hung backend settles as [`FetchError::Timeout`].
#[derive(Debug, Clone)]
pub struct MetricsClient {
    http: reqwest::Client,
    endpoint: Url,
    access_token: Option<String>,
}

impl MetricsClient {
    /// Builds a client from the API configuration.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::InvalidUrl` if the base URL cannot be parsed,
    /// or `FetchError::Network` if the HTTP stack cannot be initialised.
    pub fn new(config: &ApiConfig) -> FetchResult<Self> {
        let endpoint = endpoint_url(&config.base_url)?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self {
            http,
            endpoint,
            access_token: config.access_token.clone(),
        })
    }

    /// Returns the full URL of the summary endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetches and decodes the dashboard summary.
    ///
    /// # Errors
    ///
    /// Returns `Timeout` or `Network` for transport failures, `Status` for
    /// non-success responses and `Decode` for a body that is not a JSON
    /// object.
    pub async fn fetch_dashboard_summary(&self) -> FetchResult<DashboardSummary> {
        let mut request = self.http.get(self.endpoint.clone());
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        debug!(url = %self.endpoint, "Fetching dashboard summary");
        let response = request.send().await.map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.trim().is_empty() {
                status.canonical_reason().unwrap_or_default().to_string()
            } else {
                truncate_message(body.trim())
            };
            warn!(status = status.as_u16(), "Dashboard request rejected");
            return Err(FetchError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await.map_err(transport_error)?;
        serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[async_trait]
impl MetricsSource for MetricsClient {
    async fn fetch_dashboard_summary(&self) -> FetchResult<DashboardSummary> {
        Self::fetch_dashboard_summary(self).await
    }
}

/// Joins the summary path onto the base URL, keeping any path prefix
/// such as `/api/` even when the trailing slash is missing.
fn endpoint_url(base_url: &str) -> FetchResult<Url> {
    let mut base = Url::parse(base_url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
    if base.cannot_be_a_base() {
        return Err(FetchError::InvalidUrl(format!("{base_url} cannot be a base")));
    }
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(DASHBOARD_PATH)
        .map_err(|e| FetchError::InvalidUrl(e.to_string()))
}

/// Caps an error body at [`MAX_ERROR_MESSAGE_CHARS`] on a char boundary.
fn truncate_message(body: &str) -> String {
    match body.char_indices().nth(MAX_ERROR_MESSAGE_CHARS) {
        Some((end, _)) => format!("{}...", &body[..end]),
        None => body.to_string(),
    }
}

fn transport_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout(e.to_string())
    } else if e.is_decode() {
        FetchError::Decode(e.to_string())
    } else {
        FetchError::Network(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_keeps_api_prefix() {
        assert_eq!(
            endpoint_url("http://localhost:8000/api/").unwrap().as_str(),
            "http://localhost:8000/api/admin/dashboard-data"
        );
        assert_eq!(
            endpoint_url("http://localhost:8000/api").unwrap().as_str(),
            "http://localhost:8000/api/admin/dashboard-data"
        );
        assert_eq!(
            endpoint_url("https://shop.test").unwrap().as_str(),
            "https://shop.test/admin/dashboard-data"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            endpoint_url("not a url"),
            Err(FetchError::InvalidUrl(_))
        ));
        assert!(matches!(
            endpoint_url("mailto:ops@shop.test"),
            Err(FetchError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_truncate_message() {
        assert_eq!(truncate_message("database unavailable"), "database unavailable");

        let long = "é".repeat(MAX_ERROR_MESSAGE_CHARS + 100);
        let message = truncate_message(&long);
        assert_eq!(message.chars().count(), MAX_ERROR_MESSAGE_CHARS + 3);
        assert!(message.ends_with("é..."));
    }

    #[test]
    fn test_new_uses_config() {
        let client = MetricsClient::new(&ApiConfig {
            base_url: "http://admin.test/api/".into(),
            timeout_ms: 500,
            access_token: Some("token".into()),
        })
        .unwrap();

        assert_eq!(
            client.endpoint().as_str(),
            "http://admin.test/api/admin/dashboard-data"
        );
    }
}
