//! HTTP client for the job-listing API.

use std::time::Duration;

use reqwest::Client;

use crate::error::FetchError;
use crate::types::JobsResponse;

/// Upper bound on the TCP/TLS connect phase; never longer than the overall
/// request timeout.
const MAX_CONNECT_TIMEOUT_SECS: u64 = 10;

fn connect_timeout(timeout_secs: u64) -> Duration {
    Duration::from_secs(timeout_secs.min(MAX_CONNECT_TIMEOUT_SECS))
}

/// HTTP client for a single-page job-listing fetch.
///
/// Non-2xx responses surface as [`FetchError::UnexpectedStatus`] carrying the
/// status code. Nothing is retried.
pub struct JobsClient {
    client: Client,
}

impl JobsClient {
    /// Creates a `JobsClient` with the given request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(connect_timeout(timeout_secs))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches one page of listings from `url` and decodes the envelope.
    ///
    /// The listings themselves are returned undecoded; see
    /// [`crate::extract::extract_row`].
    ///
    /// # Errors
    ///
    /// - [`FetchError::UnexpectedStatus`] — any non-2xx status.
    /// - [`FetchError::Http`] — network, TLS or timeout failure.
    /// - [`FetchError::Deserialize`] — body is not JSON or has no `results` array.
    pub async fn fetch_jobs(&self, url: &str) -> Result<JobsResponse, FetchError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .inspect_err(|e| tracing::error!(url, error = %e, "job listing request failed"))?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(
                url,
                status = status.as_u16(),
                "job listing API returned non-success status"
            );
            return Err(FetchError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let body = response.text().await?;
        let parsed = parse_jobs_response(&body, url)?;

        tracing::debug!(
            url,
            results = parsed.results.len(),
            page = ?parsed.page,
            page_count = ?parsed.page_count,
            total = ?parsed.total,
            "fetched job listings page"
        );

        Ok(parsed)
    }
}

fn parse_jobs_response(body: &str, url: &str) -> Result<JobsResponse, FetchError> {
    serde_json::from_str::<JobsResponse>(body).map_err(|e| {
        tracing::error!(url, error = %e, "job listing response did not match expected shape");
        FetchError::Deserialize {
            context: format!("jobs page from {url}"),
            source: e,
        }
    })
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
