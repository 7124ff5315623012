//! HTTP client for the weekly circular page.

use std::time::Duration;

use circular_core::app_config::STORE_ID_PLACEHOLDER;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::Client;

use crate::error::ScraperError;

/// Fetches circular markup with a fixed timeout and browser-like headers.
///
/// A single GET per run: transient failures are reported, not retried.
#[derive(Debug, Clone)]
pub struct CircularClient {
    client: Client,
}

impl CircularClient {
    /// Creates a `CircularClient` with the configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .default_headers(headers)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches the raw markup at `url`.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::UnexpectedStatus`]: any non-2xx status.
    /// - [`ScraperError::Http`]: network, TLS, timeout or body-decoding failure.
    pub async fn fetch_markup(&self, url: &str) -> Result<String, ScraperError> {
        tracing::info!(url, "fetching circular page");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let body = response.text().await?;
        tracing::debug!(url, bytes = body.len(), "circular page fetched");
        Ok(body)
    }
}

/// Substitutes `store_id` into the `{store_id}` placeholder of `template`.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidUrl`] if the store id is blank or carries
/// characters other than ASCII letters, digits, `-` and `_`, or if the
/// resulting string is not an absolute http(s) URL.
pub fn circular_url(template: &str, store_id: &str) -> Result<String, ScraperError> {
    let store_id = store_id.trim();
    if store_id.is_empty() {
        return Err(ScraperError::InvalidUrl {
            url: template.to_owned(),
            reason: "store id is empty".to_owned(),
        });
    }

    if let Some(bad) = store_id
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_')))
    {
        return Err(ScraperError::InvalidUrl {
            url: template.to_owned(),
            reason: format!("store id {store_id:?} contains {bad:?}"),
        });
    }

    let url = template.replace(STORE_ID_PLACEHOLDER, store_id);
    let parsed = reqwest::Url::parse(&url).map_err(|e| ScraperError::InvalidUrl {
        url: url.clone(),
        reason: e.to_string(),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ScraperError::InvalidUrl {
            reason: format!("unsupported scheme {}", parsed.scheme()),
            url,
        });
    }

    Ok(url)
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
