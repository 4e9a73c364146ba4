//! HTTP fetcher implementation
//!
//! This module retrieves raw sitemap documents. A single client is built per
//! run and reused for every sub-sitemap. There is no retry: the first failure
//! is returned to the caller unchanged.

use crate::config::FetcherConfig;
use crate::FetchError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The fetcher configuration (timeout and user agent)
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use sitemap_sorter::config::FetcherConfig;
/// use sitemap_sorter::sitemap::build_http_client;
///
/// let client = build_http_client(&FetcherConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetcherConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Retrieves sitemap documents over HTTP(S)
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Creates a fetcher with a client built from `config`
    pub fn new(config: &FetcherConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::with_client(build_http_client(config)?))
    }

    /// Creates a fetcher around an existing client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Fetches a URL and returns the response body as text
    ///
    /// # Errors
    ///
    /// | Condition | Error |
    /// |-----------|-------|
    /// | URL does not parse | `FetchError::InvalidUrl` |
    /// | Request timed out | `FetchError::Timeout` |
    /// | Non-2xx status | `FetchError::Status` |
    /// | Connect / TLS / body read failure | `FetchError::Request` |
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        tracing::info!("Fetching sitemap from {}", url);

        let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| classify_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("Error fetching sitemap: HTTP {} for {}", status, url);
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| classify_error(url, e))?;
        tracing::debug!("Fetched {} bytes from {}", body.len(), url);

        Ok(body)
    }
}

/// Maps a transport error to the matching `FetchError`
fn classify_error(url: &str, error: reqwest::Error) -> FetchError {
    tracing::error!("Error fetching sitemap: {}", error);

    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::Request {
            url: url.to_string(),
            source: error,
        }
    }
}
