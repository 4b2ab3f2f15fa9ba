//! HTTP fetching for page bodies and favicon images

use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::config::FetchConfig;

/// Errors that can occur while fetching a resource.
///
/// Callers in the scoring pipeline degrade any of these to "no content" for
/// the affected signal; none of them aborts a batch.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("failed to parse URL: {0}")]
    InvalidUrl(String),
    #[error("content too large: {0} bytes")]
    TooLarge(usize),
}

/// HTTP fetcher shared by all pair evaluations.
///
/// Holds one connection-pooled client; per-request timeouts distinguish page
/// fetches from (defensively bounded) image fetches.
pub struct PageFetcher {
    client: reqwest::Client,
    config: FetchConfig,
}

impl PageFetcher {
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .user_agent(&config.user_agent)
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self { client, config })
    }

    /// Fetch a domain's page body as text.
    ///
    /// The bare domain is normalized with [`ensure_http`] first. Non-2xx
    /// statuses are an explicit error so the call site decides how to degrade.
    pub async fn fetch_page(&self, domain: &str) -> Result<String, FetchError> {
        let url = Url::parse(&ensure_http(domain))
            .map_err(|e| FetchError::InvalidUrl(e.to_string()))?;

        let response = self
            .client
            .get(url)
            .timeout(Duration::from_secs(self.config.page_timeout_secs))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }

    /// Fetch raw bytes (favicon image) from an already-resolved URL.
    pub async fn fetch_bytes(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .timeout(Duration::from_secs(self.config.image_timeout_secs))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        if let Some(len) = response.content_length() {
            if len as usize > self.config.max_image_bytes {
                return Err(FetchError::TooLarge(len as usize));
            }
        }

        let bytes = response.bytes().await?;
        if bytes.len() > self.config.max_image_bytes {
            return Err(FetchError::TooLarge(bytes.len()));
        }

        Ok(bytes.to_vec())
    }
}

/// Normalize a bare domain to an absolute URL, defaulting to `http://`.
pub fn ensure_http(domain: &str) -> String {
    if domain.starts_with("http://") || domain.starts_with("https://") {
        domain.to_string()
    } else {
        format!("http://{domain}")
    }
}
