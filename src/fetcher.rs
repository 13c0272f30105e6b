//! # Fetcher Module
//!
//! The HTTP seam between the collector and the network.
//!
//! `PageFetcher` is the trait the collector is generic over; `HttpFetcher`
//! is the `reqwest`-backed session handle used in production. The handle is
//! constructed explicitly at the start of the collection phase and dropped
//! at its end, so the connection pool's lifetime is visible at the call
//! site rather than hidden in module state.

use std::time::Duration;

use async_trait::async_trait;
use rand::seq::SliceRandom;
use reqwest::header::USER_AGENT;
use tracing::debug;
use url::Url;

use crate::error::ScrapeError;

/// Desktop user agents rotated across requests.
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/125.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:127.0) Gecko/20100101 Firefox/127.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Safari/605.1.15",
];

/// The fetch seam: given a URL, produce the page body.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_html(&self, url: &Url) -> Result<String, ScrapeError>;
}

/// `reqwest`-backed fetcher holding the HTTP session for a collection phase.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Builds the session with the given per-request timeout.
    pub fn new(timeout: Duration) -> Result<Self, ScrapeError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ScrapeError::Configuration(format!("http client: {e}")))?;
        Ok(Self { client })
    }

    /// Fetches a binary body; used by the gallery downloader.
    pub async fn fetch_bytes(&self, url: &Url) -> Result<Vec<u8>, ScrapeError> {
        let response = self.send(url).await?;
        let bytes = response.bytes().await.map_err(|source| ScrapeError::Http {
            url: url.to_string(),
            source,
        })?;
        Ok(bytes.to_vec())
    }

    async fn send(&self, url: &Url) -> Result<reqwest::Response, ScrapeError> {
        let response = self
            .client
            .get(url.clone())
            .header(USER_AGENT, random_user_agent())
            .send()
            .await
            .map_err(|source| ScrapeError::Http {
                url: url.to_string(),
                source,
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status,
            });
        }
        debug!(%url, %status, "request succeeded");
        Ok(response)
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_html(&self, url: &Url) -> Result<String, ScrapeError> {
        let response = self.send(url).await?;
        response.text().await.map_err(|source| ScrapeError::Http {
            url: url.to_string(),
            source,
        })
    }
}

fn random_user_agent() -> &'static str {
    USER_AGENTS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(USER_AGENTS[0])
}
