//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests made for a lead, including:
//! - Building the HTTP client with the identifying user agent
//! - GET requests with redirect following and a fixed timeout
//! - Folding every failure into "no page"
//! - The politeness pause after each successful fetch

use crate::config::{FetchConfig, UserAgentConfig};
use reqwest::{redirect::Policy, Client};
use std::time::Duration;
use url::Url;

/// A successfully fetched page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub final_url: Url,

    /// Page body content
    pub body: String,
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `user_agent` - The user agent identification
/// * `fetch` - Timeout and redirect limits
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use readiness_scout::config::{FetchConfig, UserAgentConfig};
/// use readiness_scout::crawler::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default(), &FetchConfig::default()).unwrap();
/// ```
pub fn build_http_client(
    user_agent: &UserAgentConfig,
    fetch: &FetchConfig,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent.header_value())
        .timeout(fetch.timeout())
        .redirect(Policy::limited(fetch.max_redirects))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Page fetcher shared read-only by every lead pipeline
///
/// The politeness delay is applied inside the calling task only, so it spaces
/// out that lead's own requests without coordinating across leads.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
    politeness_delay: Duration,
}

impl PageFetcher {
    pub fn new(client: Client, politeness_delay: Duration) -> Self {
        Self {
            client,
            politeness_delay,
        }
    }

    /// Builds a fetcher from configuration
    pub fn from_config(
        user_agent: &UserAgentConfig,
        fetch: &FetchConfig,
    ) -> Result<Self, reqwest::Error> {
        let client = build_http_client(user_agent, fetch)?;
        Ok(Self::new(client, fetch.politeness_delay()))
    }

    /// Fetches a URL, returning `None` on any failure
    ///
    /// # Failure handling
    ///
    /// | Condition | Result |
    /// |-----------|--------|
    /// | Invalid URL / transport error | `None` |
    /// | Timeout | `None` |
    /// | Non-2xx status after redirects | `None` |
    /// | Body cannot be decoded | `None` |
    ///
    /// Nothing is retried. On success the task sleeps for the politeness delay
    /// before returning.
    pub async fn fetch(&self, url: &str) -> Option<FetchedPage> {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                if e.is_timeout() {
                    tracing::debug!("Request timeout for {}", url);
                } else if e.is_connect() {
                    tracing::debug!("Connection failed for {}: {}", url, e);
                } else {
                    tracing::debug!("Request failed for {}: {}", url, e);
                }
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("HTTP {} for {}", status.as_u16(), url);
            return None;
        }

        let final_url = response.url().clone();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!("Failed to read body of {}: {}", url, e);
                return None;
            }
        };

        if !self.politeness_delay.is_zero() {
            tokio::time::sleep(self.politeness_delay).await;
        }

        Some(FetchedPage { final_url, body })
    }
}
