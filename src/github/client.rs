// src/github/client.rs
// =============================================================================
// The Scraper: an HTTP client plus the configuration it was built with.
//
// Each operation (see users.rs, repos.rs, discover.rs, readme.rs) is one
// stateless fetch -> parse -> extract cycle. Nothing is cached between calls
// and nothing is retried.
//
// The reqwest::Client inside holds the connection pool. It is created once
// per Scraper and released when the Scraper is dropped. Cloning a Scraper is
// cheap and shares the pool, so one instance can serve concurrent callers.
// =============================================================================

use anyhow::{Context, Result};
use log::{info, warn};
use reqwest::{header, Client, StatusCode};
use url::Url;

use super::error::PageError;
use crate::config::ScraperConfig;

#[derive(Debug, Clone)]
pub struct Scraper {
    client: Client,
    config: ScraperConfig,
}

impl Scraper {
    /// Builds a Scraper with its own client, configured from `config`.
    pub fn new(config: ScraperConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .default_headers(default_headers())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self::with_client(client, config))
    }

    /// Builds a Scraper around an existing client.
    ///
    /// The client's own timeout and User-Agent settings apply; the ones in
    /// `config` are only used by [`Scraper::new`].
    pub fn with_client(client: Client, config: ScraperConfig) -> Self {
        Scraper { client, config }
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /// `{github}/{segments...}`, each segment percent-encoded.
    pub(crate) fn github_url(&self, segments: &[&str]) -> Url {
        join_segments(&self.config.github_url, segments)
    }

    /// `{raw}/{segments...}`, each segment percent-encoded.
    pub(crate) fn raw_url(&self, segments: &[&str]) -> Url {
        join_segments(&self.config.raw_url, segments)
    }

    /// Fetches a page and returns its body. Only 200 OK counts as success.
    pub(crate) async fn fetch_page(&self, url: &Url) -> Result<String, PageError> {
        info!("GET {}", url);

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(PageError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }

    /// Like [`Scraper::fetch_page`], for operations that degrade to an empty
    /// result: the failure is logged and swallowed.
    pub(crate) async fn fetch_or_warn(&self, url: &Url) -> Option<String> {
        match self.fetch_page(url).await {
            Ok(html) => Some(html),
            Err(e) => {
                warn!("Could not fetch {}: {}", url, e);
                None
            }
        }
    }
}

fn default_headers() -> header::HeaderMap {
    let mut headers = header::HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static("text/html,application/xhtml+xml,text/plain;q=0.9,*/*;q=0.8"),
    );
    headers.insert(
        header::ACCEPT_LANGUAGE,
        header::HeaderValue::from_static("en-US,en;q=0.9"),
    );
    headers
}

fn join_segments(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    // Config only accepts http(s) bases, which always have a path to extend.
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}
