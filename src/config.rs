// src/config.rs
// =============================================================================
// Settings the scraper needs: where GitHub lives, where raw files live, how
// long to wait for a page and which User-Agent to send.
//
// Values come from command-line flags, which fall back to environment
// variables (a .env file is loaded first, see main.rs), which fall back to
// the defaults below.
// =============================================================================

use anyhow::{anyhow, bail, Context, Result};
use std::time::Duration;
use url::Url;

pub const DEFAULT_GITHUB_URL: &str = "https://github.com";
pub const DEFAULT_RAW_URL: &str = "https://raw.githubusercontent.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// GitHub serves reduced markup to clients it does not recognise as browsers.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Debug, Clone, PartialEq)]
pub struct ScraperConfig {
    /// Base for HTML pages, e.g. https://github.com
    pub github_url: Url,
    /// Base for README files, e.g. https://raw.githubusercontent.com
    pub raw_url: Url,
    /// Per-request timeout; a page slower than this counts as unreachable
    pub timeout: Duration,
    pub user_agent: String,
}

impl ScraperConfig {
    /// Builds a config from raw option values, validating each one.
    pub fn new(github_url: &str, raw_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self> {
        if timeout_secs == 0 {
            bail!("timeout must be at least one second");
        }
        if user_agent.trim().is_empty() {
            bail!("user agent must not be empty");
        }

        Ok(ScraperConfig {
            github_url: parse_base(github_url).context("invalid GitHub URL")?,
            raw_url: parse_base(raw_url).context("invalid raw-content URL")?,
            timeout: Duration::from_secs(timeout_secs),
            user_agent: user_agent.to_string(),
        })
    }
}

impl Default for ScraperConfig {
    fn default() -> Self {
        ScraperConfig {
            github_url: Url::parse(DEFAULT_GITHUB_URL).expect("default GitHub URL is valid"),
            raw_url: Url::parse(DEFAULT_RAW_URL).expect("default raw URL is valid"),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

// Only http(s) URLs can have path segments appended to them.
fn parse_base(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| anyhow!("'{}': {}", raw, e))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(anyhow!("'{}': unsupported scheme '{}'", raw, other)),
    }
}
