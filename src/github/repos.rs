// src/github/repos.rs
// =============================================================================
// Repository-level operations.
//
// repository() combines the home page (description, stats, topics, language
// breakdown) with a README lookup. languages() fetches the same home page on
// its own for callers that only want the breakdown.
// =============================================================================

use super::error::{Entity, LookupError};
use super::Scraper;
use crate::extract;
use crate::models::{Commit, Issue, IssueState, LanguageBreakdown, Repository};

impl Scraper {
    /// Scrapes `github.com/<owner>/<repo>` and attaches its README.
    pub async fn repository(&self, owner: &str, repo: &str) -> Result<Repository, LookupError> {
        let url = self.github_url(&[owner, repo]);
        let html = self.fetch_page(&url).await.map_err(|source| LookupError {
            entity: Entity::Repository,
            url: url.to_string(),
            source,
        })?;

        let mut record = extract::parse_repository_page(&html, owner, repo, &url);
        record.readme_content = self.readme(owner, repo).await;
        Ok(record)
    }

    /// Language name -> percent, empty when the page cannot be fetched.
    pub async fn languages(&self, owner: &str, repo: &str) -> LanguageBreakdown {
        let url = self.github_url(&[owner, repo]);
        match self.fetch_or_warn(&url).await {
            Some(html) => extract::parse_languages(&html),
            None => LanguageBreakdown::new(),
        }
    }

    /// One page of the commit history.
    pub async fn commits(&self, owner: &str, repo: &str, page: u32) -> Vec<Commit> {
        let mut url = self.github_url(&[owner, repo, "commits"]);
        url.query_pairs_mut().append_pair("page", &page.to_string());

        match self.fetch_or_warn(&url).await {
            Some(html) => extract::parse_commits(&html, &self.config().github_url),
            None => Vec::new(),
        }
    }

    /// The first page of issues matching `state`.
    pub async fn issues(&self, owner: &str, repo: &str, state: IssueState) -> Vec<Issue> {
        let query = match state {
            IssueState::All => "is:issue".to_string(),
            other => format!("is:issue is:{}", other),
        };
        let mut url = self.github_url(&[owner, repo, "issues"]);
        url.query_pairs_mut().append_pair("q", &query);

        match self.fetch_or_warn(&url).await {
            Some(html) => extract::parse_issues(&html, &self.config().github_url, state),
            None => Vec::new(),
        }
    }
}
