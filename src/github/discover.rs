// src/github/discover.rs
// =============================================================================
// Finding repositories that belong to anyone: search and trending.
// =============================================================================

use super::Scraper;
use crate::extract;
use crate::models::{Repository, SearchSort, SortOrder, TrendingSince};

impl Scraper {
    /// Repository search, first results page only.
    pub async fn search_repositories(
        &self,
        query: &str,
        sort: SearchSort,
        order: SortOrder,
    ) -> Vec<Repository> {
        let mut url = self.github_url(&["search"]);
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("type", "Repositories")
            .append_pair("s", sort.as_str())
            .append_pair("o", order.as_str());

        match self.fetch_or_warn(&url).await {
            Some(html) => extract::parse_search_results(&html, &self.config().github_url),
            None => Vec::new(),
        }
    }

    /// Trending repositories, optionally narrowed to one language.
    pub async fn trending(&self, language: Option<&str>, since: TrendingSince) -> Vec<Repository> {
        let mut url = match language.map(str::trim).filter(|l| !l.is_empty()) {
            Some(language) => self.github_url(&["trending", language]),
            None => self.github_url(&["trending"]),
        };
        url.query_pairs_mut().append_pair("since", since.as_str());

        match self.fetch_or_warn(&url).await {
            Some(html) => extract::parse_trending(&html, &self.config().github_url, since),
            None => Vec::new(),
        }
    }
}
