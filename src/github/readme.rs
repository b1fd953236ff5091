// src/github/readme.rs
// =============================================================================
// README lookup through the raw-content host.
//
// The default branch and the file name's casing are unknown without the API,
// so four candidates are tried in a fixed order and the first 200 wins:
//   1. main/README.md
//   2. master/README.md
//   3. main/readme.md
//   4. master/readme.md
// If none answers, the repository simply has no README we can see. That is
// not an error.
// =============================================================================

use log::debug;
use url::Url;

use super::Scraper;

const CANDIDATES: [(&str, &str); 4] = [
    ("main", "README.md"),
    ("master", "README.md"),
    ("main", "readme.md"),
    ("master", "readme.md"),
];

impl Scraper {
    /// The four raw URLs tried for a repository's README, in order.
    pub fn readme_candidates(&self, owner: &str, repo: &str) -> Vec<Url> {
        CANDIDATES
            .iter()
            .map(|&(branch, file)| self.raw_url(&[owner, repo, branch, file]))
            .collect()
    }

    /// Fetches the README text, or None when no candidate exists.
    pub async fn readme(&self, owner: &str, repo: &str) -> Option<String> {
        for url in self.readme_candidates(owner, repo) {
            match self.fetch_page(&url).await {
                Ok(content) => return Some(content),
                Err(e) => debug!("No README at {}: {}", url, e),
            }
        }

        debug!("No README found for {}/{}", owner, repo);
        None
    }
}
