// src/github/users.rs
// =============================================================================
// Account-level operations: user and organization profiles, and the
// Repositories tab both kinds of account share.
// =============================================================================

use log::info;

use super::error::{Entity, LookupError};
use super::Scraper;
use crate::extract;
use crate::models::{Organization, Repository, User};

impl Scraper {
    /// Scrapes `github.com/<username>`.
    pub async fn user_profile(&self, username: &str) -> Result<User, LookupError> {
        let url = self.github_url(&[username]);
        let html = self.fetch_page(&url).await.map_err(|source| LookupError {
            entity: Entity::User,
            url: url.to_string(),
            source,
        })?;

        Ok(extract::parse_user_profile(&html, username))
    }

    /// Scrapes one page of a user's Repositories tab, then fetches each
    /// repository's README, one after another.
    pub async fn user_repositories(&self, username: &str, page: u32) -> Vec<Repository> {
        let mut url = self.github_url(&[username]);
        url.query_pairs_mut()
            .append_pair("tab", "repositories")
            .append_pair("page", &page.to_string());

        let Some(html) = self.fetch_or_warn(&url).await else {
            return Vec::new();
        };

        let mut repositories = extract::parse_repository_list(&html, username, &self.config().github_url);
        info!("Found {} repositories for {} (page {})", repositories.len(), username, page);

        for repo in &mut repositories {
            repo.readme_content = self.readme(username, &repo.name).await;
        }

        repositories
    }

    /// Scrapes `github.com/<org_name>`.
    pub async fn organization(&self, org_name: &str) -> Result<Organization, LookupError> {
        let url = self.github_url(&[org_name]);
        let html = self.fetch_page(&url).await.map_err(|source| LookupError {
            entity: Entity::Organization,
            url: url.to_string(),
            source,
        })?;

        Ok(extract::parse_organization(&html, org_name))
    }

    /// Organizations list their repositories on the same tab as users.
    pub async fn organization_repositories(&self, org_name: &str, page: u32) -> Vec<Repository> {
        self.user_repositories(org_name, page).await
    }
}
