// src/github/repo_ref.rs
// =============================================================================
// Parsing "which repository" from the command line.
//
// Accepted forms:
//   - owner/repo
//   - github.com/owner/repo
//   - https://github.com/owner/repo
//   - https://github.com/owner/repo.git
//   - https://github.com/owner/repo/tree/main/src (extra segments ignored)
// =============================================================================

use anyhow::{anyhow, Error, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name())
    }
}

impl FromStr for RepoRef {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        let trimmed = input
            .trim()
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_start_matches("www.");

        // A bare "owner/repo" has no host; anything with a dot in the first
        // segment is a host and must be GitHub.
        let path = match trimmed.split_once('/') {
            Some((host, rest)) if host.contains('.') => {
                if host != "github.com" {
                    return Err(anyhow!("Not a GitHub URL: {}", input));
                }
                rest
            }
            _ => trimmed,
        };

        let mut parts = path.split('/').filter(|part| !part.is_empty());
        let (Some(owner), Some(repo)) = (parts.next(), parts.next()) else {
            return Err(anyhow!(
                "Invalid repository '{}', expected owner/repo or a GitHub URL",
                input
            ));
        };

        let name = repo.strip_suffix(".git").unwrap_or(repo);
        if name.is_empty() {
            return Err(anyhow!("Invalid repository '{}': empty name", input));
        }

        Ok(RepoRef {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}
