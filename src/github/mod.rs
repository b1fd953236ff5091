// src/github/mod.rs
// =============================================================================
// This module fetches GitHub pages and turns them into records.
//
// Submodules:
// - client: the Scraper (HTTP client + config) and the raw page fetch
// - error: PageError and the LookupError marker
// - users: user/organization profiles and their Repositories tab
// - repos: repository detail, languages, commits, issues
// - discover: search and trending
// - readme: README lookup on the raw-content host
// - repo_ref: "owner/repo" or URL parsing for the command line
//
// Failure policy, shared by every operation:
// - user, repository and organization lookups return Err(LookupError)
// - list operations return an empty Vec
// - a missing README is None
// Nothing panics and nothing is retried.
// =============================================================================

mod client;
mod discover;
mod error;
mod readme;
mod repo_ref;
mod repos;
mod users;

#[cfg(test)]
mod testserver;

pub use client::Scraper;
pub use repo_ref::RepoRef;
