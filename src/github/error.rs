// src/github/error.rs
// =============================================================================
// Errors at the scraper boundary.
//
// PageError: why a page could not be fetched. reqwest errors are sorted into
// a few kinds the same way for every request (timeout, connection, other).
//
// LookupError: the error marker returned by single-entity lookups (user,
// repository, organization). List lookups never return it; they return an
// empty list instead.
// =============================================================================

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PageError {
    /// The server answered with something other than 200 OK
    #[error("HTTP {0}")]
    Status(u16),
    /// No answer within the configured timeout
    #[error("request timed out")]
    Timeout,
    /// Could not connect (DNS failure, refused, unreachable host)
    #[error("connection failed: {0}")]
    Connect(String),
    /// Anything else reqwest reports (TLS, body decoding, redirect loops...)
    #[error("request failed: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for PageError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            PageError::Timeout
        } else if error.is_connect() {
            PageError::Connect(error.to_string())
        } else if let Some(status) = error.status() {
            PageError::Status(status.as_u16())
        } else {
            PageError::Transport(error.to_string())
        }
    }
}

/// The kind of record a failed lookup was after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    User,
    Repository,
    Organization,
}

impl Entity {
    /// Short marker describing which lookup failed.
    pub fn marker(&self) -> &'static str {
        match self {
            Entity::User => "Failed to fetch user profile",
            Entity::Repository => "Repository not found",
            Entity::Organization => "Organization not found",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("{}: {source} ({url})", .entity.marker())]
pub struct LookupError {
    pub entity: Entity,
    pub url: String,
    #[source]
    pub source: PageError,
}
