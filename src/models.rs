// src/models.rs
// =============================================================================
// Records produced by one scrape, plus the JSON envelope they are printed in.
//
// Every record is flat. Apart from the identifying fields (a username, a repo
// name, a commit sha...) all fields are Option, because each one comes from a
// separate DOM lookup that may find nothing. Absent fields are left out of the
// JSON entirely.
//
// The filter enums (IssueState, TrendingSince, SearchSort, SortOrder) replace
// free-form strings so that invalid values are rejected when the command line
// is parsed, not when the URL is built.
// =============================================================================

use serde::{Deserialize, Serialize};
use indexmap::IndexMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Language name -> share of the codebase in percent, in the order GitHub
/// lists them (largest share first).
pub type LanguageBreakdown = IndexMap<String, f64>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub followers: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub following: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_repos: Option<u64>,
}

/// A repository as seen from any of the pages that list or describe one.
///
/// Which fields get filled depends on the page: search results only carry
/// identifiers, trending rows carry `stars_gained`, the detail page carries
/// topics and the language breakdown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<LanguageBreakdown>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stargazers_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forks_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readme_content: Option<String>,
    /// Stars gained during the trending window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stars_gained: Option<u64>,
}

impl Repository {
    /// Starts a record from an `owner/name` pair.
    pub fn named(owner: &str, name: &str) -> Self {
        Repository {
            name: name.to_string(),
            full_name: Some(format!("{}/{}", owner, name)),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commit {
    pub sha: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// ISO-8601 timestamp, as GitHub puts it in `<relative-time datetime=...>`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    pub state: IssueState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub labels: Vec<String>,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blog: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

// -----------------------------------------------------------------------------
// Response envelope
// -----------------------------------------------------------------------------

/// The uniform `{success, data, message, error}` wrapper every command prints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>, message: impl Into<String>) -> Self {
        ApiResponse {
            success: false,
            data: None,
            message: Some(message.into()),
            error: Some(error.into()),
        }
    }
}

// -----------------------------------------------------------------------------
// Filters
// -----------------------------------------------------------------------------

/// Error returned when a filter value is not one of the accepted names.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid {kind} '{value}' (expected one of: {})", .expected.join(", "))]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static [&'static str],
}

// Generates as_str / Display / FromStr for a fieldless filter enum whose
// textual form is the lowercase variant name used in GitHub's URLs.
macro_rules! filter_enum {
    ($name:ident, $kind:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $name {
            pub const NAMES: &'static [&'static str] = &[$($text),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(UnknownVariant {
                        kind: $kind,
                        value: other.to_string(),
                        expected: Self::NAMES,
                    }),
                }
            }
        }
    };
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    #[default]
    Open,
    Closed,
    All,
}

filter_enum!(IssueState, "issue state", { Open => "open", Closed => "closed", All => "all" });

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendingSince {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

filter_enum!(TrendingSince, "time window", { Daily => "daily", Weekly => "weekly", Monthly => "monthly" });

impl TrendingSince {
    /// The phrase GitHub prints next to the star delta for this window.
    pub fn stars_phrase(&self) -> &'static str {
        match self {
            TrendingSince::Daily => "stars today",
            TrendingSince::Weekly => "stars this week",
            TrendingSince::Monthly => "stars this month",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchSort {
    #[default]
    Stars,
    Forks,
    Updated,
}

filter_enum!(SearchSort, "sort key", { Stars => "stars", Forks => "forks", Updated => "updated" });

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

filter_enum!(SortOrder, "sort order", { Asc => "asc", Desc => "desc" });
