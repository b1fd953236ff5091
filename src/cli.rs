// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Each subcommand is one scraper operation. Global options configure the
// scraper itself and can also be set through environment variables (or a
// .env file), which is handy when the tool runs behind a script or a cron job.
//
// Filter values (--state, --since, --sort, --order) parse straight into the
// enums from models.rs, so a typo is rejected by clap with the list of
// accepted values.
// =============================================================================

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use crate::config::{
    ScraperConfig, DEFAULT_GITHUB_URL, DEFAULT_RAW_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
use crate::github::RepoRef;
use crate::models::{IssueState, SearchSort, SortOrder, TrendingSince};

#[derive(Parser, Debug)]
#[command(
    name = "gh-scrape",
    version,
    about = "Scrape public GitHub pages into JSON, no API token required",
    long_about = "gh-scrape reads public GitHub pages (profiles, repositories, commits, issues, \
                  search, trending) and prints what it finds as a JSON envelope: \
                  {success, data, message, error}."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL for GitHub pages
    #[arg(long, env = "GH_SCRAPE_GITHUB_URL", default_value = DEFAULT_GITHUB_URL, global = true)]
    pub github_url: String,

    /// Base URL for raw file contents (README lookups)
    #[arg(long, env = "GH_SCRAPE_RAW_URL", default_value = DEFAULT_RAW_URL, global = true)]
    pub raw_url: String,

    /// Seconds to wait for each page before treating it as unreachable
    #[arg(long, env = "GH_SCRAPE_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[arg(long, env = "GH_SCRAPE_USER_AGENT", default_value = DEFAULT_USER_AGENT, global = true)]
    pub user_agent: String,

    /// Print JSON on a single line instead of pretty-printed
    #[arg(long, global = true)]
    pub compact: bool,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Cli {
    pub fn scraper_config(&self) -> Result<ScraperConfig> {
        ScraperConfig::new(
            &self.github_url,
            &self.raw_url,
            self.timeout_secs,
            &self.user_agent,
        )
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a user's profile
    ///
    /// Example: gh-scrape user octocat
    User {
        /// GitHub username
        username: String,
    },

    /// List a user's public repositories, with READMEs
    UserRepos {
        /// GitHub username
        username: String,

        /// Page of the Repositories tab
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
    },

    /// Show a repository: description, stats, topics, languages and README
    ///
    /// Example: gh-scrape repo rust-lang/rust
    Repo {
        /// owner/repo or a GitHub URL
        repo: RepoRef,
    },

    /// Print a repository's README
    Readme {
        /// owner/repo or a GitHub URL
        repo: RepoRef,
    },

    /// Show a repository's language breakdown in percent
    Languages {
        /// owner/repo or a GitHub URL
        repo: RepoRef,
    },

    /// List recent commits
    Commits {
        /// owner/repo or a GitHub URL
        repo: RepoRef,

        /// Page of the commit history
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
    },

    /// List issues
    Issues {
        /// owner/repo or a GitHub URL
        repo: RepoRef,

        /// Which issues to list: open, closed or all
        #[arg(long, default_value_t = IssueState::Open)]
        state: IssueState,
    },

    /// Show an organization's profile
    Org {
        /// Organization login
        name: String,
    },

    /// List an organization's public repositories, with READMEs
    OrgRepos {
        /// Organization login
        name: String,

        /// Page of the Repositories tab
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
    },

    /// Search repositories
    ///
    /// Example: gh-scrape search "http client" --sort forks
    Search {
        /// Search query
        query: String,

        /// Sort by: stars, forks or updated
        #[arg(long, default_value_t = SearchSort::Stars)]
        sort: SearchSort,

        /// Sort order: asc or desc
        #[arg(long, default_value_t = SortOrder::Desc)]
        order: SortOrder,
    },

    /// List trending repositories
    ///
    /// Example: gh-scrape trending --language rust --since weekly
    Trending {
        /// Only repositories in this language
        #[arg(long)]
        language: Option<String>,

        /// Time window: daily, weekly or monthly
        #[arg(long, default_value_t = TrendingSince::Daily)]
        since: TrendingSince,
    },
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. How do RepoRef and IssueState get parsed?
//    - clap falls back to FromStr for any argument type that implements it
//    - RepoRef::from_str accepts "owner/repo" as well as GitHub URLs
//    - default_value_t needs Display, which the filter enums implement
//
// 2. Why `global = true`?
//    - Global options may appear before or after the subcommand:
//      gh-scrape --compact user octocat
//      gh-scrape user octocat --compact
// -----------------------------------------------------------------------------
