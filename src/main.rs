// src/main.rs
// =============================================================================
// Entry point of the gh-scrape CLI.
//
// What happens here:
// 1. Load a .env file (if any) so options can come from the environment
// 2. Parse command-line arguments using clap
// 3. Set up logging on stderr (stdout is reserved for JSON)
// 4. Build the Scraper and run the requested operation
// 5. Print the {success, data, message, error} envelope
// 6. Exit with a code scripts can check (0 = success, 1 = lookup failed,
//    2 = internal error)
// =============================================================================

mod cli;
mod config;
mod extract;
mod github;
mod models;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use serde::Serialize;
use simple_logger::SimpleLogger;

use cli::{Cli, Commands};
use github::Scraper;
use models::ApiResponse;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    // RUST_LOG overrides the -v flags. HTTP and HTML parsing internals stay
    // quiet unless RUST_LOG asks for them.
    let logger = SimpleLogger::new()
        .with_level(level)
        .with_module_level("hyper", LevelFilter::Warn)
        .with_module_level("reqwest", LevelFilter::Warn)
        .with_module_level("rustls", LevelFilter::Warn)
        .with_module_level("html5ever", LevelFilter::Warn)
        .with_module_level("selectors", LevelFilter::Warn)
        .env();

    if let Err(e) = logger.init() {
        eprintln!("Warning: could not initialise logging: {}", e);
    }
}

// Dispatches the subcommand and prints its envelope.
async fn run(cli: Cli) -> Result<i32> {
    let scraper = Scraper::new(cli.scraper_config()?)?;
    let compact = cli.compact;

    match cli.command {
        Commands::User { username } => {
            let response = match scraper.user_profile(&username).await {
                Ok(user) => {
                    ApiResponse::ok(user, format!("Successfully fetched profile for {}", username))
                }
                Err(e) => ApiResponse::failed(e.to_string(), "Failed to fetch user profile"),
            };
            emit(&response, compact)
        }

        Commands::UserRepos { username, page } => {
            let repos = scraper.user_repositories(&username, page).await;
            let message = format!("Successfully fetched repositories for {}", username);
            emit(&ApiResponse::ok(repos, message), compact)
        }

        Commands::Repo { repo } => {
            let response = match scraper.repository(&repo.owner, &repo.name).await {
                Ok(record) => {
                    ApiResponse::ok(record, format!("Successfully fetched repository {}", repo))
                }
                Err(e) => ApiResponse::failed(e.to_string(), "Failed to fetch repository information"),
            };
            emit(&response, compact)
        }

        Commands::Readme { repo } => {
            let response = match scraper.readme(&repo.owner, &repo.name).await {
                Some(readme) => ApiResponse::ok(
                    serde_json::json!({ "readme": readme }),
                    "Successfully fetched README",
                ),
                None => ApiResponse::failed("README not found", "Failed to fetch README"),
            };
            emit(&response, compact)
        }

        Commands::Languages { repo } => {
            let languages = scraper.languages(&repo.owner, &repo.name).await;
            emit(
                &ApiResponse::ok(languages, "Successfully fetched repository languages"),
                compact,
            )
        }

        Commands::Commits { repo, page } => {
            let commits = scraper.commits(&repo.owner, &repo.name, page).await;
            emit(
                &ApiResponse::ok(commits, "Successfully fetched repository commits"),
                compact,
            )
        }

        Commands::Issues { repo, state } => {
            let issues = scraper.issues(&repo.owner, &repo.name, state).await;
            emit(
                &ApiResponse::ok(issues, "Successfully fetched repository issues"),
                compact,
            )
        }

        Commands::Org { name } => {
            let response = match scraper.organization(&name).await {
                Ok(org) => ApiResponse::ok(org, format!("Successfully fetched organization {}", name)),
                Err(e) => {
                    ApiResponse::failed(e.to_string(), "Failed to fetch organization information")
                }
            };
            emit(&response, compact)
        }

        Commands::OrgRepos { name, page } => {
            let repos = scraper.organization_repositories(&name, page).await;
            let message = format!("Successfully fetched repositories for {}", name);
            emit(&ApiResponse::ok(repos, message), compact)
        }

        Commands::Search { query, sort, order } => {
            let repos = scraper.search_repositories(&query, sort, order).await;
            let message = format!("Found {} repositories", repos.len());
            emit(&ApiResponse::ok(repos, message), compact)
        }

        Commands::Trending { language, since } => {
            let repos = scraper.trending(language.as_deref(), since).await;
            let message = format!("Found {} trending repositories", repos.len());
            emit(&ApiResponse::ok(repos, message), compact)
        }
    }
}

// Prints the envelope on stdout and maps it to an exit code.
fn emit<T: Serialize>(response: &ApiResponse<T>, compact: bool) -> Result<i32> {
    let json = if compact {
        serde_json::to_string(response)?
    } else {
        serde_json::to_string_pretty(response)?
    };
    println!("{}", json);

    Ok(if response.success { 0 } else { 1 })
}
