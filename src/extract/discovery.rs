// src/extract/discovery.rs
// =============================================================================
// Search results and trending pages. Both list repositories that belong to
// other people, so owner and name are read from each row's link.
// =============================================================================

use scraper::Html;
use url::Url;

use super::dom::{all, find_text, first, path_segments, resolve_url, text_of};
use super::optional;
use super::text::{count_token, parse_count};
use crate::models::{Repository, TrendingSince};

/// Extracts repository identifiers from a search results page.
pub fn parse_search_results(html: &str, base: &Url) -> Vec<Repository> {
    let document = Html::parse_document(html);
    let mut repositories = Vec::new();

    for item in all(document.root_element(), "div.f4") {
        let Some(url) = first(item, "a[href]")
            .and_then(|link| link.value().attr("href"))
            .and_then(|href| resolve_url(base, href))
        else {
            continue;
        };

        let segments = path_segments(&url);
        if segments.len() < 2 {
            continue;
        }

        let mut repo = Repository::named(&segments[0], &segments[1]);
        repo.owner = Some(segments[0].clone());
        repo.url = Some(url.to_string());
        repositories.push(repo);
    }

    repositories
}

/// Extracts the rows of a trending page.
///
/// `since` picks which "stars today / this week / this month" badge counts
/// as the star delta.
pub fn parse_trending(html: &str, base: &Url, since: TrendingSince) -> Vec<Repository> {
    let document = Html::parse_document(html);
    let mut repositories = Vec::new();

    for row in all(document.root_element(), "article.Box-row") {
        let Some(url) = first(row, "h2 a[href]")
            .and_then(|link| link.value().attr("href"))
            .and_then(|href| resolve_url(base, href))
        else {
            continue;
        };

        let segments = path_segments(&url);
        let [owner, name] = segments.as_slice() else {
            continue;
        };

        let mut repo = Repository::named(owner, name);
        repo.owner = Some(owner.clone());
        repo.url = Some(url.to_string());
        repo.description = optional(find_text(row, "description", "p.col-9"));
        repo.language = optional(find_text(
            row,
            "language",
            r#"span[itemprop="programmingLanguage"]"#,
        ));
        repo.stars_gained = Some(
            all(row, "span.d-inline-block")
                .into_iter()
                .map(text_of)
                .find(|text| text.contains(since.stars_phrase()))
                .and_then(|text| count_token(&text).map(parse_count))
                .unwrap_or(0),
        );

        repositories.push(repo);
    }

    repositories
}
