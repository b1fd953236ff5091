// src/extract/repository.rs
// =============================================================================
// Repository pages:
// - the "Repositories" tab of a user or organization (a list of rows)
// - a repository's home page (description, stats, topics, languages)
//
// The README is not on either page in a usable form; the scraper fetches it
// separately from the raw-content host and attaches it afterwards.
// =============================================================================

use scraper::{ElementRef, Html};
use url::Url;

use super::dom::{all, find_count, find_text, first, resolve_url, text_of};
use super::text::parse_percent;
use super::{optional, FieldResult};
use crate::models::{LanguageBreakdown, Repository};

/// Extracts the rows of a `?tab=repositories` page.
///
/// Rows without a repository link are skipped. Star and fork links are only
/// rendered for non-zero counts, so a missing link reads as 0.
pub fn parse_repository_list(html: &str, owner: &str, base: &Url) -> Vec<Repository> {
    let document = Html::parse_document(html);
    let mut repositories = Vec::new();

    for row in all(document.root_element(), "div.col-10") {
        let Some(link) = first(row, r#"a[itemprop="name codeRepository"]"#) else {
            continue;
        };
        let name = text_of(link);
        if name.is_empty() {
            continue;
        }

        let mut repo = Repository::named(owner, &name);
        repo.url = link
            .value()
            .attr("href")
            .and_then(|href| resolve_url(base, href))
            .map(String::from);
        repo.description = optional(find_text(row, "description", r#"p[itemprop="about"]"#));
        repo.language = optional(find_text(
            row,
            "language",
            r#"span[itemprop="programmingLanguage"]"#,
        ));
        repo.stargazers_count =
            optional(find_count(row, "stargazers_count", r#"a[href*="stargazers"]"#)).or(Some(0));
        repo.forks_count =
            optional(find_count(row, "forks_count", r#"a[href*="forks"]"#)).or(Some(0));

        repositories.push(repo);
    }

    repositories
}

/// Extracts a repository home page into a record (without README).
pub fn parse_repository_page(html: &str, owner: &str, name: &str, page_url: &Url) -> Repository {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let mut repo = Repository::named(owner, name);
    repo.url = Some(page_url.to_string());
    repo.description = optional(find_text(root, "description", "p.f4"));

    let stats = first(root, "#repo-stats-counter");
    repo.stargazers_count = optional(stat(root, stats, "stargazers_count", r#"a[href*="stargazers"]"#));
    repo.forks_count = optional(stat(root, stats, "forks_count", r#"a[href*="forks"]"#));

    let section = language_section(root);
    repo.language = section.and_then(|s| optional(find_text(s, "language", "span.color-fg-default")));
    repo.languages = Some(section.map(breakdown).unwrap_or_default());

    repo.topics = Some(
        all(root, "a.topic-tag")
            .into_iter()
            .map(text_of)
            .filter(|topic| !topic.is_empty())
            .collect(),
    );

    repo
}

/// Extracts the language bar of a repository home page.
pub fn parse_languages(html: &str) -> LanguageBreakdown {
    let document = Html::parse_document(html);
    language_section(document.root_element())
        .map(breakdown)
        .unwrap_or_default()
}

// Looks inside the stats container first, then anywhere on the page.
fn stat(
    root: ElementRef<'_>,
    stats: Option<ElementRef<'_>>,
    field: &'static str,
    css: &str,
) -> FieldResult<u64> {
    if let Some(scope) = stats {
        if let Ok(count) = find_count(scope, field, css) {
            return Ok(count);
        }
    }
    find_count(root, field, css)
}

// The sidebar is a stack of BorderGrid rows; the languages row is the one
// holding percentage entries. Falls back to the first row.
fn language_section(root: ElementRef<'_>) -> Option<ElementRef<'_>> {
    let rows = all(root, "div.BorderGrid-row");
    rows.iter()
        .copied()
        .find(|row| first(*row, "a.d-inline-flex span.percent").is_some())
        .or_else(|| rows.first().copied())
}

fn breakdown(section: ElementRef<'_>) -> LanguageBreakdown {
    let mut languages = LanguageBreakdown::new();

    for entry in all(section, "a.d-inline-flex") {
        let name = optional(find_text(entry, "language", "span.color-fg-default"));
        let percent = optional(
            find_text(entry, "percent", "span.percent").and_then(|raw| parse_percent("percent", &raw)),
        );
        if let (Some(name), Some(percent)) = (name, percent) {
            languages.insert(name, percent);
        }
    }

    languages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://github.com").unwrap()
    }

    const REPO_TAB: &str = r#"
        <div id="user-repositories-list"><ul>
          <li>
            <div class="col-10 col-lg-9 d-inline-block">
              <h3><a href="/octocat/Hello-World" itemprop="name codeRepository"> Hello-World </a></h3>
              <p itemprop="about">My first repository on GitHub!</p>
              <span itemprop="programmingLanguage">Ruby</span>
              <a class="Link--muted" href="/octocat/Hello-World/stargazers"> 2.8k </a>
              <a class="Link--muted" href="/octocat/Hello-World/forks"> 1,904 </a>
            </div>
          </li>
          <li>
            <div class="col-10 col-lg-9 d-inline-block">
              <h3><a href="/octocat/linguist" itemprop="name codeRepository">linguist</a></h3>
            </div>
          </li>
          <li>
            <div class="col-10 col-lg-9 d-inline-block"><span>not a repository row</span></div>
          </li>
        </ul></div>
    "#;

    #[test]
    fn test_repository_list() {
        let repos = parse_repository_list(REPO_TAB, "octocat", &base());
        assert_eq!(repos.len(), 2);

        let hello = &repos[0];
        assert_eq!(hello.name, "Hello-World");
        assert_eq!(hello.full_name.as_deref(), Some("octocat/Hello-World"));
        assert_eq!(hello.url.as_deref(), Some("https://github.com/octocat/Hello-World"));
        assert_eq!(hello.description.as_deref(), Some("My first repository on GitHub!"));
        assert_eq!(hello.language.as_deref(), Some("Ruby"));
        assert_eq!(hello.stargazers_count, Some(2800));
        assert_eq!(hello.forks_count, Some(1904));

        let linguist = &repos[1];
        assert_eq!(linguist.name, "linguist");
        assert_eq!(linguist.description, None);
        assert_eq!(linguist.language, None);
        assert_eq!(linguist.stargazers_count, Some(0));
        assert_eq!(linguist.forks_count, Some(0));
    }

    const REPO_PAGE: &str = r#"
        <html><body>
          <ul class="pagehead-actions">
            <li><a href="/rust-lang/rust/stargazers"><span id="repo-stats-counter" class="Counter">98.1k</span></a></li>
          </ul>
          <div class="Layout-sidebar">
            <div class="BorderGrid-row">
              <h2>About</h2>
              <p class="f4 my-3">Empowering everyone to build reliable and efficient software.</p>
              <a class="topic-tag topic-tag-link" href="/topics/rust"> rust </a>
              <a class="topic-tag topic-tag-link" href="/topics/compiler">compiler</a>
              <a class="Link--muted" href="/rust-lang/rust/forks"><strong>12.7k</strong> forks</a>
            </div>
            <div class="BorderGrid-row">
              <h2>Languages</h2>
              <ul>
                <li><a class="d-inline-flex" href="/rust-lang/rust/search?l=rust">
                  <span class="color-fg-default text-bold mr-1">Rust</span><span class="percent">96.2%</span></a></li>
                <li><a class="d-inline-flex" href="/rust-lang/rust/search?l=python">
                  <span class="color-fg-default text-bold mr-1">Python</span><span class="percent">2.3%</span></a></li>
                <li><a class="d-inline-flex" href="/rust-lang/rust/search?l=other">
                  <span class="color-fg-default text-bold mr-1">Other</span><span class="percent">n/a</span></a></li>
              </ul>
            </div>
          </div>
        </body></html>
    "#;

    #[test]
    fn test_repository_page() {
        let url = Url::parse("https://github.com/rust-lang/rust").unwrap();
        let repo = parse_repository_page(REPO_PAGE, "rust-lang", "rust", &url);

        assert_eq!(repo.name, "rust");
        assert_eq!(repo.full_name.as_deref(), Some("rust-lang/rust"));
        assert_eq!(repo.url.as_deref(), Some("https://github.com/rust-lang/rust"));
        assert_eq!(
            repo.description.as_deref(),
            Some("Empowering everyone to build reliable and efficient software.")
        );
        assert_eq!(repo.stargazers_count, Some(98_100));
        assert_eq!(repo.forks_count, Some(12_700));
        assert_eq!(repo.language.as_deref(), Some("Rust"));
        assert_eq!(
            repo.topics,
            Some(vec!["rust".to_string(), "compiler".to_string()])
        );

        let languages = repo.languages.unwrap();
        assert_eq!(languages.len(), 2);
        assert_eq!(languages["Rust"], 96.2);
        assert_eq!(languages["Python"], 2.3);
    }

    #[test]
    fn test_language_percent_is_float() {
        let html = r#"
            <div class="BorderGrid-row">
              <a class="d-inline-flex"><span class="color-fg-default">Python</span><span class="percent">72.3%</span></a>
            </div>
        "#;
        let languages = parse_languages(html);
        assert_eq!(languages.get("Python"), Some(&72.3));
    }

    #[test]
    fn test_languages_keep_page_order() {
        let html = r#"
            <div class="BorderGrid-row">
              <a class="d-inline-flex"><span class="color-fg-default">Rust</span><span class="percent">90%</span></a>
              <a class="d-inline-flex"><span class="color-fg-default">C</span><span class="percent">10%</span></a>
            </div>
        "#;
        let languages = parse_languages(html);
        let names: Vec<&str> = languages.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Rust", "C"]);
        assert_eq!(
            serde_json::to_string(&languages).unwrap(),
            r#"{"Rust":90.0,"C":10.0}"#
        );
    }

    #[test]
    fn test_page_without_sidebar() {
        let url = Url::parse("https://github.com/o/empty").unwrap();
        let repo = parse_repository_page("<html><body></body></html>", "o", "empty", &url);
        assert_eq!(repo.description, None);
        assert_eq!(repo.stargazers_count, None);
        assert_eq!(repo.language, None);
        assert_eq!(repo.topics, Some(vec![]));
        assert_eq!(repo.languages, Some(LanguageBreakdown::new()));
        assert!(parse_languages("<html></html>").is_empty());
    }
}
