// src/extract/activity.rs
// =============================================================================
// Commit history and issue list pages.
//
// Commits are grouped by day in TimelineItem blocks: each block holds one or
// more commit title links plus the author and timestamp of the group.
// Issues are one Box-row per issue.
// =============================================================================

use log::debug;
use scraper::{ElementRef, Html};
use url::Url;

use super::dom::{all, find_attr, find_text, first, last_segment, resolve_url, text_of};
use super::optional;
use crate::models::{Commit, Issue, IssueState};

/// Extracts commits from a `/commits` page, in page order.
pub fn parse_commits(html: &str, base: &Url) -> Vec<Commit> {
    let document = Html::parse_document(html);
    let mut commits = Vec::new();

    for group in all(document.root_element(), "div.TimelineItem-body") {
        let author = optional(find_text(group, "author", "a.commit-author"));
        let date = optional(find_attr(group, "date", "relative-time", "datetime"));

        for link in all(group, "a.Link--primary") {
            let Some(href) = link.value().attr("href") else {
                continue;
            };
            let Some(sha) = last_segment(href) else {
                continue;
            };
            let url = resolve_url(base, href)
                .map(String::from)
                .unwrap_or_else(|| href.to_string());

            commits.push(Commit {
                sha: sha.to_string(),
                message: text_of(link),
                author: author.clone(),
                date: date.clone(),
                url,
            });
        }
    }

    commits
}

/// Extracts issues from an `/issues` page, in page order.
///
/// `requested` is the filter the page was fetched with; it is used as the
/// state of rows that carry no open/closed icon.
pub fn parse_issues(html: &str, base: &Url, requested: IssueState) -> Vec<Issue> {
    let document = Html::parse_document(html);
    let mut issues = Vec::new();

    for row in all(document.root_element(), "div.Box-row") {
        let Some(title_link) = first(row, "a.Link--primary") else {
            continue;
        };
        let Some(href) = title_link.value().attr("href") else {
            continue;
        };
        let Some(number) = last_segment(href).and_then(|n| n.parse::<u64>().ok()) else {
            debug!("skipping issue row with unexpected link '{}'", href);
            continue;
        };

        issues.push(Issue {
            number,
            title: text_of(title_link),
            state: row_state(row).unwrap_or(requested),
            author: optional(find_text(row, "author", "a.Link--muted")),
            labels: all(row, "a.IssueLabel")
                .into_iter()
                .map(text_of)
                .filter(|label| !label.is_empty())
                .collect(),
            url: resolve_url(base, href)
                .map(String::from)
                .unwrap_or_else(|| href.to_string()),
        });
    }

    issues
}

// Reads the state icon GitHub draws at the start of each issue row.
fn row_state(row: ElementRef<'_>) -> Option<IssueState> {
    if first(row, "svg.octicon-issue-opened").is_some() {
        Some(IssueState::Open)
    } else if first(row, "svg.octicon-issue-closed, svg.octicon-skip").is_some() {
        Some(IssueState::Closed)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://github.com").unwrap()
    }

    #[test]
    fn test_commit_groups() {
        let html = r#"
            <div class="TimelineItem"><div class="TimelineItem-body">
              <h2>Commits on Mar 3, 2024</h2>
              <ol>
                <li><a class="Link--primary" href="/o/r/commit/a1b2c3">Fix parser</a></li>
                <li><a class="Link--primary" href="/o/r/commit/d4e5f6">Bump deps</a></li>
              </ol>
              <a class="commit-author" href="/alice">alice</a>
              <relative-time datetime="2024-03-03T10:00:00Z">Mar 3</relative-time>
            </div></div>
            <div class="TimelineItem"><div class="TimelineItem-body">
              <a class="Link--primary" href="/o/r/commit/0ff1ce">Initial commit</a>
            </div></div>
        "#;

        let commits = parse_commits(html, &base());
        assert_eq!(commits.len(), 3);

        assert_eq!(commits[0].sha, "a1b2c3");
        assert_eq!(commits[0].message, "Fix parser");
        assert_eq!(commits[0].author.as_deref(), Some("alice"));
        assert_eq!(commits[0].date.as_deref(), Some("2024-03-03T10:00:00Z"));
        assert_eq!(commits[0].url, "https://github.com/o/r/commit/a1b2c3");

        assert_eq!(commits[1].sha, "d4e5f6");
        assert_eq!(commits[1].author.as_deref(), Some("alice"));

        assert_eq!(commits[2].sha, "0ff1ce");
        assert_eq!(commits[2].author, None);
        assert_eq!(commits[2].date, None);
    }

    #[test]
    fn test_no_timeline_no_commits() {
        assert!(parse_commits("<html><body><p>Nothing</p></body></html>", &base()).is_empty());
    }

    #[test]
    fn test_issue_rows() {
        let html = r#"
            <div class="Box">
              <div class="Box-row">
                <svg class="octicon octicon-issue-opened"></svg>
                <a class="Link--primary" href="/o/r/issues/42">Crash on empty input</a>
                <a class="IssueLabel" href="/o/r/labels/bug">bug</a>
                <a class="IssueLabel" href="/o/r/labels/good">good first issue</a>
                <span>opened by <a class="Link--muted" href="/bob">bob</a></span>
              </div>
              <div class="Box-row">
                <svg class="octicon octicon-issue-closed"></svg>
                <a class="Link--primary" href="/o/r/issues/7">Docs typo</a>
              </div>
              <div class="Box-row">
                <a class="Link--primary" href="/o/r/issues/not-a-number">Broken row</a>
              </div>
              <div class="Box-row"><span>no link here</span></div>
            </div>
        "#;

        let issues = parse_issues(html, &base(), IssueState::All);
        assert_eq!(issues.len(), 2);

        assert_eq!(issues[0].number, 42);
        assert_eq!(issues[0].title, "Crash on empty input");
        assert_eq!(issues[0].state, IssueState::Open);
        assert_eq!(issues[0].author.as_deref(), Some("bob"));
        assert_eq!(issues[0].labels, vec!["bug", "good first issue"]);
        assert_eq!(issues[0].url, "https://github.com/o/r/issues/42");

        assert_eq!(issues[1].number, 7);
        assert_eq!(issues[1].state, IssueState::Closed);
        assert_eq!(issues[1].author, None);
        assert!(issues[1].labels.is_empty());
    }

    #[test]
    fn test_issue_state_defaults_to_filter() {
        let html = r#"<div class="Box-row"><a class="Link--primary" href="/o/r/issues/3">Question</a></div>"#;
        let issues = parse_issues(html, &base(), IssueState::Closed);
        assert_eq!(issues[0].state, IssueState::Closed);
    }
}
