// src/extract/dom.rs
// =============================================================================
// Small helpers over the `scraper` crate, shared by every page extractor.
//
// The pattern repeated across extractors is "first element matching X under
// scope Y, then its text or one of its attributes". These helpers return a
// FieldResult so the caller can tell a missing node from a malformed one.
// =============================================================================

use scraper::{ElementRef, Selector};
use url::Url;

use super::text::{count_token, parse_count};
use super::{FieldError, FieldResult};

/// Compiles a CSS selector.
///
/// All selectors in this crate are string literals, so a parse failure is a
/// bug in the literal, not something the input page can cause.
pub fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid CSS selector '{}': {:?}", css, e))
}

/// First descendant of `scope` matching `css`.
pub fn first<'a>(scope: ElementRef<'a>, css: &str) -> Option<ElementRef<'a>> {
    scope.select(&selector(css)).next()
}

/// Every descendant of `scope` matching `css`, in document order.
pub fn all<'a>(scope: ElementRef<'a>, css: &str) -> Vec<ElementRef<'a>> {
    scope.select(&selector(css)).collect()
}

/// Text content with runs of whitespace collapsed to single spaces.
pub fn text_of(element: ElementRef<'_>) -> String {
    let raw: String = element.text().collect();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Trimmed text of the first match. An element with no text counts as
/// missing: GitHub renders empty placeholders for unset profile fields.
pub fn find_text(scope: ElementRef<'_>, field: &'static str, css: &str) -> FieldResult<String> {
    let element = first(scope, css).ok_or(FieldError::NotFound { field })?;
    let text = text_of(element);
    if text.is_empty() {
        return Err(FieldError::NotFound { field });
    }
    Ok(text)
}

/// Attribute value of the first match.
pub fn find_attr(
    scope: ElementRef<'_>,
    field: &'static str,
    css: &str,
    attr: &str,
) -> FieldResult<String> {
    let element = first(scope, css).ok_or(FieldError::NotFound { field })?;
    attr_of(element, field, attr)
}

pub fn attr_of(element: ElementRef<'_>, field: &'static str, attr: &str) -> FieldResult<String> {
    element
        .value()
        .attr(attr)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or(FieldError::NotFound { field })
}

/// Count shown inside a stat link such as `<a href=".../stargazers">1.2k stars</a>`.
pub fn count_in(element: ElementRef<'_>, field: &'static str) -> FieldResult<u64> {
    let text = text_of(element);
    match count_token(&text) {
        Some(token) => Ok(parse_count(token)),
        None => Err(FieldError::Malformed { field, raw: text }),
    }
}

/// Count from the first match of `css`, see [`count_in`].
pub fn find_count(scope: ElementRef<'_>, field: &'static str, css: &str) -> FieldResult<u64> {
    let element = first(scope, css).ok_or(FieldError::NotFound { field })?;
    count_in(element, field)
}

/// Resolves a possibly-relative href against the GitHub base URL.
///
/// Examples:
///   base = "https://github.com"
///   href = "/rust-lang/rust" -> "https://github.com/rust-lang/rust"
///   href = "https://github.com/a/b" -> unchanged
pub fn resolve_url(base: &Url, href: &str) -> Option<Url> {
    match Url::parse(href) {
        Ok(url) => Some(url),
        Err(_) => base.join(href).ok(),
    }
}

/// Non-empty path segments, e.g. "/owner/repo/" -> ["owner", "repo"].
pub fn path_segments(url: &Url) -> Vec<String> {
    url.path()
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Last path segment of an href: "/o/r/commit/abc123" -> "abc123".
pub fn last_segment(href: &str) -> Option<&str> {
    let path = href.split(['?', '#']).next().unwrap_or(href);
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
}
