// src/extract/profile.rs
// =============================================================================
// User and organization profile pages (https://github.com/<login>).
//
// GitHub marks the interesting bits of a profile with microformat classes
// (p-name, p-note, p-label, p-org), which are the most stable hooks on the
// page. Counts come from the follower links and the Repositories tab.
// =============================================================================

use scraper::{ElementRef, Html};

use super::dom::{all, attr_of, find_attr, find_text, first, text_of};
use super::text::{first_digit_run, parse_count};
use super::{optional, FieldError, FieldResult};
use crate::models::{Organization, User};

/// Extracts a user profile. Fields are filled independently of each other.
pub fn parse_user_profile(html: &str, username: &str) -> User {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let (followers, following) = social_counts(root);

    User {
        username: username.to_string(),
        name: optional(find_text(root, "name", "span.p-name")),
        bio: optional(find_text(root, "bio", "div.p-note")),
        location: optional(find_text(root, "location", "span.p-label")),
        company: optional(find_text(root, "company", "span.p-org")),
        avatar_url: optional(find_attr(root, "avatar_url", "img.avatar", "src")),
        followers: optional(followers),
        following: optional(following),
        public_repos: optional(repository_count(root)),
    }
}

/// Extracts an organization profile.
pub fn parse_organization(html: &str, org_name: &str) -> Organization {
    let document = Html::parse_document(html);
    let root = document.root_element();

    Organization {
        name: org_name.to_string(),
        display_name: optional(find_text(root, "display_name", "h1.h2")),
        description: optional(find_text(root, "description", "div.f4")),
        location: optional(find_text(root, "location", "span.p-label")),
        blog: optional(find_attr(root, "blog", "a.Link--primary", "href")),
        avatar_url: optional(find_attr(root, "avatar_url", "img.avatar", "src")),
    }
}

// "1.2k followers · 3 following" is rendered as two a.Link--secondary links.
fn social_counts(root: ElementRef<'_>) -> (FieldResult<u64>, FieldResult<u64>) {
    let mut followers = Err(FieldError::NotFound { field: "followers" });
    let mut following = Err(FieldError::NotFound { field: "following" });

    for link in all(root, "a.Link--secondary") {
        let text = text_of(link);
        let lower = text.to_lowercase();
        let count = text.split_whitespace().next().map(parse_count).unwrap_or(0);

        if lower.contains("followers") {
            if followers.is_err() {
                followers = Ok(count);
            }
        } else if lower.contains("following") && following.is_err() {
            following = Ok(count);
        }
    }

    (followers, following)
}

// The Repositories tab carries a Counter badge. Its title holds the exact
// number ("1,234") while the text may be abbreviated ("1.2k").
fn repository_count(root: ElementRef<'_>) -> FieldResult<u64> {
    let field = "public_repos";
    let tab = first(root, r#"a[data-tab-item="repositories"]"#)
        .ok_or(FieldError::NotFound { field })?;

    if let Some(counter) = first(tab, "span.Counter") {
        if let Ok(title) = attr_of(counter, field, "title") {
            return Ok(parse_count(&title));
        }
        let text = text_of(counter);
        if !text.is_empty() {
            return Ok(parse_count(&text));
        }
    }

    let text = text_of(tab);
    first_digit_run(&text)
        .map(parse_count)
        .ok_or(FieldError::Malformed { field, raw: text })
}
