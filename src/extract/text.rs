// src/extract/text.rs
// =============================================================================
// Coercion of the loosely formatted numbers GitHub prints.
//
// Counts come in several shapes depending on the page:
//   "42", "1,234", "1.2k", "3m", "  17\n"
// Percentages come as "72.3%".
// =============================================================================

use super::{FieldError, FieldResult};

/// Turns a displayed count into an integer.
///
/// A trailing `k` multiplies the numeric prefix by 1,000 and a trailing `m`
/// by 1,000,000. Anything else has its non-digit characters stripped before
/// parsing. Nothing left means 0, and values too large for a u64 saturate.
///
/// Examples:
///   "1.2k" -> 1200
///   "3m"   -> 3000000
///   "1,234" -> 1234
///   ""     -> 0
pub fn parse_count(text: &str) -> u64 {
    let text = text.trim().to_lowercase();

    let scaled = if let Some(prefix) = text.strip_suffix('k') {
        scale(prefix, 1_000.0)
    } else if let Some(prefix) = text.strip_suffix('m') {
        scale(prefix, 1_000_000.0)
    } else {
        None
    };

    scaled.unwrap_or_else(|| digits_only(&text))
}

// Some("1.2") * 1000 -> Some(1200). None when the prefix is not a number.
fn scale(prefix: &str, multiplier: f64) -> Option<u64> {
    let value: f64 = prefix.trim().replace(',', "").parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Some((value * multiplier).round() as u64)
}

// Saturates at u64::MAX instead of wrapping or dropping to 0.
fn digits_only(text: &str) -> u64 {
    text.chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0u64, |total, digit| {
            total.saturating_mul(10).saturating_add(u64::from(digit))
        })
}

/// Parses "72.3%" into 72.3.
pub fn parse_percent(field: &'static str, raw: &str) -> FieldResult<f64> {
    let trimmed = raw.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();

    number
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| FieldError::Malformed {
            field,
            raw: raw.to_string(),
        })
}

/// First whitespace-separated token that contains a digit.
///
/// Stat links read "1.2k stars" or "Star 1.2k" depending on the page; the
/// number is whichever token has digits in it.
pub fn count_token(text: &str) -> Option<&str> {
    text.split_whitespace()
        .find(|token| token.chars().any(|c| c.is_ascii_digit()))
}

/// First run of ASCII digits, e.g. "Repositories 42" -> "42".
pub fn first_digit_run(text: &str) -> Option<&str> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let rest = &text[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    Some(&rest[..end])
}
