// src/extract/mod.rs
// =============================================================================
// This module turns GitHub HTML pages into flat records.
//
// Submodules:
// - dom: selector helpers shared by every page (first text, first attribute)
// - text: numeric coercion ("1.2k" -> 1200, "72.3%" -> 72.3)
// - profile: user and organization pages
// - repository: repository lists, repository detail and language breakdown
// - activity: commit timeline and issue list
// - discovery: search results and trending
//
// Everything here is pure: HTML string in, record out. No network access,
// which is what lets the tests run against inline HTML fixtures.
//
// Each field is looked up on its own and ends up as a FieldResult. A lookup
// can fail in two ways, kept apart so logs can tell them apart:
// - NotFound: the node (or attribute) is not on the page
// - Malformed: the node is there but its text could not be coerced
// Both become None on the record. One bad field never sinks the record.
// =============================================================================

mod activity;
mod discovery;
mod dom;
mod profile;
mod repository;
mod text;

use log::{debug, warn};
use thiserror::Error;

pub use activity::{parse_commits, parse_issues};
pub use discovery::{parse_search_results, parse_trending};
pub use profile::{parse_organization, parse_user_profile};
pub use repository::{parse_languages, parse_repository_list, parse_repository_page};

/// Why a single field could not be filled.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    /// The DOM node or attribute the field comes from is missing.
    #[error("field '{field}' not found")]
    NotFound { field: &'static str },
    /// The node exists but its text does not have the expected shape.
    #[error("field '{field}' has unexpected value '{raw}'")]
    Malformed { field: &'static str, raw: String },
}

pub type FieldResult<T> = Result<T, FieldError>;

/// Collapses a field lookup into the Option stored on the record, logging
/// the reason when there is nothing to store.
pub fn optional<T>(result: FieldResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e @ FieldError::NotFound { .. }) => {
            debug!("{}", e);
            None
        }
        Err(e @ FieldError::Malformed { .. }) => {
            warn!("{}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_keeps_value() {
        assert_eq!(optional(Ok::<_, FieldError>(7)), Some(7));
    }

    #[test]
    fn test_optional_drops_both_error_kinds() {
        let missing: FieldResult<u64> = Err(FieldError::NotFound { field: "bio" });
        let malformed: FieldResult<u64> = Err(FieldError::Malformed {
            field: "followers",
            raw: "lots".to_string(),
        });
        assert_eq!(optional(missing), None);
        assert_eq!(optional(malformed), None);
    }

    #[test]
    fn test_field_error_messages() {
        let missing = FieldError::NotFound { field: "bio" };
        assert_eq!(missing.to_string(), "field 'bio' not found");

        let malformed = FieldError::Malformed {
            field: "percent",
            raw: "n/a".to_string(),
        };
        assert_eq!(malformed.to_string(), "field 'percent' has unexpected value 'n/a'");
    }
}
