//! External identifier parsing.
//!
//! Every identifier that reaches the engine arrives as plain text. It must be
//! converted here before any store access so that malformed input aborts the
//! operation with a validation error and no writes.

use std::fmt;

use crate::error::CoreError;
use crate::types::DbId;

/// The kinds of entity an external identifier may refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    Pick,
    Prospect,
    Franchise,
    League,
}

impl IdKind {
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::Pick => "pick_id",
            Self::Prospect => "prospect_id",
            Self::Franchise => "franchise_id",
            Self::League => "league_id",
        }
    }
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// Parse a single raw identifier.
///
/// Surrounding whitespace is ignored. Empty input and anything that is not a
/// UUID (hyphenated or simple form) is rejected; the nil UUID is rejected as
/// well since no row can carry it.
pub fn parse_id(kind: IdKind, raw: &str) -> Result<DbId, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{kind} is required")));
    }
    let id = uuid::Uuid::try_parse(trimmed)
        .map_err(|_| CoreError::Validation(format!("could not parse {kind} {raw:?}")))?;
    if id.is_nil() {
        return Err(CoreError::Validation(format!("{kind} must not be the nil id")));
    }
    Ok(id)
}

/// Parse a list of raw identifiers, failing on the first malformed entry.
pub fn parse_ids(kind: IdKind, raw: &[String]) -> Result<Vec<DbId>, CoreError> {
    raw.iter().map(|r| parse_id(kind, r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_validation(result: Result<DbId, CoreError>, needle: &str) {
        match result {
            Err(CoreError::Validation(msg)) => {
                assert!(msg.contains(needle), "message {msg:?} should contain {needle:?}");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn parses_hyphenated_uuid() {
        let raw = "67e55044-10b1-426f-9247-bb680e5fe0c8";
        let id = parse_id(IdKind::Pick, raw).unwrap();
        assert_eq!(id.to_string(), raw);
    }

    #[test]
    fn parses_simple_form_and_trims() {
        let id = parse_id(IdKind::Prospect, "  67e5504410b1426f9247bb680e5fe0c8 ").unwrap();
        assert_eq!(id.to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
    }

    #[test]
    fn rejects_empty() {
        assert_validation(parse_id(IdKind::League, "   "), "league_id is required");
    }

    #[test]
    fn rejects_garbage_and_names_field() {
        assert_validation(parse_id(IdKind::Franchise, "not-an-id"), "franchise_id");
    }

    #[test]
    fn rejects_nil() {
        assert_validation(
            parse_id(IdKind::Pick, "00000000-0000-0000-0000-000000000000"),
            "nil",
        );
    }

    #[test]
    fn parse_ids_fails_on_first_bad_entry() {
        let raw = vec![
            "67e55044-10b1-426f-9247-bb680e5fe0c8".to_string(),
            "nope".to_string(),
        ];
        let err = parse_ids(IdKind::Pick, &raw).unwrap_err();
        assert!(err.to_string().contains("\"nope\""));
    }

    #[test]
    fn parse_ids_empty_list_is_ok() {
        assert!(parse_ids(IdKind::Prospect, &[]).unwrap().is_empty());
    }
}
