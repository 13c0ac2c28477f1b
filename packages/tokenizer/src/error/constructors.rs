//! Error constructor functions
//!
//! Factory functions producing errors that name the offending path and,
//! where known, the character position.

use super::types::{ErrorKind, JsonPathError};

/// Pre-validation rejected the whole input.
#[must_use]
pub fn malformed_path_error(path: &str, reason: &str, position: Option<usize>) -> JsonPathError {
    let message = match position {
        Some(pos) => format!("invalid path '{path}': {reason} at position {pos}"),
        None => format!("invalid path '{path}': {reason}"),
    };
    JsonPathError::new(ErrorKind::MalformedPathSyntax, message)
}

/// Input ended while a mandatory stop character was still expected.
#[must_use]
pub fn incomplete_path_error(path: &str, reason: &str) -> JsonPathError {
    JsonPathError::new(
        ErrorKind::IncompletePath,
        format!("path '{path}' is incomplete: {reason}"),
    )
}

/// The cursor is positioned on a character outside the accepted set.
#[must_use]
pub fn unexpected_character_error(
    path: &str,
    found: char,
    position: usize,
    reason: &str,
) -> JsonPathError {
    JsonPathError::new(
        ErrorKind::UnexpectedCharacter,
        format!("unexpected character '{found}' at position {position} in path '{path}': {reason}"),
    )
}
