//! Whole-string pre-validation
//!
//! The only place where the entire input, rather than a cursor-relative
//! window, is inspected. Runs once before any other processing.

use crate::error::{malformed_path_error, JsonPathResult};

/// Characters allowed to sit directly before a `(`.
const CALL_SIGILS: [char; 7] = ['?', '+', '=', '-', '*', '/', '!'];

/// Rejects unsupported function-call-like constructs.
///
/// Fails when any character outside the filter/operator sigil set is
/// immediately followed by `(`, e.g. `foo(`. A backslash is not in the
/// set, so escaping a `(` does not exempt it here.
pub(crate) fn validate_call_syntax(path: &str) -> JsonPathResult<()> {
    let chars: Vec<char> = path.chars().collect();
    for (position, pair) in chars.windows(2).enumerate() {
        if pair[1] == '(' && !CALL_SIGILS.contains(&pair[0]) {
            return Err(malformed_path_error(
                path,
                "unsupported function call syntax",
                Some(position),
            ));
        }
    }
    Ok(())
}

/// Normalizes author-supplied relative paths to absolute ones.
///
/// `store.book` becomes `$.store.book`. A path already starting with `$`
/// (including the `$[` form) is returned unchanged.
pub(crate) fn ensure_rooted(path: &str) -> String {
    if path.starts_with('$') {
        path.to_string()
    } else {
        format!("$.{path}")
    }
}
