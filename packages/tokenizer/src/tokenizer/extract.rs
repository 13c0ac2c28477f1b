//! Fragment extraction
//!
//! Accumulates characters from the cursor into one raw fragment until a
//! non-escaped stop character is found. Parenthesized groups are copied
//! verbatim as opaque atoms; backslash escapes are resolved here.

use crate::cursor::Cursor;
use crate::error::{incomplete_path_error, unexpected_character_error, JsonPathResult};

/// Extracts one raw fragment from the cursor.
///
/// With `include_stop` the stop character is mandatory: it is appended to
/// the fragment and consumed, and running out of input first is an
/// incomplete-path error. Without it, end of input is an acceptable
/// terminal boundary and the stop character is left unconsumed for the
/// caller to re-inspect (`[` and `.` both terminate a fragment and start
/// the next segment).
pub(crate) fn extract_fragment(
    cursor: &mut Cursor,
    path: &str,
    include_stop: bool,
    stops: &[char],
) -> JsonPathResult<String> {
    let mut buffer = String::new();
    let mut escaped = false;

    while let Some(current) = cursor.peek() {
        if is_stop_char(escaped, current, stops) {
            break;
        }
        if current == '(' {
            copy_paren_group(cursor, path, &mut buffer)?;
            continue;
        }
        cursor.consume();
        // A literal backslash is never part of the fragment; the character
        // it escapes is appended normally.
        if current != '\\' {
            buffer.push(current);
        }
        if escaped {
            escaped = false;
        } else if current == '\\' {
            escaped = true;
        }
    }

    let expected: String = stops.iter().collect();
    if include_stop {
        match cursor.peek() {
            None => {
                return Err(incomplete_path_error(
                    path,
                    &format!("expected one of '{expected}' before end of input"),
                ));
            }
            Some(current) if stops.contains(&current) => {
                cursor.consume();
                buffer.push(current);
            }
            Some(current) => {
                return Err(unexpected_character_error(
                    path,
                    current,
                    cursor.position(),
                    &format!("expected one of '{expected}'"),
                ));
            }
        }
    } else if let Some(current) = cursor.peek() {
        if !stops.contains(&current) {
            return Err(unexpected_character_error(
                path,
                current,
                cursor.position(),
                &format!("expected one of '{expected}' or end of input"),
            ));
        }
    }

    Ok(buffer)
}

/// Copies a parenthesized group verbatim, through the first `)`.
///
/// No nesting count is kept: the first `)` closes the group. A filter like
/// `?(@.a==(1+2))` still arrives whole because the leftover `)` is not a
/// stop character for bracket extraction and is picked up by the outer
/// scan loop.
fn copy_paren_group(cursor: &mut Cursor, path: &str, buffer: &mut String) -> JsonPathResult<()> {
    loop {
        let Some(current) = cursor.consume() else {
            return Err(incomplete_path_error(path, "unterminated '(' group"));
        };
        buffer.push(current);
        if current == ')' {
            return Ok(());
        }
    }
}

fn is_stop_char(escaped: bool, current: char, stops: &[char]) -> bool {
    let found = !escaped && stops.contains(&current);
    log::trace!("stop-char check: escaped={escaped} current={current:?} found={found}");
    found
}
