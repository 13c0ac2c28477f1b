//! Top-level split loop
//!
//! Drives the scan over the root-normalized path, dispatching on the
//! current character to emit the root marker, the recursive-descent
//! marker, bracket-delimited fragments, or dot-delimited fragments.

use super::extract::extract_fragment;
use super::normalize::clean;
use crate::cursor::Cursor;
use crate::error::{unexpected_character_error, JsonPathResult};

/// Root marker fragment.
const ROOT: &str = "$";
/// Recursive descent marker fragment.
const DEEP_SCAN: &str = "..";

/// One normalized fragment plus its syntactic origin.
#[derive(Debug)]
pub(crate) struct Fragment {
    pub(crate) value: String,
    pub(crate) bracket_origin: bool,
}

impl Fragment {
    fn new(value: impl Into<String>, bracket_origin: bool) -> Self {
        Self {
            value: value.into(),
            bracket_origin,
        }
    }
}

/// Single-pass splitter over one path expression.
pub(crate) struct Splitter<'a> {
    path: &'a str,
    cursor: Cursor,
}

impl<'a> Splitter<'a> {
    pub(crate) fn new(path: &'a str) -> Self {
        Self {
            path,
            cursor: Cursor::new(path),
        }
    }

    /// Consumes the whole input, producing the ordered fragment list.
    pub(crate) fn split(mut self) -> JsonPathResult<Vec<Fragment>> {
        let mut fragments = Vec::new();

        while !self.cursor.is_empty() {
            self.cursor.skip(' ');
            let Some(current) = self.cursor.peek() else {
                break;
            };

            match current {
                '$' => {
                    self.cursor.consume();
                    fragments.push(Fragment::new(ROOT, false));
                }
                '.' => {
                    self.cursor.consume();
                    if self.cursor.peek() == Some('.') {
                        self.cursor.consume();
                        fragments.push(Fragment::new(DEEP_SCAN, false));
                        if self.cursor.peek() == Some('.') {
                            return Err(unexpected_character_error(
                                self.path,
                                '.',
                                self.cursor.position(),
                                "'..' must not be followed by another '.'",
                            ));
                        }
                    }
                    // A lone '.' is a pure separator and emits nothing.
                }
                '[' => {
                    let raw = extract_fragment(&mut self.cursor, self.path, true, &[']'])?;
                    fragments.push(Fragment::new(clean(&raw), true));
                }
                _ => {
                    let raw = extract_fragment(&mut self.cursor, self.path, false, &['[', '.'])?;
                    fragments.push(Fragment::new(clean(&raw), false));
                }
            }
        }

        Ok(fragments)
    }
}
