//! Path token definitions
//!
//! A token is one extracted, normalized fragment of path syntax plus its
//! positional metadata in the token sequence.

use serde::{Deserialize, Serialize};

/// One lexical segment of a tokenized path expression.
///
/// Tokens are produced in order by [`PathTokenizer`](crate::PathTokenizer)
/// and are immutable value records thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathToken {
    fragment: String,
    position: usize,
    end: bool,
    array_origin: bool,
}

impl PathToken {
    pub(crate) fn new(fragment: String, position: usize, end: bool, array_origin: bool) -> Self {
        Self {
            fragment,
            position,
            end,
            array_origin,
        }
    }

    /// The cleaned fragment content, e.g. `"$"`, `".."`, `"store"`, `"0"`.
    #[must_use]
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// 0-based index of this token in the token sequence.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// True for the leading root token (`$`).
    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.position == 0
    }

    /// True for the final token of the sequence.
    #[inline]
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.end
    }

    /// True when the fragment originated from bracket notation.
    ///
    /// This is a syntactic origin flag only; the content is not checked to
    /// actually be numeric. Classifying the fragment as index, wildcard,
    /// slice or filter is the evaluator's job.
    #[inline]
    #[must_use]
    pub fn is_array_index_token(&self) -> bool {
        self.array_origin
    }
}
