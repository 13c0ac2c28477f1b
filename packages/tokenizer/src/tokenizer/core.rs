//! Tokenizer owner type and public accessors.

use std::fmt;
use std::slice;

use super::splitter::Splitter;
use super::validate::{ensure_rooted, validate_call_syntax};
use crate::error::JsonPathResult;
use crate::tokens::PathToken;

/// A tokenized path expression.
///
/// Construction is all-or-nothing: an invalid expression yields an error
/// and no instance. The produced token sequence is immutable apart from
/// [`remove_last_token`](PathTokenizer::remove_last_token).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTokenizer {
    path: String,
    tokens: Vec<PathToken>,
}

impl PathTokenizer {
    /// Tokenizes a path expression.
    ///
    /// Relative paths are normalized to absolute ones first, so
    /// `store.book` is tokenized as `$.store.book`.
    ///
    /// # Errors
    ///
    /// Returns a [`JsonPathError`](crate::JsonPathError) for unsupported
    /// function-call syntax, an unterminated bracket or paren group, or a
    /// `...` sequence.
    pub fn new(path: &str) -> JsonPathResult<Self> {
        validate_call_syntax(path)?;
        let path = ensure_rooted(path);

        let fragments = Splitter::new(&path).split()?;
        let count = fragments.len();
        let tokens = fragments
            .into_iter()
            .enumerate()
            .map(|(position, fragment)| {
                PathToken::new(
                    fragment.value,
                    position,
                    position + 1 == count,
                    fragment.bracket_origin,
                )
            })
            .collect();
        log::debug!("tokenized {path:?} into {count} tokens");

        Ok(Self { path, tokens })
    }

    /// Ordered fragment strings, in creation order.
    #[must_use]
    pub fn fragments(&self) -> Vec<String> {
        self.tokens
            .iter()
            .map(|token| token.fragment().to_string())
            .collect()
    }

    /// Number of tokens produced.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The root-normalized path string this tokenizer was built from.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// A copy of the full token list.
    #[must_use]
    pub fn tokens(&self) -> Vec<PathToken> {
        self.tokens.clone()
    }

    /// Iterates over the tokens in order.
    pub fn iter(&self) -> slice::Iter<'_, PathToken> {
        self.tokens.iter()
    }

    /// Removes and returns the last token.
    ///
    /// The stored path string is *not* trimmed to match: [`path`](Self::path)
    /// keeps returning the full original expression after a pop. Callers
    /// that need the two in sync must rebuild the tokenizer.
    pub fn remove_last_token(&mut self) -> Option<PathToken> {
        self.tokens.pop()
    }
}

impl<'a> IntoIterator for &'a PathTokenizer {
    type Item = &'a PathToken;
    type IntoIter = slice::Iter<'a, PathToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl fmt::Display for PathTokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const RULE: &str =
            "---------------------------------------------------------------------------";
        writeln!(f, "{RULE}")?;
        writeln!(f, "PATH: {}", self.path)?;
        writeln!(f, "{:<50}{:<10}{:<10}{:<10}", "Fragment", "Root", "End", "Array")?;
        writeln!(f, "{RULE}")?;
        for token in &self.tokens {
            writeln!(
                f,
                "{:<50}{:<10}{:<10}{:<10}",
                token.fragment(),
                token.is_root(),
                token.is_end(),
                token.is_array_index_token()
            )?;
        }
        Ok(())
    }
}
