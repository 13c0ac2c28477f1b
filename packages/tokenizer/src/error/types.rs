//! Core error types for path tokenization.

use serde::{Deserialize, Serialize};

/// Classification of tokenization failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Whole-string pre-validation rejected the input.
    MalformedPathSyntax,
    /// Input ended while a mandatory stop character was still expected.
    IncompletePath,
    /// A character outside the accepted set at a validation checkpoint.
    UnexpectedCharacter,
}

/// Failure signal raised while tokenizing a path expression.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct JsonPathError {
    pub kind: ErrorKind,
    pub message: String,
}

impl JsonPathError {
    #[must_use]
    pub fn new(kind: ErrorKind, message: String) -> Self {
        Self { kind, message }
    }
}

/// Result type for tokenizer operations.
pub type JsonPathResult<T> = Result<T, JsonPathError>;
