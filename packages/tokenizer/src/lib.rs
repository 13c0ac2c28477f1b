//! JSONPath expression tokenizer
//!
//! Splits a JSONPath-style expression (root marker, dot and bracket
//! accessors, recursive descent, quoted keys, numeric/wildcard indices,
//! parenthesized filter segments) into an ordered sequence of path tokens
//! for a downstream tree evaluator. The tokenizer only splits and
//! normalizes; it does not evaluate filters or resolve values.
//!
//! # Examples
//!
//! ```
//! use pathlex::PathTokenizer;
//!
//! let tokenizer = PathTokenizer::new("$.store.book[0].title")?;
//! assert_eq!(tokenizer.fragments(), ["$", "store", "book", "0", "title"]);
//!
//! let first = tokenizer.tokens().remove(0);
//! assert!(first.is_root());
//! # Ok::<(), pathlex::JsonPathError>(())
//! ```
//!
//! Relative paths are normalized to absolute ones before scanning:
//!
//! ```
//! use pathlex::PathTokenizer;
//!
//! let tokenizer = PathTokenizer::new("store.book")?;
//! assert_eq!(tokenizer.path(), "$.store.book");
//! # Ok::<(), pathlex::JsonPathError>(())
//! ```

#![deny(unsafe_code)]

mod cursor;
pub mod error;
pub mod tokenizer;
pub mod tokens;

pub use self::{
    error::{ErrorKind, JsonPathError, JsonPathResult},
    tokenizer::PathTokenizer,
    tokens::PathToken,
};
