//! Tokenizer error handling
//!
//! A single failure signal with a descriptive message, classified by
//! [`ErrorKind`]. Construction of a tokenizer either succeeds fully or
//! yields one of these errors with no partial state.

mod constructors;
mod types;

pub use constructors::{incomplete_path_error, malformed_path_error, unexpected_character_error};
pub use types::{ErrorKind, JsonPathError, JsonPathResult};
