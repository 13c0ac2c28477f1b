//! Path tokenization
//!
//! The scan pipeline: pre-validation, then the top-level split loop
//! dispatching into fragment extraction and normalization, then token
//! assembly. Data flows strictly forward; a single mutable cursor is
//! threaded through with no backtracking.

mod core;
mod extract;
mod normalize;
mod splitter;
mod validate;

pub use self::core::PathTokenizer;
