//! Character cursor over a path expression
//!
//! Linear, one-directional read cursor over an owned character buffer.
//! There is no seek-back operation; any lookahead beyond one character is
//! implemented by the caller consuming and buffering.

/// Read cursor: immutable character buffer plus a mutable position.
#[derive(Debug)]
pub(crate) struct Cursor {
    chars: Vec<char>,
    position: usize,
}

impl Cursor {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            position: 0,
        }
    }

    /// True once every character has been consumed.
    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.position == self.chars.len()
    }

    /// Current position in the buffer, for error reporting.
    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.position
    }

    /// Current character without advancing.
    #[inline]
    pub(crate) fn peek(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    /// Returns the current character and advances by one.
    #[inline]
    pub(crate) fn consume(&mut self) -> Option<char> {
        let current = self.peek();
        if current.is_some() {
            self.position += 1;
        }
        current
    }

    /// Consumes a run of `target` characters.
    pub(crate) fn skip(&mut self, target: char) {
        while self.peek() == Some(target) {
            self.consume();
        }
    }
}
