//! Line/column positions for byte offsets.
//!
//! Scope bounds are byte offsets; humans want line and column. Columns are
//! counted in chars, not bytes.

use std::fmt;

use ropey::Rope;

/// A position in a text, represented as line and column.
///
/// Both `line` and `column` are 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Position {
    /// 1-based `line:column`, as editors and compilers print it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

impl Position {
    /// Create a new position.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Create a position at the start of a text.
    pub fn zero() -> Self {
        Self { line: 0, column: 0 }
    }

    /// Position of byte offset `byte` in `rope`.
    ///
    /// Offsets past the end resolve to the end of the text.
    pub fn of_byte(rope: &Rope, byte: usize) -> Self {
        let char_idx = rope.byte_to_char(byte.min(rope.len_bytes()));
        let line = rope.char_to_line(char_idx);
        Position::new(line, char_idx - rope.line_to_char(line))
    }

    /// Positions of several byte offsets in `text`, sharing one rope.
    pub fn of_bytes<const N: usize>(text: &str, bytes: [usize; N]) -> [Position; N] {
        let rope = Rope::from_str(text);
        bytes.map(|b| Position::of_byte(&rope, b))
    }
}
