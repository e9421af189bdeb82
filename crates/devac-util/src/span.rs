//! Source location tracking.
//!
//! A [`Span`] pins a token or AST node to the byte range it occupies in the
//! source buffer plus the line/column of its first byte. Columns are counted
//! per byte, not per Unicode scalar value or grapheme cluster: a multi-byte
//! Devanagari codepoint therefore advances the column by more than one per
//! character. This is a deliberate simplification inherited from the
//! reference lexer, not a bug.

use std::fmt;

/// A byte range into the source buffer, with the line/column of its start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Span {
    /// Byte offset of the first byte of the spanned slice.
    pub offset: usize,
    /// Length in bytes of the spanned slice.
    pub len: usize,
    /// 1-based line of the first byte.
    pub line: u32,
    /// 1-based column of the first byte.
    pub column: u32,
}

impl Span {
    pub const fn new(offset: usize, len: usize, line: u32, column: u32) -> Self {
        Self {
            offset,
            len,
            line,
            column,
        }
    }

    /// Byte offset one past the end of the spanned slice.
    pub const fn end(&self) -> usize {
        self.offset + self.len
    }

    /// A span merging `self` and `other`, keeping `self`'s start position.
    ///
    /// Used when a node's reported position is inherited from its first
    /// child but its extent should cover a later sibling too.
    pub fn to(&self, other: Span) -> Span {
        Span {
            offset: self.offset,
            len: (other.end()).saturating_sub(self.offset),
            line: self.line,
            column: self.column,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
