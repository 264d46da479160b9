//! Source positions and location spans

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in the source text.
///
/// `line` and `column` are 1-based; `offset` is a 0-based byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    /// Position of the first character of a source text.
    pub fn start() -> Self {
        Self {
            line: 1,
            column: 1,
            offset: 0,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Half-open span of source text covered by a token or AST node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub start: Position,
    pub end: Position,
}

impl SourceLocation {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Zero-width location, used for the end-of-input token.
    pub fn empty_at(pos: Position) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Span from `self`'s start to `other`'s end. Node locations are built
    /// this way from their first and last constituent tokens.
    pub fn to(self, other: SourceLocation) -> SourceLocation {
        SourceLocation {
            start: self.start,
            end: other.end,
        }
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::empty_at(Position::start())
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.start)
    }
}
