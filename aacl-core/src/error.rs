//! Error and diagnostic types for the AACL front end

use crate::position::{Position, SourceLocation};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Lexical errors. The lexer raises on the first occurrence and produces
/// no tokens: a malformed token stream gives the parser no reliable
/// resynchronization points.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LexError {
    #[error("unexpected character '{ch}' at {at}")]
    UnexpectedChar { ch: char, at: Position },

    #[error("invalid escape sequence '\\{ch}' at {at}")]
    InvalidEscape { ch: char, at: Position },

    #[error("unterminated string literal starting at {at}")]
    UnterminatedString { at: Position },
}

impl LexError {
    pub fn position(&self) -> Position {
        match self {
            LexError::UnexpectedChar { at, .. } => *at,
            LexError::InvalidEscape { at, .. } => *at,
            LexError::UnterminatedString { at } => *at,
        }
    }
}

/// A grammar violation over a well-formed token stream. Recoverable: the
/// parser records it and synchronizes to the next statement boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message} at {loc}")]
pub struct SyntaxError {
    pub message: String,
    pub loc: SourceLocation,
}

/// Which stage produced a diagnostic. Serializes as `"lexical"` /
/// `"syntax"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticKind {
    Lexical,
    Syntax,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::Lexical => write!(f, "lexical"),
            DiagnosticKind::Syntax => write!(f, "syntax"),
        }
    }
}

/// A single error reported against the source text. There is no warning
/// severity - every diagnostic blocks success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub message: String,
    pub loc: Option<SourceLocation>,
    pub kind: DiagnosticKind,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} error: {}", self.kind, self.message)
    }
}

impl std::error::Error for Diagnostic {}

impl From<LexError> for Diagnostic {
    fn from(err: LexError) -> Self {
        let at = err.position();
        Diagnostic {
            message: err.to_string(),
            loc: Some(SourceLocation::empty_at(at)),
            kind: DiagnosticKind::Lexical,
        }
    }
}

impl From<SyntaxError> for Diagnostic {
    fn from(err: SyntaxError) -> Self {
        let loc = err.loc;
        Diagnostic {
            message: err.to_string(),
            loc: Some(loc),
            kind: DiagnosticKind::Syntax,
        }
    }
}
