//! Lexer token types

use aacl_core::SourceLocation;
use std::fmt;

/// Token kinds for the AACL DSL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    // Keywords
    Agent,
    Intent,
    Capability,
    Check,
    Emit,
    Expect,

    // Boolean literals
    True,
    False,

    // Literals
    /// String literal: `value` is the decoded text, `raw` the original
    /// source slice including quotes and escape sequences.
    Str { value: String, raw: String },
    /// Integer literal, kept as literal text. Decoding to a numeric type
    /// is deferred to a later stage.
    Integer(String),
    Identifier(String),

    // Delimiters
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Semicolon,
    Comma,

    // Special
    Eof,
}

impl TokenKind {
    /// Keyword lookup table, colocated with the kind type so that adding a
    /// keyword is a single compiler-checked edit. Matching is
    /// case-sensitive.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        match text {
            "agent" => Some(TokenKind::Agent),
            "intent" => Some(TokenKind::Intent),
            "capability" => Some(TokenKind::Capability),
            "check" => Some(TokenKind::Check),
            "emit" => Some(TokenKind::Emit),
            "expect" => Some(TokenKind::Expect),
            "true" => Some(TokenKind::True),
            "false" => Some(TokenKind::False),
            _ => None,
        }
    }
}

/// Escape table for string literals: the character following `\` and what
/// it decodes to. Any other escape is a lexical error.
pub fn unescape(escape: char) -> Option<char> {
    match escape {
        'n' => Some('\n'),
        't' => Some('\t'),
        '"' => Some('"'),
        '\\' => Some('\\'),
        _ => None,
    }
}

impl fmt::Display for TokenKind {
    /// Human-readable description used in diagnostics.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Agent => write!(f, "keyword 'agent'"),
            TokenKind::Intent => write!(f, "keyword 'intent'"),
            TokenKind::Capability => write!(f, "keyword 'capability'"),
            TokenKind::Check => write!(f, "keyword 'check'"),
            TokenKind::Emit => write!(f, "keyword 'emit'"),
            TokenKind::Expect => write!(f, "keyword 'expect'"),
            TokenKind::True => write!(f, "'true'"),
            TokenKind::False => write!(f, "'false'"),
            TokenKind::Str { .. } => write!(f, "string literal"),
            TokenKind::Integer(_) => write!(f, "integer literal"),
            TokenKind::Identifier(name) => write!(f, "identifier '{}'", name),
            TokenKind::LBrace => write!(f, "'{{'"),
            TokenKind::RBrace => write!(f, "'}}'"),
            TokenKind::LBracket => write!(f, "'['"),
            TokenKind::RBracket => write!(f, "']'"),
            TokenKind::Semicolon => write!(f, "';'"),
            TokenKind::Comma => write!(f, "','"),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}

/// A token with its kind and source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub loc: SourceLocation,
}
