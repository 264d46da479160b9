//! Lexer implementation

use super::token::{unescape, Token, TokenKind};
use aacl_core::{LexError, Position, SourceLocation};
use std::iter::Peekable;
use std::str::CharIndices;

/// Lexer for the AACL DSL.
///
/// Scans the input left to right in a single pass. Tokenization is total:
/// either the whole source becomes a token sequence terminated by
/// [`TokenKind::Eof`], or the first malformed token aborts the pass with a
/// [`LexError`]. There is no recoverable-error mode at this layer.
pub struct Lexer<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
    line: usize,
    column: usize,
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            line: 1,
            column: 1,
            pos: 0,
        }
    }

    /// Tokenize the entire source into a vector of tokens.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                return Ok(tokens);
            }
        }
    }

    /// Get the next token from the source.
    fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_trivia();

        let start = self.position();

        let kind = match self.peek_char() {
            None => TokenKind::Eof,
            Some(c) => match c {
                '{' => {
                    self.advance();
                    TokenKind::LBrace
                }
                '}' => {
                    self.advance();
                    TokenKind::RBrace
                }
                '[' => {
                    self.advance();
                    TokenKind::LBracket
                }
                ']' => {
                    self.advance();
                    TokenKind::RBracket
                }
                ';' => {
                    self.advance();
                    TokenKind::Semicolon
                }
                ',' => {
                    self.advance();
                    TokenKind::Comma
                }

                '"' => self.scan_string(start)?,

                '-' => {
                    if self.peek_next_char().map(|c| c.is_ascii_digit()).unwrap_or(false) {
                        self.advance();
                        self.scan_integer(start)
                    } else {
                        return Err(LexError::UnexpectedChar { ch: '-', at: start });
                    }
                }

                c if c.is_ascii_digit() => self.scan_integer(start),

                c if c.is_ascii_alphabetic() || c == '_' => self.scan_identifier(start),

                c => return Err(LexError::UnexpectedChar { ch: c, at: start }),
            },
        };

        Ok(Token {
            kind,
            loc: SourceLocation::new(start, self.position()),
        })
    }

    /// Scan an identifier or keyword. Identifiers start with a letter or
    /// `_` and continue with letters, digits, `_`, or `-`; the keyword
    /// table is consulted only after the maximal run is consumed.
    fn scan_identifier(&mut self, start: Position) -> TokenKind {
        while let Some(c) = self.peek_char() {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                self.advance();
            } else {
                break;
            }
        }

        let text = &self.source[start.offset..self.pos];
        TokenKind::keyword(text).unwrap_or_else(|| TokenKind::Identifier(text.to_string()))
    }

    /// Scan a string literal with escape sequences. `value` gets the
    /// decoded text; `raw` the verbatim slice including both quotes.
    fn scan_string(&mut self, start: Position) -> Result<TokenKind, LexError> {
        self.advance(); // consume opening quote
        let mut value = String::new();

        loop {
            match self.peek_char() {
                None => return Err(LexError::UnterminatedString { at: start }),
                Some('"') => {
                    self.advance();
                    break;
                }
                Some('\\') => {
                    let escape_at = self.position();
                    self.advance();
                    match self.peek_char() {
                        None => return Err(LexError::UnterminatedString { at: start }),
                        Some(c) => match unescape(c) {
                            Some(decoded) => {
                                self.advance();
                                value.push(decoded);
                            }
                            None => {
                                return Err(LexError::InvalidEscape {
                                    ch: c,
                                    at: escape_at,
                                })
                            }
                        },
                    }
                }
                Some(c) => {
                    self.advance();
                    value.push(c);
                }
            }
        }

        let raw = self.source[start.offset..self.pos].to_string();
        Ok(TokenKind::Str { value, raw })
    }

    /// Scan the digits of an integer literal. An optional leading `-` has
    /// already been consumed by the caller; no fractional or exponent
    /// syntax is recognized.
    fn scan_integer(&mut self, start: Position) -> TokenKind {
        while let Some(c) = self.peek_char() {
            if c.is_ascii_digit() {
                self.advance();
            } else {
                break;
            }
        }

        TokenKind::Integer(self.source[start.offset..self.pos].to_string())
    }

    /// Skip whitespace and comments. An unterminated block comment runs to
    /// end of input without erroring, unlike an unterminated string.
    fn skip_trivia(&mut self) {
        loop {
            match self.peek_char() {
                Some(' ') | Some('\t') | Some('\r') | Some('\n') => {
                    self.advance();
                }
                Some('/') => match self.peek_next_char() {
                    Some('/') => {
                        // Line comment
                        while let Some(c) = self.peek_char() {
                            if c == '\n' {
                                break;
                            }
                            self.advance();
                        }
                    }
                    Some('*') => {
                        // Block comment
                        self.advance(); // /
                        self.advance(); // *
                        loop {
                            match self.peek_char() {
                                None => break,
                                Some('*') if self.peek_next_char() == Some('/') => {
                                    self.advance();
                                    self.advance();
                                    break;
                                }
                                _ => {
                                    self.advance();
                                }
                            }
                        }
                    }
                    _ => break,
                },
                _ => break,
            }
        }
    }

    fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
            offset: self.pos,
        }
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next_char(&self) -> Option<char> {
        let mut iter = self.source[self.pos..].char_indices();
        iter.next();
        iter.next().map(|(_, c)| c)
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((i, c)) = self.chars.next() {
            self.pos = i + c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            Some(c)
        } else {
            None
        }
    }
}

/// Tokenize AACL source text.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}
