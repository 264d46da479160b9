//! Parser implementation

use crate::lexer::{Lexer, Token, TokenKind};
use aacl_core::{
    AgentDefinition, ArrayLiteral, CapabilityStatement, CheckStatement, Diagnostic, EmitStatement,
    Identifier, IntentStatement, Program, Statement, StringLiteral, SyntaxError,
};
use serde::Serialize;

/// Recursive-descent parser for the AACL DSL.
///
/// Each grammar nonterminal maps to one parsing function that consumes
/// exactly the tokens of its production. The token cursor only ever moves
/// forward; synchronization after an error is a bounded forward walk.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Create a new parser from a vector of tokens. The vector must be
    /// terminated by an [`TokenKind::Eof`] token, as produced by
    /// [`Lexer::tokenize`].
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parse the full token stream into a [`Program`].
    ///
    /// Syntax errors are recoverable: each one is recorded and followed by
    /// panic-mode synchronization, so a single pass reports every
    /// independent definition error and the returned program still holds
    /// every agent that parsed cleanly.
    pub fn parse(&mut self) -> (Program, Vec<SyntaxError>) {
        let mut agents = Vec::new();
        let mut errors = Vec::new();

        while !self.is_at_end() {
            if self.check(&TokenKind::Agent) {
                match self.parse_agent_definition() {
                    Ok(agent) => agents.push(agent),
                    Err(err) => {
                        errors.push(err);
                        self.synchronize();
                    }
                }
            } else {
                errors.push(self.error(&format!(
                    "unexpected token {}, expected keyword 'agent'",
                    self.current().kind
                )));
                self.synchronize();
            }
        }

        (Program { agents }, errors)
    }

    /// AgentDefinition := "agent" STRING "{" Statement* "}"
    fn parse_agent_definition(&mut self) -> Result<AgentDefinition, SyntaxError> {
        let start = self.current().loc;
        self.expect(TokenKind::Agent)?;
        let name = self.expect_string_literal()?;
        self.expect(TokenKind::LBrace)?;

        let mut body = Vec::new();
        while !self.check(&TokenKind::RBrace) && !self.is_at_end() {
            body.push(self.parse_statement()?);
        }

        self.expect(TokenKind::RBrace)?;

        Ok(AgentDefinition {
            name,
            body,
            loc: start.to(self.previous().loc),
        })
    }

    /// Statement dispatch: the leading token's kind alone decides the
    /// production.
    fn parse_statement(&mut self) -> Result<Statement, SyntaxError> {
        match &self.current().kind {
            TokenKind::Intent => self.parse_intent().map(Statement::Intent),
            TokenKind::Capability => self.parse_capability().map(Statement::Capability),
            TokenKind::Check => self.parse_check().map(Statement::Check),
            TokenKind::Emit => self.parse_emit().map(Statement::Emit),
            _ => Err(self.error(&format!(
                "unexpected token {} in agent body",
                self.current().kind
            ))),
        }
    }

    /// IntentStatement := "intent" STRING ";"
    fn parse_intent(&mut self) -> Result<IntentStatement, SyntaxError> {
        let start = self.current().loc;
        self.expect(TokenKind::Intent)?;
        let value = self.expect_string_literal()?;
        self.expect(TokenKind::Semicolon)?;

        Ok(IntentStatement {
            value,
            loc: start.to(self.previous().loc),
        })
    }

    /// CapabilityStatement := "capability" IDENTIFIER ArrayLiteral? ";"
    ///
    /// A capability without a bracketed list yields `args: None`, distinct
    /// from an explicit empty list `[]`.
    fn parse_capability(&mut self) -> Result<CapabilityStatement, SyntaxError> {
        let start = self.current().loc;
        self.expect(TokenKind::Capability)?;
        let kind = self.expect_identifier()?;

        let args = if self.check(&TokenKind::LBracket) {
            Some(self.parse_array_literal()?)
        } else {
            None
        };

        self.expect(TokenKind::Semicolon)?;

        Ok(CapabilityStatement {
            kind,
            args,
            loc: start.to(self.previous().loc),
        })
    }

    /// CheckStatement := "check" IDENTIFIER IDENTIFIER "expect" STRING ";"
    fn parse_check(&mut self) -> Result<CheckStatement, SyntaxError> {
        let start = self.current().loc;
        self.expect(TokenKind::Check)?;
        let check_type = self.expect_identifier()?;
        let name = self.expect_identifier()?;
        self.expect(TokenKind::Expect)?;
        let expectation = self.expect_string_literal()?;
        self.expect(TokenKind::Semicolon)?;

        Ok(CheckStatement {
            check_type,
            name,
            expectation,
            loc: start.to(self.previous().loc),
        })
    }

    /// EmitStatement := "emit" STRING ";"
    fn parse_emit(&mut self) -> Result<EmitStatement, SyntaxError> {
        let start = self.current().loc;
        self.expect(TokenKind::Emit)?;
        let target = self.expect_string_literal()?;
        self.expect(TokenKind::Semicolon)?;

        Ok(EmitStatement {
            target,
            loc: start.to(self.previous().loc),
        })
    }

    /// ArrayLiteral := "[" (STRING ("," STRING)*)? "]"
    ///
    /// Elements are string literals only; a trailing comma is a syntax
    /// error.
    fn parse_array_literal(&mut self) -> Result<ArrayLiteral, SyntaxError> {
        let start = self.current().loc;
        self.expect(TokenKind::LBracket)?;

        let mut elements = Vec::new();
        if !self.check(&TokenKind::RBracket) {
            elements.push(self.expect_string_literal()?);
            while self.check(&TokenKind::Comma) {
                self.advance();
                elements.push(self.expect_string_literal()?);
            }
        }

        self.expect(TokenKind::RBracket)?;

        Ok(ArrayLiteral {
            elements,
            loc: start.to(self.previous().loc),
        })
    }

    /// Panic-mode recovery: consume at least one token, then discard until
    /// just past a `;`, or until the next token can start a definition or
    /// statement, or input ends. Always makes forward progress, so an
    /// error raised at a statement keyword cannot wedge the program loop.
    fn synchronize(&mut self) {
        self.advance();

        while !self.is_at_end() {
            if self.previous().kind == TokenKind::Semicolon {
                return;
            }
            match &self.current().kind {
                TokenKind::Agent
                | TokenKind::Intent
                | TokenKind::Capability
                | TokenKind::Check
                | TokenKind::Emit => return,
                _ => self.advance(),
            }
        }
    }

    // ========================================================================
    // Helper methods
    // ========================================================================

    fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn previous(&self) -> &Token {
        &self.tokens[self.pos - 1]
    }

    fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    fn is_at_end(&self) -> bool {
        self.current().kind == TokenKind::Eof
    }

    fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.current().kind) == std::mem::discriminant(kind)
    }

    fn expect(&mut self, kind: TokenKind) -> Result<(), SyntaxError> {
        if self.check(&kind) {
            self.advance();
            Ok(())
        } else {
            Err(self.error(&format!("expected {}", kind)))
        }
    }

    fn expect_string_literal(&mut self) -> Result<StringLiteral, SyntaxError> {
        match &self.current().kind {
            TokenKind::Str { value, raw } => {
                let lit = StringLiteral {
                    value: value.clone(),
                    raw: raw.clone(),
                    loc: self.current().loc,
                };
                self.advance();
                Ok(lit)
            }
            _ => Err(self.error("expected string literal")),
        }
    }

    fn expect_identifier(&mut self) -> Result<Identifier, SyntaxError> {
        match &self.current().kind {
            TokenKind::Identifier(name) => {
                let ident = Identifier {
                    name: name.clone(),
                    loc: self.current().loc,
                };
                self.advance();
                Ok(ident)
            }
            _ => Err(self.error("expected identifier")),
        }
    }

    fn error(&self, message: &str) -> SyntaxError {
        SyntaxError {
            message: message.to_string(),
            loc: self.current().loc,
        }
    }
}

// ============================================================================
// ENTRY POINT
// ============================================================================

/// Result of parsing a full source text.
///
/// `success` is true iff zero errors were produced by either stage.
/// `program` is `None` only when a lexical error aborted tokenization
/// before any parsing occurred; with syntax errors it still holds every
/// agent that parsed cleanly, so callers must check `errors`, never just
/// `program`'s presence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseOutcome {
    pub success: bool,
    pub program: Option<Program>,
    pub errors: Vec<Diagnostic>,
}

/// Parse AACL source text.
///
/// The only boundary surface of the front end: pure text in, structured
/// result out. Each call owns its lexer and parser state, so concurrent
/// independent calls need no coordination.
pub fn parse_source(source: &str) -> ParseOutcome {
    let tokens = match Lexer::new(source).tokenize() {
        Ok(tokens) => tokens,
        Err(err) => {
            return ParseOutcome {
                success: false,
                program: None,
                errors: vec![err.into()],
            }
        }
    };

    let (program, errors) = Parser::new(tokens).parse();
    let errors: Vec<Diagnostic> = errors.into_iter().map(Diagnostic::from).collect();

    ParseOutcome {
        success: errors.is_empty(),
        program: Some(program),
        errors,
    }
}

// ============================================================================
// TESTS
// ============================================================================
