//! AACL DSL - Agent Assurance Configuration Language Front End
//!
//! This crate provides the lexer and recursive-descent parser for AACL, a
//! small declarative language describing named agents, their intent,
//! declared capabilities, verification checks, and emitted events.
//!
//! Architecture:
//! ```text
//! AACL Source (.aacl files)
//!     ↓
//! Lexer (source text → token stream)
//!     ↓
//! Parser (recursive descent + panic-mode recovery)
//!     ↓
//! Program AST + diagnostics
//! ```
//!
//! The pipeline is strictly source → tokens → AST: tokenization completes
//! before parsing begins, and both passes are single forward sweeps over
//! in-memory data. The contract ends at a structurally valid [`Program`]
//! or a list of [`Diagnostic`]s; semantic validation and execution belong
//! to later stages.

pub mod lexer;
pub mod parser;

// Re-export key types for convenience
pub use aacl_core::{
    AgentDefinition, ArrayLiteral, CapabilityStatement, CheckStatement, Diagnostic,
    DiagnosticKind, EmitStatement, Identifier, IntentStatement, LexError, Position, Program,
    SourceLocation, Statement, StringLiteral, SyntaxError,
};
pub use lexer::*;
pub use parser::*;
