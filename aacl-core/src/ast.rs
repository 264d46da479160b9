//! Abstract Syntax Tree types
//!
//! Nodes are read-only facts about the source text: the parser builds each
//! one exactly once and nothing mutates them afterwards. No node stores a
//! back-reference to its parent; parent relationships are reconstructed by
//! traversal when a consumer needs them.

use crate::position::SourceLocation;
use serde::{Deserialize, Serialize};

/// The root AST node: every agent definition in a source file, in source
/// order. Duplicate agent names are not rejected here - uniqueness is a
/// semantic concern for a later stage.
///
/// The root is synthetic and carries no location of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub agents: Vec<AgentDefinition>,
}

/// A single `agent "name" { ... }` definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentDefinition {
    pub name: StringLiteral,
    pub body: Vec<Statement>,
    pub loc: SourceLocation,
}

/// A statement inside an agent body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    Intent(IntentStatement),
    Capability(CapabilityStatement),
    Check(CheckStatement),
    Emit(EmitStatement),
}

impl Statement {
    pub fn loc(&self) -> SourceLocation {
        match self {
            Statement::Intent(s) => s.loc,
            Statement::Capability(s) => s.loc,
            Statement::Check(s) => s.loc,
            Statement::Emit(s) => s.loc,
        }
    }
}

/// `intent "...";` - what the agent is for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentStatement {
    pub value: StringLiteral,
    pub loc: SourceLocation,
}

/// `capability kind ["arg", ...];` - a declared capability.
///
/// `args` is `None` when no bracketed list was written, which is distinct
/// from an explicit empty list `[]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapabilityStatement {
    pub kind: Identifier,
    pub args: Option<ArrayLiteral>,
    pub loc: SourceLocation,
}

/// `check type name expect "...";` - a verification check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckStatement {
    pub check_type: Identifier,
    pub name: Identifier,
    pub expectation: StringLiteral,
    pub loc: SourceLocation,
}

/// `emit "...";` - an event the agent emits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmitStatement {
    pub target: StringLiteral,
    pub loc: SourceLocation,
}

/// A string literal. `value` is the decoded text; `raw` is the original
/// source slice with surrounding quotes and escape sequences intact, kept
/// for diagnostics and round-tripping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringLiteral {
    pub value: String,
    pub raw: String,
    pub loc: SourceLocation,
}

/// A bracketed list of string literals. May be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayLiteral {
    pub elements: Vec<StringLiteral>,
    pub loc: SourceLocation,
}

/// An identifier drawn from the lexer's identifier alphabet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
    pub loc: SourceLocation,
}
