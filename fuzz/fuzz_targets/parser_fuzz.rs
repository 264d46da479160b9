//! Fuzz test for the AACL Parser
//!
//! This fuzz target tests the parser with arbitrary byte sequences to find:
//! - Panics or crashes
//! - Infinite loops in panic-mode synchronization
//! - Memory safety issues
//!
//! Run with: cargo +nightly fuzz run parser_fuzz -- -max_total_time=60

#![no_main]

use aacl_dsl::{parse_source, DiagnosticKind, Lexer, Parser};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Try to interpret the bytes as UTF-8
    // The parser should handle any valid UTF-8 string without panicking
    if let Ok(input) = std::str::from_utf8(data) {
        let outcome = parse_source(input);

        // success means exactly "no errors"
        assert_eq!(outcome.success, outcome.errors.is_empty());

        match &outcome.program {
            // a missing program only ever comes from a single fatal lexical error
            None => {
                assert_eq!(outcome.errors.len(), 1);
                assert_eq!(outcome.errors[0].kind, DiagnosticKind::Lexical);
            }
            // once tokenization succeeds, every error is a syntax error
            Some(_) => {
                assert!(outcome
                    .errors
                    .iter()
                    .all(|e| e.kind == DiagnosticKind::Syntax));
            }
        }

        // Also drive the lexer -> parser pipeline directly; recovery must
        // always terminate on any well-formed token stream
        if let Ok(tokens) = Lexer::new(input).tokenize() {
            let _ = Parser::new(tokens).parse();
        }
    }
});
