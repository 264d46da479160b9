//! Fuzz test for the AACL Lexer
//!
//! This fuzz target tests the lexer with arbitrary byte sequences to find:
//! - Panics or crashes
//! - Infinite loops
//! - Memory safety issues
//!
//! Run with: cargo +nightly fuzz run lexer_fuzz -- -max_total_time=60

#![no_main]

use aacl_dsl::{Lexer, TokenKind};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Try to interpret the bytes as UTF-8
    // The lexer should handle any valid UTF-8 string without panicking
    if let Ok(input) = std::str::from_utf8(data) {
        match Lexer::new(input).tokenize() {
            Ok(tokens) => {
                // 1. A successful pass always produces at least one token (Eof)
                assert!(!tokens.is_empty(), "tokenization should produce at least Eof");

                // 2. The last token is always Eof, and it is zero-width
                let eof = tokens.last().unwrap();
                assert_eq!(eof.kind, TokenKind::Eof, "last token should always be Eof");
                assert_eq!(eof.loc.start, eof.loc.end, "Eof should be zero-width");

                // 3. Locations are sane and strictly forward
                let mut prev_end = 0;
                for token in &tokens {
                    assert!(token.loc.start.offset <= token.loc.end.offset);
                    assert!(token.loc.start.line >= 1, "line numbers should be >= 1");
                    assert!(token.loc.start.column >= 1, "column numbers should be >= 1");
                    assert!(token.loc.start.offset >= prev_end, "tokens come in source order");
                    prev_end = token.loc.end.offset;
                }
            }
            Err(err) => {
                // A lexical failure still reports a sane position
                let at = err.position();
                assert!(at.line >= 1);
                assert!(at.column >= 1);
                assert!(at.offset <= input.len());
            }
        }
    }
});
