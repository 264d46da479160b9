//! Property-Based Tests for the AACL Lexer and Parser
//!
//! Properties:
//! - trivia-only inputs tokenize to exactly [Eof] and parse to empty
//!   programs with no errors
//! - for any string literal token, unescaping its `raw` field with the
//!   documented escape table reproduces its `value` field
//! - re-tokenizing any single token's source text in isolation reproduces
//!   a token of the same kind and value
//! - generated well-formed programs parse cleanly with matching structure

use aacl_dsl::{parse_source, unescape, Lexer, Statement, TokenKind};
use proptest::prelude::*;

// ============================================================================
// GENERATORS
// ============================================================================

/// Runs of whitespace, line comments, and block comments - anything the
/// lexer treats as trivia.
fn arb_trivia() -> impl Strategy<Value = String> {
    let atom = prop_oneof![
        proptest::string::string_regex("[ \t\r\n]{1,8}").unwrap(),
        proptest::string::string_regex("//[ a-z0-9]{0,16}\n").unwrap(),
        proptest::string::string_regex("/\\*[ a-z0-9\n]{0,16}\\*/").unwrap(),
    ];
    proptest::collection::vec(atom, 0..6).prop_map(|atoms| atoms.concat())
}

/// Content for a string literal: printable ASCII plus the two characters
/// that need decoding escapes.
fn arb_string_content() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[ -~\n\t]{0,24}").unwrap()
}

/// An identifier that is not a keyword.
fn arb_identifier() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z_][a-z0-9_-]{0,10}")
        .unwrap()
        .prop_filter("keywords are not identifiers", |s| {
            TokenKind::keyword(s).is_none()
        })
}

/// Escape string content the way AACL source text spells it.
fn escape(content: &str) -> String {
    let mut out = String::new();
    for c in content.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            c => out.push(c),
        }
    }
    out
}

/// Decode a raw string-literal slice (quotes and escapes intact) using the
/// lexer's documented escape table.
fn unescape_raw(raw: &str) -> String {
    let inner = &raw[1..raw.len() - 1];
    let mut out = String::new();
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            let esc = chars.next().expect("raw never ends inside an escape");
            out.push(unescape(esc).expect("raw only holds documented escapes"));
        } else {
            out.push(c);
        }
    }
    out
}

#[derive(Debug, Clone)]
enum GenStmt {
    Intent(String),
    Capability(String, Option<Vec<String>>),
    Check(String, String, String),
    Emit(String),
}

fn arb_statement() -> impl Strategy<Value = GenStmt> {
    prop_oneof![
        arb_string_content().prop_map(GenStmt::Intent),
        (
            arb_identifier(),
            proptest::option::of(proptest::collection::vec(arb_string_content(), 0..4)),
        )
            .prop_map(|(kind, args)| GenStmt::Capability(kind, args)),
        (arb_identifier(), arb_identifier(), arb_string_content())
            .prop_map(|(t, n, e)| GenStmt::Check(t, n, e)),
        arb_string_content().prop_map(GenStmt::Emit),
    ]
}

fn arb_program() -> impl Strategy<Value = Vec<(String, Vec<GenStmt>)>> {
    proptest::collection::vec(
        (
            arb_string_content(),
            proptest::collection::vec(arb_statement(), 0..5),
        ),
        0..4,
    )
}

fn render_statement(stmt: &GenStmt) -> String {
    match stmt {
        GenStmt::Intent(value) => format!("  intent \"{}\";\n", escape(value)),
        GenStmt::Capability(kind, None) => format!("  capability {};\n", kind),
        GenStmt::Capability(kind, Some(args)) => {
            let rendered: Vec<String> =
                args.iter().map(|a| format!("\"{}\"", escape(a))).collect();
            format!("  capability {} [{}];\n", kind, rendered.join(", "))
        }
        GenStmt::Check(check_type, name, expectation) => format!(
            "  check {} {} expect \"{}\";\n",
            check_type,
            name,
            escape(expectation)
        ),
        GenStmt::Emit(target) => format!("  emit \"{}\";\n", escape(target)),
    }
}

fn render_program(agents: &[(String, Vec<GenStmt>)]) -> String {
    let mut out = String::new();
    for (name, body) in agents {
        out.push_str(&format!("agent \"{}\" {{\n", escape(name)));
        for stmt in body {
            out.push_str(&render_statement(stmt));
        }
        out.push_str("}\n");
    }
    out
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn trivia_only_sources_lex_to_a_single_eof(source in arb_trivia()) {
        let tokens = Lexer::new(&source).tokenize().expect("trivia lexes");
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(&tokens[0].kind, &TokenKind::Eof);

        let outcome = parse_source(&source);
        prop_assert!(outcome.success);
        prop_assert!(outcome.errors.is_empty());
        prop_assert_eq!(outcome.program.unwrap().agents.len(), 0);
    }

    #[test]
    fn string_literal_raw_round_trips_to_value(content in arb_string_content()) {
        let source = format!("\"{}\"", escape(&content));
        let tokens = Lexer::new(&source).tokenize().expect("literal lexes");

        match &tokens[0].kind {
            TokenKind::Str { value, raw } => {
                prop_assert_eq!(value, &content);
                prop_assert_eq!(raw, &source);
                prop_assert_eq!(&unescape_raw(raw), value);
            }
            other => prop_assert!(false, "expected string token, got {:?}", other),
        }
    }

    #[test]
    fn retokenizing_a_single_token_is_idempotent(
        text in prop_oneof![
            proptest::sample::select(vec![
                "agent", "intent", "capability", "check", "emit", "expect", "true", "false",
            ])
            .prop_map(str::to_string),
            proptest::string::string_regex("-?[0-9]{1,9}").unwrap(),
            arb_identifier(),
            arb_string_content().prop_map(|c| format!("\"{}\"", escape(&c))),
            proptest::sample::select(vec!["{", "}", "[", "]", ";", ","])
                .prop_map(str::to_string),
        ],
        pad_left in proptest::string::string_regex("[ \t\n]{0,4}").unwrap(),
        pad_right in proptest::string::string_regex("[ \t\n]{0,4}").unwrap(),
    ) {
        let first = Lexer::new(&text).tokenize().expect("token lexes");
        prop_assert_eq!(first.len(), 2);

        let padded = format!("{}{}{}", pad_left, text, pad_right);
        let second = Lexer::new(&padded).tokenize().expect("padded token lexes");
        prop_assert_eq!(second.len(), 2);

        // same kind and decoded value regardless of surrounding whitespace
        prop_assert_eq!(&first[0].kind, &second[0].kind);
    }

    #[test]
    fn generated_programs_parse_with_matching_structure(agents in arb_program()) {
        let source = render_program(&agents);
        let outcome = parse_source(&source);

        prop_assert!(outcome.success, "errors: {:?}", outcome.errors);
        let program = outcome.program.unwrap();
        prop_assert_eq!(program.agents.len(), agents.len());

        for (parsed, (name, body)) in program.agents.iter().zip(&agents) {
            prop_assert_eq!(&parsed.name.value, name);
            prop_assert_eq!(parsed.body.len(), body.len());

            for (stmt, expected) in parsed.body.iter().zip(body) {
                match (stmt, expected) {
                    (Statement::Intent(s), GenStmt::Intent(value)) => {
                        prop_assert_eq!(&s.value.value, value);
                    }
                    (Statement::Capability(s), GenStmt::Capability(kind, args)) => {
                        prop_assert_eq!(&s.kind.name, kind);
                        match (&s.args, args) {
                            (None, None) => {}
                            (Some(parsed_args), Some(spec_args)) => {
                                let values: Vec<&String> =
                                    parsed_args.elements.iter().map(|e| &e.value).collect();
                                let expected: Vec<&String> = spec_args.iter().collect();
                                prop_assert_eq!(values, expected);
                            }
                            other => prop_assert!(false, "args mismatch: {:?}", other),
                        }
                    }
                    (Statement::Check(s), GenStmt::Check(check_type, name, expectation)) => {
                        prop_assert_eq!(&s.check_type.name, check_type);
                        prop_assert_eq!(&s.name.name, name);
                        prop_assert_eq!(&s.expectation.value, expectation);
                    }
                    (Statement::Emit(s), GenStmt::Emit(target)) => {
                        prop_assert_eq!(&s.target.value, target);
                    }
                    other => prop_assert!(false, "statement mismatch: {:?}", other),
                }
            }
        }
    }
}
