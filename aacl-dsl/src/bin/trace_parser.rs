/// AACL Parse Tracer - Shows the flow through Source → Tokens → AST
///
/// Usage: cargo run --bin trace_parser <aacl-file>
use aacl_dsl::{parse_source, Lexer};
use std::fs;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --bin trace_parser <aacl-file>");
        eprintln!();
        eprintln!("Example:");
        eprintln!("  cargo run --bin trace_parser demos/greeter.aacl");
        std::process::exit(1);
    }

    let path = &args[1];

    println!("╔═══════════════════════════════════════════════════════════════");
    println!("║ AACL PARSER TRACER");
    println!("╚═══════════════════════════════════════════════════════════════\n");

    let source = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("❌ Failed to read {}: {}", path, e);
            std::process::exit(1);
        }
    };

    println!("📝 INPUT SOURCE:");
    println!("{}", source);
    println!();

    println!("🔤 TOKENS:");
    match Lexer::new(&source).tokenize() {
        Ok(tokens) => {
            for token in &tokens {
                println!(
                    "  {:>4}:{:<3} {:?}",
                    token.loc.start.line, token.loc.start.column, token.kind
                );
            }
        }
        Err(e) => {
            eprintln!("❌ Lexical error: {}", e);
            std::process::exit(1);
        }
    }
    println!();

    let outcome = parse_source(&source);

    println!("🌳 AST:");
    match &outcome.program {
        Some(program) => match serde_json::to_string_pretty(program) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("❌ Failed to serialize AST: {}", e);
                std::process::exit(1);
            }
        },
        None => println!("  (no program - tokenization failed)"),
    }
    println!();

    if outcome.errors.is_empty() {
        println!("✅ Parsed with no errors");
    } else {
        println!("⚠️  {} error(s):", outcome.errors.len());
        for err in &outcome.errors {
            println!("  - {}", err);
        }
        std::process::exit(1);
    }
}
