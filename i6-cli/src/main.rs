//! Command-line interface for the i6 engine
//! This binary inspects Inform 6 files with the same engine the editor
//! integration uses: lexeme streams, styled spans, and bracket errors.
//!
//! Usage:
//!   i6 `<path>` --emit `<tokens|markup|styles|brackets>` [--format `<json|plain>`]

use clap::{Arg, Command};

use i6_analysis::session::DocumentSession;

fn main() {
    let matches = Command::new("i6")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting Inform 6 source files")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the Inform 6 file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("emit")
                .long("emit")
                .short('e')
                .help("What to emit: 'tokens', 'markup', 'styles', or 'brackets'")
                .default_value("styles"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: 'json' or 'plain'")
                .default_value("json"),
        )
        .get_matches();

    let path = matches
        .get_one::<String>("path")
        .expect("path is required");
    let emit = matches.get_one::<String>("emit").unwrap();
    let format = matches.get_one::<String>("format").unwrap();
    handle_emit_command(path, emit, format);
}

/// Load the file, run the engine, and print the requested view.
fn handle_emit_command(path: &str, emit: &str, format: &str) {
    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Cannot read {}: {}", path, e);
        std::process::exit(1);
    });
    let session = DocumentSession::new(source);

    let output = match (emit, format) {
        ("tokens", "json") => to_json(&session.tokens()),
        ("tokens", "plain") => lexemes_plain(&session.tokens()),
        ("markup", "json") => to_json(&session.markup()),
        ("markup", "plain") => lexemes_plain(&session.markup()),
        ("styles", "json") => to_json(&session.styled_spans().to_vec()),
        ("styles", "plain") => styles_plain(&session),
        ("brackets", "json") => {
            to_json(&session.bracket_errors().into_iter().collect::<Vec<_>>())
        }
        ("brackets", "plain") => session
            .bracket_errors()
            .into_iter()
            .map(|offset| offset.to_string())
            .collect::<Vec<_>>()
            .join("\n"),
        (other, "json") | (other, "plain") => {
            eprintln!("Unknown emit target '{}'", other);
            eprintln!("Available targets: tokens, markup, styles, brackets");
            std::process::exit(1);
        }
        (_, other) => {
            eprintln!("Unknown format '{}'", other);
            eprintln!("Available formats: json, plain");
            std::process::exit(1);
        }
    };

    println!("{}", output);
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        eprintln!("Error formatting output: {}", e);
        std::process::exit(1);
    })
}

fn lexemes_plain(lexemes: &[i6_syntax::inform::Lexeme]) -> String {
    lexemes
        .iter()
        .map(|lexeme| {
            format!(
                "{}..{}\t{:?}\t{:?}",
                lexeme.start, lexeme.end, lexeme.kind, lexeme.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn styles_plain(session: &DocumentSession) -> String {
    session
        .styled_spans()
        .iter()
        .map(|span| {
            format!(
                "{}..{}\t{}\t{:?}",
                span.range.start,
                span.range.end,
                span.style,
                &session.text()[span.range.clone()]
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
