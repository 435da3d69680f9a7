//! Core lexeme definitions for Inform 6
//!
//! The lexeme kinds are defined using the logos derive macro. Fixed
//! punctuation uses `#[token]` patterns and wins by longest match, so the
//! two- and three-character operator forms take precedence over their
//! prefixes without explicit priorities. The delimited forms that logos
//! regexes cannot express exactly (strings and dictionary words, with
//! their `@` escape rule) consume their tails in callbacks over
//! `remainder()`.
//!
//! Unrecognized characters are not an error channel: the lowest-priority
//! catch-all turns each one into an `Invalid` lexeme. `Eos` is the one
//! kind the pattern table never produces; positional lookups synthesize
//! it at end of input.

use logos::{Lexer, Logos};

/// All lexeme kinds of Inform 6 source text.
///
/// The enumeration is closed and flat: every character of the input is
/// covered by exactly one variant, including blank space, newlines, and
/// bytes the language has no use for.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum LexemeKind {
    /// End of stream. Synthesized by positional lookups, never produced
    /// by the pattern table.
    Eos,

    /// A single unrecognized character, absorbed by a lowest-priority
    /// catch-all so that lexing is total and always advances.
    #[regex(r".", priority = 0)]
    Invalid,

    /// A run of spaces and tabs.
    #[regex(r"[ \t]+")]
    Whitespace,

    /// A single line break, `\r\n` counted as one.
    #[regex(r"\r\n|\n|\r")]
    Newline,

    /// `!` to end of line, line break excluded.
    #[regex(r"![^\n\r]*")]
    Comment,

    /// A double-quoted string. Runs through the next `"` not preceded by
    /// `@`, across line breaks, or to end of input when unterminated.
    #[token("\"", lex_string)]
    String,

    /// A single-quoted dictionary word. A `'` preceded by `@` (the ZSCII
    /// escape) does not close it; a bare line break or end of input
    /// force-closes it without being consumed.
    #[token("'", lex_word)]
    Word,

    /// An identifier: letter or underscore, then letters, digits,
    /// underscores. Reserved-word status is a dictionary question, not a
    /// lexical one.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Symbol,

    /// A decimal number.
    #[regex(r"[0-9]+")]
    Decimal,

    /// `$` followed by hexadecimal digits.
    #[regex(r"\$[0-9a-fA-F]*")]
    Hexadecimal,

    /// `$$` followed by binary digits.
    #[regex(r"\$\$[01]*")]
    Binary,

    // Bracket families.
    #[token("{")]
    BraceOpen,
    #[token("}")]
    BraceClose,
    /// `[`, opening a routine body.
    #[token("[")]
    RoutineOpen,
    /// `]`, closing a routine body.
    #[token("]")]
    RoutineClose,
    #[token("(")]
    ParenOpen,
    #[token(")")]
    ParenClose,

    // Statement punctuation.
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,

    // Arrow and minus family.
    #[token("->")]
    Arrow,
    #[token("-->")]
    DoubleArrow,
    #[token("--")]
    MinusMinus,
    #[token("-")]
    Minus,

    // Equals family.
    #[token("==")]
    EqualEqual,
    #[token("=>")]
    FatArrow,
    #[token("=")]
    Assign,

    // Comparison and shift families.
    #[token("<<")]
    LessLess,
    #[token("<=")]
    LessEqual,
    #[token("<")]
    Less,
    #[token(">>")]
    GreaterGreater,
    #[token(">=")]
    GreaterEqual,
    #[token(">")]
    Greater,

    // Tilde family.
    #[token("~~")]
    TildeTilde,
    #[token("~=")]
    TildeEqual,
    #[token("~")]
    Tilde,

    // Colon family.
    #[token("::")]
    ColonColon,
    #[token(":")]
    Colon,

    // Logical and arithmetic operators.
    #[token("&&")]
    AmpAmp,
    #[token("&")]
    Ampersand,
    #[token("||")]
    PipePipe,
    #[token("|")]
    Pipe,
    #[token("++")]
    PlusPlus,
    #[token("+")]
    Plus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,

    // Dot family, longest form first for readability; logos matches by
    // length regardless of declaration order.
    #[token("..#")]
    DotDotHash,
    #[token("..@")]
    DotDotAt,
    #[token("..")]
    DotDot,
    #[token(".#")]
    DotHash,
    #[token(".@")]
    DotAt,
    #[token(".")]
    Dot,

    // Hash family: `##Take` action literals and the `#a$`/`#n$`/`#r$`/
    // `#w$` constant prefixes.
    #[token("##")]
    HashHash,
    #[token("#a$")]
    HashAction,
    #[token("#n$")]
    HashNoun,
    #[token("#r$")]
    HashRoutine,
    #[token("#w$")]
    HashWord,
    #[token("#")]
    Hash,
}

/// Consume the tail of a double-quoted string.
///
/// Stops after the first `"` whose preceding byte is not `@`; an
/// unterminated string extends to end of input.
fn lex_string(lex: &mut Lexer<LexemeKind>) {
    let bytes = lex.remainder().as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'"' && (i == 0 || bytes[i - 1] != b'@') {
            lex.bump(i + 1);
            return;
        }
        i += 1;
    }
    lex.bump(bytes.len());
}

/// Consume the tail of a single-quoted dictionary word.
///
/// Stops after the first `'` whose preceding byte is not `@`. A line
/// break force-closes the word and stays outside it; so does end of
/// input.
fn lex_word(lex: &mut Lexer<LexemeKind>) {
    let bytes = lex.remainder().as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' | b'\r' => break,
            b'\'' if i == 0 || bytes[i - 1] != b'@' => {
                lex.bump(i + 1);
                return;
            }
            _ => i += 1,
        }
    }
    lex.bump(i);
}

impl LexemeKind {
    /// Whitespace, newline, comment, or end of stream: the kinds the
    /// token-level iterator skips and the context tracker ignores.
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            LexemeKind::Whitespace | LexemeKind::Newline | LexemeKind::Comment | LexemeKind::Eos
        )
    }

    /// Whitespace, newline, or end of stream: the kinds the markup-level
    /// iterator skips. Comments survive at this level.
    pub fn is_blank(self) -> bool {
        matches!(
            self,
            LexemeKind::Whitespace | LexemeKind::Newline | LexemeKind::Eos
        )
    }

    /// One of the six bracket-family kinds.
    pub fn is_bracket(self) -> bool {
        matches!(
            self,
            LexemeKind::BraceOpen
                | LexemeKind::BraceClose
                | LexemeKind::RoutineOpen
                | LexemeKind::RoutineClose
                | LexemeKind::ParenOpen
                | LexemeKind::ParenClose
        )
    }

    /// One of the three number notations.
    pub fn is_number(self) -> bool {
        matches!(
            self,
            LexemeKind::Decimal | LexemeKind::Hexadecimal | LexemeKind::Binary
        )
    }
}

/// A classified contiguous span of source text.
///
/// `start` and `end` are absolute byte offsets into the full document,
/// not the re-lex window. Lexemes produced by one pass are contiguous,
/// non-overlapping, and exactly cover the scanned region.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Lexeme {
    pub kind: LexemeKind,
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl Lexeme {
    pub fn new(kind: LexemeKind, start: usize, end: usize, text: impl Into<String>) -> Lexeme {
        let lexeme = Lexeme {
            kind,
            start,
            end,
            text: text.into(),
        };
        debug_assert!(lexeme.start <= lexeme.end);
        debug_assert_eq!(lexeme.end - lexeme.start, lexeme.text.len());
        lexeme
    }

    /// The end-of-stream marker at the given offset. Zero-width.
    pub fn end_of_stream(at: usize) -> Lexeme {
        Lexeme {
            kind: LexemeKind::Eos,
            start: at,
            end: at,
            text: String::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
