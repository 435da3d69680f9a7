//! Lexer
//!
//!     This module turns source text into [Lexeme] streams. The raw
//!     tokenization comes from the logos pattern table on [LexemeKind];
//!     this layer adds absolute offsets and exposes the filtered views
//!     the rest of the engine consumes.
//!
//! Stream levels
//!
//!     Three filtered views are derived from the element stream, each
//!     skipping a little more:
//!
//!         - [tokens]: skips whitespace, newlines, and comments. The
//!           context tracker and anything grammar-shaped reads this.
//!         - [markup]: skips whitespace and newlines only, keeping
//!           comments. Markup-level consumers outside the engine (symbol
//!           extraction and the like) read this.
//!         - [brackets]: bracket-family lexemes only, for the validator.
//!
//! Totality
//!
//!     Lexing never fails and never stalls: unrecognized characters
//!     become `Invalid` lexemes, unterminated strings and words extend
//!     to their forced boundary, and every call advances the position.
//!     Offsets passed in are clamped to character boundaries so that
//!     positional lookups are total as well.

use logos::Logos;

use crate::inform::token::{Lexeme, LexemeKind};

/// Iterator over the lexemes of a source region.
///
/// Yields every lexeme including whitespace, newlines, comments, and
/// `Invalid` spans; ends with `None` at end of region (no `Eos` item).
/// Offsets are absolute document offsets, shifted by the region base.
pub struct ElementScanner<'s> {
    lexer: logos::Lexer<'s, LexemeKind>,
    base: usize,
}

impl<'s> Iterator for ElementScanner<'s> {
    type Item = Lexeme;

    fn next(&mut self) -> Option<Lexeme> {
        let result = self.lexer.next()?;
        let kind = result.unwrap_or(LexemeKind::Invalid);
        let span = self.lexer.span();
        Some(Lexeme::new(
            kind,
            self.base + span.start,
            self.base + span.end,
            self.lexer.slice(),
        ))
    }
}

/// Scan a whole document.
pub fn scan(source: &str) -> ElementScanner<'_> {
    ElementScanner {
        lexer: LexemeKind::lexer(source),
        base: 0,
    }
}

/// Scan the region `[start, end)` of a document, producing absolute
/// offsets. The bounds are clamped to the document and to character
/// boundaries.
pub fn scan_range(source: &str, start: usize, end: usize) -> ElementScanner<'_> {
    let end = floor_char_boundary(source, end.min(source.len()));
    let start = floor_char_boundary(source, start.min(end));
    ElementScanner {
        lexer: LexemeKind::lexer(&source[start..end]),
        base: start,
    }
}

/// The lexeme starting at `pos`, or the `Eos` marker at end of input.
///
/// Callable repeatedly, advancing `pos` to each returned `end`, until
/// `Eos` comes back; the lexemes so produced are contiguous and exactly
/// cover the remainder of the document.
pub fn next_element(source: &str, pos: usize) -> Lexeme {
    if pos >= source.len() {
        return Lexeme::end_of_stream(source.len());
    }
    let pos = floor_char_boundary(source, pos);
    match scan_range(source, pos, source.len()).next() {
        Some(lexeme) => lexeme,
        None => Lexeme::end_of_stream(source.len()),
    }
}

/// Tokenize a whole document into a vector of lexemes.
pub fn tokenize(source: &str) -> Vec<Lexeme> {
    scan(source).collect()
}

/// Token-level stream: skips whitespace, newlines, and comments.
pub fn tokens(source: &str) -> impl Iterator<Item = Lexeme> + '_ {
    scan(source).filter(|lexeme| !lexeme.kind.is_trivia())
}

/// Markup-level stream: skips whitespace and newlines, keeps comments.
pub fn markup(source: &str) -> impl Iterator<Item = Lexeme> + '_ {
    scan(source).filter(|lexeme| !lexeme.kind.is_blank())
}

/// Bracket-family stream: the six bracket lexemes only.
pub fn brackets(source: &str) -> impl Iterator<Item = Lexeme> + '_ {
    scan(source).filter(|lexeme| lexeme.kind.is_bracket())
}

/// Largest character boundary not exceeding `pos`.
fn floor_char_boundary(source: &str, mut pos: usize) -> usize {
    while pos > 0 && !source.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}
