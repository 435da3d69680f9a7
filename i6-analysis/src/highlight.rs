//! Full and windowed highlight passes.
//!
//! A pass scans a region, tracks directive context across it, and emits
//! one styled span per lexeme. The spans exactly and contiguously tile
//! the scanned region; the caller repaints those and leaves everything
//! outside untouched.

use i6_syntax::inform::{lexing, ContextTracker, SymbolDictionary};

use crate::style::{style_for, StyledSpan};

/// Highlight a whole document. Context starts at Base, which at offset
/// zero is exact.
pub fn highlight(source: &str, dictionary: &SymbolDictionary) -> Vec<StyledSpan> {
    highlight_range(source, 0, source.len(), dictionary)
}

/// Highlight the region `[start, end)`.
///
/// The context tracker is reset to Base at the region boundary. For a
/// boundary other than the start of file this is an approximation (the
/// true context can span many lines), accepted so that a windowed pass
/// costs one edited run, not the whole document. Context-dependent
/// classification near the boundary self-heals on the next full pass.
pub fn highlight_range(
    source: &str,
    start: usize,
    end: usize,
    dictionary: &SymbolDictionary,
) -> Vec<StyledSpan> {
    let mut tracker = ContextTracker::new();
    let mut spans = Vec::new();
    for lexeme in lexing::scan_range(source, start, end) {
        let style = style_for(&lexeme, tracker.current_context(), dictionary);
        tracker.advance(&lexeme);
        spans.push(StyledSpan::new(lexeme.start..lexeme.end, style));
    }
    spans
}
