//! Per-document engine state and the incremental highlight driver.
//!
//!     A [DocumentSession] is owned by one open document. It holds the
//!     session's copy of the text, the symbol dictionary classifying it,
//!     and the styled spans of the last pass, the cache the incremental
//!     driver reads run boundaries from. Nothing is shared between
//!     sessions, and every operation runs to completion on the caller's
//!     thread.
//!
//! The re-lex window
//!
//!     An edit re-tokenizes only the region that can have changed
//!     appearance: from the start of the style run containing the edit
//!     point (tokens merge leftward at most to the previous style
//!     boundary) to the end of the edited line. The window re-lexes with
//!     directive context reset to Base; that approximation, and the
//!     full-document fallbacks below, are the documented trade for
//!     keystroke-time cost proportional to one line rather than the
//!     whole file.
//!
//!     Three conditions force the always-correct full-width pass: the
//!     window reaching the start of the file, a window tail that does
//!     not land on a cached token boundary (an edit inside a span that
//!     used to cross the line end, a multi-line string for instance),
//!     and a final window lexeme the line end clipped (an inserted
//!     quote opening a string that runs on). Either way the session
//!     stays consistent; windowed styling near a boundary self-heals on
//!     the next full pass.

use std::collections::BTreeSet;

use i6_syntax::inform::token::Lexeme;
use i6_syntax::inform::{brackets, lexing, SymbolDictionary};

use crate::highlight::{highlight, highlight_range};
use crate::style::StyledSpan;

/// The engine state of one open document.
pub struct DocumentSession {
    text: String,
    dictionary: SymbolDictionary,
    spans: Vec<StyledSpan>,
}

impl DocumentSession {
    /// A session over the library vocabulary alone.
    pub fn new(text: impl Into<String>) -> DocumentSession {
        DocumentSession::with_dictionary(text, SymbolDictionary::new())
    }

    /// A session classifying against the given dictionary (library plus
    /// project capability).
    pub fn with_dictionary(text: impl Into<String>, dictionary: SymbolDictionary) -> DocumentSession {
        let text = text.into();
        let spans = highlight(&text, &dictionary);
        DocumentSession {
            text,
            dictionary,
            spans,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The styled spans of the whole document as of the last pass.
    pub fn styled_spans(&self) -> &[StyledSpan] {
        &self.spans
    }

    /// Apply an edit delta and re-highlight the affected window.
    ///
    /// `offset` and `removed_len` describe the replaced region of the
    /// current text; `inserted` is the replacement. Out-of-range values
    /// are clamped. Returns the spans of the re-lexed window, which
    /// exactly and contiguously tile it; spans outside the window are
    /// unchanged (and shifted), so the caller repaints only what it
    /// receives.
    pub fn on_edit(&mut self, offset: usize, inserted: &str, removed_len: usize) -> Vec<StyledSpan> {
        let old_len = self.text.len();
        let offset = floor_char_boundary(&self.text, offset.min(old_len));
        let removed_end =
            floor_char_boundary(&self.text, offset.saturating_add(removed_len).min(old_len));
        self.text.replace_range(offset..removed_end, inserted);
        let delta = inserted.len() as isize - (removed_end - offset) as isize;

        let change_start = if offset == 0 { 0 } else { self.run_start(offset) };
        if change_start == 0 {
            // Re-lex from the start of file: the one boundary where the
            // Base context is exact.
            self.spans = highlight(&self.text, &self.dictionary);
            return self.spans.clone();
        }

        let mut change_end = line_end(&self.text, offset + inserted.len());

        // The cache is spliced at the position of `change_end` in the
        // pre-edit text. If no cached span starts there, a token used to
        // cross the line end; extend the window to the end of the
        // document instead.
        let old_tail_start = change_end as isize - delta;
        let aligned = old_tail_start >= 0
            && (old_tail_start as usize == old_len
                || self
                    .spans
                    .binary_search_by_key(&(old_tail_start as usize), |span| span.range.start)
                    .is_ok());
        if !aligned {
            change_end = self.text.len();
        }

        let mut window = highlight_range(&self.text, change_start, change_end, &self.dictionary);

        // A token the window clipped (an inserted quote opening a string
        // that runs past the line end) would leave the splice pointing
        // into the middle of the document's real token. Compare the final
        // window lexeme against the full text and extend when they
        // disagree.
        if change_end < self.text.len() {
            if let Some(last) = window.last() {
                let full = lexing::next_element(&self.text, last.range.start);
                if full.end != last.range.end {
                    change_end = self.text.len();
                    window = highlight_range(&self.text, change_start, change_end, &self.dictionary);
                }
            }
        }

        let mut rebuilt: Vec<StyledSpan> = self
            .spans
            .iter()
            .take_while(|span| span.range.end <= change_start)
            .cloned()
            .collect();
        rebuilt.extend(window.iter().cloned());
        if change_end < self.text.len() {
            let tail_start = (change_end as isize - delta) as usize;
            for span in &self.spans {
                if span.range.start >= tail_start {
                    let start = (span.range.start as isize + delta) as usize;
                    let end = (span.range.end as isize + delta) as usize;
                    rebuilt.push(StyledSpan::new(start..end, span.style));
                }
            }
        }
        self.spans = rebuilt;

        window
    }

    /// Re-run the full pass. Always correct; the fallback for anything
    /// the windowed path approximates.
    pub fn rehighlight(&mut self) -> &[StyledSpan] {
        self.spans = highlight(&self.text, &self.dictionary);
        &self.spans
    }

    /// Bracket validation over the whole document, on demand.
    pub fn bracket_errors(&self) -> BTreeSet<usize> {
        brackets::find_errors(&self.text)
    }

    /// The lowest bracket-error offset, for the first-error cursor jump.
    pub fn first_bracket_error(&self) -> Option<usize> {
        brackets::first_error(&self.text)
    }

    /// Token-level stream of the document (whitespace, newlines, and
    /// comments skipped).
    pub fn tokens(&self) -> Vec<Lexeme> {
        lexing::tokens(&self.text).collect()
    }

    /// Markup-level stream of the document (whitespace and newlines
    /// skipped, comments kept).
    pub fn markup(&self) -> Vec<Lexeme> {
        lexing::markup(&self.text).collect()
    }

    /// Start of the style run containing the edit point, probed at
    /// `offset - 1` so that a token ending exactly at the edit boundary
    /// is preferred over re-lexing from further back.
    fn run_start(&self, offset: usize) -> usize {
        let probe = offset - 1;
        let idx = self
            .spans
            .partition_point(|span| span.range.end <= probe);
        if idx >= self.spans.len() {
            return 0;
        }
        let style = self.spans[idx].style;
        let mut i = idx;
        while i > 0 && self.spans[i - 1].style == style {
            i -= 1;
        }
        self.spans[i].range.start
    }
}

/// End offset of the line containing `pos`: one past its newline, or the
/// end of the document.
fn line_end(text: &str, pos: usize) -> usize {
    let pos = pos.min(text.len());
    match text[pos..].find('\n') {
        Some(i) => pos + i + 1,
        None => text.len(),
    }
}

/// Largest character boundary not exceeding `pos`.
fn floor_char_boundary(text: &str, mut pos: usize) -> usize {
    while pos > 0 && !text.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}
