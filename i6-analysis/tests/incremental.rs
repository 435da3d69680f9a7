//! Property-based tests for the incremental highlight driver
//!
//! The core invariant: after `on_edit`, the session's cached spans must
//! equal a from-scratch pass over the post-edit document. Generated
//! documents avoid the six directive keywords so that the windowed
//! pass's context reset cannot differ from the full pass. The
//! approximation the engine documents is exactly the case excluded here,
//! and it is pinned separately by a deterministic test.

use i6_analysis::session::DocumentSession;
use proptest::prelude::*;

/// Document fragments: words that are not directive keywords, every
/// delimited form, punctuation, numbers, and line breaks.
fn piece() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("foo"),
        Just("bar"),
        Just("zap"),
        Just("lamp"),
        Just("light"),
        Just("description"),
        Just("take"),
        Just("has"),
        Just(" "),
        Just("  "),
        Just("\n"),
        Just(";"),
        Just(","),
        Just("->"),
        Just("-->"),
        Just("*"),
        Just("=="),
        Just("123"),
        Just("$ff"),
        Just("$$10"),
        Just("\"quoted text\""),
        Just("\"open"),
        Just("'word'"),
        Just("! aside"),
        Just("{"),
        Just("}"),
        Just("["),
        Just("]"),
        Just("("),
        Just(")"),
    ]
}

fn document(max_pieces: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(piece(), 0..max_pieces).prop_map(|pieces| pieces.concat())
}

proptest! {
    /// One edit: the spliced cache equals a from-scratch pass, and the
    /// returned window tiles contiguously.
    #[test]
    fn edited_session_matches_fresh_session(
        doc in document(30),
        insert in document(6),
        offset_frac in 0.0..=1.0f64,
        removed in 0usize..6,
    ) {
        let offset = (doc.len() as f64 * offset_frac) as usize;
        let mut session = DocumentSession::new(doc);
        let window = session.on_edit(offset, &insert, removed);

        let mut pos = None;
        for span in &window {
            if let Some(expected) = pos {
                prop_assert_eq!(span.range.start, expected);
            }
            pos = Some(span.range.end);
        }

        let fresh = DocumentSession::new(session.text().to_string());
        prop_assert_eq!(session.styled_spans(), fresh.styled_spans());
    }

    /// Edits compose: the cache stays consistent across a second edit
    /// spliced into the result of the first.
    #[test]
    fn successive_edits_stay_consistent(
        doc in document(20),
        first_insert in document(4),
        second_insert in document(4),
        first_frac in 0.0..=1.0f64,
        second_frac in 0.0..=1.0f64,
        removed in 0usize..4,
    ) {
        let mut session = DocumentSession::new(doc);
        let offset = (session.text().len() as f64 * first_frac) as usize;
        session.on_edit(offset, &first_insert, removed);
        let offset = (session.text().len() as f64 * second_frac) as usize;
        session.on_edit(offset, &second_insert, removed);

        let fresh = DocumentSession::new(session.text().to_string());
        prop_assert_eq!(session.styled_spans(), fresh.styled_spans());
    }

    /// The whole-document span cache always tiles the text exactly.
    #[test]
    fn cache_tiles_the_document(
        doc in document(30),
        insert in document(6),
        offset_frac in 0.0..=1.0f64,
    ) {
        let offset = (doc.len() as f64 * offset_frac) as usize;
        let mut session = DocumentSession::new(doc);
        session.on_edit(offset, &insert, 0);

        let mut pos = 0;
        for span in session.styled_spans() {
            prop_assert_eq!(span.range.start, pos);
            prop_assert!(span.range.end > span.range.start);
            pos = span.range.end;
        }
        prop_assert_eq!(pos, session.text().len());
    }
}

/// The documented approximation, pinned: a windowed pass across a
/// directive boundary styles the continuation from Base until the full
/// pass heals it.
#[test]
fn windowed_context_desynchronization_heals_on_full_pass() {
    let mut session = DocumentSession::new("Attribute glowing,\nshining;\n");
    // Editing the second line re-lexes from within it; the window's
    // context starts at Base, so `shining` loses its Attribute style.
    let shining = session.text().find("shining").unwrap();
    session.on_edit(shining, "x", 0);

    let styled_of = |session: &DocumentSession, word: &str| {
        let at = session.text().find(word).unwrap();
        session
            .styled_spans()
            .iter()
            .find(|span| span.range.start == at)
            .unwrap()
            .style
    };

    assert_eq!(
        styled_of(&session, "xshining"),
        i6_analysis::style::StyleCategory::Normal
    );

    // The full pass restores the declaration style.
    session.rehighlight();
    assert_eq!(
        styled_of(&session, "xshining"),
        i6_analysis::style::StyleCategory::Attribute
    );
}
