//! # i6-analysis
//!
//! Editor-facing analysis over the `i6-syntax` core: style categories and
//! their resolution rules, full and windowed highlight passes, and the
//! per-document session that applies edit deltas incrementally.
//!
//! Everything here is single-threaded and run-to-completion: a session is
//! owned by one document, `on_edit` executes on the caller's thread in
//! time proportional to the edited run, and no state is shared between
//! documents.

pub mod highlight;
pub mod session;
pub mod style;

pub use highlight::{highlight, highlight_range};
pub use session::DocumentSession;
pub use style::{StyleCategory, StyledSpan};
