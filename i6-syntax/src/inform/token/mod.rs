//! Lexeme types shared across the lexer, context tracker, and tooling.
//!
//!     Inform 6 keeps most of its complexity at the word level: a handful
//!     of delimited forms (strings, dictionary words, comments), three
//!     number notations, a large fixed punctuation set, and symbols whose
//!     meaning depends entirely on dictionaries and directive context. The
//!     lexeme vocabulary therefore stays flat (one closed enumeration,
//!     matched exhaustively) and classification beyond the lexical level
//!     is someone else's job (see [dictionary](super::dictionary) and
//!     [context](super::context)).

pub mod core;

pub use core::{Lexeme, LexemeKind};
