//! Directive context tracking
//!
//!     A small state machine over the token-level stream that remembers
//!     which directive a given position is inside. The states mirror the
//!     declaration forms whose bodies change how a symbol should read:
//!     `Attribute`/`Property`/`Verb` declarations name new vocabulary,
//!     `Verb` bodies alternate between grammar patterns and the actions
//!     they produce, and `Class`/`Object` bodies are ordinary definition
//!     ground.
//!
//!     The whole transition table is the pure [transition] function;
//!     [ContextTracker] is the thin mutable wrapper a streaming pass
//!     carries. Trivia (whitespace, newlines, comments) never changes
//!     state; observers that care about trivia read it straight off the
//!     element stream.
//!
//!     A declaration missing its terminating `;` simply leaves its state
//!     in force until the end of the scanned window. That is best effort
//!     by design, not an error.

use crate::inform::token::{Lexeme, LexemeKind};

/// The directive context governing a position in the token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ParserContext {
    /// Top level, between directives.
    Base,
    /// Inside an `Attribute` declaration.
    Attribute,
    /// Inside a `Property` declaration.
    Property,
    /// Inside a `Verb` (or `Extend`) declaration, before any `*`.
    Verb,
    /// Inside a grammar pattern of a `Verb` declaration.
    Grammar,
    /// After `->` in a grammar pattern: the action name position.
    GrammarAction,
    /// Inside a `Class` definition.
    Class,
    /// Inside an `Object` definition.
    Object,
}

/// The context after consuming one token-level lexeme.
///
/// Trivia is returned unchanged. `;` returns to [ParserContext::Base]
/// from any state. `*` alternates between [ParserContext::Verb] and
/// [ParserContext::Grammar] (and starts the next grammar pattern from
/// [ParserContext::GrammarAction]); `->` alternates between
/// [ParserContext::Grammar] and [ParserContext::GrammarAction]. In
/// [ParserContext::Base], the six directive keywords, matched
/// case-insensitively, enter their states directly, which also covers
/// a scan starting mid-file without a preceding `;`.
pub fn transition(context: ParserContext, lexeme: &Lexeme) -> ParserContext {
    if lexeme.kind.is_trivia() {
        return context;
    }
    match lexeme.kind {
        LexemeKind::Semicolon => ParserContext::Base,
        LexemeKind::Star => match context {
            ParserContext::Verb => ParserContext::Grammar,
            ParserContext::Grammar => ParserContext::Verb,
            ParserContext::GrammarAction => ParserContext::Grammar,
            other => other,
        },
        LexemeKind::Arrow => match context {
            ParserContext::Grammar => ParserContext::GrammarAction,
            ParserContext::GrammarAction => ParserContext::Grammar,
            other => other,
        },
        LexemeKind::Symbol if context == ParserContext::Base => {
            directive_state(&lexeme.text).unwrap_or(ParserContext::Base)
        }
        _ => context,
    }
}

/// The specialized state a directive keyword opens, if any. `Extend`
/// re-opens an existing `Verb` declaration and shares its state.
fn directive_state(name: &str) -> Option<ParserContext> {
    let lower = name.to_ascii_lowercase();
    match lower.as_str() {
        "attribute" => Some(ParserContext::Attribute),
        "property" => Some(ParserContext::Property),
        "verb" | "extend" => Some(ParserContext::Verb),
        "class" => Some(ParserContext::Class),
        "object" => Some(ParserContext::Object),
        _ => None,
    }
}

/// Streaming wrapper around [transition]: one instance per open
/// document, advanced lexeme by lexeme during a full or windowed pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextTracker {
    context: ParserContext,
}

impl Default for ContextTracker {
    fn default() -> Self {
        ContextTracker::new()
    }
}

impl ContextTracker {
    /// A tracker in [ParserContext::Base], the state of the start of a
    /// document and of any re-lex boundary where prior context cannot be
    /// established cheaply.
    pub fn new() -> ContextTracker {
        ContextTracker {
            context: ParserContext::Base,
        }
    }

    pub fn current_context(&self) -> ParserContext {
        self.context
    }

    pub fn advance(&mut self, lexeme: &Lexeme) {
        self.context = transition(self.context, lexeme);
    }

    pub fn reset(&mut self) {
        self.context = ParserContext::Base;
    }
}
