//! Symbol dictionary
//!
//!     Reserved-word queries for symbol classification. The library
//!     vocabulary lives in immutable tables built once per process and
//!     shared by reference; every [SymbolDictionary] closes over those
//!     tables plus one injected [ProjectSymbols] capability for names
//!     declared elsewhere in the project. The dictionary knows nothing
//!     about files or projects; the capability is how cross-file
//!     definitions reach classification.
//!
//! Case sensitivity
//!
//!     Directive names match case-insensitively (`Object`, `OBJECT`, and
//!     `object` are all the directive); every other lookup is
//!     case-sensitive, matching the language's own rules. The asymmetry
//!     is deliberate and affects which symbols highlight as directives
//!     versus ordinary identifiers.

mod words;

use std::collections::HashSet;

use once_cell::sync::Lazy;

static ATTRIBUTE_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| words::ATTRIBUTES.iter().copied().collect());

static PROPERTY_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| words::PROPERTIES.iter().copied().collect());

static VERB_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| words::VERBS.iter().copied().collect());

static KEYWORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| words::KEYWORDS.iter().copied().collect());

static DIRECTIVE_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| words::DIRECTIVES.iter().copied().collect());

/// Project-scope symbol lookup, injected by whatever indexes the rest of
/// the project. Implementations answer for user-declared names only; the
/// library vocabulary is this module's own concern.
pub trait ProjectSymbols {
    fn is_attribute(&self, name: &str) -> bool;
    fn is_property(&self, name: &str) -> bool;
    fn is_verb(&self, name: &str) -> bool;
}

/// The no-project capability: answers no to everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProjectSymbols;

impl ProjectSymbols for NoProjectSymbols {
    fn is_attribute(&self, _name: &str) -> bool {
        false
    }

    fn is_property(&self, _name: &str) -> bool {
        false
    }

    fn is_verb(&self, _name: &str) -> bool {
        false
    }
}

/// Reserved-word predicates over the library tables and one injected
/// project capability.
pub struct SymbolDictionary {
    project: Box<dyn ProjectSymbols>,
}

impl Default for SymbolDictionary {
    fn default() -> Self {
        SymbolDictionary::new()
    }
}

impl SymbolDictionary {
    /// A dictionary over the library vocabulary alone.
    pub fn new() -> SymbolDictionary {
        SymbolDictionary {
            project: Box::new(NoProjectSymbols),
        }
    }

    /// A dictionary that also consults the given project capability.
    pub fn with_project(project: Box<dyn ProjectSymbols>) -> SymbolDictionary {
        SymbolDictionary { project }
    }

    /// Library or project attribute. Case-sensitive.
    pub fn is_attribute(&self, name: &str) -> bool {
        ATTRIBUTE_SET.contains(name) || self.project.is_attribute(name)
    }

    /// Library or project property. Case-sensitive.
    pub fn is_property(&self, name: &str) -> bool {
        PROPERTY_SET.contains(name) || self.project.is_property(name)
    }

    /// Library or project dictionary verb. Case-sensitive.
    pub fn is_verb(&self, name: &str) -> bool {
        VERB_SET.contains(name) || self.project.is_verb(name)
    }

    /// Statement keyword (case-sensitive) or compiler directive
    /// (case-insensitive).
    pub fn is_keyword_or_directive(&self, name: &str) -> bool {
        KEYWORD_SET.contains(name) || self.is_directive(name)
    }

    /// Compiler directive name. Case-insensitive.
    pub fn is_directive(&self, name: &str) -> bool {
        DIRECTIVE_SET.contains(name.to_ascii_lowercase().as_str())
    }
}
