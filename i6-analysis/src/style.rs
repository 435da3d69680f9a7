//! Style categories and their resolution rules.
//!
//! Most lexeme kinds map to a fixed category. Symbols are the exception:
//! they resolve through the dictionaries in a fixed precedence order,
//! Attribute over Property over Verb over Keyword with the first match
//! winning,
//! because the attribute and property vocabularies are narrower and more
//! specific than the general keyword set, and the narrower claim should
//! color the token. A symbol no dictionary knows takes its style from the
//! directive context instead, which is what colors the names being
//! declared in `Attribute`/`Property`/`Verb` bodies; anywhere else it is
//! plain text.

use std::ops::Range;

use i6_syntax::inform::token::{Lexeme, LexemeKind};
use i6_syntax::inform::{ParserContext, SymbolDictionary};

/// The visual classification of a lexeme for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum StyleCategory {
    Comment,
    Number,
    String,
    Word,
    Attribute,
    Property,
    Verb,
    Keyword,
    Normal,
    Whitespace,
}

impl StyleCategory {
    /// The configuration-facing style name, as the preference layer keys
    /// its color and font attributes.
    pub fn as_str(self) -> &'static str {
        match self {
            StyleCategory::Comment => "comment",
            StyleCategory::Number => "number",
            StyleCategory::String => "string",
            StyleCategory::Word => "word",
            StyleCategory::Attribute => "attribute",
            StyleCategory::Property => "property",
            StyleCategory::Verb => "verb",
            StyleCategory::Keyword => "keyword",
            StyleCategory::Normal => "normal",
            StyleCategory::Whitespace => "whitespace",
        }
    }
}

impl std::fmt::Display for StyleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One styled region of the document: a half-open byte range and the
/// category the view should paint it with.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StyledSpan {
    pub range: Range<usize>,
    pub style: StyleCategory,
}

impl StyledSpan {
    pub fn new(range: Range<usize>, style: StyleCategory) -> StyledSpan {
        StyledSpan { range, style }
    }
}

/// The style of one lexeme under the given directive context.
pub fn style_for(
    lexeme: &Lexeme,
    context: ParserContext,
    dictionary: &SymbolDictionary,
) -> StyleCategory {
    match lexeme.kind {
        LexemeKind::Comment => StyleCategory::Comment,
        LexemeKind::String => StyleCategory::String,
        LexemeKind::Word => StyleCategory::Word,
        LexemeKind::Whitespace | LexemeKind::Newline => StyleCategory::Whitespace,
        kind if kind.is_number() => StyleCategory::Number,
        LexemeKind::Symbol => resolve_symbol(&lexeme.text, context, dictionary),
        _ => StyleCategory::Normal,
    }
}

/// Dictionary precedence first, declaration context second.
pub fn resolve_symbol(
    name: &str,
    context: ParserContext,
    dictionary: &SymbolDictionary,
) -> StyleCategory {
    if dictionary.is_attribute(name) {
        StyleCategory::Attribute
    } else if dictionary.is_property(name) {
        StyleCategory::Property
    } else if dictionary.is_verb(name) {
        StyleCategory::Verb
    } else if dictionary.is_keyword_or_directive(name) {
        StyleCategory::Keyword
    } else {
        match context {
            ParserContext::Attribute => StyleCategory::Attribute,
            ParserContext::Property => StyleCategory::Property,
            ParserContext::Verb | ParserContext::Grammar => StyleCategory::Verb,
            _ => StyleCategory::Normal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use i6_syntax::inform::ProjectSymbols;
    use rstest::rstest;

    /// A capability that claims every name, for precedence checks: any
    /// symbol is simultaneously attribute, property, and verb, and the
    /// ordered resolution must still pick the narrowest claim.
    struct EveryName;

    impl ProjectSymbols for EveryName {
        fn is_attribute(&self, _name: &str) -> bool {
            true
        }

        fn is_property(&self, _name: &str) -> bool {
            true
        }

        fn is_verb(&self, _name: &str) -> bool {
            true
        }
    }

    struct PropertiesAndVerbs;

    impl ProjectSymbols for PropertiesAndVerbs {
        fn is_attribute(&self, _name: &str) -> bool {
            false
        }

        fn is_property(&self, _name: &str) -> bool {
            true
        }

        fn is_verb(&self, _name: &str) -> bool {
            true
        }
    }

    #[test]
    fn test_precedence_attribute_first() {
        let dictionary = SymbolDictionary::with_project(Box::new(EveryName));
        // `has` is also a keyword; the attribute claim wins.
        assert_eq!(
            resolve_symbol("has", ParserContext::Base, &dictionary),
            StyleCategory::Attribute
        );
        let narrower = SymbolDictionary::with_project(Box::new(PropertiesAndVerbs));
        assert_eq!(
            resolve_symbol("has", ParserContext::Base, &narrower),
            StyleCategory::Property
        );
    }

    #[rstest]
    // Library overlaps resolved by precedence: `open` is both an
    // attribute and a grammar verb, `give`/`read` are keywords and verbs,
    // `number` is a keyword and a property.
    #[case("open", StyleCategory::Attribute)]
    #[case("give", StyleCategory::Verb)]
    #[case("read", StyleCategory::Verb)]
    #[case("number", StyleCategory::Property)]
    #[case("description", StyleCategory::Property)]
    #[case("has", StyleCategory::Keyword)]
    #[case("lantern", StyleCategory::Normal)]
    fn test_library_resolution(#[case] name: &str, #[case] expected: StyleCategory) {
        let dictionary = SymbolDictionary::new();
        assert_eq!(
            resolve_symbol(name, ParserContext::Base, &dictionary),
            expected
        );
    }

    #[rstest]
    #[case(ParserContext::Attribute, StyleCategory::Attribute)]
    #[case(ParserContext::Property, StyleCategory::Property)]
    #[case(ParserContext::Verb, StyleCategory::Verb)]
    #[case(ParserContext::Grammar, StyleCategory::Verb)]
    #[case(ParserContext::GrammarAction, StyleCategory::Normal)]
    #[case(ParserContext::Class, StyleCategory::Normal)]
    #[case(ParserContext::Object, StyleCategory::Normal)]
    #[case(ParserContext::Base, StyleCategory::Normal)]
    fn test_unknown_symbol_takes_declaration_context(
        #[case] context: ParserContext,
        #[case] expected: StyleCategory,
    ) {
        let dictionary = SymbolDictionary::new();
        assert_eq!(resolve_symbol("glowing", context, &dictionary), expected);
    }

    #[test]
    fn test_fixed_kind_mappings() {
        let dictionary = SymbolDictionary::new();
        let cases = [
            (LexemeKind::Comment, "! c", StyleCategory::Comment),
            (LexemeKind::Decimal, "5", StyleCategory::Number),
            (LexemeKind::Hexadecimal, "$ff", StyleCategory::Number),
            (LexemeKind::Binary, "$$10", StyleCategory::Number),
            (LexemeKind::String, "\"d\"", StyleCategory::String),
            (LexemeKind::Word, "'w'", StyleCategory::Word),
            (LexemeKind::Whitespace, " ", StyleCategory::Whitespace),
            (LexemeKind::Newline, "\n", StyleCategory::Whitespace),
            (LexemeKind::Semicolon, ";", StyleCategory::Normal),
            (LexemeKind::Arrow, "->", StyleCategory::Normal),
            (LexemeKind::Invalid, "`", StyleCategory::Normal),
        ];
        for (kind, text, expected) in cases {
            let lexeme = Lexeme::new(kind, 0, text.len(), text);
            assert_eq!(
                style_for(&lexeme, ParserContext::Base, &dictionary),
                expected,
                "kind {:?}",
                kind
            );
        }
    }
}
