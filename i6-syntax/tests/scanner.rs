//! Full token-sequence tests over realistic Inform 6 source
//!
//! These pin the exact lexeme sequences for representative slices of a
//! story file: a routine body with the three number notations, a verb
//! directive with grammar lines, and an object definition.

use i6_syntax::inform::lexing::{tokenize, tokens};
use i6_syntax::inform::token::LexemeKind::{self, *};

fn token_kinds(source: &str) -> Vec<LexemeKind> {
    tokens(source).map(|lexeme| lexeme.kind).collect()
}

#[test]
fn routine_body() {
    let source = "[ Main i;\n  for (i = 0: i < 10: i++) print (string) Story;\n  if (i ~= $ff || i == $$1010) rtrue;\n];";
    assert_eq!(
        token_kinds(source),
        vec![
            RoutineOpen,
            Symbol, // Main
            Symbol, // i
            Semicolon,
            Symbol, // for
            ParenOpen,
            Symbol, // i
            Assign,
            Decimal,
            Colon,
            Symbol, // i
            Less,
            Decimal,
            Colon,
            Symbol, // i
            PlusPlus,
            ParenClose,
            Symbol, // print
            ParenOpen,
            Symbol, // string
            ParenClose,
            Symbol, // Story
            Semicolon,
            Symbol, // if
            ParenOpen,
            Symbol, // i
            TildeEqual,
            Hexadecimal,
            PipePipe,
            Symbol, // i
            EqualEqual,
            Binary,
            ParenClose,
            Symbol, // rtrue
            Semicolon,
            RoutineClose,
            Semicolon,
        ]
    );
}

#[test]
fn verb_directive() {
    let source = "Verb 'take' 'get' * multi -> Take\n    * 'off' held -> Disrobe;";
    assert_eq!(
        token_kinds(source),
        vec![
            Symbol, // Verb
            Word,
            Word,
            Star,
            Symbol, // multi
            Arrow,
            Symbol, // Take
            Star,
            Word,
            Symbol, // held
            Arrow,
            Symbol, // Disrobe
            Semicolon,
        ]
    );
}

#[test]
fn object_definition() {
    let source = "Object -> lamp \"brass lamp\"\n  with name 'lamp' 'light', description \"An old lamp.\",\n  has  light ~on;";
    assert_eq!(
        token_kinds(source),
        vec![
            Symbol, // Object
            Arrow,
            Symbol, // lamp
            String,
            Symbol, // with
            Symbol, // name
            Word,
            Word,
            Comma,
            Symbol, // description
            String,
            Comma,
            Symbol, // has
            Symbol, // light
            Tilde,
            Symbol, // on
            Semicolon,
        ]
    );
}

#[test]
fn array_directive_with_table_arrows() {
    let source = "Array path --> 1 2 3;\nGlobal score = $0;";
    assert_eq!(
        token_kinds(source),
        vec![
            Symbol, // Array
            Symbol, // path
            DoubleArrow,
            Decimal,
            Decimal,
            Decimal,
            Semicolon,
            Symbol, // Global
            Symbol, // score
            Assign,
            Hexadecimal,
            Semicolon,
        ]
    );
}

#[test]
fn action_literals_and_constant_prefixes() {
    let source = "if (action == ##Take) x = #a$Take + #n$lamp + #r$Main + #w$take;";
    assert_eq!(
        token_kinds(source),
        vec![
            Symbol, // if
            ParenOpen,
            Symbol, // action
            EqualEqual,
            HashHash,
            Symbol, // Take
            ParenClose,
            Symbol, // x
            Assign,
            HashAction,
            Symbol, // Take
            Plus,
            HashNoun,
            Symbol, // lamp
            Plus,
            HashRoutine,
            Symbol, // Main
            Plus,
            HashWord,
            Symbol, // take
            Semicolon,
        ]
    );
}

#[test]
fn comment_extent_is_exact() {
    // The comment covers `! comment` and nothing more.
    let source = "! comment\nConstant X = 5;";
    let lexemes = tokenize(source);
    assert_eq!(lexemes[0].kind, Comment);
    assert_eq!(lexemes[0].text, "! comment");
    assert_eq!(lexemes[0].start, 0);
    assert_eq!(lexemes[0].end, 9);
    assert_eq!(lexemes[1].kind, Newline);
}

#[test]
fn action_brackets_lex_as_shifts() {
    let source = "<<Look>>;";
    assert_eq!(
        token_kinds(source),
        vec![LessLess, Symbol, GreaterGreater, Semicolon]
    );
}
