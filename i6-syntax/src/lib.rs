//! # i6-syntax
//!
//! Lexing and syntactic analysis for Inform 6 source text.
//!
//! This crate is the pure core of the highlighting engine: it turns source
//! text into lexeme streams, classifies reserved vocabulary, tracks which
//! directive context governs a given position, and validates bracket
//! nesting. It performs no I/O and holds no per-process mutable state; the
//! reserved-word tables are immutable and shared by reference.
//!
//! The editor-facing pieces (style resolution, the incremental re-lex
//! window, per-document sessions) live in the `i6-analysis` crate.

#![allow(rustdoc::invalid_html_tags)]

pub mod inform;
