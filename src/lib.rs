//! # shallow-xml
//!
//! Shallow lexical tokenization of XML-like text.
//!
//! The input is split into a flat, ordered sequence of markup and text tokens in one regex
//! pass. Nothing is validated: the tokenizer accepts arbitrary, possibly malformed text and
//! partitions it deterministically. In the default mode the lexemes of the tokens, in order,
//! reproduce the input exactly.
//!
//! ```text
//! <abc>Blah</abc>   ->   start_tag "<abc>", text "Blah", end_tag "</abc>"
//! ```
//!
//! Ranges are byte offsets into the UTF-8 input.
//!
//! - [analyzer]: the [Tokenizer] and its generic [Analyzer] form
//! - [xml]: the shallow parsing grammar, token kinds and classification
//! - [matching]: compiled patterns, matches and the [Matcher] capability
//! - [config]: layered configuration for applications
//! - [error]: error types

pub mod analyzer;
pub mod config;
pub mod error;
pub mod matching;
pub mod xml;

pub use analyzer::{Analyzer, Tokenizer};
pub use error::{Error, PatternError};
pub use matching::{Match, Matcher, Pattern, PatternOptions};
pub use xml::{MatcherOptions, Segment, Token, TokenKind, XmlMatcher};

/// Tokenize `input` with the default (full) grammar.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Tokenizer::default().analyze(input)
}
