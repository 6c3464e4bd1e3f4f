//! XML shallow parsing
//!
//!     Splits XML-like text into a flat sequence of markup and text tokens without checking
//!     well-formedness, resolving entities or building a tree. Malformed input is never
//!     rejected: anything the grammar cannot close becomes an [TokenKind::Error] token and the
//!     scan carries on.
//!
//!     - [grammar]: the REX sub-patterns and the two compiled top-level patterns
//!     - [token]: token kinds and classification of matches
//!     - [matcher]: [XmlMatcher], which picks a grammar from [MatcherOptions]
//!     - [merge]: optional grouping of adjacent markup tokens into segments

pub mod grammar;
pub mod matcher;
pub mod merge;
pub mod token;

pub use grammar::GrammarMode;
pub use matcher::{MatcherOptions, XmlMatcher};
pub use merge::{merge_markers, Segment};
pub use token::{Prefix, Suffix, Token, TokenKind};
