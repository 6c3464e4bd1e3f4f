//! The XML shallow parsing matcher

use serde::{Deserialize, Serialize};

use super::grammar::GrammarMode;
use super::token::Token;
use crate::matching::{Matcher, Pattern};

/// Tokenizer options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherOptions {
    /// Drop text runs; only markup tokens are produced.
    pub markup_only: bool,
    /// Coalesce adjacent markup tokens when building segments.
    ///
    /// Does not change the grammar or the token stream, only
    /// [segments](crate::analyzer::Analyzer::segments).
    pub merge_markers: bool,
}

impl MatcherOptions {
    pub fn grammar_mode(&self) -> GrammarMode {
        if self.markup_only {
            GrammarMode::MarkupOnly
        } else {
            GrammarMode::Full
        }
    }
}

/// Shallow parsing matcher over the REX grammar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct XmlMatcher {
    options: MatcherOptions,
}

impl XmlMatcher {
    pub fn new(options: MatcherOptions) -> Self {
        Self { options }
    }

    pub fn markup_only() -> Self {
        Self::new(MatcherOptions {
            markup_only: true,
            ..MatcherOptions::default()
        })
    }

    pub fn merging_markers() -> Self {
        Self::new(MatcherOptions {
            merge_markers: true,
            ..MatcherOptions::default()
        })
    }

    pub fn options(&self) -> MatcherOptions {
        self.options
    }
}

impl Matcher for XmlMatcher {
    type Token<'h> = Token<'h>;

    fn pattern(&self) -> &Pattern {
        self.options.grammar_mode().pattern()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::TokenKind;

    #[test]
    fn test_options_select_grammar() {
        assert_eq!(
            XmlMatcher::default().pattern(),
            GrammarMode::Full.pattern()
        );
        assert_eq!(
            XmlMatcher::markup_only().pattern(),
            GrammarMode::MarkupOnly.pattern()
        );
        // merging markers does not affect the grammar
        assert_eq!(
            XmlMatcher::merging_markers().pattern(),
            GrammarMode::Full.pattern()
        );
    }

    #[test]
    fn test_tokens() {
        let kinds: Vec<_> = XmlMatcher::default()
            .tokens("<a>b</a>")
            .into_iter()
            .map(|t| t.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![TokenKind::StartTag, TokenKind::Text, TokenKind::EndTag]
        );
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: MatcherOptions = serde_json::from_str(r#"{"markup_only":true}"#).unwrap();
        assert!(options.markup_only);
        assert!(!options.merge_markers);
    }
}
