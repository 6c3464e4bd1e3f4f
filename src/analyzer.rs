//! Lexical analyzer
//!
//!     [Analyzer] drives any [Matcher] over an input string. It has two equivalent forms:
//!
//!         push: `analyze_with(input, |token| ...)` hands each token to a callback as soon as
//!               the pattern produces its match
//!         pull: `analyze(input)` collects the same tokens into a `Vec`
//!
//!     An analyzer holds only its matcher, which in turn only refers to immutable compiled
//!     patterns. It keeps no state between calls and can be shared across threads.

use crate::matching::Matcher;
use crate::xml::{merge, MatcherOptions, Segment, XmlMatcher};

/// Generic lexical analyzer.
#[derive(Debug, Clone, Default)]
pub struct Analyzer<M> {
    matcher: M,
}

/// The XML shallow parsing tokenizer.
pub type Tokenizer = Analyzer<XmlMatcher>;

impl<M: Matcher> Analyzer<M> {
    pub fn new(matcher: M) -> Self {
        Self { matcher }
    }

    pub fn matcher(&self) -> &M {
        &self.matcher
    }

    /// Push form: call `callback` once per token, in input order.
    #[tracing::instrument(level = "trace", skip_all, fields(len = input.len()))]
    pub fn analyze_with<'h, F>(&self, input: &'h str, mut callback: F)
    where
        F: FnMut(M::Token<'h>),
    {
        let mut count = 0usize;
        self.matcher.for_each_token(input, |token| {
            count += 1;
            callback(token);
        });
        tracing::debug!(count, "analyzed input");
    }

    /// Pull form: collect every token.
    pub fn analyze<'h>(&self, input: &'h str) -> Vec<M::Token<'h>> {
        let mut tokens = Vec::new();
        self.analyze_with(input, |token| tokens.push(token));
        tokens
    }
}

impl Analyzer<XmlMatcher> {
    pub fn xml(options: MatcherOptions) -> Self {
        Self::new(XmlMatcher::new(options))
    }

    pub fn options(&self) -> MatcherOptions {
        self.matcher.options()
    }

    /// Tokenize and group into segments, merging adjacent markup when `merge_markers` is set.
    pub fn segments<'h>(&self, input: &'h str) -> Vec<Segment<'h>> {
        let tokens = self.analyze(input);
        if self.options().merge_markers {
            merge::merge_markers(tokens)
        } else {
            merge::segments(tokens)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::{Token, TokenKind};

    fn kinds(tokens: &[Token<'_>]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_push_and_pull_forms_agree() {
        let tokenizer = Tokenizer::default();
        let input = "<?xml version='1.0'?><a>b<!-- c --></a>";

        let mut pushed = Vec::new();
        tokenizer.analyze_with(input, |token| pushed.push(token));

        assert_eq!(pushed, tokenizer.analyze(input));
    }

    #[test]
    fn test_empty_input() {
        assert!(Tokenizer::default().analyze("").is_empty());
    }

    #[test]
    fn test_markup_only() {
        let tokenizer = Tokenizer::xml(MatcherOptions {
            markup_only: true,
            ..Default::default()
        });
        let tokens = tokenizer.analyze("<abc>Blah</abc>");
        assert_eq!(kinds(&tokens), vec![TokenKind::StartTag, TokenKind::EndTag]);
    }

    #[test]
    fn test_error_token_does_not_stop_the_scan() {
        let tokens = Tokenizer::default().analyze("<a <b>");
        assert_eq!(kinds(&tokens), vec![TokenKind::Error, TokenKind::StartTag]);
        assert_eq!(tokens[0].lexeme, "<a ");
    }

    #[test]
    fn test_segments_follow_merge_option() {
        let input = "<a><b/></a>";
        let merging = Tokenizer::xml(MatcherOptions {
            merge_markers: true,
            ..Default::default()
        });

        assert_eq!(merging.segments(input).len(), 1);
        assert_eq!(Tokenizer::default().segments(input).len(), 3);
        // the token stream itself is unaffected
        assert_eq!(merging.analyze(input), Tokenizer::default().analyze(input));
    }

    #[test]
    fn test_shared_across_threads() {
        let tokenizer = Tokenizer::default();
        let inputs = ["<a>1</a>", "<b/>", "x<c>y", "<?pi?>"];

        std::thread::scope(|scope| {
            let handles: Vec<_> = inputs
                .iter()
                .map(|input| {
                    let tokenizer = &tokenizer;
                    scope.spawn(move || tokenizer.analyze(input).len())
                })
                .collect();
            let counts: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
            assert_eq!(counts, vec![3, 1, 3, 1]);
        });
    }
}
