//! Pattern matching layer
//!
//!     The tokenizer never scans text by hand. A [Matcher] supplies one compiled [Pattern],
//!     and the scan loop shared by every matcher turns the pattern's matches into tokens.
//!     Swapping the grammar only means providing a different pattern and token type.
//!
//!     - [pattern]: compiled patterns and the [Match] values they produce
//!     - [affix]: byte-exact prefix / suffix checks used when classifying matches

pub mod affix;
pub mod pattern;

pub use affix::{Affix, AffixExt, Side};
pub use pattern::{Match, Matches, Pattern, PatternOptions};

/// A pattern-driven scanner.
///
/// Implementors only choose the pattern; `for_each_token` and `tokens` are shared.
pub trait Matcher {
    /// Token produced from each match.
    type Token<'h>: From<Match<'h>>;

    fn pattern(&self) -> &Pattern;

    /// Feed tokens to `f` one at a time, in input order.
    fn for_each_token<'h, F>(&self, input: &'h str, mut f: F)
    where
        F: FnMut(Self::Token<'h>),
    {
        for m in self.pattern().find_iter(input) {
            f(<Self::Token<'h>>::from(m));
        }
    }

    /// Collect every token of `input`.
    fn tokens<'h>(&self, input: &'h str) -> Vec<Self::Token<'h>> {
        self.pattern().find_iter(input).map(<Self::Token<'h>>::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;

    static WORDS: Lazy<Pattern> = Lazy::new(|| Pattern::new(r"\w+").unwrap());

    #[derive(Debug, PartialEq)]
    struct Word<'h>(&'h str);

    impl<'h> From<Match<'h>> for Word<'h> {
        fn from(m: Match<'h>) -> Self {
            Word(m.value)
        }
    }

    struct WordMatcher;

    impl Matcher for WordMatcher {
        type Token<'h> = Word<'h>;

        fn pattern(&self) -> &Pattern {
            &WORDS
        }
    }

    #[test]
    fn test_push_and_pull_agree() {
        let input = "one two  three";
        let mut pushed = Vec::new();
        WordMatcher.for_each_token(input, |w| pushed.push(w));

        assert_eq!(pushed, WordMatcher.tokens(input));
        assert_eq!(pushed, vec![Word("one"), Word("two"), Word("three")]);
    }
}
