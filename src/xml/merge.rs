//! Marker merging
//!
//!     Groups a token stream into segments. Text tokens stay on their own. A run of markup
//!     tokens that touch each other (each one starts where the previous one ended) becomes a
//!     single markup segment spanning the whole run, so `<a><b/></a>` is one segment while
//!     `<a>x</a>` is three.
//!
//!     The pass never changes tokens; the members of each markup segment are kept in order.

use std::ops::Range;

use serde::Serialize;

use super::token::Token;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Segment<'h> {
    Text(Token<'h>),
    Markup {
        range: Range<usize>,
        tokens: Vec<Token<'h>>,
    },
}

impl<'h> Segment<'h> {
    pub fn range(&self) -> Range<usize> {
        match self {
            Segment::Text(token) => token.range.clone(),
            Segment::Markup { range, .. } => range.clone(),
        }
    }

    /// The markup or text tokens in this segment.
    pub fn tokens(&self) -> &[Token<'h>] {
        match self {
            Segment::Text(token) => std::slice::from_ref(token),
            Segment::Markup { tokens, .. } => tokens,
        }
    }

    /// The slice of `input` this segment spans.
    pub fn lexeme<'a>(&self, input: &'a str) -> &'a str {
        &input[self.range()]
    }

    fn single(token: Token<'h>) -> Self {
        if token.is_markup() {
            Segment::Markup {
                range: token.range.clone(),
                tokens: vec![token],
            }
        } else {
            Segment::Text(token)
        }
    }
}

/// Coalesce contiguous markup tokens.
pub fn merge_markers<'h, I>(tokens: I) -> Vec<Segment<'h>>
where
    I: IntoIterator<Item = Token<'h>>,
{
    let mut segments: Vec<Segment<'h>> = Vec::new();

    for token in tokens {
        if let Some(Segment::Markup { range, tokens }) = segments.last_mut() {
            if token.is_markup() && range.end == token.range.start {
                range.end = token.range.end;
                tokens.push(token);
                continue;
            }
        }
        segments.push(Segment::single(token));
    }

    segments
}

/// One segment per token, without merging.
pub fn segments<'h, I>(tokens: I) -> Vec<Segment<'h>>
where
    I: IntoIterator<Item = Token<'h>>,
{
    tokens.into_iter().map(Segment::single).collect()
}
