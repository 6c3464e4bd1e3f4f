//! Compiled patterns and their matches
//!
//!     A thin layer over the `regex` crate. A [Pattern] keeps the source text it was built
//!     from next to the compiled automaton, and scanning yields [Match] values that carry
//!     their byte range and the matched slice.
//!
//!     Matches are found left to right and never overlap. The scan simply stops when no
//!     further match exists; it never fails on arbitrary input.
//!
//!     [PatternOptions] carries the compile flags. Two patterns are equal when both their
//!     source text and their flags agree.

use std::fmt;
use std::ops::Range;

use regex::{Regex, RegexBuilder};

use crate::error::PatternError;

/// A single non-overlapping match: the byte range in the haystack and the slice it denotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<'h> {
    pub range: Range<usize>,
    pub value: &'h str,
}

impl<'h> Match<'h> {
    /// Build a match for `range` over `haystack`, or `None` if the range is out of bounds
    /// or splits a char.
    pub fn new(range: Range<usize>, haystack: &'h str) -> Option<Self> {
        let value = haystack.get(range.clone())?;
        Some(Self { range, value })
    }
}

impl<'h> From<regex::Match<'h>> for Match<'h> {
    fn from(m: regex::Match<'h>) -> Self {
        Self {
            range: m.range(),
            value: m.as_str(),
        }
    }
}

/// Compile flags. All off by default, which is what the built-in grammars use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PatternOptions {
    /// Letters match both cases.
    pub case_insensitive: bool,
    /// `^` and `$` match at line boundaries.
    pub multi_line: bool,
    /// `.` also matches `\n`.
    pub dot_matches_new_line: bool,
    /// Whitespace in the pattern is ignored and `#` starts a comment.
    pub ignore_whitespace: bool,
    /// `a*` is lazy and `a*?` is greedy.
    pub swap_greed: bool,
}

impl PatternOptions {
    fn builder(&self, pattern: &str) -> RegexBuilder {
        let mut builder = RegexBuilder::new(pattern);
        builder
            .case_insensitive(self.case_insensitive)
            .multi_line(self.multi_line)
            .dot_matches_new_line(self.dot_matches_new_line)
            .ignore_whitespace(self.ignore_whitespace)
            .swap_greed(self.swap_greed);
        builder
    }
}

/// A named, compiled regular expression.
///
/// Compiled regexes are `Send + Sync`, so one pattern can scan many inputs concurrently.
#[derive(Clone)]
pub struct Pattern {
    name: String,
    options: PatternOptions,
    regex: Regex,
}

impl Pattern {
    /// Compile `pattern`, using the pattern text itself as the name.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        Self::named(pattern, pattern)
    }

    /// Compile `pattern` under a descriptive name used in errors and logs.
    pub fn named(name: &str, pattern: &str) -> Result<Self, PatternError> {
        Self::with_options(name, pattern, PatternOptions::default())
    }

    pub fn with_options(
        name: &str,
        pattern: &str,
        options: PatternOptions,
    ) -> Result<Self, PatternError> {
        let regex = options
            .builder(pattern)
            .build()
            .map_err(|source| PatternError::Invalid {
                name: name.to_string(),
                source,
            })?;
        tracing::debug!(name, len = pattern.len(), ?options, "compiled pattern");

        Ok(Self {
            name: name.to_string(),
            options,
            regex,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> PatternOptions {
        self.options
    }

    /// The source text this pattern was compiled from.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Lazily iterate the matches in `haystack`, left to right.
    pub fn find_iter<'r, 'h>(&'r self, haystack: &'h str) -> Matches<'r, 'h> {
        Matches {
            inner: self.regex.find_iter(haystack),
        }
    }

    /// Collect every match in `haystack`.
    pub fn matches<'h>(&self, haystack: &'h str) -> Vec<Match<'h>> {
        self.find_iter(haystack).collect()
    }

    /// Count the matches in `haystack` without materializing them.
    pub fn match_count(&self, haystack: &str) -> usize {
        self.regex.find_iter(haystack).count()
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str() && self.options == other.options
    }
}

impl Eq for Pattern {}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("name", &self.name)
            .field("len", &self.as_str().len())
            .field("options", &self.options)
            .finish()
    }
}

/// Iterator over the matches of a [Pattern], produced one at a time.
pub struct Matches<'r, 'h> {
    inner: regex::Matches<'r, 'h>,
}

impl<'r, 'h> Iterator for Matches<'r, 'h> {
    type Item = Match<'h>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Match::from)
    }
}
