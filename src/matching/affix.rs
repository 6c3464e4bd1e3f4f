//! Prefix and suffix checks
//!
//!     Affixes are fixed ASCII markers such as `<!` or `/>`. They are compared as bytes, the
//!     same unit the pattern matcher reports ranges in, so a check never slices a lexeme
//!     inside a multi-byte char.

/// A fixed marker that may open or close a lexeme.
pub trait Affix {
    fn as_str(&self) -> &'static str;
}

/// Which end of a lexeme an affix is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Start,
    End,
}

/// Affix queries on string slices.
pub trait AffixExt {
    /// Whether the slice carries `affix` on the given side.
    fn has_affix<A: Affix>(&self, affix: &A, side: Side) -> bool;
}

impl AffixExt for str {
    fn has_affix<A: Affix>(&self, affix: &A, side: Side) -> bool {
        let marker = affix.as_str().as_bytes();
        match side {
            Side::Start => self.as_bytes().starts_with(marker),
            Side::End => self.as_bytes().ends_with(marker),
        }
    }
}
