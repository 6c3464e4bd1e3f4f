//! XML tokens and their classification
//!
//!     A token is a matched lexeme, its byte range in the input, and one of eight kinds.
//!     The kind is decided from the lexeme alone by looking at its opening and closing
//!     markers, most specific first:
//!
//!         1. no leading `<`          text
//!         2. `<!`                    declaration (comments, CDATA, DOCTYPE)
//!         3. `<?xml`                 xml declaration
//!         4. `<?`                    processing instruction
//!         5. `</`                    end tag
//!         6. ends with `/>`          empty tag
//!         7. ends with `>`           start tag
//!         8. anything else           error (markup cut off by the end of input)
//!
//!     Note that rule 3 is a plain prefix test, so `<?xml-stylesheet ...?>` is also an
//!     xml declaration.

use std::fmt;
use std::ops::Range;

use serde::Serialize;

use crate::matching::{Affix, AffixExt, Match, Side};

/// Leading markers, checked in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefix {
    Declaration,
    XmlDeclaration,
    ProcessingInstruction,
    EndTag,
    StartTag,
}

impl Affix for Prefix {
    fn as_str(&self) -> &'static str {
        match self {
            Prefix::Declaration => "<!",
            Prefix::XmlDeclaration => "<?xml",
            Prefix::ProcessingInstruction => "<?",
            Prefix::EndTag => "</",
            Prefix::StartTag => "<",
        }
    }
}

/// Trailing markers, checked in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suffix {
    EmptyTag,
    Tag,
}

impl Affix for Suffix {
    fn as_str(&self) -> &'static str {
        match self {
            Suffix::EmptyTag => "/>",
            Suffix::Tag => ">",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Declaration,
    XmlDeclaration,
    ProcessingInstruction,
    EndTag,
    EmptyTag,
    StartTag,
    Text,
    Error,
}

const PREFIX_RULES: &[(Prefix, TokenKind)] = &[
    (Prefix::Declaration, TokenKind::Declaration),
    (Prefix::XmlDeclaration, TokenKind::XmlDeclaration),
    (Prefix::ProcessingInstruction, TokenKind::ProcessingInstruction),
    (Prefix::EndTag, TokenKind::EndTag),
];

const SUFFIX_RULES: &[(Suffix, TokenKind)] = &[
    (Suffix::EmptyTag, TokenKind::EmptyTag),
    (Suffix::Tag, TokenKind::StartTag),
];

impl TokenKind {
    /// Classify a lexeme.
    pub fn classify(lexeme: &str) -> Self {
        if !lexeme.has_affix(&Prefix::StartTag, Side::Start) {
            return TokenKind::Text;
        }

        PREFIX_RULES
            .iter()
            .find(|(prefix, _)| lexeme.has_affix(prefix, Side::Start))
            .map(|&(_, kind)| kind)
            .or_else(|| {
                SUFFIX_RULES
                    .iter()
                    .find(|(suffix, _)| lexeme.has_affix(suffix, Side::End))
                    .map(|&(_, kind)| kind)
            })
            .unwrap_or(TokenKind::Error)
    }

    /// Everything except text is markup.
    pub fn is_markup(self) -> bool {
        self != TokenKind::Text
    }

    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Declaration => "declaration",
            TokenKind::XmlDeclaration => "xml_declaration",
            TokenKind::ProcessingInstruction => "processing_instruction",
            TokenKind::EndTag => "end_tag",
            TokenKind::EmptyTag => "empty_tag",
            TokenKind::StartTag => "start_tag",
            TokenKind::Text => "text",
            TokenKind::Error => "error",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified lexeme.
///
/// `lexeme` is always the exact slice of the input denoted by `range` (byte offsets).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token<'h> {
    pub kind: TokenKind,
    pub lexeme: &'h str,
    pub range: Range<usize>,
}

impl<'h> Token<'h> {
    pub fn new(kind: TokenKind, lexeme: &'h str, range: Range<usize>) -> Self {
        Self {
            kind,
            lexeme,
            range,
        }
    }

    pub fn is_markup(&self) -> bool {
        self.kind.is_markup()
    }

    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

impl<'h> From<Match<'h>> for Token<'h> {
    fn from(m: Match<'h>) -> Self {
        let kind = TokenKind::classify(m.value);
        Token::new(kind, m.value, m.range)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}..{} {:?}",
            self.kind, self.range.start, self.range.end, self.lexeme
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Blah", TokenKind::Text)]
    #[case(" ", TokenKind::Text)]
    #[case("<!-- c -->", TokenKind::Declaration)]
    #[case("<![CDATA[x]]>", TokenKind::Declaration)]
    #[case("<!DOCTYPE a>", TokenKind::Declaration)]
    #[case("<!", TokenKind::Declaration)]
    #[case("<?xml version='1.0'?>", TokenKind::XmlDeclaration)]
    #[case("<?xml-stylesheet href='a'?>", TokenKind::XmlDeclaration)]
    #[case("<?php x ?>", TokenKind::ProcessingInstruction)]
    #[case("<?", TokenKind::ProcessingInstruction)]
    #[case("</abc>", TokenKind::EndTag)]
    #[case("</abc", TokenKind::EndTag)]
    #[case("<abc/>", TokenKind::EmptyTag)]
    #[case("<abc />", TokenKind::EmptyTag)]
    #[case("<abc>", TokenKind::StartTag)]
    #[case("<abc x='1'>", TokenKind::StartTag)]
    #[case("<abc", TokenKind::Error)]
    #[case("<abc/", TokenKind::Error)]
    #[case("<", TokenKind::Error)]
    fn test_classify(#[case] lexeme: &str, #[case] expected: TokenKind) {
        assert_eq!(TokenKind::classify(lexeme), expected);
    }

    #[test]
    fn test_classify_multibyte_names() {
        assert_eq!(TokenKind::classify("<名前/>"), TokenKind::EmptyTag);
        assert_eq!(TokenKind::classify("<名前>"), TokenKind::StartTag);
        assert_eq!(TokenKind::classify("<名前"), TokenKind::Error);
        assert_eq!(TokenKind::classify("名前"), TokenKind::Text);
    }

    #[test]
    fn test_from_match_keeps_lexeme_and_range() {
        let input = "ab<c/>";
        let token = Token::from(Match::new(2..6, input).unwrap());

        assert_eq!(token, Token::new(TokenKind::EmptyTag, "<c/>", 2..6));
        assert_eq!(token.len(), 4);
        assert!(token.is_markup());
    }

    #[test]
    fn test_display() {
        let token = Token::new(TokenKind::StartTag, "<a>", 0..3);
        assert_eq!(token.to_string(), r#"start_tag 0..3 "<a>""#);
    }

    #[test]
    fn test_serialize() {
        let token = Token::new(TokenKind::XmlDeclaration, "<?xml?>", 0..7);
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(
            json,
            r#"{"kind":"xml_declaration","lexeme":"<?xml?>","range":{"start":0,"end":7}}"#
        );
    }
}
