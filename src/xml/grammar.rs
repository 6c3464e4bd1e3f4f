//! Shallow parsing grammar
//!
//!     The grammar follows Robert D. Cameron's REX shallow parsing expressions: a handful of
//!     named sub-patterns composed into one alternation that recognizes every markup construct
//!     in a single left-to-right pass.
//!
//! Top-level Patterns
//!
//!     full:         <text> | <markup>
//!     markup-only:  <markup>
//!
//!     Text is a maximal run of non-`<` characters and every markup alternative begins with `<`,
//!     so exactly one alternative applies at any position. Each tail is optional, which lets a
//!     construct cut off by the end of input still match as an incomplete lexeme instead of
//!     being skipped. Together this makes the full grammar cover its input without gaps.
//!
//! Sub-patterns
//!
//!     - text:       [^<]+
//!     - name:       XML name, any non-ASCII char counts as a name char
//!     - comment:    `--` ... `--` with an optional closing `>`
//!     - cdata:      `[CDATA[` ... `]]>`
//!     - doctype:    `DOCTYPE` ident, optional internal subset, optional `>`
//!     - pi:         `?` name ... `?>`
//!     - end tag:    `/` name, optional whitespace, optional `>`
//!     - element:    name, `name="value"` attributes, optional `/`, optional `>`
//!
//!     Every group is non-capturing. The two top-level patterns are compiled once per process
//!     and shared read-only by all tokenizers.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::matching::Pattern;

const TEXT_SE: &str = r"[^<]+";
const UNTIL_HYPHEN: &str = r"[^-]*-";
const UNTIL_RSBS: &str = r"[^\]]*\](?:[^\]]+\])*\]+";
const S: &str = r"[ \n\t\r]+";
const S1: &str = r"[\n\r\t ]";
const NAME_STRT: &str = r"[A-Za-z_:]|[^\x00-\x7F]";
const NAME_CHAR: &str = r"[A-Za-z0-9_:.-]|[^\x00-\x7F]";
const QUOTE_SE: &str = r#""[^"]*"|'[^']*'"#;
const UNTIL_QMS: &str = r"[^?]*\?+";
const ATT_VAL_SE: &str = r#""[^<"]*"|'[^<']*'"#;

/// Which top-level grammar a tokenizer scans with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GrammarMode {
    /// Text runs and markup.
    Full,
    /// Markup only; text between markup is skipped.
    MarkupOnly,
}

static FULL: Lazy<Pattern> = Lazy::new(|| compile(GrammarMode::Full));
static MARKUP_ONLY: Lazy<Pattern> = Lazy::new(|| compile(GrammarMode::MarkupOnly));

fn compile(mode: GrammarMode) -> Pattern {
    // The sources are fixed; a failure here is a bug in this module
    Pattern::named(mode.name(), &mode.source()).unwrap_or_else(|err| panic!("{err}"))
}

impl GrammarMode {
    /// The compiled, process-wide pattern for this mode.
    pub fn pattern(self) -> &'static Pattern {
        match self {
            GrammarMode::Full => &FULL,
            GrammarMode::MarkupOnly => &MARKUP_ONLY,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GrammarMode::Full => "full",
            GrammarMode::MarkupOnly => "markup-only",
        }
    }

    /// Uncompiled source of the top-level pattern.
    pub fn source(self) -> String {
        match self {
            GrammarMode::Full => full_pattern(),
            GrammarMode::MarkupOnly => markup_only_pattern(),
        }
    }
}

/// Longest run of non-`<` characters.
pub fn text() -> &'static str {
    TEXT_SE
}

pub fn whitespace() -> &'static str {
    S
}

pub fn quoted() -> &'static str {
    QUOTE_SE
}

pub fn name() -> String {
    format!("(?:{NAME_STRT})(?:{NAME_CHAR})*")
}

/// Shortest run ending in `--`.
pub fn until_two_hyphens() -> String {
    format!("{u}(?:[^-]{u})*-", u = UNTIL_HYPHEN)
}

/// Rest of a comment after `<!--`.
pub fn comment_tail() -> String {
    format!("{}>?", until_two_hyphens())
}

/// Rest of a CDATA section after `<![CDATA[`; single `]` inside the body are allowed.
pub fn cdata_tail() -> String {
    format!(r"{u}(?:[^\]>]{u})*>", u = UNTIL_RSBS)
}

/// Generic `<!...>` declaration body, skipping over quoted values.
pub fn markup_decl_tail() -> String {
    format!(r#"(?:[^\]"'><]+|{q})*>"#, q = QUOTE_SE)
}

fn doctype_ident() -> String {
    format!(
        "{s}{n}(?:{s}(?:{n}|{q}))*",
        s = S,
        n = name(),
        q = QUOTE_SE
    )
}

fn pi_end() -> String {
    format!(
        r"\?>|{s1}{u}(?:[^>?]{u})*>",
        s1 = S1,
        u = UNTIL_QMS
    )
}

/// One item of a DOCTYPE internal subset.
fn doctype_item() -> String {
    format!(
        r"<(?:!(?:--{c}>|[^-]{m})|\?{n}(?:{p}))|%{n};|{s}",
        c = until_two_hyphens(),
        m = markup_decl_tail(),
        n = name(),
        p = pi_end(),
        s = S
    )
}

/// Rest of a DOCTYPE after `<!DOCTYPE`.
pub fn doctype_tail() -> String {
    format!(
        r"{ident}(?:{s})?(?:\[(?:{item})*\](?:{s})?)?>?",
        ident = doctype_ident(),
        item = doctype_item(),
        s = S
    )
}

/// Body following `<!`.
pub fn declaration_tail() -> String {
    format!(
        r"--(?:{c})?|\[CDATA\[(?:{d})?|DOCTYPE(?:{t})?",
        c = comment_tail(),
        d = cdata_tail(),
        t = doctype_tail()
    )
}

/// Rest of a processing instruction after `<?`.
pub fn pi_tail() -> String {
    format!("{n}(?:{p})?", n = name(), p = pi_end())
}

/// Rest of an end tag after `</`.
pub fn end_tag_tail() -> String {
    format!("{n}(?:{s})?>?", n = name(), s = S)
}

/// Rest of a start or empty tag after `<`.
pub fn element_tag_tail() -> String {
    format!(
        "{n}(?:{s}{n}(?:{s})?=(?:{s})?(?:{a}))*(?:{s})?/?>?",
        n = name(),
        s = S,
        a = ATT_VAL_SE
    )
}

/// Any markup construct, possibly truncated.
pub fn markup() -> String {
    format!(
        r"<(?:!(?:{decl})?|\?(?:{pi})?|/(?:{end})?|(?:{elem})?)",
        decl = declaration_tail(),
        pi = pi_tail(),
        end = end_tag_tail(),
        elem = element_tag_tail()
    )
}

pub fn full_pattern() -> String {
    format!("{}|{}", TEXT_SE, markup())
}

pub fn markup_only_pattern() -> String {
    markup()
}
