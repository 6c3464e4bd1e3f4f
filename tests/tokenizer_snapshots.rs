//! Snapshot tests of rendered token streams

use shallow_xml::{MatcherOptions, Tokenizer};

fn render(tokenizer: &Tokenizer, input: &str) -> String {
    tokenizer
        .analyze(input)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_small_document() {
    let input = concat!(
        "<?xml version='1.0'?>\n",
        "<!DOCTYPE note>\n",
        "<note id=\"1\">Tove &amp; Jani<br/></note>\n",
        "<!-- end -->",
    );

    insta::assert_snapshot!(render(&Tokenizer::default(), input), @r###"
    xml_declaration 0..21 "<?xml version='1.0'?>"
    text 21..22 "\n"
    declaration 22..37 "<!DOCTYPE note>"
    text 37..38 "\n"
    start_tag 38..51 "<note id=\"1\">"
    text 51..66 "Tove &amp; Jani"
    empty_tag 66..71 "<br/>"
    end_tag 71..78 "</note>"
    text 78..79 "\n"
    declaration 79..91 "<!-- end -->"
    "###);
}

#[test]
fn test_small_document_markup_only() {
    let tokenizer = Tokenizer::xml(MatcherOptions {
        markup_only: true,
        ..Default::default()
    });
    let input = "<note id=\"1\">Tove &amp; Jani<br/></note>";

    insta::assert_snapshot!(render(&tokenizer, input), @r###"
    start_tag 0..13 "<note id=\"1\">"
    empty_tag 28..33 "<br/>"
    end_tag 33..40 "</note>"
    "###);
}

#[test]
fn test_truncated_input() {
    let input = "<a href='x'>link</a><b";

    insta::assert_snapshot!(render(&Tokenizer::default(), input), @r###"
    start_tag 0..12 "<a href='x'>"
    text 12..16 "link"
    end_tag 16..20 "</a>"
    error 20..22 "<b"
    "###);
}
