//! Parser tests over whole reports.
//!
//! Block sequences are asserted through the compact `outline` form so each
//! case reads as one line per block.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    blocks::Block,
    inline::{Span, types::plain_text},
    parse, parse_report,
    snapshot::{invariants, outline},
};

fn report(lines: &[&str]) -> String {
    lines.join("\n")
}

fn outline_of(text: &str) -> String {
    let parsed = parse_report(text);
    invariants(text, &parsed.blocks);
    outline(&parsed.blocks)
}

#[test]
fn mixed_report_outline() {
    let md = report(&[
        "## Overview",
        "Intro with **bold** and [src](https://a.example).",
        "",
        "### Key Limitations",
        "- first [x](https://x.example)",
        "2. second",
        "| Tool | **Flaw** |",
        "|---|---|",
        "| A | [slow](https://b.example) |",
        "```text",
        "| not | a table |",
        "```",
        "#### Detail",
    ]);

    insta::assert_snapshot!(outline_of(&md), @r#"
    0:1 H2 Overview
    1:1 Para Intro with *bold* and [src -> https://a.example].
    2:1 Sep
    3:1 H3! Key Limitations
    4:1 Item(-) first [x -> https://x.example]
    5:1 Item(1.) second
    6:3 Table [Tool | Flaw] {A | [slow -> https://b.example]}
    9:3 Code(text) ["| not | a table |"]
    12:1 H4 Detail
    "#);
}

#[test]
fn empty_report_has_no_blocks() {
    assert!(parse("").is_empty());
}

#[test]
fn blank_lines_become_separators() {
    assert_eq!(parse("\n  \n"), vec![Block::Separator; 3]);
}

#[test]
fn trailing_newline_yields_trailing_separator() {
    assert_eq!(
        outline_of("para\n"),
        "0:1 Para para\n1:1 Sep"
    );
}

#[test]
fn crlf_input_parses_like_lf() {
    assert_eq!(parse("## A\r\n- b"), parse("## A\n- b"));
}

#[test]
fn most_specific_heading_prefix_wins() {
    let blocks = parse("#### Deep");
    assert!(matches!(&blocks[0], Block::Heading { level: 4, .. }));
}

#[test]
fn single_hash_is_a_paragraph() {
    assert_eq!(outline_of("# Title"), "0:1 Para # Title");
}

#[test]
fn indented_heading_is_a_paragraph() {
    assert_eq!(outline_of("  ## Not heading"), "0:1 Para   ## Not heading");
}

#[test]
fn limitations_heading_is_emphasized_strengths_is_not() {
    let blocks = parse("### Key Limitations\n### Key Strengths");
    assert!(matches!(blocks[0], Block::Heading { emphasized: true, .. }));
    assert!(matches!(blocks[1], Block::Heading { emphasized: false, .. }));
}

#[test]
fn table_is_flushed_by_first_non_pipe_line() {
    let md = report(&["| A | B |", "|---|---|", "| 1 | 2 |", "| 3 | 4 |", "after"]);
    assert_eq!(
        outline_of(&md),
        "0:4 Table [A | B] {1 | 2 / 3 | 4}\n4:1 Para after"
    );
}

#[test]
fn unterminated_table_is_flushed_at_end() {
    let md = report(&["text", "| A |", "|---|", "| 1 |"]);
    assert_eq!(outline_of(&md), "0:1 Para text\n1:3 Table [A] {1}");
}

#[test]
fn one_row_table_is_dropped() {
    let md = report(&["before", "| only |", "after"]);
    assert_eq!(outline_of(&md), "0:1 Para before\n2:1 Para after");
}

#[test]
fn blank_line_splits_tables() {
    let md = report(&["| A |", "|---|", "", "| B |", "|---|"]);
    assert_eq!(
        outline_of(&md),
        "0:2 Table [A] {}\n2:1 Sep\n3:2 Table [B] {}"
    );
}

#[test]
fn fence_flushes_open_table_first() {
    let md = report(&["| A |", "|---|", "| 1 |", "```", "code", "```"]);
    assert_eq!(
        outline_of(&md),
        "0:3 Table [A] {1}\n3:3 Code() [\"code\"]"
    );
}

#[test]
fn code_block_lines_are_verbatim() {
    let md = report(&["```", "  **not bold** [nor](link)", "", "## nor heading", "```"]);
    let blocks = parse(&md);
    assert_eq!(
        blocks,
        vec![Block::CodeBlock {
            language: None,
            lines: vec![
                "  **not bold** [nor](link)".to_string(),
                String::new(),
                "## nor heading".to_string(),
            ],
        }]
    );
}

#[test]
fn unterminated_fence_is_flushed_at_end() {
    let md = report(&["intro", "```mermaid", "graph TD", "  A --> B"]);
    assert_eq!(
        outline_of(&md),
        "0:1 Para intro\n1:3 Code(mermaid) [\"graph TD\", \"  A --> B\"]"
    );
}

#[test]
fn closing_fence_with_info_still_closes() {
    let md = report(&["```", "x", "```python", "after"]);
    assert_eq!(outline_of(&md), "0:3 Code() [\"x\"]\n3:1 Para after");
}

#[test]
fn list_item_text_is_inline_parsed() {
    let blocks = parse("  1. **Cost**: see [pricing](https://p.example)");
    assert_eq!(
        blocks,
        vec![Block::ListItem {
            ordered: true,
            spans: vec![
                Span::Bold("Cost".to_string()),
                Span::Text(": see ".to_string()),
                Span::Link {
                    label: "pricing".to_string(),
                    url: "https://p.example".to_string(),
                },
            ],
        }]
    );
}

#[test]
fn paragraph_keeps_leading_whitespace() {
    let blocks = parse("   indented prose");
    assert_eq!(
        blocks,
        vec![Block::Paragraph {
            spans: vec![Span::Text("   indented prose".to_string())],
        }]
    );
}

#[rstest]
#[case("")]
#[case("\n")]
#[case("| a |")]
#[case("| a |\n| b |\n```\n| c |")]
#[case("```\n```\n```")]
#[case("## h\n\n- a\n1. b\n| x |\n|--|\ntext\n\n")]
#[case("|\n|\n|")]
#[case("```\n| inside |\n")]
fn invariants_hold(#[case] text: &str) {
    let parsed = parse_report(text);
    invariants(text, &parsed.blocks);
}

/// Every paragraph, heading and list item reproduces its line once markup
/// characters are dropped.
#[test]
fn readable_text_tracks_source_lines() {
    let md = report(&[
        "## The **Plan**",
        "- Use [tool](https://t.example) daily",
        "Plain sentence with **emphasis**.",
    ]);
    let texts: Vec<String> = parse(&md)
        .iter()
        .map(|b| match b {
            Block::Heading { spans, .. }
            | Block::ListItem { spans, .. }
            | Block::Paragraph { spans } => plain_text(spans),
            other => panic!("unexpected block {other:?}"),
        })
        .collect();
    assert_eq!(
        texts,
        vec![
            "The Plan",
            "Use tool daily",
            "Plain sentence with emphasis.",
        ]
    );
}
