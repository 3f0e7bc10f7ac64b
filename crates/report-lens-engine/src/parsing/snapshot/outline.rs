use crate::parsing::{
    blocks::{Block, BlockNode},
    inline::Span,
    table::Cell,
};

/// Renders blocks as one compact line each, for snapshot assertions.
///
/// Format: `<first line>:<line count> <kind> <content>`, with bold shown as
/// `*text*` and links as `[label -> url]`.
pub fn outline(blocks: &[BlockNode]) -> String {
    blocks
        .iter()
        .map(|b| format!("{}:{} {}", b.lines.start, b.lines.len(), describe(&b.block)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn describe(block: &Block) -> String {
    match block {
        Block::Heading {
            level,
            spans,
            emphasized,
        } => {
            let mark = if *emphasized { "!" } else { "" };
            format!("H{level}{mark} {}", spans_inline(spans))
        }
        Block::ListItem { ordered, spans } => {
            let marker = if *ordered { "1." } else { "-" };
            format!("Item({marker}) {}", spans_inline(spans))
        }
        Block::Paragraph { spans } => format!("Para {}", spans_inline(spans)),
        Block::Separator => "Sep".to_string(),
        Block::Table(table) => {
            let rows = table
                .rows
                .iter()
                .map(|r| r.iter().map(cell_inline).collect::<Vec<_>>().join(" | "))
                .collect::<Vec<_>>()
                .join(" / ");
            format!("Table [{}] {{{rows}}}", table.headers.join(" | "))
        }
        Block::CodeBlock { language, lines } => format!(
            "Code({}) {:?}",
            language.as_deref().unwrap_or(""),
            lines
        ),
    }
}

fn spans_inline(spans: &[Span]) -> String {
    spans
        .iter()
        .map(|s| match s {
            Span::Text(t) => t.clone(),
            Span::Bold(t) => format!("*{t}*"),
            Span::Link { label, url } => format!("[{label} -> {url}]"),
        })
        .collect()
}

fn cell_inline(cell: &Cell) -> String {
    match cell {
        Cell::Text(t) => t.clone(),
        Cell::Linked(spans) => spans_inline(spans),
    }
}
