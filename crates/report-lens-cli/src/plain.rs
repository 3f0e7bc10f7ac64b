//! Plain-text rendering for non-interactive output.

use report_lens_engine::{
    Block, Cell, Ledger, Span, Table,
    citations::Citation,
};

/// Prefix shown before emphasized (limitations) headings.
pub const EMPHASIS_MARK: &str = "! ";

/// Numbers consecutive ordered list items; any other block restarts the count.
#[derive(Default)]
pub struct ListNumbering {
    next: usize,
}

impl ListNumbering {
    /// Marker for `block` if it is a list item.
    pub fn marker(&mut self, block: &Block) -> Option<String> {
        match block {
            Block::ListItem { ordered: true, .. } => {
                self.next += 1;
                Some(format!("{}.", self.next))
            }
            Block::ListItem { ordered: false, .. } => {
                self.next = 0;
                Some("•".to_string())
            }
            _ => {
                self.next = 0;
                None
            }
        }
    }
}

pub fn spans_text(spans: &[Span]) -> String {
    spans
        .iter()
        .map(|s| match s {
            Span::Text(t) | Span::Bold(t) => t.clone(),
            Span::Link { label, url } => format!("{label} <{url}>"),
        })
        .collect()
}

fn cell_text(cell: &Cell) -> String {
    match cell {
        Cell::Text(t) => t.clone(),
        Cell::Linked(spans) => spans_text(spans),
    }
}

/// Lays a table out as aligned text rows: header, rule, then body rows.
pub fn table_grid(table: &Table) -> Vec<String> {
    let header = &table.headers;
    let body: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|r| r.iter().map(cell_text).collect())
        .collect();

    let columns = body
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0);
    let mut widths = vec![0; columns];
    for row in std::iter::once(header).chain(body.iter()) {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let format_row = |row: &[String]| {
        let padded: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, w)| {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                format!("{cell:<w$}")
            })
            .collect();
        padded.join(" | ").trim_end().to_string()
    };

    let rule = widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join("-+-");

    let mut out = vec![format_row(header.as_slice()), rule];
    out.extend(body.iter().map(|r| format_row(r.as_slice())));
    out
}

/// Renders the block sequence as plain text.
pub fn render_blocks(blocks: &[Block]) -> String {
    let mut out: Vec<String> = vec![];
    let mut numbering = ListNumbering::default();

    for block in blocks {
        let marker = numbering.marker(block);
        match block {
            Block::Heading {
                level,
                spans,
                emphasized,
            } => {
                let mut text = spans_text(spans);
                if *emphasized {
                    text.insert_str(0, EMPHASIS_MARK);
                }
                let underline = match level {
                    2 => Some('='),
                    3 => Some('-'),
                    _ => None,
                };
                let width = text.chars().count();
                out.push(text);
                if let Some(ch) = underline {
                    out.push(ch.to_string().repeat(width));
                }
            }
            Block::ListItem { spans, .. } => {
                out.push(format!(
                    "  {} {}",
                    marker.unwrap_or_default(),
                    spans_text(spans)
                ));
            }
            Block::Paragraph { spans } => out.push(spans_text(spans)),
            Block::Separator => out.push(String::new()),
            Block::Table(table) => out.extend(table_grid(table)),
            Block::CodeBlock { lines, .. } => {
                out.extend(lines.iter().map(|l| format!("    {l}")));
            }
        }
    }

    out.join("\n")
}

fn citation_line(c: &Citation) -> String {
    let mark = if c.verified { "[x]" } else { "[ ]" };
    let mut line = format!("{:<6} {mark} {}", c.id.to_string(), c.title);
    if let Some(status) = c.status.marker() {
        line.push(' ');
        line.push_str(status);
    }
    line
}

/// One-line summary of verification progress.
pub fn stats_line(ledger: &Ledger) -> String {
    let stats = ledger.stats();
    format!(
        "{} citations | {} verified | {} manual | {}% complete",
        stats.total,
        stats.verified,
        stats.manual,
        stats.completion_percent.round() as u32
    )
}

/// Lists every citation with its url, followed by the summary line.
pub fn render_ledger(ledger: &Ledger) -> String {
    let mut out: Vec<String> = vec![];
    if ledger.is_empty() {
        out.push("No citations found.".to_string());
    }
    for c in ledger.iter() {
        out.push(citation_line(c));
        out.push(format!("{:7}{}", "", c.url));
    }
    out.push(String::new());
    out.push(stats_line(ledger));
    out.join("\n")
}
