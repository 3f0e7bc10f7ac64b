use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use report_lens_engine::{Block, Span as InlineSpan};

use crate::plain::{EMPHASIS_MARK, ListNumbering, table_grid};

/// Accent for emphasized (limitations) headings.
pub const AMBER: Color = Color::Rgb(255, 176, 0);

const HEADING: Color = Color::Cyan;
const LINK: Color = Color::LightBlue;
const CODE: Color = Color::Green;
const TABLE_RULE: Color = Color::DarkGray;

fn inline_spans(spans: &[InlineSpan], base: Style) -> Vec<Span<'static>> {
    spans
        .iter()
        .map(|s| match s {
            InlineSpan::Text(t) => Span::styled(t.clone(), base),
            InlineSpan::Bold(t) => Span::styled(t.clone(), base.add_modifier(Modifier::BOLD)),
            InlineSpan::Link { label, .. } => Span::styled(
                label.clone(),
                base.fg(LINK).add_modifier(Modifier::UNDERLINED),
            ),
        })
        .collect()
}

/// Converts blocks to styled terminal lines for the report pane.
pub fn report_lines(blocks: &[Block]) -> Vec<Line<'static>> {
    let mut out = vec![];
    let mut numbering = ListNumbering::default();

    for block in blocks {
        let marker = numbering.marker(block);
        match block {
            Block::Heading {
                level,
                spans,
                emphasized,
            } => {
                let color = if *emphasized { AMBER } else { HEADING };
                let mut style = Style::default().fg(color).add_modifier(Modifier::BOLD);
                if *level == 4 {
                    style = style.remove_modifier(Modifier::BOLD).add_modifier(Modifier::ITALIC);
                }
                let mut line = vec![];
                if *emphasized {
                    line.push(Span::styled(EMPHASIS_MARK, style));
                }
                line.extend(inline_spans(spans, style));
                out.push(Line::from(line));
            }
            Block::ListItem { spans, .. } => {
                let mut line = vec![Span::styled(
                    format!("  {} ", marker.unwrap_or_default()),
                    Style::default().fg(HEADING),
                )];
                line.extend(inline_spans(spans, Style::default()));
                out.push(Line::from(line));
            }
            Block::Paragraph { spans } => {
                out.push(Line::from(inline_spans(spans, Style::default())));
            }
            Block::Separator => out.push(Line::default()),
            Block::Table(table) => {
                for (i, row) in table_grid(table).into_iter().enumerate() {
                    let style = match i {
                        0 => Style::default().add_modifier(Modifier::BOLD),
                        1 => Style::default().fg(TABLE_RULE),
                        _ => Style::default(),
                    };
                    out.push(Line::styled(row, style));
                }
            }
            Block::CodeBlock { lines, .. } => {
                out.extend(
                    lines
                        .iter()
                        .map(|l| Line::styled(format!("  {l}"), Style::default().fg(CODE))),
                );
            }
        }
    }

    out
}
