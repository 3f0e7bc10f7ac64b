use serde::Serialize;

use crate::parsing::inline::{Span, parse_links, types::plain_text};

/// A table body cell.
///
/// Cells support link syntax only. A cell without any link keeps its raw
/// text, including any `**` markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Cell {
    Text(String),
    Linked(Vec<Span>),
}

impl Cell {
    pub fn from_raw(raw: &str) -> Self {
        let spans = parse_links(raw);
        if spans.iter().any(Span::is_link) {
            Cell::Linked(spans)
        } else {
            Cell::Text(raw.to_string())
        }
    }

    /// Readable text of the cell; link labels stand in for the links.
    pub fn text(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Linked(spans) => plain_text(spans),
        }
    }
}
