use serde::Serialize;

use crate::parsing::{inline::Span, source::LineSpan, table::Table};

/// A structural unit of the rendered report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Block {
    /// `## `, `### ` or `#### ` heading.
    Heading {
        /// 2, 3 or 4.
        level: u8,
        spans: Vec<Span>,
        /// Presentation hint for "limitations"-style level-3 headings.
        emphasized: bool,
    },
    /// A `- ` or `N. ` line.
    ListItem { ordered: bool, spans: Vec<Span> },
    /// Any other non-blank line.
    Paragraph { spans: Vec<Span> },
    /// A blank line. Never merged with neighbours.
    Separator,
    /// A run of two or more pipe rows.
    Table(Table),
    /// Lines between backtick fences, kept verbatim.
    CodeBlock {
        /// Info string of the opening fence, if any.
        language: Option<String>,
        lines: Vec<String>,
    },
}

/// A parsed block with the source lines it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockNode {
    pub block: Block,
    /// Lines consumed by this block, fence lines included.
    pub lines: LineSpan,
}
