use crate::parsing::{inline::parse_inline, source::LineSpan, table::parse_table};

use super::{
    classify::{LineClass, LineKind},
    kinds::{Heading, ListMarker},
    types::{Block, BlockNode},
};

#[derive(Debug)]
enum LeafState {
    None,
    Table {
        rows: Vec<String>,
        span: LineSpan,
    },
    Fence {
        language: Option<String>,
        lines: Vec<String>,
        span: LineSpan,
    },
}

/// Builds the block sequence from classified lines.
///
/// At most one multi-line leaf (a table run or a code fence) is open at a
/// time. Every other line becomes its own block immediately.
pub struct BlockBuilder {
    leaf: LeafState,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass<'_>) {
        if self.in_fence() {
            self.consume_fence_line(c);
            return;
        }

        match c.kind {
            LineKind::Fence { info } => {
                self.flush_table();
                self.leaf = LeafState::Fence {
                    language: info.map(str::to_string),
                    lines: vec![],
                    span: c.line,
                };
            }
            LineKind::TableRow => self.extend_table(c),
            LineKind::Heading { level, content } => {
                self.flush_table();
                self.emit(
                    Block::Heading {
                        level,
                        spans: parse_inline(content),
                        emphasized: Heading::is_emphasized(level, content),
                    },
                    c.line,
                );
            }
            LineKind::ListItem { marker, content } => {
                self.flush_table();
                self.emit(
                    Block::ListItem {
                        ordered: marker == ListMarker::Numbered,
                        spans: parse_inline(content),
                    },
                    c.line,
                );
            }
            LineKind::Blank => {
                self.flush_table();
                self.emit(Block::Separator, c.line);
            }
            LineKind::Text => {
                self.flush_table();
                self.emit(
                    Block::Paragraph {
                        spans: parse_inline(c.text),
                    },
                    c.line,
                );
            }
        }
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        // EOF flush: unterminated tables and fences are kept, not rejected.
        self.flush_table();
        self.flush_fence();
        self.out
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn emit(&mut self, block: Block, lines: LineSpan) {
        self.out.push(BlockNode { block, lines });
    }

    fn consume_fence_line(&mut self, c: &LineClass<'_>) {
        let LeafState::Fence { lines, span, .. } = &mut self.leaf else {
            return;
        };
        span.extend_to(c.line.start);

        // Any fence line closes, whatever its info string.
        if matches!(c.kind, LineKind::Fence { .. }) {
            self.flush_fence();
        } else {
            lines.push(c.text.to_string());
        }
    }

    fn extend_table(&mut self, c: &LineClass<'_>) {
        match &mut self.leaf {
            LeafState::Table { rows, span } => {
                rows.push(c.text.to_string());
                span.extend_to(c.line.start);
            }
            _ => {
                self.leaf = LeafState::Table {
                    rows: vec![c.text.to_string()],
                    span: c.line,
                };
            }
        }
    }

    fn flush_table(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Table { rows, span } = prev {
            match parse_table(rows.as_slice()) {
                Some(table) => self.emit(Block::Table(table), span),
                None => log::debug!("dropping one-row table at line {}", span.start + 1),
            }
        } else {
            self.leaf = prev; // put back non-table leaf (e.g. fence)
        }
    }

    fn flush_fence(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Fence {
            language,
            lines,
            span,
        } = prev
        {
            self.emit(Block::CodeBlock { language, lines }, span);
        } else {
            self.leaf = prev;
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
