pub mod blocks;
pub mod inline;
pub mod snapshot;
pub mod source;
pub mod table;

#[cfg(test)]
mod tests;

use blocks::{Block, BlockBuilder, BlockNode, ReportLineClassifier};
use source::lines_with_index;

/// The block sequence of one report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReport {
    pub blocks: Vec<BlockNode>,
}

impl ParsedReport {
    /// Iterates the blocks without their line spans.
    pub fn iter_blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().map(|n| &n.block)
    }
}

/// Parses report text into blocks with their source line spans.
///
/// Total: malformed markup degrades to paragraphs, never to an error.
pub fn parse_report(text: &str) -> ParsedReport {
    let classifier = ReportLineClassifier;
    let mut builder = BlockBuilder::new();

    for lr in lines_with_index(text) {
        let lc = classifier.classify(&lr);
        builder.push(&lc);
    }

    ParsedReport {
        blocks: builder.finish(),
    }
}

/// Parses report text into its block sequence.
pub fn parse(text: &str) -> Vec<Block> {
    parse_report(text)
        .blocks
        .into_iter()
        .map(|n| n.block)
        .collect()
}
