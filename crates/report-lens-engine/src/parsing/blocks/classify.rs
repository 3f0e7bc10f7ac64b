use crate::parsing::source::{LineRef, LineSpan};

use super::kinds::{CodeFence, Heading, ListItem, ListMarker, TableRow};

/// What a line looks like on its own, without reference to its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// A backtick fence; opens or closes a code block depending on state.
    Fence { info: Option<&'a str> },
    /// Starts with `|` after trimming.
    TableRow,
    Heading { level: u8, content: &'a str },
    ListItem { marker: ListMarker, content: &'a str },
    /// Whitespace only.
    Blank,
    /// Anything else; becomes a paragraph.
    Text,
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently.
/// Whether a fence opens or closes, and whether a row is absorbed into a code
/// block, is decided by the builder.
#[derive(Debug, Clone, Copy)]
pub struct LineClass<'a> {
    pub line: LineSpan,
    /// The raw line text (terminator stripped).
    pub text: &'a str,
    pub kind: LineKind<'a>,
}

/// Classifies individual lines for the block parsing phase.
pub struct ReportLineClassifier;

impl ReportLineClassifier {
    /// Classifies a line. Precedence: fence, table row, heading, list item,
    /// blank, text.
    pub fn classify<'a>(&self, lr: &LineRef<'a>) -> LineClass<'a> {
        let text = lr.text;
        let kind = if let Some(sig) = CodeFence::sig(text) {
            LineKind::Fence { info: sig.info }
        } else if TableRow::is_row(text) {
            LineKind::TableRow
        } else if let Some((level, content)) = Heading::parse(text) {
            LineKind::Heading { level, content }
        } else if let Some((marker, content)) = ListItem::parse(text) {
            LineKind::ListItem { marker, content }
        } else if text.trim().is_empty() {
            LineKind::Blank
        } else {
            LineKind::Text
        };

        LineClass {
            line: lr.span(),
            text,
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn kind_of(text: &str) -> LineKind<'_> {
        ReportLineClassifier
            .classify(&LineRef { index: 0, text })
            .kind
    }

    #[rstest]
    #[case("```", LineKind::Fence { info: None })]
    #[case("| a |", LineKind::TableRow)]
    #[case("## A", LineKind::Heading { level: 2, content: "A" })]
    #[case("- a", LineKind::ListItem { marker: ListMarker::Dash, content: "a" })]
    #[case("3. a", LineKind::ListItem { marker: ListMarker::Numbered, content: "a" })]
    #[case("   ", LineKind::Blank)]
    #[case("", LineKind::Blank)]
    #[case("# Level one", LineKind::Text)]
    #[case("plain words", LineKind::Text)]
    fn classifies_lines(#[case] text: &str, #[case] expected: LineKind<'static>) {
        assert_eq!(kind_of(text), expected);
    }

    #[test]
    fn fence_beats_table_row() {
        // A fence is checked first, so a fenced pipe is still a fence.
        assert!(matches!(kind_of("```|"), LineKind::Fence { .. }));
    }
}
