/// A range of physical lines `[start, end)` in the report text.
///
/// Every emitted block records the lines it was built from, so the block
/// sequence can be checked against the input line by line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub struct LineSpan {
    /// Index of the first line (0-based, inclusive).
    pub start: usize,
    /// Index one past the last line.
    pub end: usize,
}

impl LineSpan {
    /// A span covering exactly one line.
    pub fn single(index: usize) -> Self {
        Self {
            start: index,
            end: index + 1,
        }
    }

    /// Returns the number of lines covered. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Extends this span so it ends after `index`.
    pub fn extend_to(&mut self, index: usize) {
        self.end = self.end.max(index + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_covers_one_line() {
        let sp = LineSpan::single(4);
        assert_eq!(sp.len(), 1);
        assert!(!sp.is_empty());
    }

    #[test]
    fn extend_never_shrinks() {
        let mut sp = LineSpan::single(3);
        sp.extend_to(6);
        assert_eq!(sp, LineSpan { start: 3, end: 7 });
        sp.extend_to(4);
        assert_eq!(sp.end, 7);
    }

    #[test]
    fn inverted_span_is_empty() {
        let sp = LineSpan { start: 5, end: 2 };
        assert!(sp.is_empty());
    }
}
