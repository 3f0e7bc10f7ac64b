use crate::parsing::{
    blocks::{BlockNode, kinds::TableRow},
    source::lines_with_index,
};

/// Validates parser output invariants.
///
/// Asserts that:
/// - All block line spans are non-empty and within the input
/// - Blocks are in line order and never overlap
/// - Every line not covered by a block is a lone table row (the only input
///   the parser drops)
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(text: &str, blocks: &[BlockNode]) {
    let lines: Vec<&str> = lines_with_index(text).map(|l| l.text).collect();
    let n = lines.len();

    let mut next = 0usize;
    for b in blocks {
        assert!(
            !b.lines.is_empty() && b.lines.end <= n,
            "block span out of bounds: {:?} (line count: {})",
            b.lines,
            n
        );
        assert!(
            b.lines.start >= next,
            "block span overlaps or goes backwards: {:?} (previous end: {})",
            b.lines,
            next
        );
        for (gap, line) in lines.iter().enumerate().take(b.lines.start).skip(next) {
            assert_dropped_row(gap, line);
        }
        next = b.lines.end;
    }
    for (gap, line) in lines.iter().enumerate().skip(next) {
        assert_dropped_row(gap, line);
    }
}

fn assert_dropped_row(index: usize, line: &str) {
    assert!(
        TableRow::is_row(line),
        "line {index} was dropped but is not a lone table row: {line:?}"
    );
}
