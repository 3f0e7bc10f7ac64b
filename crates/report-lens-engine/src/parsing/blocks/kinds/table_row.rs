use crate::parsing::table::PIPE;

/// A line belonging to a pipe table run.
pub struct TableRow;

impl TableRow {
    /// A line is a table row when its trimmed form starts with `|`.
    pub fn is_row(line: &str) -> bool {
        line.trim_start().starts_with(PIPE)
    }
}
