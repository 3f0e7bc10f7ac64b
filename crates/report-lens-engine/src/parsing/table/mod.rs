//! # Table Sub-Parser
//!
//! Turns a contiguous run of pipe rows, as collected by the block builder,
//! into a header row and body rows.
//!
//! Layout expected from the generator:
//!
//! ```text
//! | Tool | Critical Flaw |
//! |------|---------------|
//! | A    | [slow](https://a.example/bench) |
//! ```
//!
//! Row 0 is the header, row 1 is the separator (discarded without looking at
//! it), rows 2.. are data.

mod cell;

pub use cell::Cell;

use serde::Serialize;

/// Delimiter between table cells.
pub const PIPE: char = '|';

/// Bold markers stripped from header cells.
const HEADER_BOLD: &str = "**";

/// A parsed table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    /// Header cell texts with `**` markers removed.
    pub headers: Vec<String>,
    /// Body rows; rows may be ragged, nothing pads them.
    pub rows: Vec<Vec<Cell>>,
}

/// Parses the collected rows of a table run.
///
/// Returns `None` for fewer than two rows: a single pipe line is not a table.
pub fn parse_table<S: AsRef<str>>(lines: &[S]) -> Option<Table> {
    if lines.len() < 2 {
        return None;
    }

    let headers = split_row(lines[0].as_ref())
        .into_iter()
        .map(|h| h.replace(HEADER_BOLD, ""))
        .collect();

    let rows = lines[2..]
        .iter()
        .map(|row| {
            split_row(row.as_ref())
                .into_iter()
                .map(Cell::from_raw)
                .collect()
        })
        .collect();

    Some(Table { headers, rows })
}

/// Splits a row on `|`, dropping segments that are empty after trimming.
///
/// Dropping empty segments absorbs the leading and trailing pipes. It also
/// drops genuinely empty cells, which shifts later cells left.
pub fn split_row(row: &str) -> Vec<&str> {
    row.split(PIPE)
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .collect()
}
