pub mod lines;
pub mod span;

pub use lines::{LineRef, lines_with_index};
pub use span::LineSpan;
