//! # Inline Parsing
//!
//! Cursor-based inline parsing over a single line of report text.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and runs over the text of
//! inline-eligible blocks (headings, list items, paragraphs) and table cells.
//!
//! At each position the parser tries its constructs in a fixed order and the
//! first one that closes wins:
//! - Bold `**text**` (needs a closing pair)
//! - Link `[label](url)`
//!
//! Nothing nests. Whatever sits between the delimiters of the winning
//! construct is taken literally, so `**[a](b)**` is bold text `[a](b)`.
//!
//! ## Modules
//!
//! - **`types`**: `Span` enum (Text, Bold, Link)
//! - **`kinds`**: Inline-specific types with owned delimiters (Bold, Link)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with position tracking
//! - **`parser`**: `parse_inline()` and `parse_links()` entry points

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{parse_inline, parse_links};
pub use types::{Span, plain_text};
