//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Bold`**: `DELIM = b"**"` on both sides
//! - **`Link`**: `OPEN = b'['`, `MIDDLE = b"]("`, `CLOSE = b')'`
//!
//! The parser reads these constants; it never hardcodes `**` or `](`.

pub mod bold;
pub mod link;

pub use bold::Bold;
pub use link::Link;
