//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`outline`**: Converts parsed blocks to a compact one-line-per-block
//!   text form for `insta` string snapshots
//! - **`invariants`**: Runtime checks for parser correctness (spans in bounds,
//!   in order, every line accounted for)

pub mod invariants;
pub mod outline;

pub use invariants::check as invariants;
pub use outline::outline;
