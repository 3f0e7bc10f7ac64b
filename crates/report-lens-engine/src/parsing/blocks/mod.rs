//! # Block Parsing
//!
//! Two-phase, line-oriented block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` holding local facts only (fence, table row, heading, list
//!    marker, blank)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` tracks the one
//!    multi-line leaf that may be open (a table run or a code fence) and emits
//!    `BlockNode`s as lines arrive
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `BlockNode`)
//! - **`kinds`**: Block-specific types with owned delimiters (CodeFence,
//!   Heading, ListItem, TableRow)
//! - **`classify`**: `ReportLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Every line ends up in exactly one block, except one-row table runs,
//!   which are dropped
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - Block order follows line order

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineKind, ReportLineClassifier};
pub use types::{Block, BlockNode};
