//! # Block Parsing
//!
//! Two-phase block parsing over a flat document.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a [`LineKind`]
//!    (`Blank`, `TableRow` or `Prose`) from local facts only
//!
//! 2. **Segmentation** (`builder`): A `BlockBuilder` switches between an in-prose and an
//!    in-table state, buffering contiguous runs and emitting [`DisplayBlock`]s as runs close
//!
//! ## Modules
//!
//! - **`types`**: Output types (`DisplayBlock`, `TableGrid`, `TextContent`)
//! - **`kinds`**: Run-specific builders with owned delimiters (`Table`, `Prose`)
//! - **`classify`**: `LineClassifier` produces a [`Line`] for each raw line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Blocks come out in document order; runs are never merged across a flush
//! - Every table block has at least one header cell and no separator rows
//! - A table run without a header row is kept as prose

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{Line, LineClassifier, LineKind, classify};
pub use types::{DisplayBlock, TableGrid, TextContent};
