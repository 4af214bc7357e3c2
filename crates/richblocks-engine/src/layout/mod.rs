//! # Layout
//!
//! Sizes and draws [`DisplayBlock`](crate::parsing::DisplayBlock)s at a width
//! known only at render time.
//!
//! The engine never measures text itself: the host passes a [`Measure`]
//! (wrapped-text height at a width) and a [`DrawSurface`] (an opaque sink for
//! labels, highlights and divider lines).
//!
//! ## Modules
//!
//! - **`measure`**: the `Measure` capability
//! - **`metrics`**: `LayoutMetrics` constants (header height, minimum row height, gaps)
//! - **`surface`**: `Rect`, `TextStyle` and the `DrawSurface` trait
//! - **`table`**: `TableLayout`, per-row heights computed once and shared by sizing and drawing
//! - **`document`**: `DocumentLayout`, vertical stacking of blocks, and per-block dispatch
//!
//! ## Key Invariants
//!
//! - A row is drawn at exactly the height reported for it by sizing at the same width
//! - Columns are `width / header count` wide; cells past the header count are ignored
//! - Content height is the sum of block heights plus one gap between consecutive blocks

pub mod document;
pub mod measure;
pub mod metrics;
pub mod surface;
pub mod table;

pub use document::{DocumentLayout, PlacedBlock, block_height, draw_block};
pub use measure::Measure;
pub use metrics::LayoutMetrics;
pub use surface::{Anchor, DrawSurface, Font, Rect, TextStyle};
pub use table::TableLayout;
