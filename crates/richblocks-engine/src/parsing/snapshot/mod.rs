//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Renders parsed blocks into a stable, line-oriented text form
//!   for `insta` snapshot testing
//! - **`invariants`**: Runtime checks for parser correctness (tables have headers,
//!   no separator row survives, prose text is in document order)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::normalize;
