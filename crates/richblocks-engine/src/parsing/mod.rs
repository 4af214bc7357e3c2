//! # Parsing
//!
//! Turns a flat generated document into an ordered list of [`DisplayBlock`]s.
//!
//! ## Phases
//!
//! 1. **Line splitting** (`lines`): the document is cut on `\r\n`, `\r` and `\n`,
//!    keeping empty lines so paragraph spacing survives
//! 2. **Line classification** (`blocks::classify`): each line is `Blank`,
//!    `TableRow` or `Prose`, judged in isolation
//! 3. **Segmentation** (`blocks::builder`): a two-state machine buffers contiguous
//!    runs and flushes them as text or table blocks
//! 4. **Inline markup** (`inline`): prose runs are rewritten into the host's
//!    rich-text markup
//!
//! Parsing never fails. Anything that does not look like a table or a known
//! markup construct is passed through as prose.

pub mod blocks;
pub mod inline;
pub mod lines;
pub mod snapshot;

#[cfg(test)]
mod tests;

use blocks::{BlockBuilder, LineClassifier};
use lines::split_lines;

pub use blocks::{DisplayBlock, LineKind, TableGrid, TextContent};

/// Parses a generated document into display blocks, in document order.
///
/// Each call is independent: the returned blocks own their data and hold no
/// reference to `document`.
pub fn parse(document: &str) -> Vec<DisplayBlock> {
    let classifier = LineClassifier;
    let mut builder = BlockBuilder::new();

    for lr in split_lines(document) {
        let line = classifier.classify(lr);
        builder.push(&line);
    }

    let blocks = builder.finish();
    log::debug!(
        "parsed {} bytes into {} blocks",
        document.len(),
        blocks.len()
    );
    blocks
}
