use crate::parsing::{blocks::types::TextContent, inline::markup};

/// Prose run builder (marker struct).
///
/// Prose has no delimiters: it is whatever is not a table. A run keeps its
/// raw lines, whitespace included, and is markup-transformed once when it is
/// flushed.
pub struct Prose;

impl Prose {
    /// Joins a run of raw lines into transformed text.
    ///
    /// Blank lines at the start and end of the run are dropped; blank lines in
    /// between are kept. Returns `None` if nothing but blank lines remains.
    pub fn build<'a, I>(lines: I) -> Option<TextContent>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let lines: Vec<&str> = lines.into_iter().collect();
        let first = lines.iter().position(|l| !l.trim().is_empty())?;
        let last = lines.iter().rposition(|l| !l.trim().is_empty())?;

        let raw = lines[first..=last].join("\n");
        Some(TextContent::new(markup::transform(&raw)))
    }
}
