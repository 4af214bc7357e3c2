use std::fmt;

use serde::Serialize;

/// A contiguous prose run, already rewritten into host rich-text markup.
///
/// Blank lines inside the run are kept as empty lines; blank lines at either
/// end of the run are not part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TextContent(String);

impl TextContent {
    pub(crate) fn new(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for TextContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TextContent {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A table with a header row and any number of data rows.
///
/// # Invariants
///
/// - `headers` is never empty
/// - no row (header or data) consists only of `-`, `:` and whitespace
/// - data rows keep their parsed length; short rows are not padded and long
///   rows are not truncated
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableGrid {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TableGrid {
    /// Builds a grid, or `None` when there is no header cell.
    pub(crate) fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Option<Self> {
        if headers.is_empty() {
            return None;
        }
        Some(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of columns, which is always the header count.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// The cell at `row`/`column`, or `""` when the row is short.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map_or("", String::as_str)
    }
}

/// One unit of renderable content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayBlock {
    /// A prose run.
    Text(TextContent),
    /// A table grid.
    Table(TableGrid),
}

impl DisplayBlock {
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, DisplayBlock::Text(_))
    }

    #[must_use]
    pub fn is_table(&self) -> bool {
        matches!(self, DisplayBlock::Table(_))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            DisplayBlock::Text(t) => Some(t.as_str()),
            DisplayBlock::Table(_) => None,
        }
    }

    pub fn as_table(&self) -> Option<&TableGrid> {
        match self {
            DisplayBlock::Table(g) => Some(g),
            DisplayBlock::Text(_) => None,
        }
    }
}
