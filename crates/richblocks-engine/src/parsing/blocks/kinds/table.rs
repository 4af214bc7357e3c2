use crate::parsing::blocks::types::TableGrid;

/// Pipe-delimited table rows (marker struct).
///
/// Owns the row delimiters and the rules that turn a run of table lines into
/// a [`TableGrid`].
pub struct Table;

impl Table {
    pub const PIPE: char = '|';
    /// Bold markers are dropped from cells rather than converted, to save width.
    pub const EMPHASIS: &'static str = "**";

    /// Splits a row into cleaned cells.
    ///
    /// The first and last fragments of the split belong to the leading and
    /// trailing pipes and are always dropped, so `| A | B` has the single
    /// cell `A`.
    pub fn split_cells(line: &str) -> Vec<String> {
        let fragments: Vec<&str> = line.trim().split(Self::PIPE).collect();
        match fragments.as_slice() {
            [_, inner @ .., _] => inner.iter().map(|cell| Self::clean_cell(cell)).collect(),
            _ => vec![],
        }
    }

    /// Strips bold markers and surrounding whitespace from a cell.
    pub fn clean_cell(raw: &str) -> String {
        raw.replace(Self::EMPHASIS, "").trim().to_string()
    }

    /// True when every cell is made only of `-`, `:` and whitespace.
    ///
    /// Empty cells qualify, and so does a row with no cells at all.
    pub fn is_separator(cells: &[String]) -> bool {
        cells.iter().all(|cell| {
            cell.chars()
                .all(|ch| ch == '-' || ch == ':' || ch.is_whitespace())
        })
    }

    /// Builds a grid from a run of table lines.
    ///
    /// Separator rows are skipped. The first remaining row becomes the header
    /// and every later one a data row, whatever its length. Returns `None`
    /// when no header row exists.
    pub fn build<'a, I>(lines: I) -> Option<TableGrid>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut headers: Option<Vec<String>> = None;
        let mut rows = Vec::new();

        for line in lines {
            let cells = Self::split_cells(line);
            if Self::is_separator(&cells) {
                continue;
            }
            match headers {
                None => headers = Some(cells),
                Some(_) => rows.push(cells),
            }
        }

        TableGrid::new(headers?, rows)
    }
}
