use serde::Serialize;

use crate::parsing::lines::LineRef;

use super::kinds::Table;

/// The local classification of one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LineKind {
    /// Empty or whitespace only.
    Blank,
    /// Trimmed text starts with a pipe.
    TableRow,
    /// Anything else.
    Prose,
}

/// Classifies a raw line.
///
/// Surrounding whitespace is ignored for classification only; the raw text is
/// what prose blocks keep.
pub fn classify(raw_line: &str) -> LineKind {
    let trimmed = raw_line.trim();
    if trimmed.is_empty() {
        LineKind::Blank
    } else if trimmed.starts_with(Table::PIPE) {
        LineKind::TableRow
    } else {
        LineKind::Prose
    }
}

/// A raw line together with its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1-based line number in the document.
    pub number: usize,
    /// The line exactly as it appeared, minus its terminator.
    pub raw: &'a str,
    pub kind: LineKind,
}

/// Classifies individual lines for the segmentation phase.
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies a line, keeping its raw text.
    pub fn classify<'a>(&self, lr: LineRef<'a>) -> Line<'a> {
        Line {
            number: lr.number,
            raw: lr.text,
            kind: classify(lr.text),
        }
    }
}
