use super::{
    classify::{Line, LineKind},
    kinds::{Prose, Table},
    types::DisplayBlock,
};

/// Which kind of run is currently being buffered, with its raw lines.
#[derive(Debug)]
enum SegmentState<'a> {
    InProse(Vec<&'a str>),
    InTable(Vec<&'a str>),
}

impl<'a> SegmentState<'a> {
    fn buffer_mut(&mut self) -> &mut Vec<&'a str> {
        match self {
            SegmentState::InProse(lines) | SegmentState::InTable(lines) => lines,
        }
    }

    fn in_table(&self) -> bool {
        matches!(self, SegmentState::InTable(_))
    }
}

/// Segments classified lines into display blocks.
///
/// Feed every line through [`push`](Self::push), then call
/// [`finish`](Self::finish) to flush the open run.
pub struct BlockBuilder<'a> {
    state: SegmentState<'a>,
    out: Vec<DisplayBlock>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new() -> Self {
        Self {
            state: SegmentState::InProse(vec![]),
            out: vec![],
        }
    }

    pub fn push(&mut self, line: &Line<'a>) {
        let is_row = line.kind == LineKind::TableRow;

        match (self.state.in_table(), is_row) {
            (false, false) | (true, true) => self.state.buffer_mut().push(line.raw),
            (false, true) => {
                log::trace!("line {}: prose -> table", line.number);
                self.flush_prose();
                self.state = SegmentState::InTable(vec![line.raw]);
            }
            (true, false) => {
                log::trace!("line {}: table -> prose", line.number);
                self.flush_table();
                self.state = SegmentState::InProse(vec![line.raw]);
            }
        }
    }

    pub fn finish(mut self) -> Vec<DisplayBlock> {
        // EOF flush
        if self.state.in_table() {
            self.flush_table();
        } else {
            self.flush_prose();
        }
        self.out
    }

    fn flush_prose(&mut self) {
        let lines = std::mem::take(self.state.buffer_mut());
        if let Some(text) = Prose::build(lines.iter().copied()) {
            log::debug!("flushing prose run of {} lines", lines.len());
            self.out.push(DisplayBlock::Text(text));
        }
    }

    /// Flushes the table run. Lines that never establish a header row are
    /// emitted as a text block of their own.
    fn flush_table(&mut self) {
        let lines = std::mem::take(self.state.buffer_mut());
        match Table::build(lines.iter().copied()) {
            Some(grid) => {
                log::debug!(
                    "flushing table run of {} lines ({} columns, {} rows)",
                    lines.len(),
                    grid.column_count(),
                    grid.rows().len()
                );
                self.out.push(DisplayBlock::Table(grid));
            }
            None => {
                log::debug!(
                    "table run of {} lines has no header row, emitting it as text",
                    lines.len()
                );
                if let Some(text) = Prose::build(lines.iter().copied()) {
                    self.out.push(DisplayBlock::Text(text));
                }
            }
        }
    }
}

impl Default for BlockBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{blocks::LineClassifier, lines::split_lines};

    fn segment(document: &str) -> Vec<DisplayBlock> {
        let mut builder = BlockBuilder::new();
        for lr in split_lines(document) {
            builder.push(&LineClassifier.classify(lr));
        }
        builder.finish()
    }

    #[test]
    fn prose_then_table_then_prose() {
        let blocks = segment("a\n| H |\n| v |\nb");
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].as_text(), Some("a"));
        assert!(blocks[1].is_table());
        assert_eq!(blocks[2].as_text(), Some("b"));
    }

    #[test]
    fn table_at_end_of_input_is_flushed() {
        let blocks = segment("| H |\n| v |");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].as_table().unwrap().rows().len(), 1);
    }

    #[test]
    fn blank_line_splits_tables() {
        let blocks = segment("| A |\n| 1 |\n\n| B |\n| 2 |");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].as_table().unwrap().headers(), ["A"]);
        assert_eq!(blocks[1].as_table().unwrap().headers(), ["B"]);
    }

    #[test]
    fn headerless_run_is_its_own_text_block() {
        let blocks = segment("before\n|---|\nafter");
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].as_text(), Some("before"));
        assert_eq!(blocks[1].as_text(), Some("|---|"));
        assert_eq!(blocks[2].as_text(), Some("after"));
    }

    #[test]
    fn headerless_run_then_blank_line() {
        let blocks = segment("|---|\n| : |\n\nafter");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].as_text(), Some("|---|\n| : |"));
        assert_eq!(blocks[1].as_text(), Some("after"));
    }

    #[test]
    fn headerless_run_at_end_of_input_is_text() {
        let blocks = segment("|--|");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].as_text(), Some("|--|"));
    }

    #[test]
    fn blank_only_input_has_no_blocks() {
        assert!(segment("\n\n   \n").is_empty());
    }
}
