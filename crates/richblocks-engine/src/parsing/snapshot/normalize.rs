use std::fmt::Write;

use crate::parsing::blocks::DisplayBlock;

/// Renders blocks as stable text, one block header per line.
///
/// ```text
/// Text "Intro"
/// Table [A | B]
///   [1 | 2]
/// ```
pub fn normalize(blocks: &[DisplayBlock]) -> String {
    let mut out = String::new();
    for block in blocks {
        match block {
            DisplayBlock::Text(text) => {
                let _ = writeln!(out, "Text {:?}", text.as_str());
            }
            DisplayBlock::Table(grid) => {
                let _ = writeln!(out, "Table [{}]", grid.headers().join(" | "));
                for row in grid.rows() {
                    let _ = writeln!(out, "  [{}]", row.join(" | "));
                }
            }
        }
    }
    out
}
