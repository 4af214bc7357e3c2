use crate::parsing::{
    blocks::{DisplayBlock, kinds::Table},
    inline::strip_tags,
};

/// Panics if `blocks` break a parser invariant for `document`.
///
/// - every table has at least one header cell
/// - no header or data row is a separator row
/// - the visible words of all blocks appear in the same order as in the document
pub fn check(document: &str, blocks: &[DisplayBlock]) {
    let mut search_from = 0;
    for (i, block) in blocks.iter().enumerate() {
        let words: Vec<String> = match block {
            DisplayBlock::Text(text) => visible_words(&strip_tags(text.as_str())),
            DisplayBlock::Table(grid) => {
                assert!(
                    !grid.headers().is_empty(),
                    "table block {i} has no headers"
                );
                assert!(
                    !Table::is_separator(grid.headers()),
                    "table block {i} has a separator header: {:?}",
                    grid.headers()
                );
                for row in grid.rows() {
                    assert!(
                        !Table::is_separator(row),
                        "table block {i} kept a separator row: {row:?}"
                    );
                }
                grid.headers()
                    .iter()
                    .chain(grid.rows().iter().flatten())
                    .flat_map(|cell| visible_words(cell))
                    .collect()
            }
        };

        for word in words {
            let found = document[search_from..].find(word.as_str());
            let Some(offset) = found else {
                panic!("block {i}: word {word:?} missing or out of order after byte {search_from}");
            };
            search_from += offset + word.len();
        }
    }
}

/// Words made only of alphanumerics; markup glyphs and punctuation are skipped.
fn visible_words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}
