//! Integration tests for the parsing module.
//!
//! Every parse is also run through the invariant checks in `snapshot::invariants`.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{DisplayBlock, parse, snapshot};

fn parse_checked(document: &str) -> Vec<DisplayBlock> {
    let blocks = parse(document);
    snapshot::invariants(document, &blocks);
    blocks
}

#[test]
fn bold_prose_is_one_text_block() {
    let blocks = parse_checked("Hello **world**");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].as_text(), Some("Hello <b>world</b>"));
}

#[test]
fn table_with_separator() {
    let blocks = parse_checked("| A | B |\n|---|---|\n| 1 | 2 |");
    assert_eq!(blocks.len(), 1);
    let grid = blocks[0].as_table().unwrap();
    assert_eq!(grid.headers(), ["A", "B"]);
    assert_eq!(grid.rows(), [vec!["1".to_string(), "2".to_string()]]);
}

#[test]
fn intro_table_outro() {
    let blocks = parse_checked("Intro\n\n| A | B |\n| 1 | 2 |\n\nOutro");
    assert_eq!(
        snapshot::normalize(&blocks),
        "Text \"Intro\"\nTable [A | B]\n  [1 | 2]\nText \"Outro\"\n"
    );
}

#[test]
fn short_row_is_kept_short() {
    let blocks = parse_checked("| A | B |\n| 1 |");
    let grid = blocks[0].as_table().unwrap();
    assert_eq!(grid.rows(), [vec!["1".to_string()]]);
    assert_eq!(grid.cell(0, 1), "");
}

#[test]
fn empty_document() {
    assert!(parse_checked("").is_empty());
}

#[rstest]
#[case("\n\n\n")]
#[case("   \n\t\n")]
fn blank_documents_have_no_blocks(#[case] document: &str) {
    assert!(parse_checked(document).is_empty());
}

#[test]
fn paragraph_spacing_survives() {
    let blocks = parse_checked("First paragraph.\n\nSecond paragraph.");
    assert_eq!(
        blocks[0].as_text(),
        Some("First paragraph.\n\nSecond paragraph.")
    );
}

#[test]
fn stray_pipe_in_prose_stays_prose() {
    let blocks = parse_checked("Choose A | B carefully.\n|\nThen continue.");
    assert_eq!(blocks.len(), 3);
    assert!(blocks.iter().all(DisplayBlock::is_text));
    assert_eq!(blocks[1].as_text(), Some("|"));
    assert_eq!(blocks[2].as_text(), Some("Then continue."));
}

#[test]
fn windows_line_endings() {
    let blocks = parse_checked("Intro\r\n| A |\r\n| 1 |\r\nOutro");
    assert_eq!(blocks.len(), 3);
    assert_eq!(blocks[1].as_table().unwrap().headers(), ["A"]);
}

#[test]
fn table_cells_drop_bold_markers() {
    let blocks = parse_checked("| **Pawn** | **Weapon** |\n|---|---|\n| Alice | *Rifle* |");
    let grid = blocks[0].as_table().unwrap();
    assert_eq!(grid.headers(), ["Pawn", "Weapon"]);
    // Cells only lose bold markers; italics stay literal.
    assert_eq!(grid.rows()[0], ["Alice", "*Rifle*"]);
}

#[test]
fn parsing_is_idempotent() {
    let document = "# Report\n\n| A | B |\n|:-|-:|\n| 1 | 2 | 3 |\n| x |\n\n* one\n* two\n\n---\nbye";
    assert_eq!(parse(document), parse(document));
}

#[test]
fn realistic_response() {
    let document = "\
## Weapon allocation

Based on the roster, here is the **optimal** loadout:

| Colonist | Weapon | Notes |
|----------|:------:|-------|
| Alice | Sniper rifle | *Recovering* from a leg wound |
| Bob | Assault rifle |
| Cara | Longsword | Melee 14 |

### Apparel
* Give Bob the **recon helmet**
- Cara keeps her flak vest
___
Good luck!";

    let blocks = parse_checked(document);
    assert_eq!(blocks.len(), 3);

    let intro = blocks[0].as_text().unwrap();
    assert!(intro.starts_with("\n<b><size=16>Weapon allocation</size></b>"));
    assert!(intro.contains("the <b>optimal</b> loadout:"));

    let grid = blocks[1].as_table().unwrap();
    assert_eq!(grid.headers(), ["Colonist", "Weapon", "Notes"]);
    assert_eq!(grid.rows().len(), 3);
    assert_eq!(grid.rows()[1], ["Bob", "Assault rifle"]);

    let outro = blocks[2].as_text().unwrap();
    assert!(outro.contains("  \u{2022} Give Bob the <b>recon helmet</b>"));
    assert!(outro.contains("  \u{2022} Cara keeps her flak vest"));
    assert!(outro.contains("<color=#666666>"));
    assert!(outro.ends_with("Good luck!"));
}
