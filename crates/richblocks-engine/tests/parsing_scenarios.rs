use pretty_assertions::assert_eq;
use richblocks_engine::parsing::{DisplayBlock, parse, snapshot};

fn parse_checked(document: &str) -> Vec<DisplayBlock> {
    let blocks = parse(document);
    snapshot::invariants(document, &blocks);
    blocks
}

#[test]
fn scenario_bold_prose() {
    let blocks = parse_checked("Hello **world**");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].as_text(), Some("Hello <b>world</b>"));
}

#[test]
fn scenario_simple_table() {
    let blocks = parse_checked("| A | B |\n|---|---|\n| 1 | 2 |");
    assert_eq!(blocks.len(), 1);
    let grid = blocks[0].as_table().unwrap();
    assert_eq!(grid.headers(), ["A", "B"]);
    assert_eq!(grid.rows(), [vec!["1".to_string(), "2".to_string()]]);
}

#[test]
fn scenario_intro_table_outro() {
    let blocks = parse_checked("Intro\n\n| A | B |\n| 1 | 2 |\n\nOutro");
    insta::assert_snapshot!(snapshot::normalize(&blocks), @r#"
    Text "Intro"
    Table [A | B]
      [1 | 2]
    Text "Outro"
    "#);
}

#[test]
fn scenario_short_row() {
    let blocks = parse_checked("| A | B |\n| 1 |");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].as_table().unwrap().rows(), [vec!["1".to_string()]]);
}

#[test]
fn scenario_empty_input() {
    assert!(parse_checked("").is_empty());
}

#[test]
fn block_order_follows_the_document() {
    let document = "one\n| H1 |\n| a |\ntwo\n\n| H2 |\n|--|\n| b |\n\nthree";
    let blocks = parse_checked(document);
    insta::assert_snapshot!(snapshot::normalize(&blocks), @r#"
    Text "one"
    Table [H1]
      [a]
    Text "two"
    Table [H2]
      [b]
    Text "three"
    "#);
}

#[test]
fn every_table_is_valid() {
    let document = "|---|\n| : |\n\n| X |\n|:-:|\n|   |\n| y |\n\n| - | - |";
    let blocks = parse_checked(document);
    let tables: Vec<_> = blocks.iter().filter_map(DisplayBlock::as_table).collect();
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].headers(), ["X"]);
    assert_eq!(tables[0].rows(), [vec!["y".to_string()]]);
}

#[test]
fn headerless_run_is_not_merged_into_prose() {
    let blocks = parse_checked("before\n|---|\nafter");
    insta::assert_snapshot!(snapshot::normalize(&blocks), @r#"
    Text "before"
    Text "|---|"
    Text "after"
    "#);
}

#[test]
fn text_after_the_last_pipe_is_dropped() {
    let blocks = parse_checked("| A | B\n| 1 | 2");
    insta::assert_snapshot!(snapshot::normalize(&blocks), @r#"
    Table [A]
      [1]
    "#);
}

#[test]
fn blocks_serialize_for_dumping() {
    let blocks = parse("Hi\n| A |\n| 1 |");
    let value = serde_json::to_value(&blocks).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            { "text": "Hi" },
            { "table": { "headers": ["A"], "rows": [["1"]] } }
        ])
    );
}
