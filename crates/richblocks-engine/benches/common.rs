// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_response(sections: usize) -> String {
    let mut content = String::new();

    for section in 0..sections {
        content.push_str(&format!("## Section {section}\n\n"));
        content.push_str(
            "Some **bold** prose with *emphasis* and a list:\n* first item\n* second item\n\n",
        );
        content.push_str("| Name | Role | Notes |\n|------|:----:|-------|\n");
        for row in 0..8 {
            content.push_str(&format!(
                "| **Row {row}** | worker | notes for row {row} of section {section} |\n"
            ));
        }
        content.push_str("| short |\n\n---\n\n");
    }

    content
}

/// Roughly one unit per char at 8 wide, 18 high per wrapped line.
#[allow(dead_code)]
pub fn char_measure(text: &str, width: f32) -> f32 {
    let chars = text.chars().count() as f32;
    if chars == 0.0 {
        return 0.0;
    }
    let per_line = (width / 8.0).floor().max(1.0);
    (chars / per_line).ceil() * 18.0
}
