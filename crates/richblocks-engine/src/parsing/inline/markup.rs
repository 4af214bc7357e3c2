use std::{borrow::Cow, sync::OnceLock};

use regex::Regex;

/// Font size used for heading lines.
pub const HEADING_SIZE: u16 = 16;
/// Colour of the horizontal rule glyph line.
pub const RULE_COLOR: &str = "#666666";
/// Number of box-drawing glyphs in a horizontal rule.
pub const RULE_WIDTH: usize = 40;
/// What a bullet marker is replaced with.
pub const BULLET: &str = "  \u{2022} ";

/// Rewrites markdown constructs in a prose run into host rich-text markup.
///
/// Passes run in order over the whole text: headings, bold, italics,
/// bullets, horizontal rules. Input matching none of them is returned as is.
pub fn transform(raw: &str) -> String {
    let text = headings(raw);
    let text = bold(&text);
    let text = italics(&text);
    let text = bullets(&text);
    rules(&text)
}

fn heading_regex() -> &'static Regex {
    static HEADING: OnceLock<Regex> = OnceLock::new();
    HEADING.get_or_init(|| Regex::new(r"(?m)^#{1,6}[ \t]?(.*)$").expect("Invalid heading regex"))
}

fn bold_regex() -> &'static Regex {
    static BOLD: OnceLock<Regex> = OnceLock::new();
    BOLD.get_or_init(|| Regex::new(r"\*\*(.+?)\*\*").expect("Invalid bold regex"))
}

fn bullet_regex() -> &'static Regex {
    static BULLET_RE: OnceLock<Regex> = OnceLock::new();
    BULLET_RE.get_or_init(|| Regex::new(r"(?m)^[ \t]*[*\-][ \t]+").expect("Invalid bullet regex"))
}

fn rule_regex() -> &'static Regex {
    static RULE: OnceLock<Regex> = OnceLock::new();
    RULE.get_or_init(|| {
        Regex::new(r"(?m)^(?:-{3,}|\*{3,}|_{3,})[ \t]*$").expect("Invalid rule regex")
    })
}

/// `## Title` becomes a blank line followed by bold, enlarged text.
pub fn headings(text: &str) -> String {
    let replacement = format!("\n<b><size={HEADING_SIZE}>${{1}}</size></b>");
    heading_regex()
        .replace_all(text, replacement.as_str())
        .into_owned()
}

/// `**text**` becomes `<b>text</b>`. Spans never cross a line break.
///
/// Rule lines such as `*****` are left for [`rules`].
pub fn bold(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            if rule_regex().is_match(line) {
                Cow::Borrowed(line)
            } else {
                bold_regex().replace_all(line, "<b>${1}</b>")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `*text*` becomes `<i>text</i>`, line by line.
///
/// A delimiter is a `*` with no `*` on either side. The opener must be
/// followed, and the closer preceded, by a non-whitespace character, which
/// keeps `* item` bullet markers out of italic spans.
pub fn italics(text: &str) -> String {
    text.split('\n')
        .map(italic_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn italic_line(line: &str) -> String {
    let b = line.as_bytes();
    let lone = |i: usize| {
        b[i] == b'*' && (i == 0 || b[i - 1] != b'*') && b.get(i + 1) != Some(&b'*')
    };
    let opens = |i: usize| lone(i) && b.get(i + 1).is_some_and(|n| !n.is_ascii_whitespace());
    let closes = |j: usize| lone(j) && !b[j - 1].is_ascii_whitespace();

    let mut out = String::with_capacity(line.len());
    let mut last = 0;
    let mut i = 0;
    while i < b.len() {
        if opens(i)
            && let Some(j) = (i + 2..b.len()).find(|&j| closes(j))
        {
            out.push_str(&line[last..i]);
            out.push_str("<i>");
            out.push_str(&line[i + 1..j]);
            out.push_str("</i>");
            last = j + 1;
            i = j + 1;
            continue;
        }
        i += 1;
    }
    out.push_str(&line[last..]);
    out
}

/// Leading `*` or `-` markers followed by whitespace become an indented bullet glyph.
pub fn bullets(text: &str) -> String {
    bullet_regex().replace_all(text, BULLET).into_owned()
}

/// Lines of three or more `-`, `*` or `_` become a grey separator line.
pub fn rules(text: &str) -> String {
    let replacement = format!(
        "<color={RULE_COLOR}>{}</color>",
        "\u{2500}".repeat(RULE_WIDTH)
    );
    rule_regex()
        .replace_all(text, regex::NoExpand(&replacement))
        .into_owned()
}
