use serde::Serialize;

use super::cursor::Cursor;

/// Style in effect for a run of host markup text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunStyle {
    pub bold: bool,
    pub italic: bool,
    /// Font size from the innermost `<size=N>`.
    pub size: Option<u16>,
    /// Colour from the innermost `<color=...>`, verbatim (e.g. `#666666`).
    pub color: Option<String>,
}

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RichRun {
    pub text: String,
    pub style: RunStyle,
}

/// A recognised markup tag.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Tag<'a> {
    Bold,
    Italic,
    Size(u16),
    Color(&'a str),
}

impl<'a> Tag<'a> {
    /// Parses the inside of `<...>`. Returns the tag and whether it closes.
    fn parse(body: &'a str) -> Option<(Tag<'a>, bool)> {
        if let Some(name) = body.strip_prefix('/') {
            let tag = match name {
                "b" => Tag::Bold,
                "i" => Tag::Italic,
                "size" => Tag::Size(0),
                "color" => Tag::Color(""),
                _ => return None,
            };
            return Some((tag, true));
        }
        let tag = match body {
            "b" => Tag::Bold,
            "i" => Tag::Italic,
            _ => match body.split_once('=')? {
                ("size", n) => Tag::Size(n.trim().parse().ok()?),
                ("color", c) if !c.trim().is_empty() => Tag::Color(c.trim()),
                _ => return None,
            },
        };
        Some((tag, false))
    }
}

/// Open tags while scanning.
#[derive(Default)]
struct StyleStack {
    bold: usize,
    italic: usize,
    sizes: Vec<u16>,
    colors: Vec<String>,
}

impl StyleStack {
    fn apply(&mut self, tag: Tag<'_>, closing: bool) {
        match (tag, closing) {
            (Tag::Bold, false) => self.bold += 1,
            (Tag::Bold, true) => self.bold = self.bold.saturating_sub(1),
            (Tag::Italic, false) => self.italic += 1,
            (Tag::Italic, true) => self.italic = self.italic.saturating_sub(1),
            (Tag::Size(n), false) => self.sizes.push(n),
            (Tag::Size(_), true) => {
                self.sizes.pop();
            }
            (Tag::Color(c), false) => self.colors.push(c.to_string()),
            (Tag::Color(_), true) => {
                self.colors.pop();
            }
        }
    }

    fn current(&self) -> RunStyle {
        RunStyle {
            bold: self.bold > 0,
            italic: self.italic > 0,
            size: self.sizes.last().copied(),
            color: self.colors.last().cloned(),
        }
    }
}

/// Parses host rich-text markup into styled runs.
///
/// Recognises `<b>`, `<i>`, `<size=N>` and `<color=...>` with their closing
/// tags. Unknown or malformed tags are kept as literal text; closing tags
/// without a matching opener are dropped. Adjacent runs with the same style
/// are merged and empty runs are never produced.
pub fn parse_rich(text: &str) -> Vec<RichRun> {
    let mut cur = Cursor::new(text);
    let mut stack = StyleStack::default();
    let mut out: Vec<RichRun> = vec![];
    let mut text_start = cur.pos();

    // Helper to flush accumulated text under the current style
    fn flush_text(out: &mut Vec<RichRun>, text: &str, style: RunStyle) {
        if text.is_empty() {
            return;
        }
        match out.last_mut() {
            Some(last) if last.style == style => last.text.push_str(text),
            _ => out.push(RichRun {
                text: text.to_string(),
                style,
            }),
        }
    }

    while !cur.eof() {
        if cur.peek() == Some(b'<') {
            let tag_start = cur.pos();
            let saved = cur.clone();
            cur.bump();
            let parsed = cur
                .take_until(b'>')
                .filter(|body| !body.contains('<'))
                .and_then(Tag::parse);
            if let Some((tag, closing)) = parsed {
                flush_text(&mut out, &text[text_start..tag_start], stack.current());
                stack.apply(tag, closing);
                text_start = cur.pos();
                continue;
            }
            // Not a tag we know: treat `<` as literal text
            cur = saved;
        }
        cur.bump();
    }

    flush_text(&mut out, &text[text_start..], stack.current());
    out
}

/// Returns only the visible text of host markup.
pub fn strip_tags(text: &str) -> String {
    parse_rich(text).into_iter().map(|run| run.text).collect()
}
