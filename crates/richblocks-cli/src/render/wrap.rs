//! Word wrapping of rich-text markup into terminal lines.
//!
//! Both [`measure`] and the buffer surface's labels go through [`wrap`] with
//! the same [`wrap_width`], so a label always fits the height measured for it.

use ratatui::style::{Color, Modifier, Style};
use richblocks_engine::parsing::inline::{RunStyle, parse_rich};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// One wrapped terminal line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyledLine {
    pub spans: Vec<(String, Style)>,
    /// Display width in cells.
    pub width: usize,
}

impl StyledLine {
    fn push(&mut self, text: &str, style: Style) {
        self.width += text.width();
        match self.spans.last_mut() {
            Some((last, last_style)) if *last_style == style => last.push_str(text),
            _ => self.spans.push((text.to_string(), style)),
        }
    }
}

/// Columns available for text in a box `width` cells wide.
///
/// The rightmost column is kept for the divider drawn on the box's edge.
pub fn wrap_width(width: f32) -> usize {
    (width.max(0.0).floor() as usize).saturating_sub(1).max(1)
}

/// Height in rows of `text` in a box `width` cells wide: its wrapped lines
/// plus the bottom row kept for a divider. Empty text takes no rows.
pub fn measure(text: &str, width: f32) -> f32 {
    let lines = wrap(text, wrap_width(width)).len();
    if lines == 0 { 0.0 } else { (lines + 1) as f32 }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Piece {
    Word,
    Space,
    Newline,
}

fn piece_of(c: char) -> Piece {
    match c {
        '\n' => Piece::Newline,
        c if c.is_whitespace() => Piece::Space,
        _ => Piece::Word,
    }
}

/// Splits styled runs into pieces of one kind. Words that change style midway
/// become consecutive word pieces and are kept together when wrapping.
fn pieces(text: &str) -> Vec<(Piece, String, Style)> {
    let mut out: Vec<(Piece, String, Style)> = Vec::new();
    for run in parse_rich(text) {
        let style = run_style(&run.style);
        for c in run.text.chars() {
            let kind = piece_of(c);
            match out.last_mut() {
                Some((k, s, st)) if *k == kind && *st == style && kind != Piece::Newline => {
                    s.push(c)
                }
                _ => out.push((kind, c.to_string(), style)),
            }
        }
    }
    out
}

/// Greedy word wrap of host markup at `width` columns.
///
/// Explicit newlines always break, keeping the indentation that follows them.
/// Spaces at a wrap point are dropped. Words longer than a line are split.
pub fn wrap(text: &str, width: usize) -> Vec<StyledLine> {
    let width = width.max(1);
    let pieces = pieces(text);
    if pieces.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut line = StyledLine::default();
    // Set right after an explicit line start, where leading spaces are kept.
    let mut line_start = true;
    let mut pending_space: Vec<(String, Style)> = Vec::new();

    let mut i = 0;
    while i < pieces.len() {
        match pieces[i].0 {
            Piece::Newline => {
                lines.push(std::mem::take(&mut line));
                pending_space.clear();
                line_start = true;
                i += 1;
            }
            Piece::Space => {
                let (_, text, style) = &pieces[i];
                if line_start {
                    line.push(text, *style);
                } else {
                    pending_space.push((text.clone(), *style));
                }
                i += 1;
            }
            Piece::Word => {
                let end = pieces[i..]
                    .iter()
                    .position(|(k, _, _)| *k != Piece::Word)
                    .map_or(pieces.len(), |n| i + n);
                let word = &pieces[i..end];
                let word_width: usize = word.iter().map(|(_, s, _)| s.width()).sum();
                let space_width: usize = pending_space.iter().map(|(s, _)| s.width()).sum();

                if line.width + space_width + word_width <= width {
                    for (s, style) in pending_space.drain(..) {
                        line.push(&s, style);
                    }
                } else {
                    pending_space.clear();
                    if line.width > 0 {
                        lines.push(std::mem::take(&mut line));
                    }
                }

                for (_, s, style) in word {
                    for c in s.chars() {
                        let w = c.width().unwrap_or(0);
                        if line.width + w > width && line.width > 0 {
                            lines.push(std::mem::take(&mut line));
                        }
                        line.push(c.encode_utf8(&mut [0; 4]), *style);
                    }
                }
                line_start = false;
                i = end;
            }
        }
    }
    lines.push(line);
    lines
}

/// Terminal style for a markup run. Sizes above body text render bold.
pub fn run_style(style: &RunStyle) -> Style {
    let mut out = Style::default();
    if style.bold || style.size.is_some_and(|size| size > 14) {
        out = out.add_modifier(Modifier::BOLD);
    }
    if style.italic {
        out = out.add_modifier(Modifier::ITALIC);
    }
    if let Some(color) = style.color.as_deref().and_then(|c| c.parse::<Color>().ok()) {
        out = out.fg(color);
    }
    out
}
