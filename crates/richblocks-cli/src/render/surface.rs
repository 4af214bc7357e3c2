use ratatui::{
    buffer::Buffer,
    layout::Rect as Area,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use richblocks_engine::{
    DrawSurface, Rect, TextStyle,
    layout::{Anchor, Font},
};

use super::wrap::{wrap, wrap_width};

const HIGHLIGHT: Color = Color::DarkGray;

/// Draws layout output into a ratatui buffer, one unit per terminal cell.
///
/// Content coordinates are shifted up by `scroll` and clipped to `area`.
/// Divider lines sit on the last column or row of the box they close, which
/// [`measure`](super::wrap::measure) keeps free of text.
pub struct BufferSurface<'a> {
    buf: &'a mut Buffer,
    area: Area,
    scroll: f32,
}

impl<'a> BufferSurface<'a> {
    pub fn new(buf: &'a mut Buffer, area: Area, scroll: f32) -> Self {
        Self { buf, area, scroll }
    }

    fn column(&self, x: f32) -> i32 {
        i32::from(self.area.x) + x.round() as i32
    }

    fn row(&self, y: f32) -> i32 {
        i32::from(self.area.y) + (y - self.scroll).round() as i32
    }

    fn contains(&self, column: i32, row: i32) -> bool {
        column >= i32::from(self.area.left())
            && column < i32::from(self.area.right())
            && row >= i32::from(self.area.top())
            && row < i32::from(self.area.bottom())
    }

    /// Sets one line-drawing cell, joining crossing lines.
    fn put_line(&mut self, column: i32, row: i32, symbol: &str) {
        if !self.contains(column, row) {
            return;
        }
        let cell = &mut self.buf[(column as u16, row as u16)];
        let joined = match (cell.symbol(), symbol) {
            ("│", "─") | ("─", "│") | ("┼", _) => "┼",
            _ => symbol,
        };
        cell.set_symbol(joined);
    }
}

fn font_style(font: Font) -> Style {
    match font {
        Font::Tiny => Style::default().add_modifier(Modifier::DIM),
        Font::Small => Style::default(),
        Font::Medium => Style::default().add_modifier(Modifier::BOLD),
    }
}

impl DrawSurface for BufferSurface<'_> {
    fn label(&mut self, rect: Rect, text: &str, style: TextStyle) {
        let width = wrap_width(rect.width);
        let lines = wrap(text, width);
        // bottom row belongs to the divider
        let rows = (rect.height.round() as i32 - 1).max(1) as usize;
        let base = font_style(style.font);

        let top = match style.anchor {
            Anchor::UpperLeft => 0,
            Anchor::MiddleCenter => rows.saturating_sub(lines.len()) / 2,
        };
        let first_row = self.row(rect.y) + top as i32;
        let left = self.column(rect.x);

        for (i, line) in lines.iter().take(rows).enumerate() {
            let row = first_row + i as i32;
            let indent = match style.anchor {
                Anchor::UpperLeft => 0,
                Anchor::MiddleCenter => width.saturating_sub(line.width) / 2,
            };
            let column = left + indent as i32;
            if !self.contains(column, row) {
                continue;
            }
            let spans: Vec<Span> = line
                .spans
                .iter()
                .map(|(s, st)| Span::styled(s.as_str(), base.patch(*st)))
                .collect();
            let max_width = (i32::from(self.area.right()) - column) as u16;
            self.buf
                .set_line(column as u16, row as u16, &Line::from(spans), max_width);
        }
    }

    fn highlight(&mut self, rect: Rect) {
        let left = self.column(rect.x).max(i32::from(self.area.left()));
        let right = self.column(rect.right()).min(i32::from(self.area.right()));
        let top = self.row(rect.y).max(i32::from(self.area.top()));
        let bottom = self.row(rect.bottom()).min(i32::from(self.area.bottom()));
        if left >= right || top >= bottom {
            return;
        }
        let area = Area::new(
            left as u16,
            top as u16,
            (right - left) as u16,
            (bottom - top) as u16,
        );
        self.buf.set_style(area, Style::default().bg(HIGHLIGHT));
    }

    fn line_vertical(&mut self, x: f32, y: f32, length: f32) {
        let column = self.column(x) - 1;
        for row in self.row(y)..self.row(y + length) {
            self.put_line(column, row, "│");
        }
    }

    fn line_horizontal(&mut self, x: f32, y: f32, length: f32) {
        let row = self.row(y) - 1;
        for column in self.column(x)..self.column(x + length) {
            self.put_line(column, row, "─");
        }
    }
}
