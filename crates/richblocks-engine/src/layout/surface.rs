/// An axis-aligned rectangle in host units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Shrinks the rectangle by `margin` on every side, never below zero size.
    #[must_use]
    pub fn contracted_by(self, margin: f32) -> Self {
        let width = (self.width - 2.0 * margin).max(0.0);
        let height = (self.height - 2.0 * margin).max(0.0);
        Self {
            x: self.x + margin,
            y: self.y + margin,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Font size class. Fixed for a whole layout and draw cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Font {
    Tiny,
    #[default]
    Small,
    Medium,
}

/// Where a label sits inside its rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    #[default]
    UpperLeft,
    MiddleCenter,
}

/// Text style passed explicitly to every draw call.
///
/// Drawing code derives modified copies (e.g. centred headers) instead of
/// changing shared state, so nothing needs restoring afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub font: Font,
    pub anchor: Anchor,
}

impl TextStyle {
    #[must_use]
    pub fn with_anchor(self, anchor: Anchor) -> Self {
        Self { anchor, ..self }
    }
}

/// Host sink for drawing. The layout engine never inspects what it draws.
pub trait DrawSurface {
    /// Draws `text` (host rich-text markup) wrapped inside `rect`.
    fn label(&mut self, rect: Rect, text: &str, style: TextStyle);
    /// Fills `rect` with the highlight background.
    fn highlight(&mut self, rect: Rect);
    /// Draws a vertical divider of `length` starting at (`x`, `y`).
    fn line_vertical(&mut self, x: f32, y: f32, length: f32);
    /// Draws a horizontal divider of `length` starting at (`x`, `y`).
    fn line_horizontal(&mut self, x: f32, y: f32, length: f32);
}
