use crate::parsing::TableGrid;

use super::{
    measure::Measure,
    metrics::LayoutMetrics,
    surface::{Anchor, DrawSurface, Rect, TextStyle},
};

/// Sizes of one table at one width.
///
/// Sizing and drawing both go through [`TableLayout::compute`], so a row is
/// always drawn at the height it was sized at.
#[derive(Debug, Clone, PartialEq)]
pub struct TableLayout {
    /// Width the layout was computed for.
    pub width: f32,
    /// `width / column_count`.
    pub column_width: f32,
    /// Header count of the grid.
    pub column_count: usize,
    /// One height per data row, in order.
    pub row_heights: Vec<f32>,
    /// Header + rows + trailing space.
    pub height: f32,
}

impl TableLayout {
    pub fn compute<M: Measure + ?Sized>(
        grid: &TableGrid,
        width: f32,
        measure: &M,
        metrics: &LayoutMetrics,
    ) -> Self {
        let column_count = grid.column_count();
        if column_count == 0 {
            return Self {
                width,
                column_width: 0.0,
                column_count,
                row_heights: vec![],
                height: 0.0,
            };
        }

        let column_width = width / column_count as f32;
        let row_heights: Vec<f32> = grid
            .rows()
            .iter()
            .map(|row| Self::row_height(row, column_count, column_width, measure, metrics))
            .collect();

        let height = metrics.header_height
            + row_heights.iter().sum::<f32>()
            + metrics.table_trailing;

        Self {
            width,
            column_width,
            column_count,
            row_heights,
            height,
        }
    }

    /// Tallest cell of `row`, but at least `min_row_height`.
    ///
    /// Cells past `column_count` are ignored; missing cells add nothing.
    pub fn row_height<M: Measure + ?Sized>(
        row: &[String],
        column_count: usize,
        column_width: f32,
        measure: &M,
        metrics: &LayoutMetrics,
    ) -> f32 {
        row.iter()
            .take(column_count)
            .map(|cell| measure.measure(cell, column_width))
            .fold(metrics.min_row_height, f32::max)
    }

    fn cell_rect(&self, origin: Rect, column: usize, y: f32, height: f32) -> Rect {
        Rect::new(
            origin.x + column as f32 * self.column_width,
            y,
            self.column_width,
            height,
        )
    }

    /// Draws the grid top-down from `rect`'s top-left corner.
    ///
    /// `rect.width` should equal the width this layout was computed at.
    pub fn draw<S: DrawSurface + ?Sized>(
        &self,
        grid: &TableGrid,
        rect: Rect,
        surface: &mut S,
        metrics: &LayoutMetrics,
        style: TextStyle,
    ) {
        if self.column_count == 0 {
            return;
        }

        let header_style = style.with_anchor(Anchor::MiddleCenter);
        let cell_style = style.with_anchor(Anchor::UpperLeft);
        let mut y = rect.y;

        for (i, header) in grid.headers().iter().enumerate() {
            let cell = self.cell_rect(rect, i, y, metrics.header_height);
            surface.highlight(cell);
            surface.label(cell, header, header_style);
            surface.line_vertical(cell.right(), cell.y, cell.height);
        }
        y += metrics.header_height;
        surface.line_horizontal(rect.x, y, rect.width);

        for (r, row_height) in self.row_heights.iter().copied().enumerate() {
            for column in 0..self.column_count {
                let cell = self.cell_rect(rect, column, y, row_height);
                let text = grid.cell(r, column);
                if !text.is_empty() {
                    surface.label(cell.contracted_by(metrics.cell_padding), text, cell_style);
                }
                surface.line_vertical(cell.right(), cell.y, row_height);
            }
            y += row_height;
            surface.line_horizontal(rect.x, y, rect.width);
        }
    }
}
