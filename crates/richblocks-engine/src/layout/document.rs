use std::ops::Range;

use crate::parsing::DisplayBlock;

use super::{
    measure::Measure,
    metrics::LayoutMetrics,
    surface::{DrawSurface, Rect, TextStyle},
    table::TableLayout,
};

/// Height of one block at `width`.
pub fn block_height<M: Measure + ?Sized>(
    block: &DisplayBlock,
    width: f32,
    measure: &M,
    metrics: &LayoutMetrics,
) -> f32 {
    match block {
        DisplayBlock::Text(text) => measure.measure(text.as_str(), width),
        DisplayBlock::Table(grid) => TableLayout::compute(grid, width, measure, metrics).height,
    }
}

/// Draws one block into `rect`, sizing table rows with the same `measure`.
pub fn draw_block<S, M>(
    block: &DisplayBlock,
    rect: Rect,
    surface: &mut S,
    measure: &M,
    metrics: &LayoutMetrics,
    style: TextStyle,
) where
    S: DrawSurface + ?Sized,
    M: Measure + ?Sized,
{
    match block {
        DisplayBlock::Text(text) => surface.label(rect, text.as_str(), style),
        DisplayBlock::Table(grid) => {
            TableLayout::compute(grid, rect.width, measure, metrics)
                .draw(grid, rect, surface, metrics, style);
        }
    }
}

/// Where one block sits in a [`DocumentLayout`].
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedBlock {
    /// Offset of the block's top from the top of the content.
    pub y: f32,
    pub height: f32,
    /// Row sizes for table blocks, reused when drawing.
    pub table: Option<TableLayout>,
}

/// Blocks stacked top-to-bottom at one width.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentLayout {
    pub width: f32,
    /// One entry per block, in block order.
    pub placements: Vec<PlacedBlock>,
    /// Sum of block heights plus a gap between consecutive blocks.
    pub total_height: f32,
}

impl DocumentLayout {
    pub fn compute<M: Measure + ?Sized>(
        blocks: &[DisplayBlock],
        width: f32,
        measure: &M,
        metrics: &LayoutMetrics,
    ) -> Self {
        let mut placements = Vec::with_capacity(blocks.len());
        let mut y = 0.0;

        for (i, block) in blocks.iter().enumerate() {
            if i > 0 {
                y += metrics.block_gap;
            }
            let (height, table) = match block {
                DisplayBlock::Text(text) => (measure.measure(text.as_str(), width), None),
                DisplayBlock::Table(grid) => {
                    let table = TableLayout::compute(grid, width, measure, metrics);
                    (table.height, Some(table))
                }
            };
            placements.push(PlacedBlock { y, height, table });
            y += height;
        }

        Self {
            width,
            placements,
            total_height: y,
        }
    }

    /// Indices of blocks overlapping the content range `top..bottom`.
    pub fn visible(&self, top: f32, bottom: f32) -> impl Iterator<Item = usize> + '_ {
        self.placements
            .iter()
            .enumerate()
            .filter(move |(_, p)| p.y < bottom && p.y + p.height > top)
            .map(|(i, _)| i)
    }

    /// Draws every block with its top-left at (`x`, `y` + placement offset).
    ///
    /// `blocks` must be the slice this layout was computed from.
    pub fn draw<S: DrawSurface + ?Sized>(
        &self,
        blocks: &[DisplayBlock],
        x: f32,
        y: f32,
        surface: &mut S,
        metrics: &LayoutMetrics,
        style: TextStyle,
    ) {
        for (block, placed) in blocks.iter().zip(&self.placements) {
            let rect = Rect::new(x, y + placed.y, self.width, placed.height);
            draw_placed(block, placed, rect, surface, metrics, style);
        }
    }

    /// Draws only the blocks overlapping `viewport`, in content coordinates.
    ///
    /// Blocks land at their placement offsets as if the origin were (0, 0);
    /// the surface is expected to translate and clip.
    pub fn draw_visible<S: DrawSurface + ?Sized>(
        &self,
        blocks: &[DisplayBlock],
        viewport: Range<f32>,
        surface: &mut S,
        metrics: &LayoutMetrics,
        style: TextStyle,
    ) {
        for i in self.visible(viewport.start, viewport.end) {
            let (Some(block), Some(placed)) = (blocks.get(i), self.placements.get(i)) else {
                continue;
            };
            let rect = Rect::new(0.0, placed.y, self.width, placed.height);
            draw_placed(block, placed, rect, surface, metrics, style);
        }
    }
}

fn draw_placed<S: DrawSurface + ?Sized>(
    block: &DisplayBlock,
    placed: &PlacedBlock,
    rect: Rect,
    surface: &mut S,
    metrics: &LayoutMetrics,
    style: TextStyle,
) {
    match (block, &placed.table) {
        (DisplayBlock::Text(text), _) => surface.label(rect, text.as_str(), style),
        (DisplayBlock::Table(grid), Some(table)) => {
            table.draw(grid, rect, surface, metrics, style);
        }
        (DisplayBlock::Table(_), None) => {
            log::warn!("table block at y={} has no table layout; skipping draw", placed.y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse;

    fn one_line(_: &str, _: f32) -> f32 {
        20.0
    }

    #[test]
    fn empty_document_has_zero_height() {
        let layout = DocumentLayout::compute(&[], 300.0, &one_line, &LayoutMetrics::default());
        assert!(layout.placements.is_empty());
        assert_eq!(layout.total_height, 0.0);
    }

    #[test]
    fn blocks_are_stacked_with_gaps() {
        let blocks = parse("Intro\n\n| A | B |\n| 1 | 2 |\n\nOutro");
        let metrics = LayoutMetrics::default();
        let layout = DocumentLayout::compute(&blocks, 300.0, &one_line, &metrics);

        let ys: Vec<f32> = layout.placements.iter().map(|p| p.y).collect();
        // text 20, gap 10, table 30 + 24 + 10, gap 10, text 20
        assert_eq!(ys, vec![0.0, 30.0, 104.0]);
        assert_eq!(layout.total_height, 124.0);
        assert!(layout.placements[1].table.is_some());
    }

    #[test]
    fn block_height_matches_placement() {
        let blocks = parse("x\n| A |\n| 1 |");
        let metrics = LayoutMetrics::default();
        let layout = DocumentLayout::compute(&blocks, 120.0, &one_line, &metrics);
        for (block, placed) in blocks.iter().zip(&layout.placements) {
            assert_eq!(block_height(block, 120.0, &one_line, &metrics), placed.height);
        }
    }

    #[test]
    fn visible_blocks() {
        let blocks = parse("a\n| A |\n| 1 |\nb");
        let layout = DocumentLayout::compute(&blocks, 100.0, &one_line, &LayoutMetrics::default());
        // a: 0..20, table: 30..94, b: 104..124
        assert_eq!(layout.visible(0.0, 25.0).collect::<Vec<_>>(), vec![0]);
        assert_eq!(layout.visible(25.0, 100.0).collect::<Vec<_>>(), vec![1]);
        assert_eq!(layout.visible(90.0, 200.0).collect::<Vec<_>>(), vec![1, 2]);
    }
}
