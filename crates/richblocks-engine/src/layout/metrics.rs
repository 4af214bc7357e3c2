/// Fixed sizes used when laying out blocks.
///
/// Units are whatever the host's [`Measure`](super::Measure) returns. The
/// defaults are pixel values for a GUI host; a terminal host passes cell
/// counts instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    /// Height of a table's header row.
    pub header_height: f32,
    /// Smallest height of a table data row.
    pub min_row_height: f32,
    /// Extra space added below every table.
    pub table_trailing: f32,
    /// Inset of data-cell labels inside their cell.
    pub cell_padding: f32,
    /// Vertical gap between consecutive blocks.
    pub block_gap: f32,
}

impl LayoutMetrics {
    pub const HEADER_HEIGHT: f32 = 30.0;
    pub const MIN_ROW_HEIGHT: f32 = 24.0;
    pub const TABLE_TRAILING: f32 = 10.0;
    pub const CELL_PADDING: f32 = 4.0;
    pub const BLOCK_GAP: f32 = 10.0;
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            header_height: Self::HEADER_HEIGHT,
            min_row_height: Self::MIN_ROW_HEIGHT,
            table_trailing: Self::TABLE_TRAILING,
            cell_padding: Self::CELL_PADDING,
            block_gap: Self::BLOCK_GAP,
        }
    }
}
