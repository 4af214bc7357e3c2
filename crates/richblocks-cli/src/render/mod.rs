pub mod surface;
pub mod wrap;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use richblocks_engine::{LayoutMetrics, TextStyle};

use crate::app::App;
use surface::BufferSurface;

/// Layout metrics in terminal cells.
///
/// Every box reserves its last row and column for a divider, so header and
/// row minimums are one line of text plus one divider row.
pub fn terminal_metrics() -> LayoutMetrics {
    LayoutMetrics {
        header_height: 2.0,
        min_row_height: 2.0,
        table_trailing: 0.0,
        cell_padding: 0.0,
        block_gap: 0.0,
    }
}

pub fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .title(app.title());
    let inner = block.inner(chunks[0]);
    f.render_widget(block, chunks[0]);

    app.set_viewport(inner.width, inner.height);
    let scroll = app.view().scroll();
    let metrics = *app.metrics();
    let (blocks, layout) = app.current_layout();

    let mut surface = BufferSurface::new(f.buffer_mut(), inner, scroll);
    layout.draw_visible(
        blocks,
        scroll..scroll + f32::from(inner.height),
        &mut surface,
        &metrics,
        TextStyle::default(),
    );

    let help_text = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k ↓/j: Scroll | "),
        Span::raw("PgUp/PgDn | "),
        Span::raw("g/G: Top/End | "),
        Span::raw("r: Reload"),
    ]);
    f.render_widget(Paragraph::new(help_text), chunks[1]);
}
