pub mod layout;
pub mod parsing;
pub mod view;

// Re-export key types for easier usage
pub use layout::{
    DocumentLayout, DrawSurface, LayoutMetrics, Measure, Rect, TableLayout, TextStyle,
};
pub use parsing::{DisplayBlock, TableGrid, TextContent, parse};
pub use view::{Mailbox, ResponseView};
