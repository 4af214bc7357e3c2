pub mod prose;
pub mod table;

pub use prose::Prose;
pub use table::Table;
