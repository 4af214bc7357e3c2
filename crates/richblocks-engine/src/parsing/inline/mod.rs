//! # Inline Markup
//!
//! Two directions over the host's rich-text markup (`<b>`, `<i>`, `<size=N>`,
//! `<color=#rrggbb>`):
//!
//! - **`markup`**: rewrites the small markdown subset found in generated prose
//!   (headings, bold, italics, bullets, horizontal rules) into host markup.
//!   Ordered passes over the whole run; bold is resolved before italics so
//!   `***` runs are not split wrongly.
//! - **`rich`**: reads host markup back into styled [`RichRun`]s for hosts that
//!   do not understand the tags natively (the terminal viewer, measurement).
//!
//! ## Modules
//!
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with position tracking
//! - **`markup`**: `transform()` and its individual passes
//! - **`rich`**: `parse_rich()`, `strip_tags()`, `RichRun`, `RunStyle`
//!
//! Both directions are best effort: anything unrecognised is kept as literal
//! text.

pub mod cursor;
pub mod markup;
pub mod rich;

pub use markup::transform;
pub use rich::{RichRun, RunStyle, parse_rich, strip_tags};
