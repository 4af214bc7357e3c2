//! # View State
//!
//! The hand-off between a background producer of documents and the render
//! thread that displays them.
//!
//! - **`mailbox`**: `Mailbox<T>`, a single-slot, last-write-wins handoff
//! - **`response`**: `ResponseView`, the render thread's parsed blocks and scroll offset

pub mod mailbox;
pub mod response;

pub use mailbox::Mailbox;
pub use response::ResponseView;
