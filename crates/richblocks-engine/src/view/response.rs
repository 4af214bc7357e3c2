use crate::parsing::{DisplayBlock, parse};

use super::mailbox::Mailbox;

/// What the render thread currently shows: the last document, its blocks and
/// the scroll offset into them.
#[derive(Debug, Default)]
pub struct ResponseView {
    raw: String,
    blocks: Vec<DisplayBlock>,
    scroll: f32,
    generation: u64,
}

impl ResponseView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains `mailbox` and shows its document, if one is pending.
    ///
    /// Call once per draw cycle. Returns true when the blocks changed.
    pub fn poll(&mut self, mailbox: &Mailbox<String>) -> bool {
        match mailbox.take() {
            Some(document) => {
                self.replace(document);
                true
            }
            None => false,
        }
    }

    /// Parses `document`, replaces the shown blocks and scrolls to the top.
    pub fn replace(&mut self, document: String) {
        self.blocks = parse(&document);
        self.raw = document;
        self.scroll = 0.0;
        self.generation += 1;
        log::debug!(
            "showing document #{} ({} blocks)",
            self.generation,
            self.blocks.len()
        );
    }

    pub fn blocks(&self) -> &[DisplayBlock] {
        &self.blocks
    }

    /// The unparsed document text, e.g. for copying.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Offset of the viewport's top into the content.
    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    /// How many documents have been shown; changes on every replace.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Moves the viewport by `delta`, keeping it within the content.
    pub fn scroll_by(&mut self, delta: f32, content_height: f32, viewport_height: f32) {
        let max = Self::max_scroll(content_height, viewport_height);
        self.scroll = (self.scroll + delta).clamp(0.0, max);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0.0;
    }

    pub fn scroll_to_end(&mut self, content_height: f32, viewport_height: f32) {
        self.scroll = Self::max_scroll(content_height, viewport_height);
    }

    fn max_scroll(content_height: f32, viewport_height: f32) -> f32 {
        (content_height - viewport_height).max(0.0)
    }
}
