use crossterm::event::KeyCode;
use richblocks_engine::{DisplayBlock, DocumentLayout, LayoutMetrics, Mailbox, ResponseView};
use std::{
    fs,
    path::PathBuf,
    sync::Arc,
    thread::{self, JoinHandle},
};

use crate::render::wrap::measure;

/// Where the shown document comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    File(PathBuf),
    Stdin,
}

impl Source {
    fn label(&self) -> String {
        match self {
            Source::File(path) => path.display().to_string(),
            Source::Stdin => "<stdin>".to_string(),
        }
    }
}

pub struct App {
    source: Source,
    mailbox: Arc<Mailbox<String>>,
    view: ResponseView,
    metrics: LayoutMetrics,
    layout: DocumentLayout,
    /// Document generation and width `layout` was computed for.
    layout_key: Option<(u64, u16)>,
    viewport_width: u16,
    viewport_height: u16,
}

impl App {
    pub fn new(source: Source, metrics: LayoutMetrics) -> Self {
        Self {
            source,
            mailbox: Arc::new(Mailbox::new()),
            view: ResponseView::new(),
            metrics,
            layout: DocumentLayout::compute(&[], 0.0, &measure, &metrics),
            layout_key: None,
            viewport_width: 0,
            viewport_height: 0,
        }
    }

    /// Handle for producers that deliver documents from other threads.
    pub fn mailbox(&self) -> Arc<Mailbox<String>> {
        Arc::clone(&self.mailbox)
    }

    pub fn view(&self) -> &ResponseView {
        &self.view
    }

    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    pub fn title(&self) -> String {
        format!(" {} #{} ", self.source.label(), self.view.generation())
    }

    /// Picks up a newly delivered document. Call once per frame.
    pub fn poll(&mut self) -> bool {
        self.view.poll(&self.mailbox)
    }

    /// Reads the source file on a background thread and posts the result.
    ///
    /// Read failures are posted as prose so they show up in the viewer.
    pub fn reload(&self) -> Option<JoinHandle<()>> {
        let Source::File(path) = &self.source else {
            log::info!("stdin cannot be reloaded");
            return None;
        };
        let path = path.clone();
        let mailbox = self.mailbox();
        log::info!("reloading {}", path.display());

        Some(thread::spawn(move || {
            let document = match fs::read_to_string(&path) {
                Ok(document) => document,
                Err(e) => {
                    log::warn!("failed to read {}: {e}", path.display());
                    format!("Error reading {}: {e}", path.display())
                }
            };
            mailbox.post(document);
        }))
    }

    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.viewport_width = width;
        self.viewport_height = height;
        self.clamp_scroll();
    }

    /// Blocks of the shown document with their layout at the viewport width.
    pub fn current_layout(&mut self) -> (&[DisplayBlock], &DocumentLayout) {
        self.refresh_layout();
        (self.view.blocks(), &self.layout)
    }

    fn refresh_layout(&mut self) {
        let key = (self.view.generation(), self.viewport_width);
        if self.layout_key != Some(key) {
            self.layout = DocumentLayout::compute(
                self.view.blocks(),
                f32::from(self.viewport_width),
                &measure,
                &self.metrics,
            );
            self.layout_key = Some(key);
            log::debug!(
                "laid out {} blocks at width {}: {} rows",
                self.view.blocks().len(),
                self.viewport_width,
                self.layout.total_height
            );
        }
    }

    fn clamp_scroll(&mut self) {
        self.scroll(0.0);
    }

    fn scroll(&mut self, delta: f32) {
        self.refresh_layout();
        self.view.scroll_by(
            delta,
            self.layout.total_height,
            f32::from(self.viewport_height),
        );
    }

    /// Applies one key press. Returns true when the viewer should quit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        let page = f32::from(self.viewport_height.max(1));
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Down | KeyCode::Char('j') => self.scroll(1.0),
            KeyCode::Up | KeyCode::Char('k') => self.scroll(-1.0),
            KeyCode::PageDown => self.scroll(page),
            KeyCode::PageUp => self.scroll(-page),
            KeyCode::Home | KeyCode::Char('g') => self.view.scroll_to_top(),
            KeyCode::End | KeyCode::Char('G') => {
                self.refresh_layout();
                self.view
                    .scroll_to_end(self.layout.total_height, f32::from(self.viewport_height));
            }
            KeyCode::Char('r') => {
                self.reload();
            }
            _ => {}
        }
        false
    }
}
