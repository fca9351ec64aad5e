//! Shared application state

use std::sync::Arc;

use crate::history::HistoryStore;
use crate::render::ImageEncoder;

/// State shared by every request handler
pub struct AppState {
    /// The history log; the only shared mutable resource
    pub history: Arc<HistoryStore>,

    /// Draws encoded content into image files
    pub renderer: Arc<dyn ImageEncoder>,
}

impl AppState {
    pub fn new(history: Arc<HistoryStore>, renderer: Arc<dyn ImageEncoder>) -> Self {
        Self { history, renderer }
    }
}
