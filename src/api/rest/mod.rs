//! REST API module for HTTP endpoints
//!
//! - `POST /api/generate-qr` - Encode a typed payload and render it
//! - `GET /api/history` - Most recent saved generations
//! - `POST /api/save-to-history` - Save a generation
//! - `GET /api/stats` - Usage statistics

pub mod generate;
pub mod history;
pub mod stats;

use serde::Deserialize;

/// Bounded window query, e.g. `?limit=10`
#[derive(Debug, Default, Deserialize)]
pub struct WindowParams {
    /// Number of records to return
    pub limit: Option<usize>,
}

impl WindowParams {
    /// Requested window, or `default`, capped at `max`
    pub fn window(&self, default: usize, max: usize) -> usize {
        self.limit.unwrap_or(default).min(max)
    }
}
