//! API module for HTTP endpoints
//!
//! This module provides the REST API, static file serving and the shared
//! state handed to every handler.

pub mod error;
pub mod http;
pub mod rest;
pub mod state;

pub use error::ApiError;
pub use http::{create_app, create_router};
pub use state::AppState;
