//! Utility functions and helpers
//!
//! This module contains crash-safe file replacement used by the history store.

pub mod atomic;

pub use atomic::{atomic_write, cleanup_stale_temp, AtomicError};
