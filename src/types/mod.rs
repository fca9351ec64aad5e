//! Data types for the QR Forge server
//!
//! This module contains all the core data structures used throughout the application.

mod content;
mod payload;
mod record;
mod stats;
pub mod timestamp;
mod type_tag;

pub use content::EncodedContent;
pub use payload::{ContactCard, GeoPoint, Payload, SmsTarget, WifiCredentials};
pub use record::{HistoryLog, HistoryRecord, RecordContent};
pub use stats::Stats;
pub use timestamp::parse_timestamp;
pub use type_tag::{TypeTag, UnknownTypeTag};

/// Maximum number of records kept in the history log
pub const MAX_RETAINED: usize = 50;

/// Window returned by the history view
pub const HISTORY_WINDOW: usize = 20;

/// Window returned as recent activity in statistics
pub const RECENT_ACTIVITY_WINDOW: usize = 5;
