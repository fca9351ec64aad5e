//! QR Forge Server
//!
//! Turns typed content (URLs, contact cards, WiFi credentials, locations...)
//! into QR code images, keeps a bounded history of saved generations and
//! serves usage statistics over HTTP.
//!
//! # Features
//!
//! - **8 content types**: url, text, email, phone, sms, wifi, vcard, geolocation
//! - **Exact formats**: deterministic `mailto:`, `WIFI:`, vCard 3.0, `geo:` encodings
//! - **Bounded history**: at most 50 records, oldest evicted first
//! - **Crash-safe persistence**: whole-log JSON snapshot, replaced atomically
//!
//! # Modules
//!
//! - `types`: Core data structures (TypeTag, Payload, HistoryRecord, Stats)
//! - `encoder`: Payload validation and canonical content encoding
//! - `history`: File-backed bounded history store
//! - `stats`: Usage statistics over the history log
//! - `render`: QR rasterisation and PNG output
//! - `api`: Axum router and REST handlers
//! - `config`: Environment configuration
//! - `utils`: Atomic file replacement
//!
//! # Example
//!
//! ```
//! use qr_forge::encoder::encode;
//! use serde_json::json;
//!
//! let content = encode("wifi", &json!({"ssid": "Home", "password": "secret"})).unwrap();
//! assert_eq!(content.as_str(), "WIFI:T:WPA;S:Home;P:secret;;");
//! ```

pub mod api;
pub mod config;
pub mod encoder;
pub mod history;
pub mod render;
pub mod stats;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use api::{create_app, create_router, AppState};
pub use config::Config;
pub use encoder::{encode, ValidationError};
pub use history::{HistoryStore, StoreError};
pub use render::{ImageEncoder, PngRenderer, RenderError, RenderOptions};
pub use stats::aggregate;
pub use types::{
    EncodedContent, HistoryLog, HistoryRecord, Payload, RecordContent, Stats, TypeTag,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
