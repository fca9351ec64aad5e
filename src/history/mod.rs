//! History - persisted log of saved generations

mod store;

pub use store::{HistoryStore, StoreError, StoreResult};
