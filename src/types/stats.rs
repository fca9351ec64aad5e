//! Aggregate usage statistics

use std::collections::BTreeMap;

use serde::Serialize;

use super::{HistoryRecord, TypeTag};

/// Usage statistics derived from the history log
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Number of records currently retained
    pub total_generated: usize,
    /// Count per type; types with no records are absent
    pub types_generated: BTreeMap<TypeTag, usize>,
    /// Most recent records, oldest first
    pub recent_activity: Vec<HistoryRecord>,
}
