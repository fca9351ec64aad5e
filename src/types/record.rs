//! History records and the bounded log that holds them

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EncodedContent, TypeTag};

/// What was saved alongside a generated image.
///
/// Normally the encoded string; older clients may send the raw structured payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordContent {
    Encoded(EncodedContent),
    Structured(serde_json::Value),
}

/// One saved generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub filename: String,
    pub content: RecordContent,
    #[serde(rename = "type")]
    pub type_tag: TypeTag,
    #[serde(deserialize_with = "crate::types::timestamp::deserialize")]
    pub timestamp: DateTime<Utc>,
}

impl HistoryRecord {
    /// Create a record stamped with the current time
    pub fn new(filename: impl Into<String>, content: RecordContent, type_tag: TypeTag) -> Self {
        Self {
            filename: filename.into(),
            content,
            type_tag,
            timestamp: Utc::now(),
        }
    }
}

/// Chronologically ordered records, oldest first
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLog {
    records: Vec<HistoryRecord>,
}

impl HistoryLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, then drop the oldest entries until at most `max_retained` remain
    pub fn push_bounded(&mut self, record: HistoryRecord, max_retained: usize) {
        self.records.push(record);
        if self.records.len() > max_retained {
            let excess = self.records.len() - max_retained;
            self.records.drain(..excess);
        }
    }

    /// The last `n` records, oldest first
    pub fn recent(&self, n: usize) -> &[HistoryRecord] {
        let start = self.records.len().saturating_sub(n);
        &self.records[start..]
    }

    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&HistoryRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HistoryRecord> {
        self.records.iter()
    }
}

impl From<Vec<HistoryRecord>> for HistoryLog {
    fn from(records: Vec<HistoryRecord>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a HistoryLog {
    type Item = &'a HistoryRecord;
    type IntoIter = std::slice::Iter<'a, HistoryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
