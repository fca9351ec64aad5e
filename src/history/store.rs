//! File-backed history store

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::types::{HistoryLog, HistoryRecord, MAX_RETAINED};
use crate::utils::atomic::{atomic_write, cleanup_stale_temp, AtomicError};

/// Errors surfaced by the write path. Read failures never surface; they
/// degrade to an empty log.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to serialize history: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Write(#[from] AtomicError),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Bounded, append-ordered log of saved generations persisted as a single
/// JSON snapshot.
///
/// Construct one per process with [`HistoryStore::open`] and share it by
/// `Arc`. No copy of the log is kept in memory: every read reloads the file,
/// so records written by other processes are always visible, and every
/// append rewrites the whole snapshot atomically.
pub struct HistoryStore {
    path: PathBuf,
    max_retained: usize,
    /// Held across reload-append-write so concurrent appends cannot lose updates
    write_lock: Mutex<()>,
}

impl HistoryStore {
    /// Open a store at `path` with the default retention
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self::open(path, MAX_RETAINED)
    }

    /// Open a store at `path` keeping at most `max_retained` records.
    ///
    /// Nothing is read yet; a temp file left by an interrupted write is removed.
    pub fn open<P: Into<PathBuf>>(path: P, max_retained: usize) -> Self {
        let path = path.into();

        match cleanup_stale_temp(&path) {
            Ok(true) => warn!(path = %path.display(), "removed stale history temp file"),
            Ok(false) => {}
            Err(e) => warn!(path = %path.display(), error = %e, "could not remove stale temp file"),
        }

        Self {
            path,
            max_retained: max_retained.max(1),
            write_lock: Mutex::new(()),
        }
    }

    /// Location of the snapshot file
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn max_retained(&self) -> usize {
        self.max_retained
    }

    /// Read the snapshot from disk.
    ///
    /// A missing, unreadable or corrupt snapshot yields an empty log. Single
    /// records that do not parse are skipped; the rest are kept.
    pub fn load(&self) -> HistoryLog {
        self.read_snapshot()
    }

    /// Append a record, evict the oldest beyond the retention bound and
    /// persist the result.
    ///
    /// A failed write leaves the previous snapshot in place.
    pub fn append(&self, record: HistoryRecord) -> StoreResult<()> {
        let _guard = self.write_lock.lock();

        let mut log = self.read_snapshot();
        let filename = record.filename.clone();
        let type_tag = record.type_tag;
        log.push_bounded(record, self.max_retained);

        if let Err(e) = self.persist(&log) {
            error!(
                path = %self.path.display(),
                filename = %filename,
                error = %e,
                "failed to save history"
            );
            return Err(e);
        }

        info!(filename = %filename, type_tag = %type_tag, retained = log.len(), "saved to history");
        Ok(())
    }

    /// The last `n` records, oldest first, after reloading from disk
    pub fn recent(&self, n: usize) -> Vec<HistoryRecord> {
        self.load().recent(n).to_vec()
    }

    fn persist(&self, log: &HistoryLog) -> StoreResult<()> {
        let content = serde_json::to_string_pretty(log)?;
        atomic_write(&self.path, &content)?;
        Ok(())
    }

    fn read_snapshot(&self) -> HistoryLog {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no history snapshot yet");
                return HistoryLog::new();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "error loading history");
                return HistoryLog::new();
            }
        };

        if content.trim().is_empty() {
            return HistoryLog::new();
        }

        let entries = match serde_json::from_str::<Vec<Value>>(&content) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "corrupt history snapshot, starting empty");
                return HistoryLog::new();
            }
        };

        let mut records = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            match serde_json::from_value::<HistoryRecord>(entry) {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!(path = %self.path.display(), index, error = %e, "skipping unreadable history record");
                }
            }
        }

        records.into()
    }
}
