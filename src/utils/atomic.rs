//! Atomic file operations
//!
//! Snapshots are written with the temp-file pattern:
//!
//! 1. Write to a sibling `.tmp` file
//! 2. Call `sync_all()` to flush to disk
//! 3. Rename the temp file over the final path
//!
//! A reader therefore sees either the previous snapshot or the new one,
//! never a partially written file.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Result type for atomic operations
pub type AtomicResult<T> = Result<T, AtomicError>;

/// Errors that can occur during atomic operations
#[derive(Debug, thiserror::Error)]
pub enum AtomicError {
    #[error("failed to write temp file {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to replace {}: {source}", path.display())]
    Rename { path: PathBuf, source: io::Error },
}

/// Path of the temp file used while replacing `path`
pub fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Atomically replace the file at `path` with `content`
///
/// # Example
///
/// ```ignore
/// atomic_write("data/qr-history.json", "[]")?;
/// ```
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> AtomicResult<()> {
    let path = path.as_ref();
    let temp_path = temp_path_for(path);

    write_synced(&temp_path, content).map_err(|source| AtomicError::Write {
        path: temp_path.clone(),
        source,
    })?;

    fs::rename(&temp_path, path).map_err(|source| {
        let _ = fs::remove_file(&temp_path);
        AtomicError::Rename {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn write_synced(temp_path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = temp_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = File::create(temp_path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()
}

/// Remove the temp file a crashed write may have left next to `path`.
///
/// Returns whether a file was removed.
pub fn cleanup_stale_temp<P: AsRef<Path>>(path: P) -> io::Result<bool> {
    let temp_path = temp_path_for(path.as_ref());
    match fs::remove_file(&temp_path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}
