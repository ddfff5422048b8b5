//! Error helpers for coursewatch-store
//!
//! Folds `std::io::Error` into the core error facility.

use coursewatch_core::errors::{ExError, WatchError};
use std::path::Path;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Snapshot exists but could not be read (non-fatal for a run)
pub fn snapshot_unreadable(path: &Path, reason: impl Into<String>) -> ExError {
    WatchError::SnapshotUnreadable {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
    .into()
}

/// Snapshot could not be written (fatal for a run)
pub fn snapshot_write_failed(path: &Path, err: &std::io::Error) -> ExError {
    WatchError::SnapshotWriteFailed {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
    .into()
}
