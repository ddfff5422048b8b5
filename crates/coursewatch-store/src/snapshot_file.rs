//! Snapshot file
//!
//! Format: UTF-8 text, one activity name per line, joined with `\n` and no
//! trailing newline. No header, no escaping. Reading accepts `\n` and `\r\n`
//! line ends and an optional trailing newline.

use crate::atomic::atomic_write;
use crate::errors::{snapshot_unreadable, snapshot_write_failed, Result};
use coursewatch_core::snapshot::SnapshotStore;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Split snapshot text into names. Empty text is an empty list.
pub fn decode_snapshot(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

/// Join names into snapshot text.
pub fn encode_snapshot(names: &[String]) -> String {
    names.join("\n")
}

/// SHA-256 of the encoded snapshot, hex. Logged on save so two runs can be
/// compared without printing the list.
pub fn snapshot_digest(names: &[String]) -> String {
    hex::encode(Sha256::digest(encode_snapshot(names).as_bytes()))
}

/// Snapshot stored in a single text file.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for SnapshotFile {
    fn try_load(&self) -> Result<Vec<String>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(snapshot_path = %self.path.display(), "no snapshot yet");
                return Ok(Vec::new());
            }
            Err(err) => return Err(snapshot_unreadable(&self.path, err.to_string())),
        };
        let text = String::from_utf8(bytes)
            .map_err(|err| snapshot_unreadable(&self.path, format!("not valid UTF-8: {}", err)))?;
        Ok(decode_snapshot(&text))
    }

    fn save(&self, names: &[String]) -> Result<()> {
        atomic_write(&self.path, encode_snapshot(names).as_bytes())
            .map_err(|err| snapshot_write_failed(&self.path, &err))?;
        tracing::debug!(
            snapshot_path = %self.path.display(),
            items = names.len(),
            digest = %snapshot_digest(names),
            "snapshot written"
        );
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
