//! Atomic write primitives
//!
//! Temp file in the target's directory, flushed, then renamed over the
//! target, so readers see either the old content or the new one.

use std::ffi::{OsStr, OsString};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Sibling temp path: `dir/name` becomes `dir/.name.tmp`.
fn temp_path_for(target: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(target.file_name().unwrap_or_else(|| OsStr::new("snapshot")));
    name.push(".tmp");
    target.with_file_name(name)
}

/// Atomically replace `target_path` with `content`, creating parent
/// directories as needed.
///
/// # Errors
///
/// Any I/O failure while creating the directory, writing the temp file, or
/// renaming it. The temp file is removed on failure where possible.
pub fn atomic_write(target_path: &Path, content: &[u8]) -> io::Result<()> {
    if let Some(parent) = target_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let temp_path = temp_path_for(target_path);
    let written = File::create(&temp_path).and_then(|mut file| {
        file.write_all(content)?;
        file.sync_all()
    });

    match written.and_then(|()| fs::rename(&temp_path, target_path)) {
        Ok(()) => Ok(()),
        Err(err) => {
            let _ = fs::remove_file(&temp_path);
            Err(err)
        }
    }
}
