//! Snapshot store interface.
//!
//! The snapshot is the list observed at the end of the last successful run.
//! Reading it never aborts a run: a missing snapshot is an empty list, and an
//! unreadable one is reported through [`SnapshotStore::try_load`] and then
//! treated as empty.

use crate::errors::Result;
use std::cell::RefCell;

/// Durable home of the previously observed list.
pub trait SnapshotStore {
    /// Read the stored list. A missing snapshot is `Ok(vec![])`.
    ///
    /// # Errors
    ///
    /// `ExErrorKind::SnapshotRead` when a snapshot exists but cannot be read.
    fn try_load(&self) -> Result<Vec<String>>;

    /// Overwrite the stored list.
    ///
    /// # Errors
    ///
    /// `ExErrorKind::SnapshotWrite` when the list could not be recorded.
    fn save(&self, names: &[String]) -> Result<()>;

    /// Human-readable location, for logs.
    fn location(&self) -> String;

    /// Read the stored list, falling back to empty on any read failure.
    fn load(&self) -> Vec<String> {
        self.try_load().unwrap_or_else(|err| {
            tracing::warn!(
                snapshot_path = %self.location(),
                err.code = err.code(),
                "snapshot unreadable, treating prior list as empty: {}",
                err
            );
            Vec::new()
        })
    }
}

/// In-memory snapshot, for tests of code written against [`SnapshotStore`].
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    names: RefCell<Option<Vec<String>>>,
    saves: RefCell<usize>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: RefCell::new(Some(names.into_iter().map(Into::into).collect())),
            saves: RefCell::new(0),
        }
    }

    /// Current contents, `None` if nothing was ever stored.
    pub fn names(&self) -> Option<Vec<String>> {
        self.names.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn try_load(&self) -> Result<Vec<String>> {
        Ok(self.names.borrow().clone().unwrap_or_default())
    }

    fn save(&self, names: &[String]) -> Result<()> {
        *self.names.borrow_mut() = Some(names.to_vec());
        *self.saves.borrow_mut() += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
