//! coursewatch core - list diff and the contracts around it
//!
//! This crate holds everything a watch cycle needs that does not touch the
//! network or the filesystem directly:
//! - LCS-based ordered list diff and the plain-text report
//! - Collaborator interfaces (activity source, notifier, snapshot store)
//! - Configuration loading and validation
//! - The error and logging facilities shared by every crate

pub mod config;
pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod notifier;
pub mod snapshot;
pub mod source;

pub use coursewatch_core_types::schema;

// Re-export commonly used types
pub use config::WatchConfig;
pub use diff::{diff, lcs, render_report, Edit, EditCounts, EditKind};
pub use errors::{ExError, ExErrorKind, Result, WatchError};
pub use notifier::Notifier;
pub use snapshot::{MemorySnapshotStore, SnapshotStore};
pub use source::{ActivitySource, StaticSource};
