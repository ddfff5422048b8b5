//! coursewatch store - durable snapshot of the last observed activity list
//!
//! Provides:
//! - Plain-text snapshot file (one activity name per line)
//! - Atomic temp-then-rename writes

pub mod atomic;
pub mod errors;
pub mod snapshot_file;

pub use errors::Result;
pub use snapshot_file::{decode_snapshot, encode_snapshot, snapshot_digest, SnapshotFile};
