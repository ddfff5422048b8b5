//! Offline diff of two snapshot files

use clap::Args;
use coursewatch_core::errors::Result;
use coursewatch_core::logging_facility::{init, Profile};
use coursewatch_core::{diff, render_report, SnapshotStore};
use coursewatch_store::SnapshotFile;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Earlier snapshot (missing file = empty list)
    pub old: PathBuf,

    /// Later snapshot (missing file = empty list)
    pub new: PathBuf,
}

pub fn execute(args: DiffArgs) -> Result<()> {
    init(Profile::Development);

    let old = SnapshotFile::new(&args.old).try_load()?;
    let new = SnapshotFile::new(&args.new).try_load()?;
    let edits = diff(&old, &new);
    if !edits.is_empty() {
        println!("{}", render_report(&edits));
    }
    Ok(())
}
