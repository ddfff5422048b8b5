//! coursewatch engine - run orchestration
//!
//! Ties a fetch source, a snapshot store and a notifier into one watch
//! cycle. The engine owns lifecycle logging for the run; collaborators only
//! emit `debug!` details.

pub mod run;

pub use run::{run_once, RunOptions, RunOutcome};
