//! Watch cycle command

use clap::Args;
use coursewatch_core::errors::Result;
use coursewatch_core::logging_facility::{init, Profile};
use coursewatch_core::WatchConfig;
use coursewatch_engine::{run_once, RunOptions, RunOutcome};
use coursewatch_remote::{MoodleGuestSource, TelegramNotifier};
use coursewatch_store::SnapshotFile;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "coursewatch.toml")]
    pub config: PathBuf,

    /// Print the report instead of sending it; leave the snapshot alone
    #[arg(long)]
    pub dry_run: bool,

    /// Log JSON lines to stderr instead of human-readable text
    #[arg(long)]
    pub json_logs: bool,
}

pub fn execute(args: RunArgs) -> Result<()> {
    init(if args.json_logs {
        Profile::Production
    } else {
        Profile::Development
    });

    let config = WatchConfig::load(&args.config)?;
    tracing::debug!(config = ?config, "configuration loaded");

    let source = MoodleGuestSource::from_config(&config)?;
    let notifier = TelegramNotifier::from_config(&config)?;
    let store = SnapshotFile::new(&config.save_file);
    let options = RunOptions {
        dry_run: args.dry_run,
        ..RunOptions::default()
    };

    let outcome = run_once(&config, &source, &store, &notifier, &options)?;
    match &outcome {
        RunOutcome::NoChange => {}
        RunOutcome::Updated { report, .. } | RunOutcome::DryRun { report, .. } => {
            println!("{}", report);
        }
    }
    Ok(())
}
