//! One watch cycle.
//!
//! ## Steps (in order):
//! 1. Fetch the current list (failure aborts, store untouched)
//! 2. Load the prior snapshot (read failure counts as empty)
//! 3. Diff prior against current (empty diff ends the run, nothing written)
//! 4. dry_run short-circuit (no delivery, no writes)
//! 5. Render and deliver the report (failure aborts, snapshot not written)
//! 6. Persist the current list

use coursewatch_core::diff::{diff, render_report, Edit, EditCounts};
use coursewatch_core::errors::{ExError, Result};
use coursewatch_core::notifier::Notifier;
use coursewatch_core::schema::{OUTCOME_DRY_RUN, OUTCOME_NO_CHANGE, OUTCOME_UPDATED};
use coursewatch_core::snapshot::SnapshotStore;
use coursewatch_core::source::ActivitySource;
use coursewatch_core::{log_op_end, log_op_error, log_op_start, WatchConfig};
use coursewatch_core_types::RunId;
use std::time::Instant;

const OP: &str = "watch_run";

/// Options for a single run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Compute and return the report, but neither deliver nor persist.
    pub dry_run: bool,
    /// Correlation id attached to the run's log events.
    pub run_id: RunId,
}

/// What a completed run did.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// Current list equals the snapshot; nothing delivered or written.
    NoChange,
    /// Report delivered and snapshot replaced.
    Updated { edits: Vec<Edit>, report: String },
    /// Changes found in dry-run mode; nothing delivered or written.
    DryRun { edits: Vec<Edit>, report: String },
}

impl RunOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            RunOutcome::NoChange => OUTCOME_NO_CHANGE,
            RunOutcome::Updated { .. } => OUTCOME_UPDATED,
            RunOutcome::DryRun { .. } => OUTCOME_DRY_RUN,
        }
    }

    pub fn edits(&self) -> &[Edit] {
        match self {
            RunOutcome::NoChange => &[],
            RunOutcome::Updated { edits, .. } | RunOutcome::DryRun { edits, .. } => edits,
        }
    }

    /// Rendered report, `None` when nothing changed.
    pub fn report(&self) -> Option<&str> {
        match self {
            RunOutcome::NoChange => None,
            RunOutcome::Updated { report, .. } | RunOutcome::DryRun { report, .. } => {
                Some(report)
            }
        }
    }
}

/// Run one watch cycle for the course in `config`.
///
/// # Errors
///
/// - `Fetch`: the current list could not be obtained; nothing was touched
/// - `Delivery`: the report was not accepted; the snapshot was not written
/// - `SnapshotWrite`: the report was delivered but the snapshot was not
///   written, so the next run may report an overlapping diff
pub fn run_once(
    config: &WatchConfig,
    source: &dyn ActivitySource,
    store: &dyn SnapshotStore,
    notifier: &dyn Notifier,
    options: &RunOptions,
) -> Result<RunOutcome> {
    let run_id = options.run_id.as_str();
    log_op_start!(
        OP,
        run_id = run_id,
        course_id = config.course_id.as_str(),
        snapshot_path = %store.location(),
        dry_run = options.dry_run
    );
    let start = Instant::now();

    match run_once_impl(config, source, store, notifier, options) {
        Ok((outcome, prior_len, current_len)) => {
            let counts = EditCounts::of(outcome.edits());
            log_op_end!(
                OP,
                duration_ms = start.elapsed().as_millis() as u64,
                run_id = run_id,
                course_id = config.course_id.as_str(),
                prior_len = prior_len as u64,
                current_len = current_len as u64,
                added = counts.added as u64,
                removed = counts.removed as u64,
                outcome = outcome.label()
            );
            Ok(outcome)
        }
        Err(err) => {
            let err = if err.course_id().is_none() {
                err.with_course_id(config.course_id.clone())
            } else {
                err
            };
            log_op_error!(
                OP,
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                run_id = run_id,
                course_id = config.course_id.as_str()
            );
            Err(err)
        }
    }
}

fn run_once_impl(
    config: &WatchConfig,
    source: &dyn ActivitySource,
    store: &dyn SnapshotStore,
    notifier: &dyn Notifier,
    options: &RunOptions,
) -> Result<(RunOutcome, usize, usize)> {
    let current = source.fetch(&config.course_id, &config.guest_pass)?;
    let prior = store.load();
    tracing::debug!(
        prior_len = prior.len(),
        current_len = current.len(),
        "lists loaded"
    );

    let edits = diff(&prior, &current);
    let lens = (prior.len(), current.len());
    if edits.is_empty() {
        return Ok((RunOutcome::NoChange, lens.0, lens.1));
    }

    let report = render_report(&edits);
    if options.dry_run {
        return Ok((RunOutcome::DryRun { edits, report }, lens.0, lens.1));
    }

    notifier.deliver(&config.telegram_channel, &report)?;
    store.save(&current).map_err(|err| {
        tracing::warn!(
            "report delivered but snapshot not updated; the next run may repeat changes"
        );
        annotate_write(err)
    })?;

    Ok((RunOutcome::Updated { edits, report }, lens.0, lens.1))
}

fn annotate_write(err: ExError) -> ExError {
    if err.op().is_some() {
        err
    } else {
        err.with_op("save_snapshot")
    }
}
