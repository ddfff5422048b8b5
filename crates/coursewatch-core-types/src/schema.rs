//! Canonical schema constants for structured logging
//!
//! Field keys and event names used by the logging macros and by tests that
//! assert on captured events.

// Canonical field keys
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_RUN_ID: &str = "run_id";

// Watch cycle
pub const FIELD_COURSE_ID: &str = "course_id";
pub const FIELD_SNAPSHOT_PATH: &str = "snapshot_path";
pub const FIELD_PRIOR_LEN: &str = "prior_len";
pub const FIELD_CURRENT_LEN: &str = "current_len";
pub const FIELD_ADDED: &str = "added";
pub const FIELD_REMOVED: &str = "removed";
pub const FIELD_OUTCOME: &str = "outcome";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Run outcomes
pub const OUTCOME_NO_CHANGE: &str = "no_change";
pub const OUTCOME_UPDATED: &str = "updated";
pub const OUTCOME_DRY_RUN: &str = "dry_run";
