//! Ordered list diff.
//!
//! Compares the activity names recorded at the previous check with the names
//! on the course page now and produces an ordered sequence of additions and
//! removals.
//!
//! ## Entry point
//!
//! ```
//! use coursewatch_core::diff::{diff, render_report};
//!
//! let prior = ["Slides week 1", "Exercise sheet 1"];
//! let current = ["Slides week 1", "Slides week 2"];
//! let edits = diff(&prior, &current);
//! assert_eq!(render_report(&edits), "- Exercise sheet 1\n+ Slides week 2");
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce identical edit sequences.
//! - **Empty iff equal**: the edit sequence is empty exactly when both lists
//!   are element-wise equal.
//! - **Reconstruction**: dropping the additions from the aligned sequence
//!   gives back the prior list; dropping the removals gives the current list.
//! - **Positional duplicates**: repeated names are matched left to right, never
//!   deduplicated.

pub mod engine;
pub mod lcs;
pub mod model;
pub mod report;

pub use engine::{align, diff, Step};
pub use lcs::lcs;
pub use model::{Edit, EditCounts, EditKind};
pub use report::render_report;
