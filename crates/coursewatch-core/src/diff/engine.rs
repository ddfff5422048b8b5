//! Diff computation engine.
//!
//! [`align`] merges the prior list, the current list and their common
//! subsequence in one left-to-right pass; [`diff`] keeps only the changes.

use crate::diff::lcs::{is_subsequence, LengthTable};
use crate::diff::model::Edit;

/// One position of the merged walk over both lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<'a> {
    /// Present in both lists at this point
    Keep(&'a str),
    /// Only in the prior list
    Remove(&'a str),
    /// Only in the current list
    Add(&'a str),
}

/// Common subsequence used to drive the merge.
///
/// The prior-axis reading is used whenever it is a subsequence of the current
/// list, which covers every input without crossing reorders. Otherwise the
/// reading would pair a prior name with nothing in `b`, so the standard
/// backtrace (same length, always common) is used instead.
fn common_subsequence<'a, S: AsRef<str>>(a: &'a [S], b: &[S]) -> Vec<&'a str> {
    let table = LengthTable::build(a, b);
    let common = table.along_prior_axis(a);
    if is_subsequence(&common, b) {
        common
    } else {
        tracing::debug!(
            prior_len = a.len(),
            current_len = b.len(),
            "prior-axis subsequence is not common, using backtrace"
        );
        table.backtrace(a, b)
    }
}

/// Merge `a` and `b` around their common subsequence.
///
/// Before each common name, the prior names skipped over are removals and the
/// current names skipped over are additions. Leftovers after the last common
/// name are emitted as removals first, then additions.
pub fn align<'a, S: AsRef<str>>(a: &'a [S], b: &'a [S]) -> Vec<Step<'a>> {
    let common = common_subsequence(a, b);
    let mut steps = Vec::with_capacity(a.len() + b.len() - common.len());
    let (mut i, mut j) = (0usize, 0usize);

    for m in common {
        while i < a.len() && a[i].as_ref() != m {
            steps.push(Step::Remove(a[i].as_ref()));
            i += 1;
        }
        while j < b.len() && b[j].as_ref() != m {
            steps.push(Step::Add(b[j].as_ref()));
            j += 1;
        }
        steps.push(Step::Keep(m));
        i += 1;
        j += 1;
    }

    steps.extend(a.iter().skip(i).map(|x| Step::Remove(x.as_ref())));
    steps.extend(b.iter().skip(j).map(|y| Step::Add(y.as_ref())));
    steps
}

/// Ordered additions and removals turning `a` into `b`.
///
/// Empty exactly when `a == b`.
pub fn diff<S: AsRef<str>>(a: &[S], b: &[S]) -> Vec<Edit> {
    align(a, b)
        .into_iter()
        .filter_map(|step| match step {
            Step::Keep(_) => None,
            Step::Remove(name) => Some(Edit::removed(name)),
            Step::Add(name) => Some(Edit::added(name)),
        })
        .collect()
}
