//! Longest common subsequence over ordered name lists.
//!
//! The length table is the classic `(|a|+1) × (|b|+1)` dynamic program. Two
//! readings of it are offered:
//!
//! - [`LengthTable::along_prior_axis`] walks `i` upwards with `j = |b|` fixed
//!   and keeps `a[i-1]` whenever the length grows. This is what [`lcs`]
//!   returns, and its tie-break decides how a diff with repeated or reordered
//!   names comes out, so it must not change.
//! - [`LengthTable::backtrace`] is the textbook walk from the bottom-right
//!   corner. It always yields a subsequence of both inputs.

/// Filled LCS length table for a pair of lists.
#[derive(Debug, Clone)]
pub struct LengthTable {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl LengthTable {
    /// Fill the table in row-major order. O(|a|·|b|) time and space.
    pub fn build<S: AsRef<str>>(a: &[S], b: &[S]) -> Self {
        let rows = a.len() + 1;
        let cols = b.len() + 1;
        let mut cells = vec![0usize; rows * cols];

        for (i, x) in a.iter().enumerate() {
            for (j, y) in b.iter().enumerate() {
                cells[(i + 1) * cols + (j + 1)] = if x.as_ref() == y.as_ref() {
                    cells[i * cols + j] + 1
                } else {
                    cells[(i + 1) * cols + j].max(cells[i * cols + (j + 1)])
                };
            }
        }

        Self { rows, cols, cells }
    }

    /// `L[i][j]`: LCS length of `a[..i]` and `b[..j]`.
    pub fn at(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.cols + j]
    }

    /// Length of a longest common subsequence of the full inputs.
    pub fn len(&self) -> usize {
        self.at(self.rows - 1, self.cols - 1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read the subsequence along the `i` axis at `j = |b|`.
    pub fn along_prior_axis<'a, S: AsRef<str>>(&self, a: &'a [S]) -> Vec<&'a str> {
        let j = self.cols - 1;
        (1..self.rows)
            .filter(|&i| self.at(i, j) != self.at(i - 1, j))
            .map(|i| a[i - 1].as_ref())
            .collect()
    }

    /// Standard backtrace from `(|a|, |b|)`, preferring to step up on ties.
    pub fn backtrace<'a, S: AsRef<str>>(&self, a: &'a [S], b: &[S]) -> Vec<&'a str> {
        let mut out = Vec::with_capacity(self.len());
        let (mut i, mut j) = (self.rows - 1, self.cols - 1);
        while i > 0 && j > 0 {
            if a[i - 1].as_ref() == b[j - 1].as_ref() {
                out.push(a[i - 1].as_ref());
                i -= 1;
                j -= 1;
            } else if self.at(i - 1, j) >= self.at(i, j - 1) {
                i -= 1;
            } else {
                j -= 1;
            }
        }
        out.reverse();
        out
    }
}

/// One longest common subsequence of `a` and `b`, read along the prior axis.
///
/// Deterministic for a given pair of inputs. Names are borrowed from `a`.
pub fn lcs<'a, S: AsRef<str>>(a: &'a [S], b: &[S]) -> Vec<&'a str> {
    LengthTable::build(a, b).along_prior_axis(a)
}

/// Whether `needle` appears in `haystack` in order (not necessarily contiguous).
pub(crate) fn is_subsequence<N: AsRef<str>, H: AsRef<str>>(needle: &[N], haystack: &[H]) -> bool {
    let mut rest = haystack.iter();
    needle
        .iter()
        .all(|n| rest.any(|h| h.as_ref() == n.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_inputs() {
        let empty: [&str; 0] = [];
        assert!(lcs(&empty, &["a"]).is_empty());
        assert!(lcs(&["a"], &empty).is_empty());
        assert!(lcs(&empty, &empty).is_empty());
    }

    #[test]
    fn test_identical_lists() {
        let a = ["x", "y", "x", "z"];
        assert_eq!(lcs(&a, &a), vec!["x", "y", "x", "z"]);
    }

    #[test]
    fn test_table_values() {
        let table = LengthTable::build(&["a", "b", "c"], &["b", "c", "a"]);
        assert_eq!(table.at(0, 3), 0);
        assert_eq!(table.at(1, 3), 1);
        assert_eq!(table.at(2, 3), 1);
        assert_eq!(table.at(3, 3), 2);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_prior_axis_reading_is_kept_even_when_not_common() {
        // The length grows at i=1 ("a") and i=3 ("c"), so that is what is
        // read, although "a" then "c" is not a subsequence of b.
        let a = ["a", "b", "c"];
        let b = ["b", "c", "a"];
        assert_eq!(lcs(&a, &b), vec!["a", "c"]);
        assert!(!is_subsequence(&lcs(&a, &b), &b));
    }

    #[test]
    fn test_backtrace_is_common() {
        let a = ["a", "b", "c"];
        let b = ["b", "c", "a"];
        let table = LengthTable::build(&a, &b);
        let common = table.backtrace(&a, &b);
        assert_eq!(common, vec!["b", "c"]);
        assert!(is_subsequence(&common, &a));
        assert!(is_subsequence(&common, &b));
    }

    #[test]
    fn test_case_sensitive() {
        assert!(lcs(&["Quiz"], &["quiz"]).is_empty());
    }

    #[test]
    fn test_is_subsequence() {
        assert!(is_subsequence(&["a", "c"], &["a", "b", "c"]));
        assert!(!is_subsequence(&["c", "a"], &["a", "b", "c"]));
        assert!(is_subsequence::<&str, &str>(&[], &["a"]));
        assert!(!is_subsequence(&["a", "a"], &["a"]));
    }
}
