//! Edit types produced by the diff engine.

use std::fmt;

/// Whether a name left or joined the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditKind {
    Removed,
    Added,
}

impl EditKind {
    /// Leading marker used in reports.
    pub fn marker(self) -> char {
        match self {
            EditKind::Removed => '-',
            EditKind::Added => '+',
        }
    }
}

/// One tagged change. Order within an edit sequence is significant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edit {
    pub kind: EditKind,
    pub name: String,
}

impl Edit {
    pub fn added(name: impl Into<String>) -> Self {
        Self {
            kind: EditKind::Added,
            name: name.into(),
        }
    }

    pub fn removed(name: impl Into<String>) -> Self {
        Self {
            kind: EditKind::Removed,
            name: name.into(),
        }
    }

    pub fn is_added(&self) -> bool {
        self.kind == EditKind::Added
    }

    pub fn is_removed(&self) -> bool {
        self.kind == EditKind::Removed
    }
}

/// Renders as a single report line, e.g. `+ Slides week 2`.
impl fmt::Display for Edit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind.marker(), self.name)
    }
}

/// Tally of an edit sequence, for logs and CLI summaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditCounts {
    pub added: usize,
    pub removed: usize,
}

impl EditCounts {
    pub fn of(edits: &[Edit]) -> Self {
        edits.iter().fold(Self::default(), |mut counts, edit| {
            match edit.kind {
                EditKind::Added => counts.added += 1,
                EditKind::Removed => counts.removed += 1,
            }
            counts
        })
    }

    pub fn total(&self) -> usize {
        self.added + self.removed
    }
}
