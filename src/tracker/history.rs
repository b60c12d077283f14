//! Revision history and previous/current snapshot resolution

use serde::{Deserialize, Serialize};

use super::snapshot::Snapshot;

/// Ordered, append-only sequence of per-revision snapshots.
///
/// Insertion order is chronological order; the last element is the most
/// recently touched revision. Serializes transparently as the array of
/// snapshots, which is exactly the persisted document format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SizeHistory {
    snapshots: Vec<Snapshot>,
}

/// Snapshot slots a build diffs against and writes into.
///
/// Indices rather than references, so the caller can take the mutable
/// current slot and the shared previous slot one after the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// Most recent completed revision, when one exists
    pub previous: Option<usize>,
    /// Snapshot open for writing during this build
    pub current: usize,
}

impl SizeHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded snapshots
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// True when nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Iterate snapshots oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.snapshots.iter()
    }

    /// Shared access to a resolved snapshot slot
    pub fn snapshot(&self, index: usize) -> &Snapshot {
        &self.snapshots[index]
    }

    /// Mutable access to a resolved snapshot slot
    pub fn snapshot_mut(&mut self, index: usize) -> &mut Snapshot {
        &mut self.snapshots[index]
    }

    /// Locate the previous and current snapshot slots for a revision.
    ///
    /// Three cases, keyed off the tail of the history:
    /// - empty history: a fresh snapshot for `current_id` is appended and
    ///   becomes current; there is no previous, so every artifact diffs
    ///   against the zero-default and is reported new;
    /// - tail id equals `current_id`: the same revision is being measured
    ///   again, so the tail stays current (the history does not grow) and
    ///   previous is the second-to-last snapshot when one exists;
    /// - tail id differs: a new revision started; the old tail becomes
    ///   previous and a fresh snapshot is appended as current.
    ///
    /// The history therefore grows by exactly one snapshot per distinct
    /// revision observed, and re-running a build against the same revision
    /// mutates the tail in place instead of duplicating it.
    pub fn resolve(&mut self, current_id: &str) -> Resolution {
        let len = self.snapshots.len();
        match self.snapshots.last() {
            Some(tail) if tail.id == current_id => Resolution {
                previous: len.checked_sub(2),
                current: len - 1,
            },
            Some(_) => {
                self.snapshots.push(Snapshot::new(current_id));
                Resolution {
                    previous: Some(len - 1),
                    current: len,
                }
            }
            None => {
                self.snapshots.push(Snapshot::new(current_id));
                Resolution {
                    previous: None,
                    current: 0,
                }
            }
        }
    }
}
