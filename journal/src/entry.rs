//! History entries.

use bigred_change::Change;

/// Sequence number of a committed transaction.
pub type Seq = u64;

/// A committed change and the change that undoes it.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub seq: Seq,
    /// The change as it was applied.
    pub change: Change,
    /// Its inverse, computed from the snapshots taken while applying.
    pub inverse: Change,
}

impl HistoryEntry {
    pub fn new(seq: Seq, change: Change, inverse: Change) -> Self {
        Self {
            seq,
            change,
            inverse,
        }
    }
}
