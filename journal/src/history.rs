//! Undo and redo stacks.

use crate::entry::{HistoryEntry, Seq};
use bigred_change::Change;
use tracing::trace;

/// Undo/redo stacks of committed transactions.
///
/// Recording a new transaction clears the redo stack. When a limit is set
/// the oldest entries are dropped once it is exceeded.
#[derive(Debug, Clone)]
pub struct History {
    undo: Vec<HistoryEntry>,
    redo: Vec<HistoryEntry>,
    next_seq: Seq,
    limit: Option<usize>,
}

impl Default for History {
    fn default() -> Self {
        Self::new(None)
    }
}

impl History {
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            undo: Vec::new(),
            redo: Vec::new(),
            next_seq: 1,
            limit,
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Record a newly committed change.
    pub fn record(&mut self, change: Change, inverse: Change) -> Seq {
        let seq = self.next_seq;
        self.next_seq += 1;
        trace!(seq, undo_stack = self.undo.len() + 1, "transaction recorded");
        self.undo.push(HistoryEntry::new(seq, change, inverse));
        if !self.redo.is_empty() {
            trace!(cleared = self.redo.len(), "redo stack cleared");
        }
        self.redo.clear();
        self.trim();
        seq
    }

    fn trim(&mut self) {
        if let Some(limit) = self.limit {
            if self.undo.len() > limit {
                let excess = self.undo.len() - limit;
                trace!(dropped = excess, "history trimmed");
                self.undo.drain(..excess);
            }
        }
    }

    /// Take the most recent undoable entry.
    pub fn pop_undo(&mut self) -> Option<HistoryEntry> {
        self.undo.pop()
    }

    /// Take the most recently undone entry.
    pub fn pop_redo(&mut self) -> Option<HistoryEntry> {
        self.redo.pop()
    }

    /// Put an entry back on the undo stack without touching the redo stack.
    pub fn push_undo(&mut self, entry: HistoryEntry) {
        self.undo.push(entry);
        self.trim();
    }

    pub fn push_redo(&mut self, entry: HistoryEntry) {
        self.redo.push(entry);
    }

    pub fn peek_undo(&self) -> Option<&HistoryEntry> {
        self.undo.last()
    }

    pub fn peek_redo(&self) -> Option<&HistoryEntry> {
        self.redo.last()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}
