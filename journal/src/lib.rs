//! Big Red Journal
//!
//! Undo/redo history of committed transactions.
//!
//! Responsibilities:
//! - Record each committed change together with its inverse
//! - Hand entries back for undo and redo in the right order
//! - Bound the history to a configurable number of transactions

mod entry;
mod history;

pub use entry::{HistoryEntry, Seq};
pub use history::History;
