//! Change groups.

use crate::Change;
use std::fmt;

/// An ordered sequence of changes treated as one transaction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChangeGroup {
    changes: Vec<Change>,
}

impl ChangeGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a change.
    pub fn push(&mut self, change: impl Into<Change>) {
        self.changes.push(change.into());
    }

    /// Builder-style append.
    pub fn with(mut self, change: impl Into<Change>) -> Self {
        self.push(change);
        self
    }

    /// Prepend a change.
    pub fn prepend(&mut self, change: impl Into<Change>) {
        self.changes.insert(0, change.into());
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Change> {
        self.changes.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Change> {
        self.changes.iter_mut()
    }

    pub fn into_inner(self) -> Vec<Change> {
        self.changes
    }

    /// Members inverted, in reverse order.
    pub fn inverse(&self) -> Option<ChangeGroup> {
        self.changes
            .iter()
            .rev()
            .map(Change::inverse)
            .collect::<Option<Vec<_>>>()
            .map(ChangeGroup::from)
    }
}

impl From<Vec<Change>> for ChangeGroup {
    fn from(changes: Vec<Change>) -> Self {
        Self { changes }
    }
}

impl FromIterator<Change> for ChangeGroup {
    fn from_iter<I: IntoIterator<Item = Change>>(iter: I) -> Self {
        Self {
            changes: iter.into_iter().collect(),
        }
    }
}

impl Extend<Change> for ChangeGroup {
    fn extend<I: IntoIterator<Item = Change>>(&mut self, iter: I) {
        self.changes.extend(iter);
    }
}

impl IntoIterator for ChangeGroup {
    type Item = Change;
    type IntoIter = std::vec::IntoIter<Change>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.into_iter()
    }
}

impl<'a> IntoIterator for &'a ChangeGroup {
    type Item = &'a Change;
    type IntoIter = std::slice::Iter<'a, Change>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.iter()
    }
}

impl fmt::Display for ChangeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChangeGroup[")?;
        for (i, change) in self.changes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", change)?;
        }
        write!(f, "]")
    }
}
