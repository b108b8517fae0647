//! LAYOUT operation - moves and resizes layoutables.

use super::Operation;
use crate::Change;
use bigred_core::{ObjectId, Property, Rectangle};
use bigred_graph::{PropertyTarget, View};
use std::fmt;

/// Set or clear the layout of a layoutable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChangeLayout {
    pub target: ObjectId,
    pub new_layout: Option<Rectangle>,
    old_layout: Option<Option<Rectangle>>,
}

impl ChangeLayout {
    pub fn new(target: ObjectId, new_layout: impl Into<Option<Rectangle>>) -> Self {
        Self {
            target,
            new_layout: new_layout.into(),
            old_layout: None,
        }
    }
}

impl Operation for ChangeLayout {
    fn before_apply(&mut self, view: View<'_>) {
        self.old_layout = Some(view.layout(self.target));
    }

    fn can_invert(&self) -> bool {
        self.old_layout.is_some()
    }

    fn inverse(&self) -> Option<Change> {
        Some(ChangeLayout::new(self.target, self.old_layout?).into())
    }

    fn perform(&self, target: &mut dyn PropertyTarget) {
        target.set(self.target, Property::Layout, self.new_layout.into());
    }
}

impl fmt::Display for ChangeLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.new_layout {
            Some(layout) => write!(f, "Change(set layout of {} to {})", self.target, layout),
            None => write!(f, "Change(clear layout of {})", self.target),
        }
    }
}
