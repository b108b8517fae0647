//! ADD CHILD / REMOVE operations - attach and detach layoutables.

use super::{attach, detach, position_in, Operation, Slot};
use crate::Change;
use bigred_core::{ObjectId, Property};
use bigred_graph::{PropertyTarget, View};
use std::fmt;

/// Add a detached object to a container under a name.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeAddChild {
    pub parent: ObjectId,
    pub child: ObjectId,
    pub name: Option<String>,
    /// Insertion index among the parent's children; appended when None.
    pub position: Option<usize>,
}

impl ChangeAddChild {
    pub fn new(parent: ObjectId, child: ObjectId, name: impl Into<String>) -> Self {
        Self {
            parent,
            child,
            name: Some(name.into()),
            position: None,
        }
    }

    pub fn at(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }
}

impl Operation for ChangeAddChild {
    fn is_ready(&self) -> bool {
        self.name.is_some()
    }

    fn inverse(&self) -> Option<Change> {
        Some(ChangeRemove::new(self.child).into())
    }

    fn perform(&self, target: &mut dyn PropertyTarget) {
        let Some(name) = &self.name else {
            return;
        };
        let namespace = target.view().namespace_under(self.parent, self.child);
        let slot = Slot {
            owner: self.parent,
            list: Property::Children,
            back: Property::Parent,
        };
        attach(target, slot, self.child, namespace, name, self.position);
    }
}

impl fmt::Display for ChangeAddChild {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Change(add child {} to parent {}", self.child, self.parent)?;
        if let Some(name) = &self.name {
            write!(f, " with name {:?}", name)?;
        }
        write!(f, ")")
    }
}

/// Remove a layoutable from its parent.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeRemove {
    pub target: ObjectId,
    old_parent: Option<ObjectId>,
    old_name: Option<String>,
    old_position: Option<usize>,
}

impl ChangeRemove {
    pub fn new(target: ObjectId) -> Self {
        Self {
            target,
            old_parent: None,
            old_name: None,
            old_position: None,
        }
    }

    /// The parent captured by `before_apply`.
    pub fn old_parent(&self) -> Option<ObjectId> {
        self.old_parent
    }
}

impl Operation for ChangeRemove {
    fn before_apply(&mut self, view: View<'_>) {
        self.old_parent = view.parent(self.target);
        self.old_name = view.name(self.target);
        self.old_position = self
            .old_parent
            .and_then(|parent| position_in(view, parent, &Property::Children, self.target));
    }

    fn can_invert(&self) -> bool {
        self.old_parent.is_some() && self.old_name.is_some()
    }

    fn inverse(&self) -> Option<Change> {
        let parent = self.old_parent?;
        let name = self.old_name.clone()?;
        Some(
            ChangeAddChild {
                parent,
                child: self.target,
                name: Some(name),
                position: self.old_position,
            }
            .into(),
        )
    }

    fn perform(&self, target: &mut dyn PropertyTarget) {
        let view = target.view();
        let Some(parent) = view.parent(self.target) else {
            return;
        };
        let namespace = view.namespace_of(self.target);
        let slot = Slot {
            owner: parent,
            list: Property::Children,
            back: Property::Parent,
        };
        detach(target, slot, self.target, namespace);
    }
}

impl fmt::Display for ChangeRemove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Change(remove {})", self.target)
    }
}
