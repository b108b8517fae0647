//! NAME operation - renames a layoutable, control or port spec.

use super::Operation;
use crate::Change;
use bigred_core::{ObjectId, Property, PropertyValue};
use bigred_graph::{PropertyTarget, View};
use std::fmt;

/// Rename an object within its namespace.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeName {
    pub target: ObjectId,
    pub new_name: Option<String>,
    old_name: Option<String>,
}

impl ChangeName {
    pub fn new(target: ObjectId, new_name: impl Into<String>) -> Self {
        Self {
            target,
            new_name: Some(new_name.into()),
            old_name: None,
        }
    }

    /// A rename whose new name has not been chosen yet.
    pub fn pending(target: ObjectId) -> Self {
        Self {
            target,
            new_name: None,
            old_name: None,
        }
    }

    /// The name captured by `before_apply`.
    pub fn old_name(&self) -> Option<&str> {
        self.old_name.as_deref()
    }
}

impl Operation for ChangeName {
    fn is_ready(&self) -> bool {
        self.new_name.is_some()
    }

    fn before_apply(&mut self, view: View<'_>) {
        self.old_name = view.name(self.target);
    }

    fn can_invert(&self) -> bool {
        self.old_name.is_some()
    }

    fn inverse(&self) -> Option<Change> {
        let old = self.old_name.clone()?;
        Some(ChangeName::new(self.target, old).into())
    }

    fn perform(&self, target: &mut dyn PropertyTarget) {
        let Some(new_name) = self.new_name.clone() else {
            return;
        };
        let view = target.view();
        let namespace = view.namespace_of(self.target);
        let old_name = view.name(self.target);

        let id = self.target;
        if let Some((owner, kind)) = namespace {
            target.edit_names(owner, kind, &mut |names| {
                if let Some(old) = &old_name {
                    if names.get(old) == Some(&id) {
                        names.remove(old);
                    }
                }
                names.insert(new_name.clone(), id);
            });
        }
        target.set(id, Property::Name, PropertyValue::Text(new_name));
    }
}

impl fmt::Display for ChangeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.new_name {
            Some(name) => write!(f, "Change(set name of {} to {:?})", self.target, name),
            None => write!(f, "Change(set name of {} to ?)", self.target),
        }
    }
}
