//! Per-kind change operations.
//!
//! Every leaf kind implements [`Operation`]. `perform` is the single
//! routine used both to simulate a change into a scratchpad and to apply
//! it to the live model, so the two can never drift apart.

mod child;
mod data;
mod layout;
mod link;
mod name;
mod node;
mod signature;

pub use child::{ChangeAddChild, ChangeRemove};
pub use data::{data_validator, ChangeExtendedData, ExtendedDataValidator};
pub use layout::ChangeLayout;
pub use link::{ChangeConnect, ChangeDisconnect};
pub use name::ChangeName;
pub use node::{ChangeAlias, ChangeParameter};
pub use signature::{
    ChangeAddControl, ChangeAddPort, ChangeControlKind, ChangeParameterPolicy, ChangeRemoveControl,
    ChangeRemovePort,
};

use crate::Change;
use bigred_core::{NamespaceKind, ObjectId, Property, PropertyValue};
use bigred_graph::{PropertyTarget, View};

/// The contract shared by every leaf change.
pub(crate) trait Operation {
    /// True once every required field is set.
    fn is_ready(&self) -> bool {
        true
    }

    /// Snapshot whatever `inverse` needs from the state about to change.
    fn before_apply(&mut self, _view: View<'_>) {}

    /// True once `inverse` can be computed.
    fn can_invert(&self) -> bool {
        true
    }

    /// A change exactly undoing this one.
    fn inverse(&self) -> Option<Change>;

    /// Write this change's effect to `target`.
    fn perform(&self, target: &mut dyn PropertyTarget);
}

/// Where a child is attached: the owner's ordered list and the child's back reference.
pub(crate) struct Slot {
    pub owner: ObjectId,
    pub list: Property,
    pub back: Property,
}

/// Insert `child` into a slot, registering it under `name`.
pub(crate) fn attach(
    target: &mut dyn PropertyTarget,
    slot: Slot,
    child: ObjectId,
    namespace: Option<(ObjectId, NamespaceKind)>,
    name: &str,
    position: Option<usize>,
) {
    target.edit_objects(slot.owner, slot.list, &mut |list| match position {
        Some(i) if i <= list.len() => list.insert(i, child),
        _ => list.push(child),
    });
    target.set(child, slot.back, PropertyValue::Object(slot.owner));
    if let Some((owner, kind)) = namespace {
        target.edit_names(owner, kind, &mut |names| {
            names.insert(name.to_string(), child);
        });
    }
    target.set(child, Property::Name, PropertyValue::Text(name.to_string()));
}

/// Take `child` out of a slot and its namespace.
pub(crate) fn detach(
    target: &mut dyn PropertyTarget,
    slot: Slot,
    child: ObjectId,
    namespace: Option<(ObjectId, NamespaceKind)>,
) {
    let name = target.view().name(child);
    target.edit_objects(slot.owner, slot.list, &mut |list| list.retain(|c| *c != child));
    target.set(child, slot.back, PropertyValue::Absent);
    if let (Some((owner, kind)), Some(name)) = (namespace, name) {
        target.edit_names(owner, kind, &mut |names| {
            if names.get(&name) == Some(&child) {
                names.remove(&name);
            }
        });
    }
    target.set(child, Property::Name, PropertyValue::Absent);
}

/// Position of `child` in `owner`'s list property.
pub(crate) fn position_in(view: View<'_>, owner: ObjectId, list: &Property, child: ObjectId) -> Option<usize> {
    view.get(owner, list).as_objects().iter().position(|c| *c == child)
}
