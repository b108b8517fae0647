//! Model-aware change factories.
//!
//! These read the live model to fill in details (current links, default
//! names, subtrees) but never mutate it.

use crate::{Change, ChangeGroup};
use bigred_core::ObjectId;
use bigred_graph::{Model, View};

/// Change factories that need to look at the live model.
pub trait ChangeFactory {
    /// Disconnect `point` from the link it is connected to.
    fn change_disconnect(&self, point: ObjectId) -> Option<Change>;

    /// Add `child` to `parent` under the first unused default name.
    fn change_add_child_auto(&self, parent: ObjectId, child: ObjectId) -> Option<Change>;

    /// Add `control` to the signature under the first unused default name.
    fn change_add_control_auto(&self, control: ObjectId) -> Option<Change>;

    /// Disconnect and remove an object and everything below it, children first.
    fn change_remove_tree(&self, target: ObjectId) -> Change;
}

impl ChangeFactory for Model {
    fn change_disconnect(&self, point: ObjectId) -> Option<Change> {
        let link = self.view().link(point)?;
        Some(Change::disconnect(point, link))
    }

    fn change_add_child_auto(&self, parent: ObjectId, child: ObjectId) -> Option<Change> {
        let (owner, kind) = self.view().namespace_under(parent, child)?;
        let name = self.namespace(owner, kind)?.next_name()?;
        Some(Change::add_child(parent, child, name))
    }

    fn change_add_control_auto(&self, control: ObjectId) -> Option<Change> {
        let signature = self.signature();
        let (owner, kind) = self.view().namespace_under(signature, control)?;
        let name = self.namespace(owner, kind)?.next_name()?;
        Some(Change::add_control(signature, control, name))
    }

    fn change_remove_tree(&self, target: ObjectId) -> Change {
        let mut group = ChangeGroup::new();
        collect_removal(self.view(), target, &mut group);
        group.into()
    }
}

fn collect_removal(view: View<'_>, id: ObjectId, group: &mut ChangeGroup) {
    for child in view.children(id) {
        collect_removal(view, child, group);
    }
    for port in view.ports(id) {
        if let Some(link) = view.link(port) {
            group.push(Change::disconnect(port, link));
        }
    }
    if let Some(link) = view.link(id) {
        group.push(Change::disconnect(id, link));
    }
    for point in view.points(id) {
        group.push(Change::disconnect(point, id));
    }
    group.push(Change::remove(id));
}
