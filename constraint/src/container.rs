//! Place graph structure: adding, removing and renaming layoutables.

use crate::naming::{check_in_bigraph, check_in_signature, check_name, control_name, kind_of};
use crate::{messages, Deferrals, Rejection, StepValidator, Verdict};
use bigred_change::{Change, ChangeAddChild, ChangeName, ChangeRemove};
use bigred_core::{ControlKind, ObjectKind};
use bigred_graph::View;

/// Checks containment, acyclicity and naming of layoutables.
#[derive(Debug, Default)]
pub struct ContainerValidator;

impl ContainerValidator {
    pub fn new() -> Self {
        Self
    }

    fn check(&self, view: View<'_>, change: &Change) -> Result<Verdict, String> {
        match change {
            Change::AddChild(c) => self.add_child(view, c),
            Change::Remove(c) => self.remove(view, c),
            Change::Name(c) => self.rename(view, c),
            Change::Group(_)
            | Change::Connect(_)
            | Change::Disconnect(_)
            | Change::Layout(_)
            | Change::Parameter(_)
            | Change::Alias(_)
            | Change::ExtendedData(_)
            | Change::AddControl(_)
            | Change::RemoveControl(_)
            | Change::ControlKind(_)
            | Change::ParameterPolicy(_)
            | Change::AddPort(_)
            | Change::RemovePort(_) => Ok(Verdict::Unrecognised),
        }
    }

    fn add_child(&self, view: View<'_>, c: &ChangeAddChild) -> Result<Verdict, String> {
        let parent_kind = kind_of(view, c.parent)?;
        let child_kind = kind_of(view, c.child)?;
        check_in_bigraph(view, c.parent)?;

        if parent_kind == ObjectKind::Node {
            if let Some(control) = view.control(c.parent) {
                if view.control_kind(control) == ControlKind::Atomic {
                    return Err(format!("{} {}", control_name(view, control), messages::IS_ATOMIC));
                }
            }
        }

        if view.parent(c.child).is_some() {
            return Err(format!("{} already has a parent", view.describe(c.child)));
        }
        if child_kind == ObjectKind::Node {
            if let Some(control) = view.control(c.child) {
                check_in_signature(view, control)?;
            }
        }
        if let Some(name) = c.name.as_deref() {
            check_name(view, view.namespace_under(c.parent, c.child), c.child, name)?;
        }

        if child_kind == ObjectKind::Edge {
            if parent_kind != ObjectKind::Bigraph {
                return Err(messages::EDGES_IN_BIGRAPH.to_string());
            }
        } else {
            if child_kind.is_container() && !view.children(c.child).is_empty() {
                return Err(format!("{} already has child objects", view.describe(c.child)));
            }
            if !parent_kind.can_contain(child_kind) {
                return Err(format!(
                    "{}s can't contain {}s",
                    parent_kind.type_name(),
                    child_kind.type_name()
                ));
            }
        }
        if view.is_ancestor(c.child, c.parent) {
            return Err(format!(
                "{} can't be added to its own descendant {}",
                view.describe(c.child),
                view.describe(c.parent)
            ));
        }
        Ok(Verdict::Accepted)
    }

    fn remove(&self, view: View<'_>, c: &ChangeRemove) -> Result<Verdict, String> {
        let kind = kind_of(view, c.target)?;
        if !kind.is_layoutable() {
            return Ok(Verdict::Unrecognised);
        }
        if kind == ObjectKind::Port {
            return Err(format!(
                "{} can't be removed from its node",
                view.describe(c.target)
            ));
        }
        check_in_bigraph(view, c.target)?;

        if kind.is_container() && !view.children(c.target).is_empty() {
            return Err(format!("{} {}", view.describe(c.target), messages::HAS_CHILDREN));
        }
        if kind.is_link() && !view.points(c.target).is_empty() {
            return Err(format!(
                "{} still has points which must be disconnected first",
                view.describe(c.target)
            ));
        }
        if kind.is_point() && view.link(c.target).is_some() {
            return Err(format!("{} must be disconnected first", view.describe(c.target)));
        }
        if kind == ObjectKind::Node && view.ports(c.target).iter().any(|p| view.link(*p).is_some()) {
            return Err(format!(
                "{} has connected ports which must be disconnected first",
                view.describe(c.target)
            ));
        }
        Ok(Verdict::Accepted)
    }

    fn rename(&self, view: View<'_>, c: &ChangeName) -> Result<Verdict, String> {
        let kind = kind_of(view, c.target)?;
        if !kind.is_layoutable() {
            return Ok(Verdict::Unrecognised);
        }
        if kind == ObjectKind::Port {
            return Err(format!(
                "{} takes its name from its port spec",
                view.describe(c.target)
            ));
        }
        check_in_bigraph(view, c.target)?;
        if let Some(name) = c.new_name.as_deref() {
            check_name(view, view.namespace_of(c.target), c.target, name)?;
        }
        Ok(Verdict::Accepted)
    }
}

impl StepValidator for ContainerValidator {
    fn name(&self) -> &'static str {
        "ContainerValidator"
    }

    fn validate_step(
        &self,
        view: View<'_>,
        change: &Change,
        _deferred: &mut Deferrals,
    ) -> Result<Verdict, Rejection> {
        self.check(view, change)
            .map_err(|rationale| Rejection::new(change, self.name(), rationale))
    }
}
