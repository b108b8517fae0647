//! The Change sum type.

use crate::ops::*;
use crate::ChangeGroup;
use bigred_core::{ControlKind, NamePolicy, ObjectId, PropertyScratchpad, Rectangle, Value};
use bigred_graph::{Application, Model, PropertyTarget, Simulation, View};
use std::fmt;

/// A proposed mutation of a model.
///
/// Leaf variants each wrap one operation; `Group` holds an ordered
/// sequence that is validated and applied as a single transaction.
#[derive(Debug, Clone, PartialEq)]
pub enum Change {
    Group(ChangeGroup),
    Name(ChangeName),
    AddChild(ChangeAddChild),
    Remove(ChangeRemove),
    Connect(ChangeConnect),
    Disconnect(ChangeDisconnect),
    Layout(ChangeLayout),
    Parameter(ChangeParameter),
    Alias(ChangeAlias),
    ExtendedData(ChangeExtendedData),
    AddControl(ChangeAddControl),
    RemoveControl(ChangeRemoveControl),
    ControlKind(ChangeControlKind),
    ParameterPolicy(ChangeParameterPolicy),
    AddPort(ChangeAddPort),
    RemovePort(ChangeRemovePort),
}

/// Run `$body` with `$op` bound to the leaf operation, or `$group` for groups.
macro_rules! dispatch {
    ($change:expr, $group:pat => $group_body:expr, $op:ident => $body:expr) => {
        match $change {
            $group => $group_body,
            Change::Name($op) => $body,
            Change::AddChild($op) => $body,
            Change::Remove($op) => $body,
            Change::Connect($op) => $body,
            Change::Disconnect($op) => $body,
            Change::Layout($op) => $body,
            Change::Parameter($op) => $body,
            Change::Alias($op) => $body,
            Change::ExtendedData($op) => $body,
            Change::AddControl($op) => $body,
            Change::RemoveControl($op) => $body,
            Change::ControlKind($op) => $body,
            Change::ParameterPolicy($op) => $body,
            Change::AddPort($op) => $body,
            Change::RemovePort($op) => $body,
        }
    };
}

impl Change {
    /// An empty group.
    pub fn group() -> Self {
        Change::Group(ChangeGroup::new())
    }

    /// Returns true for groups.
    pub fn is_group(&self) -> bool {
        matches!(self, Change::Group(_))
    }

    /// True once every required field is set, for groups on every member.
    pub fn is_ready(&self) -> bool {
        dispatch!(self, Change::Group(g) => g.iter().all(Change::is_ready), op => op.is_ready())
    }

    /// Snapshot the state `inverse` will need. Executors call this on each
    /// leaf immediately before applying it.
    pub fn before_apply(&mut self, view: View<'_>) {
        dispatch!(self, Change::Group(_) => {}, op => op.before_apply(view))
    }

    /// True once `inverse` can be computed.
    pub fn can_invert(&self) -> bool {
        dispatch!(self, Change::Group(g) => g.iter().all(Change::can_invert), op => op.can_invert())
    }

    /// A change exactly undoing this one, or None if it cannot be inverted yet.
    pub fn inverse(&self) -> Option<Change> {
        dispatch!(self, Change::Group(g) => g.inverse().map(Change::Group), op => op.inverse())
    }

    /// Write this change's effect into a scratchpad.
    pub fn simulate(&self, model: &Model, scratch: &mut PropertyScratchpad) {
        self.perform(&mut Simulation::new(model, scratch));
    }

    /// Write this change's effect to the live model.
    ///
    /// Validation is the caller's responsibility; this is what executors
    /// call once a change has been accepted.
    pub fn apply(&self, model: &mut Model) {
        self.perform(&mut Application::new(model));
    }

    /// Write this change's effect to any target.
    pub fn perform(&self, target: &mut dyn PropertyTarget) {
        dispatch!(self, Change::Group(g) => {
            for change in g.iter() {
                change.perform(target);
            }
        }, op => op.perform(target))
    }

    /// Number of leaves, counting nested groups recursively.
    pub fn leaf_count(&self) -> usize {
        match self {
            Change::Group(g) => g.iter().map(Change::leaf_count).sum(),
            _ => 1,
        }
    }

    /// Visit every leaf depth-first.
    pub fn for_each_leaf<'a>(&'a self, visit: &mut dyn FnMut(&'a Change)) {
        match self {
            Change::Group(g) => {
                for change in g.iter() {
                    change.for_each_leaf(visit);
                }
            }
            leaf => visit(leaf),
        }
    }

    // ==================== Constructors ====================

    pub fn name(target: ObjectId, name: impl Into<String>) -> Self {
        ChangeName::new(target, name).into()
    }

    pub fn add_child(
        parent: ObjectId,
        child: ObjectId,
        name: impl Into<String>,
    ) -> Self {
        ChangeAddChild::new(parent, child, name).into()
    }

    pub fn remove(target: ObjectId) -> Self {
        ChangeRemove::new(target).into()
    }

    pub fn connect(point: ObjectId, link: ObjectId) -> Self {
        ChangeConnect::new(point, link).into()
    }

    pub fn disconnect(point: ObjectId, link: ObjectId) -> Self {
        ChangeDisconnect::new(point, link).into()
    }

    pub fn layout(target: ObjectId, layout: impl Into<Option<Rectangle>>) -> Self {
        ChangeLayout::new(target, layout).into()
    }

    pub fn parameter(node: ObjectId, value: Option<&str>) -> Self {
        ChangeParameter::new(node, value.map(str::to_string)).into()
    }

    pub fn alias(site: ObjectId, alias: Option<&str>) -> Self {
        ChangeAlias::new(site, alias.map(str::to_string)).into()
    }

    pub fn extended_data(
        target: ObjectId,
        key: impl Into<String>,
        value: Option<Value>,
    ) -> Self {
        ChangeExtendedData::new(target, key, value).into()
    }

    pub fn add_control(
        signature: ObjectId,
        control: ObjectId,
        name: impl Into<String>,
    ) -> Self {
        ChangeAddControl::new(signature, control, name).into()
    }

    pub fn remove_control(control: ObjectId) -> Self {
        ChangeRemoveControl::new(control).into()
    }

    pub fn control_kind(control: ObjectId, kind: ControlKind) -> Self {
        ChangeControlKind::new(control, kind).into()
    }

    pub fn parameter_policy(control: ObjectId, policy: Option<NamePolicy>) -> Self {
        ChangeParameterPolicy::new(control, policy).into()
    }

    pub fn add_port(
        control: ObjectId,
        spec: ObjectId,
        name: impl Into<String>,
    ) -> Self {
        ChangeAddPort::new(control, spec, name).into()
    }

    pub fn remove_port(spec: ObjectId) -> Self {
        ChangeRemovePort::new(spec).into()
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, Change::Group(g) => write!(f, "{}", g), op => write!(f, "{}", op))
    }
}

macro_rules! impl_from_op {
    ($($variant:ident($op:ty)),* $(,)?) => {
        $(
            impl From<$op> for Change {
                fn from(op: $op) -> Self {
                    Change::$variant(op)
                }
            }
        )*
    };
}

impl_from_op!(
    Group(ChangeGroup),
    Name(ChangeName),
    AddChild(ChangeAddChild),
    Remove(ChangeRemove),
    Connect(ChangeConnect),
    Disconnect(ChangeDisconnect),
    Layout(ChangeLayout),
    Parameter(ChangeParameter),
    Alias(ChangeAlias),
    ExtendedData(ChangeExtendedData),
    AddControl(ChangeAddControl),
    RemoveControl(ChangeRemoveControl),
    ControlKind(ChangeControlKind),
    ParameterPolicy(ChangeParameterPolicy),
    AddPort(ChangeAddPort),
    RemovePort(ChangeRemovePort),
);
