//! SIGNATURE operations - controls, their kinds, parameter policies and port specs.

use super::{attach, detach, position_in, Operation, Slot};
use crate::Change;
use bigred_core::{ControlKind, NamePolicy, ObjectId, Property, PropertyValue};
use bigred_graph::{PropertyTarget, View};
use std::fmt;

fn control_slot(signature: ObjectId) -> Slot {
    Slot {
        owner: signature,
        list: Property::Controls,
        back: Property::Signature,
    }
}

fn port_slot(control: ObjectId) -> Slot {
    Slot {
        owner: control,
        list: Property::PortSpecs,
        back: Property::Control,
    }
}

/// Add a detached control to a signature.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeAddControl {
    pub signature: ObjectId,
    pub control: ObjectId,
    pub name: Option<String>,
    pub position: Option<usize>,
}

impl ChangeAddControl {
    pub fn new(signature: ObjectId, control: ObjectId, name: impl Into<String>) -> Self {
        Self {
            signature,
            control,
            name: Some(name.into()),
            position: None,
        }
    }
}

impl Operation for ChangeAddControl {
    fn is_ready(&self) -> bool {
        self.name.is_some()
    }

    fn inverse(&self) -> Option<Change> {
        Some(ChangeRemoveControl::new(self.control).into())
    }

    fn perform(&self, target: &mut dyn PropertyTarget) {
        let Some(name) = &self.name else {
            return;
        };
        let namespace = target.view().namespace_under(self.signature, self.control);
        let slot = control_slot(self.signature);
        attach(target, slot, self.control, namespace, name, self.position);
    }
}

impl fmt::Display for ChangeAddControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Change(add control {} to signature {} with name {:?})",
            self.control, self.signature, self.name
        )
    }
}

/// Remove a control from its signature.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeRemoveControl {
    pub control: ObjectId,
    old_signature: Option<ObjectId>,
    old_name: Option<String>,
    old_position: Option<usize>,
}

impl ChangeRemoveControl {
    pub fn new(control: ObjectId) -> Self {
        Self {
            control,
            old_signature: None,
            old_name: None,
            old_position: None,
        }
    }
}

impl Operation for ChangeRemoveControl {
    fn before_apply(&mut self, view: View<'_>) {
        self.old_signature = view.signature_of(self.control);
        self.old_name = view.name(self.control);
        self.old_position = self
            .old_signature
            .and_then(|sig| position_in(view, sig, &Property::Controls, self.control));
    }

    fn can_invert(&self) -> bool {
        self.old_signature.is_some() && self.old_name.is_some()
    }

    fn inverse(&self) -> Option<Change> {
        Some(
            ChangeAddControl {
                signature: self.old_signature?,
                control: self.control,
                name: Some(self.old_name.clone()?),
                position: self.old_position,
            }
            .into(),
        )
    }

    fn perform(&self, target: &mut dyn PropertyTarget) {
        let view = target.view();
        let Some(signature) = view.signature_of(self.control) else {
            return;
        };
        let namespace = view.namespace_of(self.control);
        detach(target, control_slot(signature), self.control, namespace);
    }
}

impl fmt::Display for ChangeRemoveControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Change(remove control {})", self.control)
    }
}

/// Change the kind of a control.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeControlKind {
    pub control: ObjectId,
    pub new_kind: ControlKind,
    old_kind: Option<ControlKind>,
}

impl ChangeControlKind {
    pub fn new(control: ObjectId, new_kind: ControlKind) -> Self {
        Self {
            control,
            new_kind,
            old_kind: None,
        }
    }
}

impl Operation for ChangeControlKind {
    fn before_apply(&mut self, view: View<'_>) {
        self.old_kind = Some(view.control_kind(self.control));
    }

    fn can_invert(&self) -> bool {
        self.old_kind.is_some()
    }

    fn inverse(&self) -> Option<Change> {
        Some(ChangeControlKind::new(self.control, self.old_kind?).into())
    }

    fn perform(&self, target: &mut dyn PropertyTarget) {
        target.set(self.control, Property::Kind, PropertyValue::Kind(self.new_kind));
    }
}

impl fmt::Display for ChangeControlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Change(set kind of {} to {})", self.control, self.new_kind)
    }
}

/// Set or clear the parameter policy of a control.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeParameterPolicy {
    pub control: ObjectId,
    pub new_policy: Option<NamePolicy>,
    old_policy: Option<Option<NamePolicy>>,
}

impl ChangeParameterPolicy {
    pub fn new(control: ObjectId, new_policy: Option<NamePolicy>) -> Self {
        Self {
            control,
            new_policy,
            old_policy: None,
        }
    }
}

impl Operation for ChangeParameterPolicy {
    fn before_apply(&mut self, view: View<'_>) {
        self.old_policy = Some(view.parameter_policy(self.control));
    }

    fn can_invert(&self) -> bool {
        self.old_policy.is_some()
    }

    fn inverse(&self) -> Option<Change> {
        Some(ChangeParameterPolicy::new(self.control, self.old_policy.clone()?).into())
    }

    fn perform(&self, target: &mut dyn PropertyTarget) {
        target.set(
            self.control,
            Property::ParameterPolicy,
            self.new_policy.clone().into(),
        );
    }
}

impl fmt::Display for ChangeParameterPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.new_policy {
            Some(policy) => write!(f, "Change(set parameter policy of {} to {})", self.control, policy),
            None => write!(f, "Change(clear parameter policy of {})", self.control),
        }
    }
}

/// Add a detached port spec to a control.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeAddPort {
    pub control: ObjectId,
    pub spec: ObjectId,
    pub name: Option<String>,
    pub position: Option<usize>,
}

impl ChangeAddPort {
    pub fn new(control: ObjectId, spec: ObjectId, name: impl Into<String>) -> Self {
        Self {
            control,
            spec,
            name: Some(name.into()),
            position: None,
        }
    }
}

impl Operation for ChangeAddPort {
    fn is_ready(&self) -> bool {
        self.name.is_some()
    }

    fn inverse(&self) -> Option<Change> {
        Some(ChangeRemovePort::new(self.spec).into())
    }

    fn perform(&self, target: &mut dyn PropertyTarget) {
        let Some(name) = &self.name else {
            return;
        };
        let namespace = target.view().namespace_under(self.control, self.spec);
        attach(target, port_slot(self.control), self.spec, namespace, name, self.position);
    }
}

impl fmt::Display for ChangeAddPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Change(add port spec {} to control {} with name {:?})",
            self.spec, self.control, self.name
        )
    }
}

/// Remove a port spec from its control.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeRemovePort {
    pub spec: ObjectId,
    old_control: Option<ObjectId>,
    old_name: Option<String>,
    old_position: Option<usize>,
}

impl ChangeRemovePort {
    pub fn new(spec: ObjectId) -> Self {
        Self {
            spec,
            old_control: None,
            old_name: None,
            old_position: None,
        }
    }
}

impl Operation for ChangeRemovePort {
    fn before_apply(&mut self, view: View<'_>) {
        self.old_control = view.control_of(self.spec);
        self.old_name = view.name(self.spec);
        self.old_position = self
            .old_control
            .and_then(|control| position_in(view, control, &Property::PortSpecs, self.spec));
    }

    fn can_invert(&self) -> bool {
        self.old_control.is_some() && self.old_name.is_some()
    }

    fn inverse(&self) -> Option<Change> {
        Some(
            ChangeAddPort {
                control: self.old_control?,
                spec: self.spec,
                name: Some(self.old_name.clone()?),
                position: self.old_position,
            }
            .into(),
        )
    }

    fn perform(&self, target: &mut dyn PropertyTarget) {
        let view = target.view();
        let Some(control) = view.control_of(self.spec) else {
            return;
        };
        let namespace = view.namespace_of(self.spec);
        detach(target, port_slot(control), self.spec, namespace);
    }
}

impl fmt::Display for ChangeRemovePort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Change(remove port spec {})", self.spec)
    }
}
