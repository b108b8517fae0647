//! Signature structure: controls, their kinds and policies, and port specs.

use crate::naming::{check_in_signature, check_name, check_parameter, control_name, kind_of};
use crate::{messages, Deferrals, Rejection, StepValidator, Verdict};
use bigred_change::{Change, ChangeName};
use bigred_core::{ControlKind, ObjectId, ObjectKind};
use bigred_graph::View;

/// Checks changes to the signature and keeps the nodes that use its
/// controls consistent with them.
#[derive(Debug, Default)]
pub struct SignatureValidator;

impl SignatureValidator {
    pub fn new() -> Self {
        Self
    }

    fn check(&self, view: View<'_>, change: &Change, deferred: &mut Deferrals) -> Result<Verdict, String> {
        match change {
            Change::AddControl(c) => {
                if kind_of(view, c.signature)? != ObjectKind::Signature
                    || c.signature != view.model().signature()
                {
                    return Err(format!("{} is not this Signature", view.describe(c.signature)));
                }
                expect_kind(view, c.control, ObjectKind::Control)?;
                if view.signature_of(c.control).is_some() {
                    return Err(format!("{} already has a parent", view.describe(c.control)));
                }
                if let Some(name) = c.name.as_deref() {
                    check_name(view, view.namespace_under(c.signature, c.control), c.control, name)?;
                }
                Ok(Verdict::Accepted)
            }
            Change::RemoveControl(c) => {
                expect_kind(view, c.control, ObjectKind::Control)?;
                check_in_signature(view, c.control)?;
                let (control, name) = (c.control, control_name(view, c.control));
                deferred.defer(change, "SignatureValidator", move |view| {
                    check_unused(view, control, &name)
                });
                Ok(Verdict::Accepted)
            }
            Change::ControlKind(c) => {
                expect_kind(view, c.control, ObjectKind::Control)?;
                check_in_signature(view, c.control)?;
                let control = c.control;
                deferred.defer(change, "SignatureValidator", move |view| {
                    check_atomic_nodes(view, control)
                });
                Ok(Verdict::Accepted)
            }
            Change::ParameterPolicy(c) => {
                expect_kind(view, c.control, ObjectKind::Control)?;
                check_in_signature(view, c.control)?;
                let control = c.control;
                deferred.defer(change, "SignatureValidator", move |view| {
                    view.nodes_with_control(control)
                        .into_iter()
                        .try_for_each(|node| check_parameter(view, node))
                });
                Ok(Verdict::Accepted)
            }
            Change::AddPort(c) => {
                expect_kind(view, c.control, ObjectKind::Control)?;
                expect_kind(view, c.spec, ObjectKind::PortSpec)?;
                check_in_signature(view, c.control)?;
                if view.control_of(c.spec).is_some() {
                    return Err(format!("{} already has a parent", view.describe(c.spec)));
                }
                if let Some(name) = c.name.as_deref() {
                    check_name(view, view.namespace_under(c.control, c.spec), c.spec, name)?;
                }
                let (control, name) = (c.control, control_name(view, c.control));
                deferred.defer(change, "SignatureValidator", move |view| {
                    check_unused(view, control, &name)
                });
                Ok(Verdict::Accepted)
            }
            Change::RemovePort(c) => {
                expect_kind(view, c.spec, ObjectKind::PortSpec)?;
                let Some(control) = view.control_of(c.spec) else {
                    return Err(format!("{} is not part of a control", view.describe(c.spec)));
                };
                check_in_signature(view, control)?;
                let name = control_name(view, control);
                deferred.defer(change, "SignatureValidator", move |view| {
                    check_unused(view, control, &name)
                });
                Ok(Verdict::Accepted)
            }
            Change::Name(c) => self.rename(view, c),
            Change::Group(_)
            | Change::AddChild(_)
            | Change::Remove(_)
            | Change::Connect(_)
            | Change::Disconnect(_)
            | Change::Layout(_)
            | Change::Parameter(_)
            | Change::Alias(_)
            | Change::ExtendedData(_) => Ok(Verdict::Unrecognised),
        }
    }

    fn rename(&self, view: View<'_>, c: &ChangeName) -> Result<Verdict, String> {
        let control = match kind_of(view, c.target)? {
            ObjectKind::Control => c.target,
            ObjectKind::PortSpec => view
                .control_of(c.target)
                .ok_or_else(|| format!("{} is not part of a control", view.describe(c.target)))?,
            _ => return Ok(Verdict::Unrecognised),
        };
        check_in_signature(view, control)?;
        if let Some(name) = c.new_name.as_deref() {
            check_name(view, view.namespace_of(c.target), c.target, name)?;
        }
        Ok(Verdict::Accepted)
    }
}

fn expect_kind(view: View<'_>, id: ObjectId, expected: ObjectKind) -> Result<(), String> {
    let actual = kind_of(view, id)?;
    if actual == expected {
        Ok(())
    } else {
        Err(format!("{} is not a {}", view.describe(id), expected.type_name()))
    }
}

/// Ports are created with their node, so a control's port specs are fixed
/// while any node uses it. Checked once the whole batch has been simulated.
fn check_unused(view: View<'_>, control: ObjectId, name: &str) -> Result<(), String> {
    match view.nodes_with_control(control).first() {
        Some(node) => Err(format!(
            "The control {} is still used by {}",
            name,
            view.describe(*node)
        )),
        None => Ok(()),
    }
}

fn check_atomic_nodes(view: View<'_>, control: ObjectId) -> Result<(), String> {
    if view.control_kind(control) != ControlKind::Atomic {
        return Ok(());
    }
    for node in view.nodes_with_control(control) {
        if !view.children(node).is_empty() {
            return Err(format!(
                "{} has children, but {} {}",
                view.describe(node),
                control_name(view, control),
                messages::IS_ATOMIC
            ));
        }
    }
    Ok(())
}

impl StepValidator for SignatureValidator {
    fn name(&self) -> &'static str {
        "SignatureValidator"
    }

    fn validate_step(
        &self,
        view: View<'_>,
        change: &Change,
        deferred: &mut Deferrals,
    ) -> Result<Verdict, Rejection> {
        self.check(view, change, deferred)
            .map_err(|rationale| Rejection::new(change, self.name(), rationale))
    }
}
