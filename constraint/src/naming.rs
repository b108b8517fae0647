//! Checks shared by several validators.

use crate::messages;
use bigred_core::{NamespaceKind, ObjectId, ObjectKind};
use bigred_graph::View;

/// The kind of an object, or a rationale if the model doesn't know it.
pub(crate) fn kind_of(view: View<'_>, id: ObjectId) -> Result<ObjectKind, String> {
    view.kind(id)
        .ok_or_else(|| format!("{} is not part of this model", id))
}

/// Require `id` to be part of the model's bigraph.
pub(crate) fn check_in_bigraph(view: View<'_>, id: ObjectId) -> Result<(), String> {
    match view.bigraph_of(id) {
        Some(bigraph) if bigraph == view.model().bigraph() => Ok(()),
        _ => Err(format!("{} is not part of this Bigraph", view.describe(id))),
    }
}

/// Require `control` to be part of the model's signature.
pub(crate) fn check_in_signature(view: View<'_>, control: ObjectId) -> Result<(), String> {
    if view.signature_of(control) == Some(view.model().signature()) {
        Ok(())
    } else {
        Err(format!("The control {} is not part of this Signature", view.describe(control)))
    }
}

/// Check that `id` may carry `name` in a namespace.
///
/// Objects outside every namespace are not subject to any checks.
pub(crate) fn check_name(
    view: View<'_>,
    namespace: Option<(ObjectId, NamespaceKind)>,
    id: ObjectId,
    name: &str,
) -> Result<(), String> {
    let Some((owner, kind)) = namespace else {
        return Ok(());
    };
    if let Some(existing) = view.lookup(owner, kind, name) {
        if existing != id {
            return Err(messages::NAMES_MUST_BE_UNIQUE.to_string());
        }
    }
    let legal = view
        .model()
        .namespace(owner, kind)
        .map_or(true, |ns| ns.policy().is_legal(name));
    if !legal {
        return Err(format!("\"{}\" is not a valid name for {}", name, view.describe(id)));
    }
    Ok(())
}

/// The name of a control for use in rationales.
pub(crate) fn control_name(view: View<'_>, control: ObjectId) -> String {
    view.name(control).unwrap_or_else(|| control.to_string())
}

/// Check a node's parameter against its control's policy.
pub(crate) fn check_parameter(view: View<'_>, node: ObjectId) -> Result<(), String> {
    let Some(value) = view.parameter(node) else {
        return Ok(());
    };
    let Some(control) = view.control(node) else {
        return Err(format!("{} has no control", view.describe(node)));
    };
    match view.parameter_policy(control) {
        None => Err(format!(
            "Control {} {}",
            control_name(view, control),
            messages::NO_PARAMETER
        )),
        Some(policy) if !policy.is_legal(&value) => Err(format!(
            "\"{}\" is not a valid value for the parameter of {}",
            value,
            control_name(view, control)
        )),
        Some(_) => Ok(()),
    }
}
