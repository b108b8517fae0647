//! Executors: the participants that write validated changes to the model.

use crate::ChangeResult;
use bigred_change::Change;
use bigred_core::ObjectKind;
use bigred_graph::Model;

/// A participant offered every validated leaf during application.
pub trait StepExecutor {
    fn name(&self) -> &'static str;

    /// Apply `change` if this executor handles its kind.
    ///
    /// Returns false, leaving the model untouched, for kinds it doesn't handle.
    fn execute_step(&self, model: &mut Model, change: &Change) -> bool;
}

/// Something changes can be validated against and applied to.
pub trait ChangeExecutor {
    /// Check that a change could be applied, without applying it.
    fn try_validate_change(&self, change: &Change) -> ChangeResult<()>;

    /// Validate a change and, if that succeeds, apply it.
    ///
    /// The change is snapshotted as it is applied, so afterwards its
    /// `inverse` undoes it.
    fn try_apply_change(&mut self, change: &mut Change) -> ChangeResult<()>;
}

/// Applies changes to the bigraph's place and link structure.
#[derive(Debug, Default)]
pub struct BigraphExecutor;

impl StepExecutor for BigraphExecutor {
    fn name(&self) -> &'static str {
        "BigraphExecutor"
    }

    fn execute_step(&self, model: &mut Model, change: &Change) -> bool {
        let handled = match change {
            Change::Name(c) => model.kind(c.target).is_some_and(|k| k.is_layoutable()),
            Change::AddChild(_)
            | Change::Remove(_)
            | Change::Connect(_)
            | Change::Disconnect(_)
            | Change::Layout(_)
            | Change::Parameter(_)
            | Change::Alias(_) => true,
            Change::Group(_)
            | Change::ExtendedData(_)
            | Change::AddControl(_)
            | Change::RemoveControl(_)
            | Change::ControlKind(_)
            | Change::ParameterPolicy(_)
            | Change::AddPort(_)
            | Change::RemovePort(_) => false,
        };
        if handled {
            change.apply(model);
        }
        handled
    }
}

/// Applies changes to the signature.
#[derive(Debug, Default)]
pub struct SignatureExecutor;

impl StepExecutor for SignatureExecutor {
    fn name(&self) -> &'static str {
        "SignatureExecutor"
    }

    fn execute_step(&self, model: &mut Model, change: &Change) -> bool {
        let handled = match change {
            Change::Name(c) => matches!(
                model.kind(c.target),
                Some(ObjectKind::Control | ObjectKind::PortSpec)
            ),
            Change::AddControl(_)
            | Change::RemoveControl(_)
            | Change::ControlKind(_)
            | Change::ParameterPolicy(_)
            | Change::AddPort(_)
            | Change::RemovePort(_) => true,
            Change::Group(_)
            | Change::AddChild(_)
            | Change::Remove(_)
            | Change::Connect(_)
            | Change::Disconnect(_)
            | Change::Layout(_)
            | Change::Parameter(_)
            | Change::Alias(_)
            | Change::ExtendedData(_) => false,
        };
        if handled {
            change.apply(model);
        }
        handled
    }
}

/// Applies extended data changes to any object.
#[derive(Debug, Default)]
pub struct DataExecutor;

impl StepExecutor for DataExecutor {
    fn name(&self) -> &'static str {
        "DataExecutor"
    }

    fn execute_step(&self, model: &mut Model, change: &Change) -> bool {
        let handled = match change {
            Change::ExtendedData(_) => true,
            Change::Group(_)
            | Change::Name(_)
            | Change::AddChild(_)
            | Change::Remove(_)
            | Change::Connect(_)
            | Change::Disconnect(_)
            | Change::Layout(_)
            | Change::Parameter(_)
            | Change::Alias(_)
            | Change::AddControl(_)
            | Change::RemoveControl(_)
            | Change::ControlKind(_)
            | Change::ParameterPolicy(_)
            | Change::AddPort(_)
            | Change::RemovePort(_) => false,
        };
        if handled {
            change.apply(model);
        }
        handled
    }
}
