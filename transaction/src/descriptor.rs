//! Materialising change descriptors.
//!
//! Descriptors are resolved one leaf at a time: each leaf is turned into a
//! change against the scratchpad left by the leaves before it, validated,
//! and simulated, so a later leaf can refer to an object an earlier one
//! added or renamed.

use crate::{ChangeError, ChangeResult, ExecutorManager, ValidatorManager};
use bigred_change::{Change, ChangeDescriptor, ChangeGroup};
use bigred_constraint::Deferrals;
use bigred_core::PropertyScratchpad;
use bigred_graph::Model;
use tracing::debug;

impl ValidatorManager {
    /// Resolve and validate a descriptor without applying it.
    ///
    /// Objects instantiated while resolving are disposed again afterwards.
    pub fn try_validate_descriptor(&self, model: &mut Model, descriptor: &ChangeDescriptor) -> ChangeResult<()> {
        let mark = model.id_mark();
        let result = self.materialise(model, descriptor);
        model.discard_detached_since(mark);
        result.map(|_| ())
    }

    /// Resolve a descriptor into a change that has passed validation.
    fn materialise(&self, model: &mut Model, descriptor: &ChangeDescriptor) -> ChangeResult<Change> {
        debug!(descriptor = %descriptor, "materialising descriptor");
        let mut scratch = PropertyScratchpad::new();
        let mut deferred = Deferrals::new();
        let change = self.materialise_into(model, &mut scratch, &mut deferred, descriptor)?;
        self.finish(model, &scratch, &deferred)?;
        Ok(change)
    }

    fn materialise_into(
        &self,
        model: &mut Model,
        scratch: &mut PropertyScratchpad,
        deferred: &mut Deferrals,
        descriptor: &ChangeDescriptor,
    ) -> ChangeResult<Change> {
        match descriptor {
            ChangeDescriptor::Group(members) => {
                let mut group = ChangeGroup::new();
                for member in members {
                    group.push(self.materialise_into(model, scratch, deferred, member)?);
                }
                Ok(group.into())
            }
            leaf => {
                let change = leaf
                    .create_change(scratch, model)
                    .map_err(|source| ChangeError::creation_failed(leaf, source))?;
                self.validate_leaf(model, scratch, deferred, &change)?;
                Ok(change)
            }
        }
    }
}

impl ExecutorManager {
    /// Resolve a descriptor against `model` and apply the resulting change.
    ///
    /// Returns the applied change, ready to be inverted. On failure the
    /// model is left as it was, and objects instantiated for the
    /// descriptor are disposed again.
    pub fn try_apply_descriptor(&self, model: &mut Model, descriptor: &ChangeDescriptor) -> ChangeResult<Change> {
        let mark = model.id_mark();
        let result = self
            .validator()
            .materialise(model, descriptor)
            .and_then(|mut change| {
                self.try_apply_change(model, &mut change)?;
                Ok(change)
            });
        if result.is_err() {
            model.discard_detached_since(mark);
        }
        result
    }
}
