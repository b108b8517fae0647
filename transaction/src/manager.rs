//! Validator and executor managers.

use crate::{
    BigraphExecutor, ChangeError, ChangeResult, DataExecutor, DivergencePolicy, EngineConfig,
    SignatureExecutor, StepExecutor,
};
use bigred_change::Change;
use bigred_constraint::{
    messages, ContainerValidator, DataValidator, Deferrals, LayoutValidator, NodeValidator,
    PointValidator, Rejection, SignatureValidator, StepValidator, Verdict,
};
use bigred_core::PropertyScratchpad;
use bigred_graph::Model;
use tracing::{debug, trace, warn};

/// Runs changes past every registered validator.
///
/// Validation never touches the live model: each accepted leaf is
/// simulated into a scratchpad that the following leaves are validated
/// against, and deferred checks run against the final scratchpad.
pub struct ValidatorManager {
    validators: Vec<Box<dyn StepValidator>>,
}

impl Default for ValidatorManager {
    fn default() -> Self {
        Self::with_defaults(&EngineConfig::default())
    }
}

impl ValidatorManager {
    /// A manager with no validators, which recognises nothing.
    pub fn new() -> Self {
        Self {
            validators: Vec::new(),
        }
    }

    /// A manager with the structural validators for bigraphs and signatures.
    pub fn with_defaults(config: &EngineConfig) -> Self {
        let mut manager = Self::new();
        manager.add_validator(Box::new(ContainerValidator::new()));
        manager.add_validator(Box::new(PointValidator::new()));
        manager.add_validator(Box::new(LayoutValidator::new(config.governed_layout)));
        manager.add_validator(Box::new(NodeValidator::new()));
        manager.add_validator(Box::new(SignatureValidator::new()));
        manager.add_validator(Box::new(DataValidator::new()));
        manager
    }

    pub fn add_validator(&mut self, validator: Box<dyn StepValidator>) {
        self.validators.push(validator);
    }

    /// Remove a validator by name.
    pub fn remove_validator(&mut self, name: &str) -> Option<Box<dyn StepValidator>> {
        let index = self.validators.iter().position(|v| v.name() == name)?;
        Some(self.validators.remove(index))
    }

    /// Names of the registered validators, in the order they are consulted.
    pub fn validator_names(&self) -> Vec<&'static str> {
        self.validators.iter().map(|v| v.name()).collect()
    }

    /// Validate a change.
    ///
    /// On success returns the scratchpad holding the change's effect, which
    /// can be read through [`Model::view_with`] as a preview.
    pub fn try_validate_change(&self, model: &Model, change: &Change) -> ChangeResult<PropertyScratchpad> {
        debug!(leaves = change.leaf_count(), "validating change");
        let mut scratch = PropertyScratchpad::new();
        let mut deferred = Deferrals::new();
        self.validate_into(model, &mut scratch, &mut deferred, change)?;
        self.finish(model, &scratch, &deferred)?;
        Ok(scratch)
    }

    fn validate_into(
        &self,
        model: &Model,
        scratch: &mut PropertyScratchpad,
        deferred: &mut Deferrals,
        change: &Change,
    ) -> ChangeResult<()> {
        match change {
            Change::Group(group) => group
                .iter()
                .try_for_each(|member| self.validate_into(model, scratch, deferred, member)),
            leaf => self.validate_leaf(model, scratch, deferred, leaf),
        }
    }

    /// Offer one leaf to every validator, then simulate it.
    pub(crate) fn validate_leaf(
        &self,
        model: &Model,
        scratch: &mut PropertyScratchpad,
        deferred: &mut Deferrals,
        leaf: &Change,
    ) -> ChangeResult<()> {
        if !leaf.is_ready() {
            warn!(change = %leaf, "change is not ready");
            return Err(ChangeError::not_ready(leaf));
        }

        let view = model.view_with(scratch);
        let mut recognised = false;
        for validator in &self.validators {
            match validator.validate_step(view, leaf, deferred) {
                Ok(Verdict::Accepted) => recognised = true,
                Ok(Verdict::Unrecognised) => {}
                Err(rejection) => return Err(rejected(rejection)),
            }
        }
        if !recognised {
            let rationale = format!("{} {}", leaf, messages::NOT_RECOGNISED);
            return Err(rejected(Rejection::new(leaf, "ValidatorManager", rationale)));
        }

        trace!(change = %leaf, "leaf accepted");
        leaf.simulate(model, scratch);
        Ok(())
    }

    /// Run the deferred checks against the final state of the batch.
    pub(crate) fn finish(
        &self,
        model: &Model,
        scratch: &PropertyScratchpad,
        deferred: &Deferrals,
    ) -> ChangeResult<()> {
        trace!(checks = deferred.len(), "running deferred checks");
        deferred.run(model.view_with(scratch)).map_err(rejected)
    }
}

fn rejected(rejection: Rejection) -> ChangeError {
    warn!(
        validator = %rejection.validator,
        change = %rejection.change,
        rationale = %rejection.rationale,
        "change rejected"
    );
    ChangeError::Rejected(rejection)
}

/// Applies validated changes through every registered executor.
pub struct ExecutorManager {
    validator: ValidatorManager,
    executors: Vec<Box<dyn StepExecutor>>,
    divergence: DivergencePolicy,
}

impl Default for ExecutorManager {
    fn default() -> Self {
        Self::with_defaults(&EngineConfig::default())
    }
}

impl ExecutorManager {
    /// A manager with no executors.
    pub fn new(validator: ValidatorManager, divergence: DivergencePolicy) -> Self {
        Self {
            validator,
            executors: Vec::new(),
            divergence,
        }
    }

    /// The default validators and executors for `config`.
    pub fn with_defaults(config: &EngineConfig) -> Self {
        let mut manager = Self::new(ValidatorManager::with_defaults(config), config.divergence);
        manager.add_executor(Box::new(BigraphExecutor));
        manager.add_executor(Box::new(SignatureExecutor));
        manager.add_executor(Box::new(DataExecutor));
        manager
    }

    pub fn add_executor(&mut self, executor: Box<dyn StepExecutor>) {
        self.executors.push(executor);
    }

    pub fn validator(&self) -> &ValidatorManager {
        &self.validator
    }

    pub fn validator_mut(&mut self) -> &mut ValidatorManager {
        &mut self.validator
    }

    pub fn divergence(&self) -> DivergencePolicy {
        self.divergence
    }

    pub fn try_validate_change(&self, model: &Model, change: &Change) -> ChangeResult<PropertyScratchpad> {
        self.validator.try_validate_change(model, change)
    }

    /// Validate a change and, if that succeeds, apply it leaf by leaf.
    ///
    /// Each leaf is snapshotted against the live model immediately before it
    /// is applied, so on success `change.inverse()` undoes the whole change.
    pub fn try_apply_change(&self, model: &mut Model, change: &mut Change) -> ChangeResult<()> {
        self.validator.try_validate_change(model, change)?;
        debug!(leaves = change.leaf_count(), "applying change");
        self.apply_into(model, change)
    }

    fn apply_into(&self, model: &mut Model, change: &mut Change) -> ChangeResult<()> {
        match change {
            Change::Group(group) => group
                .iter_mut()
                .try_for_each(|member| self.apply_into(model, member)),
            leaf => {
                leaf.before_apply(model.view());
                match self.executors.iter().find(|e| e.execute_step(model, leaf)) {
                    Some(executor) => {
                        trace!(executor = executor.name(), change = %leaf, "leaf applied");
                        Ok(())
                    }
                    None => self.diverged(leaf),
                }
            }
        }
    }

    fn diverged(&self, leaf: &Change) -> ChangeResult<()> {
        warn!(change = %leaf, "validated change was not applied by any executor");
        match self.divergence {
            DivergencePolicy::Panic => {
                panic!("{} was validated, but no executor applied it", leaf)
            }
            DivergencePolicy::Error => Err(ChangeError::Diverged {
                change: leaf.clone(),
            }),
        }
    }
}
