//! The validator participant contract.

use crate::Rejection;
use bigred_change::Change;
use bigred_graph::View;
use std::fmt;

/// How a validator responded to a leaf it did not reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The validator checks this kind of change and found nothing wrong.
    Accepted,
    /// The validator does not deal with this kind of change.
    Unrecognised,
}

/// A check that runs once the whole batch has been simulated.
pub struct DeferredCheck {
    pub change: Change,
    pub validator: &'static str,
    check: Box<dyn Fn(View<'_>) -> Result<(), String>>,
}

impl DeferredCheck {
    pub fn run(&self, view: View<'_>) -> Result<(), Rejection> {
        (self.check)(view).map_err(|rationale| Rejection::new(&self.change, self.validator, rationale))
    }
}

impl fmt::Debug for DeferredCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredCheck")
            .field("change", &self.change)
            .field("validator", &self.validator)
            .finish_non_exhaustive()
    }
}

/// Deferred checks collected during one validation pass.
#[derive(Debug, Default)]
pub struct Deferrals {
    checks: Vec<DeferredCheck>,
}

impl Deferrals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a check against the final state of the batch.
    pub fn defer<F>(&mut self, change: &Change, validator: &'static str, check: F)
    where
        F: Fn(View<'_>) -> Result<(), String> + 'static,
    {
        self.checks.push(DeferredCheck {
            change: change.clone(),
            validator,
            check: Box::new(check),
        });
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Run every queued check in order, stopping at the first rejection.
    pub fn run(&self, view: View<'_>) -> Result<(), Rejection> {
        self.checks.iter().try_for_each(|check| check.run(view))
    }
}

/// A participant that is offered every leaf change during validation.
///
/// `view` shows the model as left by the leaves validated before this one.
/// Implementations match every change kind explicitly so a new kind cannot
/// slip past them unnoticed.
pub trait StepValidator {
    /// Name reported in rejections.
    fn name(&self) -> &'static str;

    fn validate_step(
        &self,
        view: View<'_>,
        change: &Change,
        deferred: &mut Deferrals,
    ) -> Result<Verdict, Rejection>;
}
