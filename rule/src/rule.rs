//! Reaction rules.

use crate::error::{RuleError, RuleResult};
use bigred_change::{Change, ChangeDescriptor};
use bigred_graph::Model;
use bigred_session::Session;
use bigred_transaction::ExecutorManager;
use tracing::debug;

/// A redex and the changes that turn it into the reactum.
///
/// Changes are stored as descriptors rather than changes, so they refer to
/// objects by name and can be replayed onto any agent with matching names.
#[derive(Debug, Clone, Default)]
pub struct ReactionRule {
    redex: Model,
    changes: Vec<ChangeDescriptor>,
}

impl ReactionRule {
    pub fn new(redex: Model) -> Self {
        Self {
            redex,
            changes: Vec::new(),
        }
    }

    pub fn redex(&self) -> &Model {
        &self.redex
    }

    /// Replace the redex. The changes are kept and resolved against the new
    /// redex the next time the reactum is derived.
    pub fn set_redex(&mut self, redex: Model) {
        self.redex = redex;
    }

    pub fn changes(&self) -> &[ChangeDescriptor] {
        &self.changes
    }

    /// All changes as a single group descriptor.
    pub fn descriptor(&self) -> ChangeDescriptor {
        ChangeDescriptor::group(self.changes.iter().cloned())
    }

    /// Derive the reactum by replaying every change onto a copy of the redex.
    ///
    /// Objects of the redex keep their ids in the reactum.
    pub fn reactum(&self, executor: &ExecutorManager) -> RuleResult<Model> {
        let mut reactum = self.redex.clone();
        for descriptor in &self.changes {
            executor.try_apply_descriptor(&mut reactum, descriptor)?;
        }
        reactum.drain_events();
        Ok(reactum)
    }

    /// Append a change after checking that it applies to the current reactum.
    pub fn add_change(&mut self, executor: &ExecutorManager, descriptor: ChangeDescriptor) -> RuleResult<()> {
        let mut reactum = self.reactum(executor)?;
        executor
            .validator()
            .try_validate_descriptor(&mut reactum, &descriptor)?;
        debug!(descriptor = %descriptor, changes = self.changes.len() + 1, "rule change added");
        self.changes.push(descriptor);
        Ok(())
    }

    /// Append a change built against `reactum`, a model derived with
    /// [`ReactionRule::reactum`].
    pub fn add_described(&mut self, executor: &ExecutorManager, reactum: &Model, change: &Change) -> RuleResult<()> {
        let descriptor =
            ChangeDescriptor::from_change(change, reactum, None).ok_or_else(|| RuleError::undescribable(change))?;
        self.add_change(executor, descriptor)
    }

    /// Remove every change, making the reactum equal to the redex.
    pub fn clear_changes(&mut self) {
        self.changes.clear();
    }

    /// Replay the rule's changes onto a session's agent as one transaction.
    ///
    /// Returns the committed change; it is recorded in the session's history
    /// like any other.
    pub fn apply_to(&self, session: &mut Session) -> RuleResult<Change> {
        debug!(session = session.id(), changes = self.changes.len(), "replaying rule");
        Ok(session.try_apply_descriptor(&self.descriptor())?)
    }
}
