//! Scenario runner.

use bigred_change::Change;
use bigred_session::Session;

use crate::assertion::StepOutcome;
use crate::error::{ScenarioError, ScenarioResult};
use crate::loader::{Operation, Operations};
use crate::scenario::Scenario;

/// Runs one scenario against a session of its own.
pub struct Runner<'s> {
    scenario: &'s Scenario,
    seeds: Vec<Operations>,
    operations: Operations,
}

impl<'s> Runner<'s> {
    /// Load everything the scenario refers to, so a missing or malformed
    /// file fails before any step runs.
    pub fn new(scenario: &'s Scenario) -> ScenarioResult<Self> {
        Ok(Self {
            scenario,
            seeds: scenario.load_seeds()?,
            operations: scenario.load_operations()?,
        })
    }

    pub fn run(&self) -> ScenarioResult<()> {
        let mut session = Session::new(1, self.scenario.engine_config().clone());

        for seed in &self.seeds {
            for (step, operation) in seed.iter() {
                perform(&mut session, operation).map_err(|message| ScenarioError::SeedRejected {
                    origin: seed.origin().to_string(),
                    step: step.to_string(),
                    message,
                })?;
            }
        }

        for step in self.scenario.steps() {
            let operation = self
                .operations
                .get(&step.name)
                .ok_or_else(|| ScenarioError::UnknownStep {
                    origin: self.operations.origin().to_string(),
                    step: step.name.clone(),
                })?;
            let outcome = perform(&mut session, operation);
            tracing::trace!(step = %step.name, ok = outcome.is_ok(), "step performed");
            step.assertion.verify(&step.name, &outcome, &session)?;
        }
        Ok(())
    }
}

/// Perform one operation, reporting the number of leaves it committed.
fn perform(session: &mut Session, operation: &Operation) -> StepOutcome {
    let committed = |change: Change| change.leaf_count();
    match operation {
        Operation::Apply(descriptor) => session
            .try_apply_descriptor(descriptor)
            .map(committed)
            .map_err(|e| e.to_string()),
        Operation::Validate(descriptor) => session
            .try_validate_descriptor(descriptor)
            .map(|()| 0)
            .map_err(|e| e.to_string()),
        Operation::Undo => session.undo().map(committed).map_err(|e| e.to_string()),
        Operation::Redo => session.redo().map(committed).map_err(|e| e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_inline_scenario_runs_and_undoes() {
        // GIVEN
        let source = r#"
--# add_root
{"AddChild": {"parent": "Bigraph", "child": {"Root": {"name": "0"}}}}

--# undo
UNDO
"#;

        // WHEN
        let result = Scenario::inline("inline", source)
            .unwrap()
            .step("add_root", |a| a.leaves(1).exists(Identifier::root("0")))
            .step("undo", |a| a.absent(Identifier::root("0")).can_redo(true))
            .run();

        // THEN
        assert!(result.is_ok(), "{:?}", result);
    }

    #[test]
    fn test_unknown_step_reported_with_origin() {
        let scenario = Scenario::inline("inline", "--# undo\nUNDO\n")
            .unwrap()
            .step("redo", |a| a);

        let error = scenario.run().unwrap_err();

        assert_eq!(error.to_string(), "<inline> has no step named 'redo'");
    }

    #[test]
    fn test_unmet_expectation_names_the_step() {
        let scenario = Scenario::inline("inline", "--# undo\nUNDO\n")
            .unwrap()
            .step("undo", |a| a.leaves(0));

        let error = scenario.run().unwrap_err();

        assert!(matches!(error, ScenarioError::Unmet { ref step, .. } if step == "undo"));
    }

    #[test]
    fn test_missing_seed_fails_before_any_step() {
        let scenario = Scenario::new("missing", "names.ops")
            .seed("no_such_seed.ops")
            .step("add_root", |a| a);

        assert!(matches!(scenario.run(), Err(ScenarioError::Read { .. })));
    }
}
