//! Assertion types and builders for verifying step results.

use bigred_graph::{Identifier, View};
use bigred_session::Session;

use crate::error::{ScenarioError, ScenarioResult};

/// What a step produced: the number of leaves committed, or the error text.
pub type StepOutcome = Result<usize, String>;

/// A complete assertion for a step result.
///
/// State checks run against the session after the step, whether or not
/// it failed, so a rejected step can also be checked for having left the
/// model alone.
#[derive(Default)]
pub struct Assertion {
    // Outcome assertions
    pub leaves: Option<usize>,
    pub error: Option<String>,
    pub error_pattern: Option<String>,

    // State assertions
    pub exists: Vec<Identifier>,
    pub absent: Vec<Identifier>,
    pub parents: Vec<(Identifier, Identifier)>,
    pub connections: Vec<(Identifier, Identifier)>,
    pub disconnected: Vec<Identifier>,
    pub can_undo: Option<bool>,
    pub can_redo: Option<bool>,

    // Custom assertion function
    #[allow(clippy::type_complexity)]
    pub custom: Option<Box<dyn Fn(&Session) -> bool>>,
}

impl std::fmt::Debug for Assertion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Assertion")
            .field("leaves", &self.leaves)
            .field("error", &self.error)
            .field("error_pattern", &self.error_pattern)
            .field("exists", &self.exists)
            .field("absent", &self.absent)
            .field("parents", &self.parents)
            .field("connections", &self.connections)
            .field("disconnected", &self.disconnected)
            .field("custom", &self.custom.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl Assertion {
    /// Create a new empty assertion.
    pub fn new() -> Self {
        Self::default()
    }

    /// Verify the assertion against a step outcome and the session after it.
    pub fn verify(&self, step: &str, outcome: &StepOutcome, session: &Session) -> ScenarioResult<()> {
        self.verify_outcome(step, outcome)?;
        self.verify_state(step, session.view())?;

        if let Some(expected) = self.can_undo {
            if session.can_undo() != expected {
                return Err(ScenarioError::unmet(
                    step,
                    format!("expected can_undo to be {}", expected),
                ));
            }
        }

        if let Some(expected) = self.can_redo {
            if session.can_redo() != expected {
                return Err(ScenarioError::unmet(
                    step,
                    format!("expected can_redo to be {}", expected),
                ));
            }
        }

        if let Some(ref custom) = self.custom {
            if !custom(session) {
                return Err(ScenarioError::unmet(step, "custom assertion failed"));
            }
        }

        Ok(())
    }

    fn verify_outcome(&self, step: &str, outcome: &StepOutcome) -> ScenarioResult<()> {
        if let Some(ref expected_error) = self.error {
            return match outcome {
                Err(msg) if msg.contains(expected_error) => Ok(()),
                Err(msg) => Err(ScenarioError::unmet(
                    step,
                    format!("expected error containing '{}', got: {}", expected_error, msg),
                )),
                Ok(_) => Err(ScenarioError::unmet(
                    step,
                    format!("expected error containing '{}', but step succeeded", expected_error),
                )),
            };
        }

        if let Some(ref pattern) = self.error_pattern {
            let re = regex_lite::Regex::new(pattern).map_err(|e| {
                ScenarioError::unmet(step, format!("invalid regex pattern: {}", e))
            })?;
            return match outcome {
                Err(msg) if re.is_match(msg) => Ok(()),
                Err(msg) => Err(ScenarioError::unmet(
                    step,
                    format!("expected error matching '{}', got: {}", pattern, msg),
                )),
                Ok(_) => Err(ScenarioError::unmet(
                    step,
                    format!("expected error matching '{}', but step succeeded", pattern),
                )),
            };
        }

        // If we expect success but got an error, that's a failure
        let leaves = outcome
            .as_ref()
            .map_err(|msg| ScenarioError::unmet(step, format!("step failed: {}", msg)))?;

        if let Some(expected) = self.leaves {
            if *leaves != expected {
                return Err(ScenarioError::unmet(
                    step,
                    format!("expected {} leaves committed, got {}", expected, leaves),
                ));
            }
        }

        Ok(())
    }

    fn verify_state(&self, step: &str, view: View<'_>) -> ScenarioResult<()> {
        for identifier in &self.exists {
            if identifier.resolve(view).is_none() {
                return Err(ScenarioError::unmet(
                    step,
                    format!("expected {} to exist", identifier),
                ));
            }
        }

        for identifier in &self.absent {
            if identifier.resolve(view).is_some() {
                return Err(ScenarioError::unmet(
                    step,
                    format!("expected {} to be absent", identifier),
                ));
            }
        }

        for (child, parent) in &self.parents {
            let found = resolve(step, view, child)?;
            let expected = resolve(step, view, parent)?;
            if view.parent(found) != Some(expected) {
                return Err(ScenarioError::unmet(
                    step,
                    format!("expected {} to be a child of {}", child, parent),
                ));
            }
        }

        for (point, link) in &self.connections {
            let found = resolve(step, view, point)?;
            let expected = resolve(step, view, link)?;
            if view.link(found) != Some(expected) {
                return Err(ScenarioError::unmet(
                    step,
                    format!("expected {} to be connected to {}", point, link),
                ));
            }
        }

        for point in &self.disconnected {
            let found = resolve(step, view, point)?;
            if let Some(link) = view.link(found) {
                return Err(ScenarioError::unmet(
                    step,
                    format!("expected {} to be disconnected, found {}", point, view.describe(link)),
                ));
            }
        }

        Ok(())
    }
}

fn resolve(step: &str, view: View<'_>, identifier: &Identifier) -> ScenarioResult<bigred_core::ObjectId> {
    identifier.resolve(view).ok_or_else(|| {
        ScenarioError::unmet(step, format!("{} didn't resolve", identifier))
    })
}

/// Builder for fluent assertion construction.
pub struct AssertionBuilder {
    assertion: Assertion,
}

impl AssertionBuilder {
    /// Create a new assertion builder.
    pub fn new() -> Self {
        Self {
            assertion: Assertion::new(),
        }
    }

    /// Build the assertion.
    pub fn build(self) -> Assertion {
        self.assertion
    }

    // ========== Outcome assertions ==========

    /// Assert that the step committed N leaf changes.
    pub fn leaves(mut self, n: usize) -> Self {
        self.assertion.leaves = Some(n);
        self
    }

    /// Assert that the step fails with an error containing the given string.
    pub fn error(mut self, contains: impl Into<String>) -> Self {
        self.assertion.error = Some(contains.into());
        self
    }

    /// Assert that the step fails with an error matching the given regex.
    pub fn error_matches(mut self, pattern: impl Into<String>) -> Self {
        self.assertion.error_pattern = Some(pattern.into());
        self
    }

    // ========== State assertions ==========

    /// Assert that the identifier resolves after the step.
    pub fn exists(mut self, identifier: Identifier) -> Self {
        self.assertion.exists.push(identifier);
        self
    }

    /// Assert that the identifier doesn't resolve after the step.
    pub fn absent(mut self, identifier: Identifier) -> Self {
        self.assertion.absent.push(identifier);
        self
    }

    pub fn child_of(mut self, child: Identifier, parent: Identifier) -> Self {
        self.assertion.parents.push((child, parent));
        self
    }

    pub fn connected(mut self, point: Identifier, link: Identifier) -> Self {
        self.assertion.connections.push((point, link));
        self
    }

    pub fn disconnected(mut self, point: Identifier) -> Self {
        self.assertion.disconnected.push(point);
        self
    }

    pub fn can_undo(mut self, expected: bool) -> Self {
        self.assertion.can_undo = Some(expected);
        self
    }

    pub fn can_redo(mut self, expected: bool) -> Self {
        self.assertion.can_redo = Some(expected);
        self
    }

    // ========== Advanced ==========

    /// Custom assertion function.
    pub fn assert_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&Session) -> bool + 'static,
    {
        self.assertion.custom = Some(Box::new(f));
        self
    }
}

impl Default for AssertionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
