//! Extended data.

use crate::naming::kind_of;
use crate::{Deferrals, Rejection, StepValidator, Verdict};
use bigred_change::{Change, ChangeExtendedData, ExtendedDataValidator};
use bigred_core::Value;
use bigred_graph::View;
use regex_lite::Regex;

/// Runs the validators carried by extended data changes.
#[derive(Debug, Default)]
pub struct DataValidator;

impl DataValidator {
    pub fn new() -> Self {
        Self
    }

    fn check(&self, view: View<'_>, change: &Change, deferred: &mut Deferrals) -> Result<Verdict, String> {
        match change {
            Change::ExtendedData(c) => {
                kind_of(view, c.target)?;
                if let Some(immediate) = &c.immediate {
                    immediate.validate(c, view)?;
                }
                if let Some(finish) = c.finish.clone() {
                    let data = c.clone();
                    deferred.defer(change, "DataValidator", move |view| finish.validate(&data, view));
                }
                Ok(Verdict::Accepted)
            }
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
            | Change::RemovePort(_) => Ok(Verdict::Unrecognised),
        }
    }
}

impl StepValidator for DataValidator {
    fn name(&self) -> &'static str {
        "DataValidator"
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

/// Requires string values to match a regular expression in full.
///
/// Clearing the entry is always allowed.
#[derive(Debug, Clone)]
pub struct PatternValidator {
    pattern: String,
    regex: Regex,
}

impl PatternValidator {
    pub fn new(pattern: impl Into<String>) -> Result<Self, regex_lite::Error> {
        let pattern = pattern.into();
        let regex = Regex::new(&format!("^(?:{})$", pattern))?;
        Ok(Self { pattern, regex })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl ExtendedDataValidator for PatternValidator {
    fn validate(&self, change: &ChangeExtendedData, _view: View<'_>) -> Result<(), String> {
        match &change.new_value {
            None => Ok(()),
            Some(Value::String(s)) if self.regex.is_match(s) => Ok(()),
            Some(Value::String(s)) => Err(format!(
                "\"{}\" doesn't match the pattern {} required for {}",
                s, self.pattern, change.key
            )),
            Some(other) => Err(format!(
                "{} must be a string, not {}",
                change.key,
                other.type_name()
            )),
        }
    }
}
