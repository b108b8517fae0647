//! EXTENDED DATA operation - sets auxiliary key/value data.

use super::Operation;
use crate::Change;
use bigred_core::{ObjectId, Property, Value};
use bigred_graph::{PropertyTarget, View};
use std::fmt;
use std::sync::Arc;

/// A constraint on an extended data change.
///
/// Returning `Err` rejects the change with the given rationale.
pub trait ExtendedDataValidator: Send + Sync {
    fn validate(&self, change: &ChangeExtendedData, view: View<'_>) -> Result<(), String>;
}

struct FnValidator<F>(F);

impl<F> ExtendedDataValidator for FnValidator<F>
where
    F: Fn(&ChangeExtendedData, View<'_>) -> Result<(), String> + Send + Sync,
{
    fn validate(&self, change: &ChangeExtendedData, view: View<'_>) -> Result<(), String> {
        (self.0)(change, view)
    }
}

/// Wrap a closure as an [`ExtendedDataValidator`].
pub fn data_validator<F>(f: F) -> Arc<dyn ExtendedDataValidator>
where
    F: Fn(&ChangeExtendedData, View<'_>) -> Result<(), String> + Send + Sync + 'static,
{
    Arc::new(FnValidator(f))
}

/// Set or clear an extended data entry.
///
/// The immediate validator runs when the change is validated; the final
/// validator runs once the whole batch has been simulated.
#[derive(Clone)]
pub struct ChangeExtendedData {
    pub target: ObjectId,
    pub key: String,
    pub new_value: Option<Value>,
    old_value: Option<Option<Value>>,
    pub immediate: Option<Arc<dyn ExtendedDataValidator>>,
    pub finish: Option<Arc<dyn ExtendedDataValidator>>,
}

impl ChangeExtendedData {
    pub fn new(target: ObjectId, key: impl Into<String>, new_value: Option<Value>) -> Self {
        Self {
            target,
            key: key.into(),
            new_value,
            old_value: None,
            immediate: None,
            finish: None,
        }
    }

    pub fn with_immediate(mut self, validator: Arc<dyn ExtendedDataValidator>) -> Self {
        self.immediate = Some(validator);
        self
    }

    pub fn with_final(mut self, validator: Arc<dyn ExtendedDataValidator>) -> Self {
        self.finish = Some(validator);
        self
    }
}

impl Operation for ChangeExtendedData {
    fn is_ready(&self) -> bool {
        !self.key.is_empty()
    }

    fn before_apply(&mut self, view: View<'_>) {
        self.old_value = Some(view.data(self.target, &self.key));
    }

    fn can_invert(&self) -> bool {
        self.old_value.is_some()
    }

    fn inverse(&self) -> Option<Change> {
        let mut inverse = ChangeExtendedData::new(self.target, self.key.clone(), self.old_value.clone()?);
        inverse.immediate = self.immediate.clone();
        inverse.finish = self.finish.clone();
        Some(inverse.into())
    }

    fn perform(&self, target: &mut dyn PropertyTarget) {
        target.set(
            self.target,
            Property::Data(self.key.clone()),
            self.new_value.clone().into(),
        );
    }
}

impl fmt::Debug for ChangeExtendedData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeExtendedData")
            .field("target", &self.target)
            .field("key", &self.key)
            .field("new_value", &self.new_value)
            .field("old_value", &self.old_value)
            .field("immediate", &self.immediate.is_some())
            .field("finish", &self.finish.is_some())
            .finish()
    }
}

/// Equality ignores the validators.
impl PartialEq for ChangeExtendedData {
    fn eq(&self, other: &Self) -> bool {
        self.target == other.target
            && self.key == other.key
            && self.new_value == other.new_value
            && self.old_value == other.old_value
    }
}

impl fmt::Display for ChangeExtendedData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.new_value {
            Some(value) => write!(f, "Change(set data {:?} of {} to {})", self.key, self.target, value),
            None => write!(f, "Change(clear data {:?} of {})", self.key, self.target),
        }
    }
}
