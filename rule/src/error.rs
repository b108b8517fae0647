//! Rule error types.

use bigred_change::Change;
use bigred_transaction::ChangeError;
use thiserror::Error;

/// Result type for rule operations.
pub type RuleResult<T> = Result<T, RuleError>;

/// Errors that can occur while building or replaying a rule.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuleError {
    #[error("Rule replay failed: {0}")]
    Change(#[from] ChangeError),

    #[error("{change} can't be described without object references")]
    Undescribable { change: String },
}

impl RuleError {
    pub fn undescribable(change: &Change) -> Self {
        Self::Undescribable {
            change: change.to_string(),
        }
    }

    /// The underlying change error, if any.
    pub fn change_error(&self) -> Option<&ChangeError> {
        match self {
            RuleError::Change(err) => Some(err),
            RuleError::Undescribable { .. } => None,
        }
    }
}
