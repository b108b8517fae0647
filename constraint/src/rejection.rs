//! Change rejections.

use bigred_change::Change;
use thiserror::Error;

/// A validator refused a change.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{rationale}")]
pub struct Rejection {
    /// The leaf that was refused.
    pub change: Change,
    /// Name of the refusing validator.
    pub validator: String,
    /// Human-readable reason.
    pub rationale: String,
}

impl Rejection {
    pub fn new(change: &Change, validator: impl Into<String>, rationale: impl Into<String>) -> Self {
        Self {
            change: change.clone(),
            validator: validator.into(),
            rationale: rationale.into(),
        }
    }
}
