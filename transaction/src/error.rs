//! Change validation and application errors.

use bigred_change::{Change, ChangeDescriptor, CreationError};
use bigred_constraint::Rejection;
use thiserror::Error;

/// Errors raised while validating or applying a change.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChangeError {
    /// A leaf is missing a required field.
    #[error("{change} is not ready")]
    NotReady { change: Change },

    /// A validator refused a leaf.
    #[error("{0}")]
    Rejected(#[from] Rejection),

    /// A descriptor could not be resolved against the model.
    #[error("couldn't create a change from {descriptor}: {source}")]
    CreationFailed {
        descriptor: ChangeDescriptor,
        #[source]
        source: CreationError,
    },

    /// A validated leaf was not applied by any executor.
    #[error("{change} was validated, but no executor applied it")]
    Diverged { change: Change },
}

impl ChangeError {
    pub fn not_ready(change: &Change) -> Self {
        Self::NotReady {
            change: change.clone(),
        }
    }

    pub fn creation_failed(descriptor: &ChangeDescriptor, source: CreationError) -> Self {
        Self::CreationFailed {
            descriptor: descriptor.clone(),
            source,
        }
    }

    /// The rejection, if a validator refused the change.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Rejected(rejection) => Some(rejection),
            _ => None,
        }
    }

    /// The human-readable reason for a rejection.
    pub fn rationale(&self) -> Option<&str> {
        self.rejection().map(|r| r.rationale.as_str())
    }
}

/// Result type for change operations.
pub type ChangeResult<T> = Result<T, ChangeError>;
