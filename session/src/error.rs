//! Session error types.

use bigred_transaction::ChangeError;
use thiserror::Error;

/// Session errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    /// The undo stack is empty.
    #[error("nothing to undo")]
    NothingToUndo,

    /// The redo stack is empty.
    #[error("nothing to redo")]
    NothingToRedo,

    /// A change was refused.
    #[error("change error: {0}")]
    Change(#[from] ChangeError),
}

impl SessionError {
    /// The underlying change error, if any.
    pub fn change_error(&self) -> Option<&ChangeError> {
        match self {
            SessionError::Change(err) => Some(err),
            SessionError::NothingToUndo | SessionError::NothingToRedo => None,
        }
    }
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
