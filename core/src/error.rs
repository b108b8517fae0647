//! Common error types for the model arena.

use crate::{NamespaceKind, ObjectId, ObjectKind};
use thiserror::Error;

/// Errors that can occur when manipulating the model arena directly.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// Object not found.
    #[error("Object not found: {0}")]
    ObjectNotFound(ObjectId),

    /// Object is of the wrong kind.
    #[error("Object {id} is a {actual}, expected a {expected}")]
    WrongKind {
        id: ObjectId,
        expected: ObjectKind,
        actual: ObjectKind,
    },

    /// Only detached objects can be disposed.
    #[error("Cannot dispose {0}: it is still attached")]
    Attached(ObjectId),

    /// Name already taken in a namespace.
    #[error("Name {name:?} is already used in the {kind} namespace")]
    DuplicateName { kind: NamespaceKind, name: String },

    /// Name rejected by a namespace policy.
    #[error("{name:?} is not a valid name in the {kind} namespace")]
    IllegalName { kind: NamespaceKind, name: String },
}

impl ModelError {
    pub fn wrong_kind(id: ObjectId, expected: ObjectKind, actual: ObjectKind) -> Self {
        ModelError::WrongKind {
            id,
            expected,
            actual,
        }
    }
}

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;
