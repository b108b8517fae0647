//! Descriptor resolution errors.

use bigred_graph::Identifier;
use thiserror::Error;

/// Errors raised when a descriptor cannot be turned into a change.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CreationError {
    /// An identifier did not resolve against the target model.
    #[error("{identifier} didn't resolve to an object")]
    Unresolved { identifier: Identifier },

    /// A fresh object could not be created for an identifier.
    #[error("{identifier} can't be instantiated")]
    NotInstantiable { identifier: Identifier },

    /// The subject is not a child of the given parent.
    #[error("{child} is not a child of {parent}")]
    NotAChild { child: Identifier, parent: Identifier },
}

impl CreationError {
    pub fn unresolved(identifier: &Identifier) -> Self {
        CreationError::Unresolved {
            identifier: identifier.clone(),
        }
    }

    pub fn not_instantiable(identifier: &Identifier) -> Self {
        CreationError::NotInstantiable {
            identifier: identifier.clone(),
        }
    }
}

/// Result type for descriptor resolution.
pub type CreationResult<T> = Result<T, CreationError>;
