//! Property change notifications.

use bigred_core::{ObjectId, Property, PropertyValue};

/// Emitted for every live property mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyEvent {
    pub object: ObjectId,
    pub property: Property,
    pub old: PropertyValue,
    pub new: PropertyValue,
}
