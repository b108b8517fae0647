//! Model objects.

use bigred_core::{ObjectId, ObjectKind, Property, PropertyValue};
use std::collections::HashMap;

/// An object in the model arena.
///
/// Objects store their state as a sparse property map; unset properties
/// read as `PropertyValue::Absent`.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelObject {
    pub id: ObjectId,
    pub kind: ObjectKind,
    properties: HashMap<Property, PropertyValue>,
}

impl ModelObject {
    pub fn new(id: ObjectId, kind: ObjectKind) -> Self {
        Self {
            id,
            kind,
            properties: HashMap::new(),
        }
    }

    /// Get a property value.
    pub fn get(&self, property: &Property) -> Option<&PropertyValue> {
        self.properties.get(property)
    }

    /// Set a property value, returning the old one. Setting `Absent` unsets it.
    pub(crate) fn set(&mut self, property: Property, value: PropertyValue) -> PropertyValue {
        let old = if value.is_absent() {
            self.properties.remove(&property)
        } else {
            self.properties.insert(property, value)
        };
        old.unwrap_or_default()
    }

    /// Iterate over the set properties.
    pub fn properties(&self) -> impl Iterator<Item = (&Property, &PropertyValue)> {
        self.properties.iter()
    }

    /// Keys of all extended data entries, sorted.
    pub fn data_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .properties
            .keys()
            .filter_map(|p| match p {
                Property::Data(key) => Some(key.as_str()),
                _ => None,
            })
            .collect();
        keys.sort_unstable();
        keys
    }
}
