//! Property scratchpad for simulating pending changes.
//!
//! The scratchpad is a sparse overlay over the live model: it only holds
//! entries for properties that a pending change has touched. Readers ask
//! the scratchpad first and fall back to the live object when it has no
//! entry. Discarding the scratchpad discards every simulated effect.

use crate::{NamespaceKind, ObjectId, Property, PropertyValue};
use std::collections::{BTreeMap, HashMap};

/// Overlay of shadow property values keyed by (object, property).
#[derive(Debug, Clone, Default)]
pub struct PropertyScratchpad {
    entries: HashMap<(ObjectId, Property), PropertyValue>,
}

/// A saved scratchpad state for partial rollback.
#[derive(Debug, Clone)]
pub struct ScratchpadSavepoint {
    entries: HashMap<(ObjectId, Property), PropertyValue>,
}

impl PropertyScratchpad {
    /// Create a new empty scratchpad.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the scratchpad shadows this property.
    pub fn has_property(&self, object: ObjectId, property: &Property) -> bool {
        self.entries.contains_key(&(object, property.clone()))
    }

    /// Get the shadow value, if any.
    pub fn get_property(&self, object: ObjectId, property: &Property) -> Option<&PropertyValue> {
        self.entries.get(&(object, property.clone()))
    }

    /// Shadow a property with a new value.
    pub fn set_property(&mut self, object: ObjectId, property: Property, value: PropertyValue) {
        self.entries.insert((object, property), value);
    }

    /// Drop a shadow value so reads fall through to the live object again.
    pub fn remove_property(&mut self, object: ObjectId, property: &Property) -> Option<PropertyValue> {
        self.entries.remove(&(object, property.clone()))
    }

    /// Get a mutable shadow copy of a list-valued property.
    ///
    /// On first access the list is initialised from `live`; later calls
    /// return the same shadow list.
    pub fn modifiable_list(
        &mut self,
        object: ObjectId,
        property: Property,
        live: impl FnOnce() -> Vec<ObjectId>,
    ) -> &mut Vec<ObjectId> {
        let entry = self
            .entries
            .entry((object, property))
            .or_insert_with(|| PropertyValue::Objects(live()));
        if !matches!(entry, PropertyValue::Objects(_)) {
            *entry = PropertyValue::Objects(Vec::new());
        }
        match entry {
            PropertyValue::Objects(list) => list,
            _ => unreachable!("entry was just replaced with a list"),
        }
    }

    /// Get a mutable shadow copy of a namespace's name map.
    pub fn modifiable_names(
        &mut self,
        owner: ObjectId,
        kind: NamespaceKind,
        live: impl FnOnce() -> BTreeMap<String, ObjectId>,
    ) -> &mut BTreeMap<String, ObjectId> {
        let entry = self
            .entries
            .entry((owner, Property::Names(kind)))
            .or_insert_with(|| PropertyValue::Names(live()));
        if !matches!(entry, PropertyValue::Names(_)) {
            *entry = PropertyValue::Names(BTreeMap::new());
        }
        match entry {
            PropertyValue::Names(names) => names,
            _ => unreachable!("entry was just replaced with a name map"),
        }
    }

    /// Iterate over every shadowed (object, property) pair.
    pub fn entries(&self) -> impl Iterator<Item = (&ObjectId, &Property, &PropertyValue)> {
        self.entries.iter().map(|((id, prop), value)| (id, prop, value))
    }

    /// Objects with at least one shadowed property.
    pub fn touched_objects(&self) -> Vec<ObjectId> {
        let mut ids: Vec<ObjectId> = self.entries.keys().map(|(id, _)| *id).collect();
        ids.sort();
        ids.dedup();
        ids
    }

    /// Number of shadowed properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the scratchpad is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clear all shadow values.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Create a savepoint of the current state.
    pub fn savepoint(&self) -> ScratchpadSavepoint {
        ScratchpadSavepoint {
            entries: self.entries.clone(),
        }
    }

    /// Restore to a savepoint.
    pub fn restore(&mut self, savepoint: ScratchpadSavepoint) {
        self.entries = savepoint.entries;
    }
}
