//! Namespaces.
//!
//! A namespace maps names to objects for one (owner, kind) pair and
//! delegates name legality and default names to its `NamePolicy`.
//! The `*_in` overloads read and write a copy of the name map kept in a
//! `PropertyScratchpad`, leaving the live map untouched.

use bigred_core::{
    ModelError, ModelResult, NamePolicy, NamespaceKind, ObjectId, Property, PropertyScratchpad,
    PropertyValue,
};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// A name registry.
#[derive(Debug, Clone, PartialEq)]
pub struct Namespace {
    owner: ObjectId,
    kind: NamespaceKind,
    policy: NamePolicy,
    names: BTreeMap<String, ObjectId>,
}

impl Namespace {
    /// Create a new empty namespace.
    pub fn new(owner: ObjectId, kind: NamespaceKind, policy: NamePolicy) -> Self {
        Self {
            owner,
            kind,
            policy,
            names: BTreeMap::new(),
        }
    }

    pub fn owner(&self) -> ObjectId {
        self.owner
    }

    pub fn kind(&self) -> NamespaceKind {
        self.kind
    }

    pub fn policy(&self) -> &NamePolicy {
        &self.policy
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    // ==================== Live Operations ====================

    /// The live name map.
    pub fn names(&self) -> &BTreeMap<String, ObjectId> {
        &self.names
    }

    pub(crate) fn names_mut(&mut self) -> &mut BTreeMap<String, ObjectId> {
        &mut self.names
    }

    /// Look up a name.
    pub fn get(&self, name: &str) -> Option<ObjectId> {
        self.names.get(name).copied()
    }

    /// Check if a name is taken.
    pub fn has(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Register `object` under `name`.
    ///
    /// Re-registering an object under the name it already has is a no-op.
    pub fn put(&mut self, name: &str, object: ObjectId) -> ModelResult<()> {
        check_put(&self.names, self.kind, &self.policy, name, object)?;
        self.names.insert(name.to_string(), object);
        Ok(())
    }

    /// Unregister a name.
    pub fn remove(&mut self, name: &str) -> Option<ObjectId> {
        self.names.remove(name)
    }

    /// The first default name not yet taken.
    pub fn next_name(&self) -> Option<String> {
        first_unused(&self.names, &self.policy)
    }

    // ==================== Scratchpad Operations ====================

    fn key(&self) -> Property {
        Property::Names(self.kind)
    }

    /// The name map as seen through a scratchpad.
    pub fn names_in<'a>(&'a self, scratch: &'a PropertyScratchpad) -> Cow<'a, BTreeMap<String, ObjectId>> {
        match scratch.get_property(self.owner, &self.key()) {
            Some(PropertyValue::Names(names)) => Cow::Borrowed(names),
            Some(_) => Cow::Owned(BTreeMap::new()),
            None => Cow::Borrowed(&self.names),
        }
    }

    /// Look up a name through a scratchpad.
    pub fn get_in(&self, scratch: &PropertyScratchpad, name: &str) -> Option<ObjectId> {
        self.names_in(scratch).get(name).copied()
    }

    /// Check if a name is taken, through a scratchpad.
    pub fn has_in(&self, scratch: &PropertyScratchpad, name: &str) -> bool {
        self.names_in(scratch).contains_key(name)
    }

    /// Register `object` under `name` in the scratchpad's copy of the map.
    pub fn put_in(
        &self,
        scratch: &mut PropertyScratchpad,
        name: &str,
        object: ObjectId,
    ) -> ModelResult<()> {
        check_put(&self.names_in(scratch), self.kind, &self.policy, name, object)?;
        scratch
            .modifiable_names(self.owner, self.kind, || self.names.clone())
            .insert(name.to_string(), object);
        Ok(())
    }

    /// Unregister a name in the scratchpad's copy of the map.
    pub fn remove_in(&self, scratch: &mut PropertyScratchpad, name: &str) -> Option<ObjectId> {
        scratch
            .modifiable_names(self.owner, self.kind, || self.names.clone())
            .remove(name)
    }

    /// The first default name not taken in the scratchpad's view of the map.
    pub fn next_name_in(&self, scratch: &PropertyScratchpad) -> Option<String> {
        first_unused(&self.names_in(scratch), &self.policy)
    }
}

fn check_put(
    names: &BTreeMap<String, ObjectId>,
    kind: NamespaceKind,
    policy: &NamePolicy,
    name: &str,
    object: ObjectId,
) -> ModelResult<()> {
    if !policy.is_legal(name) {
        return Err(ModelError::IllegalName {
            kind,
            name: name.to_string(),
        });
    }
    match names.get(name) {
        Some(existing) if *existing != object => Err(ModelError::DuplicateName {
            kind,
            name: name.to_string(),
        }),
        _ => Ok(()),
    }
}

fn first_unused(names: &BTreeMap<String, ObjectId>, policy: &NamePolicy) -> Option<String> {
    // One more candidate than there are names is enough when candidates are distinct
    (0..=names.len())
        .map(|i| policy.name_for(i))
        .find(|candidate| !names.contains_key(candidate))
}
