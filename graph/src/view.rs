//! Reading and writing model state.
//!
//! A [`View`] reads the model as shadowed by an optional scratchpad.
//! A [`PropertyTarget`] is anything changes can be performed against:
//! the live model through an [`Application`](crate::Application), or a
//! [`Simulation`] that writes into a scratchpad.

use crate::{Identifier, Model};
use bigred_core::{
    ControlKind, NamePolicy, NamespaceKind, ObjectId, ObjectKind, Property, PropertyScratchpad,
    PropertyValue, Rectangle, Value,
};
use std::collections::BTreeMap;

/// Read access to a model, optionally shadowed by a scratchpad.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    model: &'a Model,
    scratch: Option<&'a PropertyScratchpad>,
}

impl<'a> View<'a> {
    pub fn new(model: &'a Model, scratch: Option<&'a PropertyScratchpad>) -> Self {
        Self { model, scratch }
    }

    pub fn model(&self) -> &'a Model {
        self.model
    }

    pub fn scratch(&self) -> Option<&'a PropertyScratchpad> {
        self.scratch
    }

    /// Read a property, preferring the scratchpad's shadow value.
    pub fn get(&self, id: ObjectId, property: &Property) -> PropertyValue {
        if let Some(value) = self.scratch.and_then(|s| s.get_property(id, property)) {
            return value.clone();
        }
        self.model.property(id, property)
    }

    /// Kinds never change, so they are always read from the model.
    pub fn kind(&self, id: ObjectId) -> Option<ObjectKind> {
        self.model.kind(id)
    }

    // ==================== Layoutables ====================

    /// The name of an object. Ports are named after their spec.
    pub fn name(&self, id: ObjectId) -> Option<String> {
        if self.kind(id) == Some(ObjectKind::Port) {
            return self.spec_of(id).and_then(|spec| self.name(spec));
        }
        self.get(id, &Property::Name).as_text().map(str::to_string)
    }

    pub fn parent(&self, id: ObjectId) -> Option<ObjectId> {
        self.get(id, &Property::Parent).as_object()
    }

    pub fn children(&self, id: ObjectId) -> Vec<ObjectId> {
        self.get(id, &Property::Children).into_objects()
    }

    pub fn layout(&self, id: ObjectId) -> Option<Rectangle> {
        self.get(id, &Property::Layout).as_layout()
    }

    pub fn data(&self, id: ObjectId, key: &str) -> Option<Value> {
        self.get(id, &Property::Data(key.to_string())).as_data().cloned()
    }

    // ==================== Links and Points ====================

    pub fn link(&self, point: ObjectId) -> Option<ObjectId> {
        self.get(point, &Property::Link).as_object()
    }

    pub fn points(&self, link: ObjectId) -> Vec<ObjectId> {
        self.get(link, &Property::Points).into_objects()
    }

    // ==================== Nodes and Sites ====================

    /// The control of a node.
    pub fn control(&self, node: ObjectId) -> Option<ObjectId> {
        match self.kind(node) {
            Some(ObjectKind::Node) => self.get(node, &Property::Control).as_object(),
            _ => None,
        }
    }

    /// The port spec a port was created from.
    pub fn spec_of(&self, port: ObjectId) -> Option<ObjectId> {
        match self.kind(port) {
            Some(ObjectKind::Port) => self.get(port, &Property::Control).as_object(),
            _ => None,
        }
    }

    pub fn ports(&self, node: ObjectId) -> Vec<ObjectId> {
        self.get(node, &Property::Ports).into_objects()
    }

    pub fn parameter(&self, node: ObjectId) -> Option<String> {
        self.get(node, &Property::Parameter).as_text().map(str::to_string)
    }

    pub fn alias(&self, site: ObjectId) -> Option<String> {
        self.get(site, &Property::Alias).as_text().map(str::to_string)
    }

    // ==================== Signatures ====================

    pub fn controls(&self, signature: ObjectId) -> Vec<ObjectId> {
        self.get(signature, &Property::Controls).into_objects()
    }

    pub fn signature_of(&self, control: ObjectId) -> Option<ObjectId> {
        self.get(control, &Property::Signature).as_object()
    }

    pub fn control_kind(&self, control: ObjectId) -> ControlKind {
        self.get(control, &Property::Kind).as_kind().unwrap_or_default()
    }

    pub fn parameter_policy(&self, control: ObjectId) -> Option<NamePolicy> {
        self.get(control, &Property::ParameterPolicy).as_policy().cloned()
    }

    pub fn port_specs(&self, control: ObjectId) -> Vec<ObjectId> {
        self.get(control, &Property::PortSpecs).into_objects()
    }

    /// The control a port spec belongs to.
    pub fn control_of(&self, spec: ObjectId) -> Option<ObjectId> {
        match self.kind(spec) {
            Some(ObjectKind::PortSpec) => self.get(spec, &Property::Control).as_object(),
            _ => None,
        }
    }

    // ==================== Namespaces ====================

    /// The name map of a namespace.
    pub fn names(&self, owner: ObjectId, kind: NamespaceKind) -> BTreeMap<String, ObjectId> {
        self.get(owner, &Property::Names(kind)).into_names()
    }

    /// Look up a name in a namespace.
    pub fn lookup(&self, owner: ObjectId, kind: NamespaceKind, name: &str) -> Option<ObjectId> {
        let key = Property::Names(kind);
        if let Some(value) = self.scratch.and_then(|s| s.get_property(owner, &key)) {
            return match value {
                PropertyValue::Names(names) => names.get(name).copied(),
                _ => None,
            };
        }
        self.model.namespace(owner, kind)?.get(name)
    }

    /// The namespace `id` is, or would be, registered in when its parent or
    /// owner is `owner`.
    pub fn namespace_under(&self, owner: ObjectId, id: ObjectId) -> Option<(ObjectId, NamespaceKind)> {
        let kind = self.kind(id)?.namespace_kind()?;
        let owner = match kind {
            NamespaceKind::Control | NamespaceKind::PortSpec => owner,
            _ => self.bigraph_of(owner)?,
        };
        Some((owner, kind))
    }

    /// The namespace `id` is currently registered in.
    pub fn namespace_of(&self, id: ObjectId) -> Option<(ObjectId, NamespaceKind)> {
        let owner = match self.kind(id)? {
            ObjectKind::Control => self.signature_of(id)?,
            ObjectKind::PortSpec => self.control_of(id)?,
            _ => self.parent(id)?,
        };
        self.namespace_under(owner, id)
    }

    // ==================== Structure ====================

    /// The bigraph an object is part of, following parents upwards.
    ///
    /// Ports belong to their node's bigraph.
    pub fn bigraph_of(&self, id: ObjectId) -> Option<ObjectId> {
        let mut current = id;
        // Bounded by the object count so a malformed cycle cannot hang us
        for _ in 0..=self.model.object_count() {
            match self.kind(current)? {
                ObjectKind::Bigraph => return Some(current),
                _ => current = self.parent(current)?,
            }
        }
        None
    }

    /// Returns true if `ancestor` is `id` or one of its transitive parents.
    pub fn is_ancestor(&self, ancestor: ObjectId, id: ObjectId) -> bool {
        let mut current = Some(id);
        for _ in 0..=self.model.object_count() {
            match current {
                Some(c) if c == ancestor => return true,
                Some(c) => current = self.parent(c),
                None => return false,
            }
        }
        false
    }

    /// Attached nodes using a control.
    pub fn nodes_with_control(&self, control: ObjectId) -> Vec<ObjectId> {
        self.model
            .objects_of_kind(ObjectKind::Node)
            .into_iter()
            .filter(|n| self.control(*n) == Some(control) && self.bigraph_of(*n).is_some())
            .collect()
    }

    /// A short human-readable description, e.g. `<Node a>`.
    pub fn describe(&self, id: ObjectId) -> String {
        let kind = self.kind(id).map_or("Object", |k| k.type_name());
        match self.name(id) {
            Some(name) => format!("<{} {}>", kind, name),
            None if matches!(self.kind(id), Some(ObjectKind::Bigraph | ObjectKind::Signature)) => {
                format!("<{}>", kind)
            }
            None => format!("<{} {}>", kind, id),
        }
    }

    /// The identifier of an attached object.
    pub fn identifier(&self, id: ObjectId) -> Option<Identifier> {
        let identifier = match self.kind(id)? {
            ObjectKind::Bigraph => Identifier::Bigraph,
            ObjectKind::Signature => Identifier::Signature,
            ObjectKind::Root => Identifier::root(self.name(id)?),
            ObjectKind::Site => Identifier::site(self.name(id)?),
            ObjectKind::Edge => Identifier::edge(self.name(id)?),
            ObjectKind::OuterName => Identifier::outer_name(self.name(id)?),
            ObjectKind::InnerName => Identifier::inner_name(self.name(id)?),
            ObjectKind::Node => Identifier::node(self.name(id)?, self.name(self.control(id)?)?),
            ObjectKind::Port => Identifier::port(self.name(self.parent(id)?)?, self.name(id)?),
            ObjectKind::Control => Identifier::control(self.name(id)?),
            ObjectKind::PortSpec => {
                Identifier::port_spec(self.name(self.control_of(id)?)?, self.name(id)?)
            }
        };
        Some(identifier)
    }
}

pub(crate) mod sealed {
    pub trait Sealed {}
}

pub(crate) use sealed::Sealed;

/// The write surface changes are performed against.
///
/// Sealed: the only targets are [`Simulation`] and
/// [`Application`](crate::Application).
pub trait PropertyTarget: Sealed {
    /// Read the state as this target currently sees it.
    fn view(&self) -> View<'_>;

    /// Set a property.
    fn set(&mut self, id: ObjectId, property: Property, value: PropertyValue);

    /// Edit a list-valued property in place.
    fn edit_objects(&mut self, id: ObjectId, property: Property, edit: &mut dyn FnMut(&mut Vec<ObjectId>));

    /// Edit a namespace's name map in place.
    fn edit_names(
        &mut self,
        owner: ObjectId,
        kind: NamespaceKind,
        edit: &mut dyn FnMut(&mut BTreeMap<String, ObjectId>),
    );
}

/// A target that records every write in a scratchpad.
pub struct Simulation<'a> {
    model: &'a Model,
    scratch: &'a mut PropertyScratchpad,
}

impl<'a> Simulation<'a> {
    pub fn new(model: &'a Model, scratch: &'a mut PropertyScratchpad) -> Self {
        Self { model, scratch }
    }
}

impl Sealed for Simulation<'_> {}

impl PropertyTarget for Simulation<'_> {
    fn view(&self) -> View<'_> {
        View::new(self.model, Some(self.scratch))
    }

    fn set(&mut self, id: ObjectId, property: Property, value: PropertyValue) {
        self.scratch.set_property(id, property, value);
    }

    fn edit_objects(&mut self, id: ObjectId, property: Property, edit: &mut dyn FnMut(&mut Vec<ObjectId>)) {
        let model = self.model;
        let live = property.clone();
        let list = self
            .scratch
            .modifiable_list(id, property, || model.property(id, &live).into_objects());
        edit(list);
    }

    fn edit_names(
        &mut self,
        owner: ObjectId,
        kind: NamespaceKind,
        edit: &mut dyn FnMut(&mut BTreeMap<String, ObjectId>),
    ) {
        let model = self.model;
        let names = self.scratch.modifiable_names(owner, kind, || {
            model
                .namespace(owner, kind)
                .map(|ns| ns.names().clone())
                .unwrap_or_default()
        });
        edit(names);
    }
}
