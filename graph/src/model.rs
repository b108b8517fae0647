//! The live object arena.

use crate::view::Sealed;
use crate::{ModelObject, Namespace, PropertyEvent, PropertyTarget, View};
use bigred_core::{
    ControlKind, ModelError, ModelResult, NamePolicy, NamespaceKind, ObjectId, ObjectKind,
    Property, PropertyScratchpad, PropertyValue,
};
use std::collections::{BTreeMap, HashMap};

/// ID allocator for model objects.
#[derive(Debug, Clone)]
struct IdAllocator {
    next_id: u64,
}

impl IdAllocator {
    fn new() -> Self {
        Self { next_id: 1 }
    }

    fn alloc(&mut self) -> ObjectId {
        let id = ObjectId::new(self.next_id);
        self.next_id += 1;
        id
    }
}

/// The default policy of each namespace kind.
pub fn default_policy(kind: NamespaceKind) -> NamePolicy {
    match kind {
        NamespaceKind::Root | NamespaceKind::Site => NamePolicy::Long,
        NamespaceKind::Node => NamePolicy::string("n"),
        NamespaceKind::Link => NamePolicy::string("e"),
        NamespaceKind::InnerName => NamePolicy::string("i"),
        NamespaceKind::Control => NamePolicy::string("Control"),
        NamespaceKind::PortSpec => NamePolicy::string("p"),
    }
}

/// A document: one bigraph, one signature and every object they own.
///
/// Objects are created detached and only become part of the bigraph or
/// signature when a change attaches them. Their state is only ever
/// mutated by applying changes, through an [`Application`].
#[derive(Debug, Clone)]
pub struct Model {
    /// Object storage
    objects: HashMap<ObjectId, ModelObject>,
    /// Namespaces keyed by owner and kind
    namespaces: HashMap<(ObjectId, NamespaceKind), Namespace>,
    /// ID allocator
    id_alloc: IdAllocator,
    bigraph: ObjectId,
    signature: ObjectId,
    /// Live mutations not yet drained by an observer
    events: Vec<PropertyEvent>,
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    /// Create a model with an empty bigraph and an empty signature.
    pub fn new() -> Self {
        let mut id_alloc = IdAllocator::new();
        let bigraph = id_alloc.alloc();
        let signature = id_alloc.alloc();
        let mut model = Self {
            objects: HashMap::new(),
            namespaces: HashMap::new(),
            id_alloc,
            bigraph,
            signature,
            events: Vec::new(),
        };

        let mut object = ModelObject::new(bigraph, ObjectKind::Bigraph);
        object.set(Property::Children, PropertyValue::Objects(Vec::new()));
        model.objects.insert(bigraph, object);
        for kind in NamespaceKind::BIGRAPH {
            model.add_namespace(bigraph, kind);
        }

        let mut object = ModelObject::new(signature, ObjectKind::Signature);
        object.set(Property::Controls, PropertyValue::Objects(Vec::new()));
        model.objects.insert(signature, object);
        model.add_namespace(signature, NamespaceKind::Control);

        model
    }

    /// The top-level bigraph.
    pub fn bigraph(&self) -> ObjectId {
        self.bigraph
    }

    /// The signature.
    pub fn signature(&self) -> ObjectId {
        self.signature
    }

    /// A read view of the live model.
    pub fn view(&self) -> View<'_> {
        View::new(self, None)
    }

    /// A read view of the model as shadowed by a scratchpad.
    pub fn view_with<'a>(&'a self, scratch: &'a PropertyScratchpad) -> View<'a> {
        View::new(self, Some(scratch))
    }

    fn add_namespace(&mut self, owner: ObjectId, kind: NamespaceKind) {
        self.namespaces
            .insert((owner, kind), Namespace::new(owner, kind, default_policy(kind)));
    }

    // ==================== Object Creation ====================

    fn create(&mut self, kind: ObjectKind) -> ObjectId {
        let id = self.id_alloc.alloc();
        let mut object = ModelObject::new(id, kind);
        if kind.is_container() {
            object.set(Property::Children, PropertyValue::Objects(Vec::new()));
        }
        if kind.is_link() {
            object.set(Property::Points, PropertyValue::Objects(Vec::new()));
        }
        self.objects.insert(id, object);
        id
    }

    /// Create a detached root.
    pub fn create_root(&mut self) -> ObjectId {
        self.create(ObjectKind::Root)
    }

    /// Create a detached site.
    pub fn create_site(&mut self) -> ObjectId {
        self.create(ObjectKind::Site)
    }

    /// Create a detached edge.
    pub fn create_edge(&mut self) -> ObjectId {
        self.create(ObjectKind::Edge)
    }

    /// Create a detached outer name.
    pub fn create_outer_name(&mut self) -> ObjectId {
        self.create(ObjectKind::OuterName)
    }

    /// Create a detached inner name.
    pub fn create_inner_name(&mut self) -> ObjectId {
        self.create(ObjectKind::InnerName)
    }

    /// Create a detached control with no ports.
    pub fn create_control(&mut self) -> ObjectId {
        let id = self.create(ObjectKind::Control);
        if let Some(object) = self.objects.get_mut(&id) {
            object.set(Property::Kind, PropertyValue::Kind(ControlKind::default()));
            object.set(Property::PortSpecs, PropertyValue::Objects(Vec::new()));
        }
        self.add_namespace(id, NamespaceKind::PortSpec);
        id
    }

    /// Create a detached port spec.
    pub fn create_port_spec(&mut self) -> ObjectId {
        self.create(ObjectKind::PortSpec)
    }

    /// Create a detached node with one port per port spec of `control`.
    pub fn create_node(&mut self, control: ObjectId) -> ModelResult<ObjectId> {
        self.expect_kind(control, ObjectKind::Control)?;
        let specs = self.view().port_specs(control);
        Ok(self.create_node_with_ports(control, &specs))
    }

    pub(crate) fn create_node_with_ports(&mut self, control: ObjectId, specs: &[ObjectId]) -> ObjectId {
        let node = self.create(ObjectKind::Node);
        let ports: Vec<ObjectId> = specs
            .iter()
            .map(|spec| {
                let port = self.create(ObjectKind::Port);
                if let Some(object) = self.objects.get_mut(&port) {
                    object.set(Property::Parent, PropertyValue::Object(node));
                    object.set(Property::Control, PropertyValue::Object(*spec));
                }
                port
            })
            .collect();
        if let Some(object) = self.objects.get_mut(&node) {
            object.set(Property::Control, PropertyValue::Object(control));
            object.set(Property::Ports, PropertyValue::Objects(ports));
        }
        node
    }

    // ==================== Object Access ====================

    /// Get an object by ID.
    pub fn object(&self, id: ObjectId) -> Option<&ModelObject> {
        self.objects.get(&id)
    }

    /// Check if an object exists.
    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(&id)
    }

    /// Get the kind of an object.
    pub fn kind(&self, id: ObjectId) -> Option<ObjectKind> {
        self.objects.get(&id).map(|o| o.kind)
    }

    /// Number of objects, including detached ones.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// All objects of a kind, in allocation order.
    pub fn objects_of_kind(&self, kind: ObjectKind) -> Vec<ObjectId> {
        let mut ids: Vec<ObjectId> = self
            .objects
            .values()
            .filter(|o| o.kind == kind)
            .map(|o| o.id)
            .collect();
        ids.sort();
        ids
    }

    /// Read a live property.
    pub fn property(&self, id: ObjectId, property: &Property) -> PropertyValue {
        if let Property::Names(kind) = property {
            return self
                .namespace(id, *kind)
                .map(|ns| PropertyValue::Names(ns.names().clone()))
                .unwrap_or_default();
        }
        self.objects
            .get(&id)
            .and_then(|o| o.get(property))
            .cloned()
            .unwrap_or_default()
    }

    /// Get a namespace.
    pub fn namespace(&self, owner: ObjectId, kind: NamespaceKind) -> Option<&Namespace> {
        self.namespaces.get(&(owner, kind))
    }

    fn expect_kind(&self, id: ObjectId, expected: ObjectKind) -> ModelResult<()> {
        let actual = self.kind(id).ok_or(ModelError::ObjectNotFound(id))?;
        if actual != expected {
            return Err(ModelError::wrong_kind(id, expected, actual));
        }
        Ok(())
    }

    // ==================== Disposal ====================

    /// Destroy a detached object.
    ///
    /// Disposing a node also disposes its ports, which must be disconnected.
    pub fn dispose(&mut self, id: ObjectId) -> ModelResult<()> {
        let kind = self.kind(id).ok_or(ModelError::ObjectNotFound(id))?;
        let view = self.view();
        let attached = match kind {
            ObjectKind::Bigraph | ObjectKind::Signature | ObjectKind::Port => true,
            ObjectKind::Control => view.signature_of(id).is_some(),
            ObjectKind::PortSpec => view.control_of(id).is_some(),
            ObjectKind::Node => {
                view.parent(id).is_some() || view.ports(id).iter().any(|p| view.link(*p).is_some())
            }
            _ => view.parent(id).is_some() || view.link(id).is_some(),
        };
        let occupied = !view.children(id).is_empty() || !view.points(id).is_empty();
        if attached || occupied {
            return Err(ModelError::Attached(id));
        }

        let ports = view.ports(id);
        for port in ports {
            self.objects.remove(&port);
        }
        self.objects.remove(&id);
        self.namespaces.retain(|(owner, _), _| *owner != id);
        tracing::trace!(object = %id, "disposed object");
        Ok(())
    }

    /// A mark separating objects allocated before and after this call.
    pub fn id_mark(&self) -> u64 {
        self.id_alloc.next_id
    }

    /// Dispose every detached object allocated since `mark`.
    ///
    /// Objects that have been attached in the meantime are kept.
    pub fn discard_detached_since(&mut self, mark: u64) {
        let candidates: Vec<ObjectId> = self
            .objects
            .values()
            .filter(|o| o.id.raw() >= mark && o.kind != ObjectKind::Port)
            .map(|o| o.id)
            .collect();
        for id in candidates {
            // Attached objects refuse disposal, which is what we want here
            let _ = self.dispose(id);
        }
    }

    // ==================== Events ====================

    /// Live mutations recorded since the last drain.
    pub fn pending_events(&self) -> &[PropertyEvent] {
        &self.events
    }

    /// Take the recorded live mutations.
    pub fn drain_events(&mut self) -> Vec<PropertyEvent> {
        std::mem::take(&mut self.events)
    }
}

/// A target that writes straight to the live model and records events.
///
/// Only change application constructs one. Everything else mutates a
/// model by applying changes, so names, parents and children always move
/// together with their namespaces.
pub struct Application<'a> {
    model: &'a mut Model,
}

impl<'a> Application<'a> {
    #[doc(hidden)]
    pub fn new(model: &'a mut Model) -> Self {
        Self { model }
    }
}

impl Sealed for Application<'_> {}

impl PropertyTarget for Application<'_> {
    fn view(&self) -> View<'_> {
        self.model.view()
    }

    fn set(&mut self, id: ObjectId, property: Property, value: PropertyValue) {
        let Some(object) = self.model.objects.get_mut(&id) else {
            tracing::warn!(object = %id, %property, "write to unknown object ignored");
            return;
        };
        let old = object.set(property.clone(), value.clone());
        if old != value {
            self.model.events.push(PropertyEvent {
                object: id,
                property,
                old,
                new: value,
            });
        }
    }

    fn edit_objects(&mut self, id: ObjectId, property: Property, edit: &mut dyn FnMut(&mut Vec<ObjectId>)) {
        let mut list = self.model.property(id, &property).into_objects();
        edit(&mut list);
        self.set(id, property, PropertyValue::Objects(list));
    }

    fn edit_names(
        &mut self,
        owner: ObjectId,
        kind: NamespaceKind,
        edit: &mut dyn FnMut(&mut BTreeMap<String, ObjectId>),
    ) {
        let Some(namespace) = self.model.namespaces.get_mut(&(owner, kind)) else {
            tracing::warn!(object = %owner, namespace = %kind, "write to unknown namespace ignored");
            return;
        };
        let old = namespace.names().clone();
        edit(namespace.names_mut());
        if *namespace.names() != old {
            let new = namespace.names().clone();
            self.model.events.push(PropertyEvent {
                object: owner,
                property: Property::Names(kind),
                old: PropertyValue::Names(old),
                new: PropertyValue::Names(new),
            });
        }
    }
}
