//! Property keys and values.
//!
//! Every piece of mutable state on a model object is addressed by a
//! `Property`. Live objects and the scratchpad overlay store the same
//! `PropertyValue`s, so a read can fall through from one to the other.

use crate::{ControlKind, NamePolicy, NamespaceKind, ObjectId, Rectangle, Value};
use std::collections::BTreeMap;
use std::fmt;

/// A property key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Property {
    /// Name of a layoutable, control or port spec.
    Name,
    /// Parent container of a layoutable.
    Parent,
    /// Ordered children of a container.
    Children,
    /// Link a point is connected to.
    Link,
    /// Ordered points connected to a link.
    Points,
    /// Layout rectangle.
    Layout,
    /// Control of a node, or spec of a port.
    Control,
    /// Ports of a node.
    Ports,
    /// Parameter of a node.
    Parameter,
    /// Alias of a site.
    Alias,
    /// Kind of a control.
    Kind,
    /// Parameter policy of a control.
    ParameterPolicy,
    /// Signature a control belongs to.
    Signature,
    /// Ordered controls of a signature.
    Controls,
    /// Ordered port specs of a control.
    PortSpecs,
    /// Name map of one of the object's namespaces.
    Names(NamespaceKind),
    /// Extended data entry.
    Data(String),
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Property::Names(kind) => write!(f, "names({})", kind),
            Property::Data(key) => write!(f, "data({})", key),
            other => write!(f, "{}", format!("{:?}", other).to_lowercase()),
        }
    }
}

/// The value of a property.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PropertyValue {
    /// The property is unset.
    #[default]
    Absent,
    Text(String),
    Object(ObjectId),
    Objects(Vec<ObjectId>),
    Layout(Rectangle),
    Names(BTreeMap<String, ObjectId>),
    Kind(ControlKind),
    Policy(NamePolicy),
    Data(Value),
}

impl PropertyValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, PropertyValue::Absent)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<ObjectId> {
        match self {
            PropertyValue::Object(id) => Some(*id),
            _ => None,
        }
    }

    pub fn as_objects(&self) -> &[ObjectId] {
        match self {
            PropertyValue::Objects(ids) => ids,
            _ => &[],
        }
    }

    pub fn as_layout(&self) -> Option<Rectangle> {
        match self {
            PropertyValue::Layout(r) => Some(*r),
            _ => None,
        }
    }

    pub fn as_kind(&self) -> Option<ControlKind> {
        match self {
            PropertyValue::Kind(k) => Some(*k),
            _ => None,
        }
    }

    pub fn as_policy(&self) -> Option<&NamePolicy> {
        match self {
            PropertyValue::Policy(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_data(&self) -> Option<&Value> {
        match self {
            PropertyValue::Data(v) => Some(v),
            _ => None,
        }
    }

    /// Consume into an owned object list.
    pub fn into_objects(self) -> Vec<ObjectId> {
        match self {
            PropertyValue::Objects(ids) => ids,
            _ => Vec::new(),
        }
    }

    /// Consume into an owned name map.
    pub fn into_names(self) -> BTreeMap<String, ObjectId> {
        match self {
            PropertyValue::Names(names) => names,
            _ => BTreeMap::new(),
        }
    }
}

// Option conversions: None becomes Absent

impl From<Option<String>> for PropertyValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(PropertyValue::Absent, PropertyValue::Text)
    }
}

impl From<Option<ObjectId>> for PropertyValue {
    fn from(value: Option<ObjectId>) -> Self {
        value.map_or(PropertyValue::Absent, PropertyValue::Object)
    }
}

impl From<Option<Rectangle>> for PropertyValue {
    fn from(value: Option<Rectangle>) -> Self {
        value.map_or(PropertyValue::Absent, PropertyValue::Layout)
    }
}

impl From<Option<NamePolicy>> for PropertyValue {
    fn from(value: Option<NamePolicy>) -> Self {
        value.map_or(PropertyValue::Absent, PropertyValue::Policy)
    }
}

impl From<Option<Value>> for PropertyValue {
    fn from(value: Option<Value>) -> Self {
        value.map_or(PropertyValue::Absent, PropertyValue::Data)
    }
}

impl From<ControlKind> for PropertyValue {
    fn from(kind: ControlKind) -> Self {
        PropertyValue::Kind(kind)
    }
}

impl From<Vec<ObjectId>> for PropertyValue {
    fn from(ids: Vec<ObjectId>) -> Self {
        PropertyValue::Objects(ids)
    }
}
