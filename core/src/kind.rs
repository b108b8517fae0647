//! Kinds of model objects, controls and namespaces.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a model object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    Bigraph,
    Root,
    Node,
    Site,
    Edge,
    OuterName,
    InnerName,
    Port,
    Signature,
    Control,
    PortSpec,
}

impl ObjectKind {
    /// Returns true for objects that hold an ordered list of children.
    pub fn is_container(&self) -> bool {
        matches!(self, ObjectKind::Bigraph | ObjectKind::Root | ObjectKind::Node)
    }

    /// Returns true for objects that have a name, a parent and a layout.
    pub fn is_layoutable(&self) -> bool {
        matches!(
            self,
            ObjectKind::Root
                | ObjectKind::Node
                | ObjectKind::Site
                | ObjectKind::Edge
                | ObjectKind::OuterName
                | ObjectKind::InnerName
                | ObjectKind::Port
        )
    }

    /// Returns true for objects that can be connected to a link.
    pub fn is_point(&self) -> bool {
        matches!(self, ObjectKind::Port | ObjectKind::InnerName)
    }

    /// Returns true for objects that points can be connected to.
    pub fn is_link(&self) -> bool {
        matches!(self, ObjectKind::Edge | ObjectKind::OuterName)
    }

    /// Returns true for objects of the place graph.
    pub fn is_place(&self) -> bool {
        matches!(self, ObjectKind::Root | ObjectKind::Node | ObjectKind::Site)
    }

    /// Returns true for objects that belong to a signature rather than a bigraph.
    pub fn is_signature_object(&self) -> bool {
        matches!(
            self,
            ObjectKind::Signature | ObjectKind::Control | ObjectKind::PortSpec
        )
    }

    /// Check whether an object of this kind may contain an object of `child` kind.
    pub fn can_contain(&self, child: ObjectKind) -> bool {
        match self {
            ObjectKind::Bigraph => matches!(
                child,
                ObjectKind::Root | ObjectKind::InnerName | ObjectKind::OuterName | ObjectKind::Edge
            ),
            ObjectKind::Root | ObjectKind::Node => {
                matches!(child, ObjectKind::Node | ObjectKind::Site)
            }
            _ => false,
        }
    }

    /// The namespace an object of this kind is registered in, if any.
    pub fn namespace_kind(&self) -> Option<NamespaceKind> {
        match self {
            ObjectKind::Root => Some(NamespaceKind::Root),
            ObjectKind::Site => Some(NamespaceKind::Site),
            ObjectKind::Node => Some(NamespaceKind::Node),
            ObjectKind::Edge | ObjectKind::OuterName => Some(NamespaceKind::Link),
            ObjectKind::InnerName => Some(NamespaceKind::InnerName),
            ObjectKind::Control => Some(NamespaceKind::Control),
            ObjectKind::PortSpec => Some(NamespaceKind::PortSpec),
            ObjectKind::Bigraph | ObjectKind::Port | ObjectKind::Signature => None,
        }
    }

    /// Human-readable type name.
    pub fn type_name(&self) -> &'static str {
        match self {
            ObjectKind::Bigraph => "Bigraph",
            ObjectKind::Root => "Root",
            ObjectKind::Node => "Node",
            ObjectKind::Site => "Site",
            ObjectKind::Edge => "Edge",
            ObjectKind::OuterName => "OuterName",
            ObjectKind::InnerName => "InnerName",
            ObjectKind::Port => "Port",
            ObjectKind::Signature => "Signature",
            ObjectKind::Control => "Control",
            ObjectKind::PortSpec => "PortSpec",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// The kind of a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ControlKind {
    /// Nodes with this control may not contain anything.
    Atomic,
    #[default]
    Active,
    Passive,
}

impl fmt::Display for ControlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlKind::Atomic => write!(f, "atomic"),
            ControlKind::Active => write!(f, "active"),
            ControlKind::Passive => write!(f, "passive"),
        }
    }
}

/// The kind of a namespace.
///
/// Bigraphs own the `Root`, `Site`, `Node`, `Link` and `InnerName`
/// namespaces; edges and outer names share `Link`. Signatures own
/// `Control` and every control owns `PortSpec`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NamespaceKind {
    Root,
    Site,
    Node,
    Link,
    InnerName,
    Control,
    PortSpec,
}

impl NamespaceKind {
    /// The namespaces owned by a bigraph.
    pub const BIGRAPH: [NamespaceKind; 5] = [
        NamespaceKind::Root,
        NamespaceKind::Site,
        NamespaceKind::Node,
        NamespaceKind::Link,
        NamespaceKind::InnerName,
    ];
}

impl fmt::Display for NamespaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
