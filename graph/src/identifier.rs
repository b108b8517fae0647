//! Identifiers and resolvers.
//!
//! An [`Identifier`] addresses an object by its name path rather than its
//! `ObjectId`, so a descriptor written against one model can be resolved
//! against another. Identifiers compare and hash structurally.

use crate::{Model, View};
use bigred_core::{NamespaceKind, ObjectId, ObjectKind, PropertyScratchpad};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A structural object identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Identifier {
    Bigraph,
    Root { name: String },
    Site { name: String },
    Node { name: String, control: String },
    Edge { name: String },
    OuterName { name: String },
    InnerName { name: String },
    Port { node: String, name: String },
    Signature,
    Control { name: String },
    PortSpec { control: String, name: String },
}

impl Identifier {
    pub fn root(name: impl Into<String>) -> Self {
        Identifier::Root { name: name.into() }
    }

    pub fn site(name: impl Into<String>) -> Self {
        Identifier::Site { name: name.into() }
    }

    pub fn node(name: impl Into<String>, control: impl Into<String>) -> Self {
        Identifier::Node {
            name: name.into(),
            control: control.into(),
        }
    }

    pub fn edge(name: impl Into<String>) -> Self {
        Identifier::Edge { name: name.into() }
    }

    pub fn outer_name(name: impl Into<String>) -> Self {
        Identifier::OuterName { name: name.into() }
    }

    pub fn inner_name(name: impl Into<String>) -> Self {
        Identifier::InnerName { name: name.into() }
    }

    pub fn port(node: impl Into<String>, name: impl Into<String>) -> Self {
        Identifier::Port {
            node: node.into(),
            name: name.into(),
        }
    }

    pub fn control(name: impl Into<String>) -> Self {
        Identifier::Control { name: name.into() }
    }

    pub fn port_spec(control: impl Into<String>, name: impl Into<String>) -> Self {
        Identifier::PortSpec {
            control: control.into(),
            name: name.into(),
        }
    }

    /// The kind of object this identifier addresses.
    pub fn kind(&self) -> ObjectKind {
        match self {
            Identifier::Bigraph => ObjectKind::Bigraph,
            Identifier::Root { .. } => ObjectKind::Root,
            Identifier::Site { .. } => ObjectKind::Site,
            Identifier::Node { .. } => ObjectKind::Node,
            Identifier::Edge { .. } => ObjectKind::Edge,
            Identifier::OuterName { .. } => ObjectKind::OuterName,
            Identifier::InnerName { .. } => ObjectKind::InnerName,
            Identifier::Port { .. } => ObjectKind::Port,
            Identifier::Signature => ObjectKind::Signature,
            Identifier::Control { .. } => ObjectKind::Control,
            Identifier::PortSpec { .. } => ObjectKind::PortSpec,
        }
    }

    /// The object's own name, if it has one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Identifier::Bigraph | Identifier::Signature => None,
            Identifier::Root { name }
            | Identifier::Site { name }
            | Identifier::Node { name, .. }
            | Identifier::Edge { name }
            | Identifier::OuterName { name }
            | Identifier::InnerName { name }
            | Identifier::Port { name, .. }
            | Identifier::Control { name }
            | Identifier::PortSpec { name, .. } => Some(name),
        }
    }

    /// The same path with the object's own name replaced.
    pub fn renamed(&self, new_name: impl Into<String>) -> Self {
        let mut renamed = self.clone();
        match &mut renamed {
            Identifier::Bigraph | Identifier::Signature => {}
            Identifier::Root { name }
            | Identifier::Site { name }
            | Identifier::Node { name, .. }
            | Identifier::Edge { name }
            | Identifier::OuterName { name }
            | Identifier::InnerName { name }
            | Identifier::Port { name, .. }
            | Identifier::Control { name }
            | Identifier::PortSpec { name, .. } => *name = new_name.into(),
        }
        renamed
    }

    /// Resolve against a (possibly shadowed) model.
    pub fn resolve(&self, view: View<'_>) -> Option<ObjectId> {
        let model = view.model();
        let bigraph = model.bigraph();
        let in_bigraph = |ns: NamespaceKind, name: &str| {
            view.lookup(bigraph, ns, name)
                .filter(|id| view.kind(*id) == Some(self.kind()))
        };
        match self {
            Identifier::Bigraph => Some(bigraph),
            Identifier::Signature => Some(model.signature()),
            Identifier::Root { name } => in_bigraph(NamespaceKind::Root, name),
            Identifier::Site { name } => in_bigraph(NamespaceKind::Site, name),
            Identifier::Edge { name } | Identifier::OuterName { name } => {
                in_bigraph(NamespaceKind::Link, name)
            }
            Identifier::InnerName { name } => in_bigraph(NamespaceKind::InnerName, name),
            Identifier::Node { name, control } => {
                let node = in_bigraph(NamespaceKind::Node, name)?;
                let actual = view.control(node).and_then(|c| view.name(c));
                (actual.as_deref() == Some(control.as_str())).then_some(node)
            }
            Identifier::Port { node, name } => {
                let node = view.lookup(bigraph, NamespaceKind::Node, node)?;
                view.ports(node)
                    .into_iter()
                    .find(|port| view.name(*port).as_deref() == Some(name.as_str()))
            }
            Identifier::Control { name } => {
                view.lookup(model.signature(), NamespaceKind::Control, name)
            }
            Identifier::PortSpec { control, name } => {
                let control = view.lookup(model.signature(), NamespaceKind::Control, control)?;
                view.lookup(control, NamespaceKind::PortSpec, name)
            }
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Bigraph => write!(f, "bigraph"),
            Identifier::Signature => write!(f, "signature"),
            Identifier::Root { name } => write!(f, "root {}", name),
            Identifier::Site { name } => write!(f, "site {}", name),
            Identifier::Node { name, control } => write!(f, "node {}:{}", name, control),
            Identifier::Edge { name } => write!(f, "edge {}", name),
            Identifier::OuterName { name } => write!(f, "outer name {}", name),
            Identifier::InnerName { name } => write!(f, "inner name {}", name),
            Identifier::Port { node, name } => write!(f, "port {} of node {}", name, node),
            Identifier::Control { name } => write!(f, "control {}", name),
            Identifier::PortSpec { control, name } => {
                write!(f, "port spec {} of control {}", name, control)
            }
        }
    }
}

/// Maps identifiers to live objects of one model.
pub trait Resolver {
    /// Read the target, shadowed by `scratch` if given.
    fn view<'a>(&'a self, scratch: Option<&'a PropertyScratchpad>) -> View<'a>;

    /// Find the object an identifier refers to.
    fn lookup(&self, scratch: Option<&PropertyScratchpad>, identifier: &Identifier) -> Option<ObjectId> {
        identifier.resolve(self.view(scratch))
    }

    /// Create a fresh detached object for an identifier.
    ///
    /// Returns None for identifiers that cannot be instantiated on their
    /// own (the bigraph, the signature, ports) or whose prerequisites do
    /// not resolve (a node's control).
    fn instantiate(&mut self, scratch: Option<&PropertyScratchpad>, identifier: &Identifier) -> Option<ObjectId>;
}

impl Resolver for Model {
    fn view<'a>(&'a self, scratch: Option<&'a PropertyScratchpad>) -> View<'a> {
        View::new(self, scratch)
    }

    fn instantiate(&mut self, scratch: Option<&PropertyScratchpad>, identifier: &Identifier) -> Option<ObjectId> {
        let id = match identifier {
            Identifier::Bigraph | Identifier::Signature | Identifier::Port { .. } => return None,
            Identifier::Root { .. } => self.create_root(),
            Identifier::Site { .. } => self.create_site(),
            Identifier::Edge { .. } => self.create_edge(),
            Identifier::OuterName { .. } => self.create_outer_name(),
            Identifier::InnerName { .. } => self.create_inner_name(),
            Identifier::Node { control, .. } => {
                let view = View::new(self, scratch);
                let control = Identifier::control(control.as_str()).resolve(view)?;
                let specs = view.port_specs(control);
                self.create_node_with_ports(control, &specs)
            }
            Identifier::Control { .. } => self.create_control(),
            Identifier::PortSpec { .. } => self.create_port_spec(),
        };
        Some(id)
    }
}
