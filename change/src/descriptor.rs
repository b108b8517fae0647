//! Change descriptors.
//!
//! A descriptor is a serializable, structurally comparable stand-in for a
//! change that names its subjects with [`Identifier`]s. Resolving it
//! against a model (through a scratchpad holding the effects of earlier
//! changes in the same batch) yields a concrete [`Change`].

use crate::error::{CreationError, CreationResult};
use crate::{Change, ChangeGroup};
use bigred_core::{
    ControlKind, NamePolicy, ObjectId, ObjectKind, PropertyScratchpad, Rectangle, Value,
};
use bigred_graph::{Identifier, Model, Resolver, View};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A structural description of a change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeDescriptor {
    Group(Vec<ChangeDescriptor>),
    Name {
        target: Identifier,
        name: String,
    },
    /// Creates a fresh object of the child identifier's kind, named after it.
    AddChild {
        parent: Identifier,
        child: Identifier,
        position: Option<usize>,
    },
    Remove {
        target: Identifier,
        parent: Option<Identifier>,
    },
    Connect {
        point: Identifier,
        link: Identifier,
    },
    Disconnect {
        point: Identifier,
        link: Identifier,
    },
    Layout {
        target: Identifier,
        layout: Option<Rectangle>,
    },
    Parameter {
        node: Identifier,
        value: Option<String>,
    },
    Alias {
        site: Identifier,
        alias: Option<String>,
    },
    ExtendedData {
        target: Identifier,
        key: String,
        value: Option<Value>,
    },
    /// Creates a fresh control, named after the identifier.
    AddControl {
        control: Identifier,
    },
    RemoveControl {
        control: Identifier,
    },
    ControlKind {
        control: Identifier,
        kind: ControlKind,
    },
    ParameterPolicy {
        control: Identifier,
        policy: Option<NamePolicy>,
    },
    /// Creates a fresh port spec on the identifier's control.
    AddPort {
        port: Identifier,
    },
    RemovePort {
        port: Identifier,
    },
}

fn resolve<R: Resolver + ?Sized>(
    resolver: &R,
    scratch: &PropertyScratchpad,
    identifier: &Identifier,
) -> CreationResult<ObjectId> {
    resolver
        .lookup(Some(scratch), identifier)
        .ok_or_else(|| CreationError::unresolved(identifier))
}

fn instantiate<R: Resolver + ?Sized>(
    resolver: &mut R,
    scratch: &PropertyScratchpad,
    identifier: &Identifier,
) -> CreationResult<(ObjectId, String)> {
    let name = identifier
        .name()
        .ok_or_else(|| CreationError::not_instantiable(identifier))?
        .to_string();
    let id = resolver
        .instantiate(Some(scratch), identifier)
        .ok_or_else(|| CreationError::not_instantiable(identifier))?;
    Ok((id, name))
}

impl ChangeDescriptor {
    /// Group a list of descriptors.
    pub fn group(descriptors: impl IntoIterator<Item = ChangeDescriptor>) -> Self {
        ChangeDescriptor::Group(descriptors.into_iter().collect())
    }

    pub fn is_group(&self) -> bool {
        matches!(self, ChangeDescriptor::Group(_))
    }

    /// Resolve into a concrete change.
    ///
    /// Group members are all resolved against the same scratchpad; a batch
    /// whose later members depend on earlier ones must be resolved one
    /// leaf at a time with the scratchpad updated in between.
    pub fn create_change<R: Resolver + ?Sized>(
        &self,
        scratch: &PropertyScratchpad,
        resolver: &mut R,
    ) -> CreationResult<Change> {
        let change = match self {
            ChangeDescriptor::Group(members) => {
                let mut group = ChangeGroup::new();
                for member in members {
                    group.push(member.create_change(scratch, resolver)?);
                }
                group.into()
            }
            ChangeDescriptor::Name { target, name } => {
                Change::name(resolve(&*resolver, scratch, target)?, name.clone())
            }
            ChangeDescriptor::AddChild {
                parent,
                child,
                position,
            } => {
                let parent = resolve(&*resolver, scratch, parent)?;
                let (child, name) = instantiate(resolver, scratch, child)?;
                let mut change = crate::ChangeAddChild::new(parent, child, name);
                change.position = *position;
                change.into()
            }
            ChangeDescriptor::Remove { target, parent } => {
                let id = resolve(&*resolver, scratch, target)?;
                if let Some(parent_identifier) = parent {
                    let parent = resolve(&*resolver, scratch, parent_identifier)?;
                    if resolver.view(Some(scratch)).parent(id) != Some(parent) {
                        return Err(CreationError::NotAChild {
                            child: target.clone(),
                            parent: parent_identifier.clone(),
                        });
                    }
                }
                Change::remove(id)
            }
            ChangeDescriptor::Connect { point, link } => Change::connect(
                resolve(&*resolver, scratch, point)?,
                resolve(&*resolver, scratch, link)?,
            ),
            ChangeDescriptor::Disconnect { point, link } => Change::disconnect(
                resolve(&*resolver, scratch, point)?,
                resolve(&*resolver, scratch, link)?,
            ),
            ChangeDescriptor::Layout { target, layout } => {
                Change::layout(resolve(&*resolver, scratch, target)?, *layout)
            }
            ChangeDescriptor::Parameter { node, value } => {
                Change::parameter(resolve(&*resolver, scratch, node)?, value.as_deref())
            }
            ChangeDescriptor::Alias { site, alias } => {
                Change::alias(resolve(&*resolver, scratch, site)?, alias.as_deref())
            }
            ChangeDescriptor::ExtendedData { target, key, value } => Change::extended_data(
                resolve(&*resolver, scratch, target)?,
                key.clone(),
                value.clone(),
            ),
            ChangeDescriptor::AddControl { control } => {
                let signature = resolve(&*resolver, scratch, &Identifier::Signature)?;
                let (control, name) = instantiate(resolver, scratch, control)?;
                Change::add_control(signature, control, name)
            }
            ChangeDescriptor::RemoveControl { control } => {
                Change::remove_control(resolve(&*resolver, scratch, control)?)
            }
            ChangeDescriptor::ControlKind { control, kind } => {
                Change::control_kind(resolve(&*resolver, scratch, control)?, *kind)
            }
            ChangeDescriptor::ParameterPolicy { control, policy } => {
                Change::parameter_policy(resolve(&*resolver, scratch, control)?, policy.clone())
            }
            ChangeDescriptor::AddPort { port } => {
                let Identifier::PortSpec { control, .. } = port else {
                    return Err(CreationError::not_instantiable(port));
                };
                let control = resolve(&*resolver, scratch, &Identifier::control(control.as_str()))?;
                let (spec, name) = instantiate(resolver, scratch, port)?;
                Change::add_port(control, spec, name)
            }
            ChangeDescriptor::RemovePort { port } => {
                Change::remove_port(resolve(&*resolver, scratch, port)?)
            }
        };
        Ok(change)
    }

    /// Describe a change structurally, as seen before it is applied.
    ///
    /// Group members are described against the state left by the members
    /// before them. Returns None if a subject has no identifier.
    pub fn from_change(
        change: &Change,
        model: &Model,
        scratch: Option<&PropertyScratchpad>,
    ) -> Option<ChangeDescriptor> {
        if let Change::Group(group) = change {
            let mut local = scratch.cloned().unwrap_or_default();
            let mut members = Vec::with_capacity(group.len());
            for member in group {
                members.push(Self::from_change(member, model, Some(&local))?);
                member.simulate(model, &mut local);
            }
            return Some(ChangeDescriptor::Group(members));
        }

        let view = View::new(model, scratch);
        let id = |object: ObjectId| view.identifier(object);
        let descriptor = match change {
            Change::Group(_) => return None,
            Change::Name(c) => ChangeDescriptor::Name {
                target: id(c.target)?,
                name: c.new_name.clone()?,
            },
            Change::AddChild(c) => {
                let name = c.name.clone()?;
                let child = match view.kind(c.child)? {
                    ObjectKind::Root => Identifier::root(name),
                    ObjectKind::Site => Identifier::site(name),
                    ObjectKind::Edge => Identifier::edge(name),
                    ObjectKind::OuterName => Identifier::outer_name(name),
                    ObjectKind::InnerName => Identifier::inner_name(name),
                    ObjectKind::Node => {
                        Identifier::node(name, view.name(view.control(c.child)?)?)
                    }
                    _ => return None,
                };
                ChangeDescriptor::AddChild {
                    parent: id(c.parent)?,
                    child,
                    position: c.position,
                }
            }
            Change::Remove(c) => ChangeDescriptor::Remove {
                target: id(c.target)?,
                parent: view.parent(c.target).and_then(id),
            },
            Change::Connect(c) => ChangeDescriptor::Connect {
                point: id(c.point)?,
                link: id(c.link)?,
            },
            Change::Disconnect(c) => ChangeDescriptor::Disconnect {
                point: id(c.point)?,
                link: id(c.link)?,
            },
            Change::Layout(c) => ChangeDescriptor::Layout {
                target: id(c.target)?,
                layout: c.new_layout,
            },
            Change::Parameter(c) => ChangeDescriptor::Parameter {
                node: id(c.node)?,
                value: c.new_parameter.clone(),
            },
            Change::Alias(c) => ChangeDescriptor::Alias {
                site: id(c.site)?,
                alias: c.new_alias.clone(),
            },
            Change::ExtendedData(c) => ChangeDescriptor::ExtendedData {
                target: id(c.target)?,
                key: c.key.clone(),
                value: c.new_value.clone(),
            },
            Change::AddControl(c) => ChangeDescriptor::AddControl {
                control: Identifier::control(c.name.clone()?),
            },
            Change::RemoveControl(c) => ChangeDescriptor::RemoveControl {
                control: id(c.control)?,
            },
            Change::ControlKind(c) => ChangeDescriptor::ControlKind {
                control: id(c.control)?,
                kind: c.new_kind,
            },
            Change::ParameterPolicy(c) => ChangeDescriptor::ParameterPolicy {
                control: id(c.control)?,
                policy: c.new_policy.clone(),
            },
            Change::AddPort(c) => ChangeDescriptor::AddPort {
                port: Identifier::port_spec(view.name(c.control)?, c.name.clone()?),
            },
            Change::RemovePort(c) => ChangeDescriptor::RemovePort {
                port: id(c.spec)?,
            },
        };
        Some(descriptor)
    }
}

impl fmt::Display for ChangeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeDescriptor::Group(members) => write!(f, "ChangeDescriptorGroup[{} members]", members.len()),
            ChangeDescriptor::Name { target, name } => write!(f, "Descriptor(rename {} to {:?})", target, name),
            ChangeDescriptor::AddChild { parent, child, .. } => {
                write!(f, "Descriptor(add {} to {})", child, parent)
            }
            ChangeDescriptor::Remove { target, .. } => write!(f, "Descriptor(remove {})", target),
            ChangeDescriptor::Connect { point, link } => {
                write!(f, "Descriptor(connect {} to {})", point, link)
            }
            ChangeDescriptor::Disconnect { point, link } => {
                write!(f, "Descriptor(disconnect {} from {})", point, link)
            }
            ChangeDescriptor::Layout { target, .. } => write!(f, "Descriptor(relayout {})", target),
            ChangeDescriptor::Parameter { node, value } => {
                write!(f, "Descriptor(set parameter of {} to {:?})", node, value)
            }
            ChangeDescriptor::Alias { site, alias } => {
                write!(f, "Descriptor(set alias of {} to {:?})", site, alias)
            }
            ChangeDescriptor::ExtendedData { target, key, .. } => {
                write!(f, "Descriptor(set data {:?} of {})", key, target)
            }
            ChangeDescriptor::AddControl { control } => write!(f, "Descriptor(add {})", control),
            ChangeDescriptor::RemoveControl { control } => write!(f, "Descriptor(remove {})", control),
            ChangeDescriptor::ControlKind { control, kind } => {
                write!(f, "Descriptor(set kind of {} to {})", control, kind)
            }
            ChangeDescriptor::ParameterPolicy { control, .. } => {
                write!(f, "Descriptor(set parameter policy of {})", control)
            }
            ChangeDescriptor::AddPort { port } => write!(f, "Descriptor(add {})", port),
            ChangeDescriptor::RemovePort { port } => write!(f, "Descriptor(remove {})", port),
        }
    }
}
