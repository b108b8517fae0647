//! Big Red Graph Storage
//!
//! This crate provides the live object arena for one document:
//! - `Model`: objects of a bigraph and its signature, addressed by `ObjectId`
//! - `Namespace`: per-(owner, kind) name registries with scratchpad-aware overloads
//! - `View`: reads that fall through from a scratchpad to the live model
//! - `PropertyTarget`: the sealed write surface shared by `Simulation` and `Application`
//! - `Identifier` / `Resolver`: name paths that survive across model instances

mod event;
mod identifier;
mod model;
mod namespace;
mod object;
mod view;

pub use event::*;
pub use identifier::*;
pub use model::*;
pub use namespace::*;
pub use object::*;
pub use view::*;
