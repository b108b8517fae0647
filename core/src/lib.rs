//! Big Red Core Types
//!
//! This crate provides the foundational types used throughout the change engine:
//! - Identity types (ObjectId)
//! - Object, control and namespace kinds
//! - Extended data values and layout geometry
//! - Name policies
//! - Property keys, property values and the PropertyScratchpad overlay
//! - Common error types

mod error;
mod geometry;
mod id;
mod kind;
mod policy;
mod property;
mod scratchpad;
mod value;

pub use error::*;
pub use geometry::*;
pub use id::*;
pub use kind::*;
pub use policy::*;
pub use property::*;
pub use scratchpad::*;
pub use value::*;
