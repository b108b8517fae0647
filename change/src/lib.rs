//! Big Red Changes
//!
//! Changes are the only way to mutate a model.
//!
//! Responsibilities:
//! - Represent every mutation as a value of the closed `Change` sum type
//! - Simulate changes into a scratchpad and apply them to the live model
//!   through the same per-kind routine
//! - Snapshot state before application so applied changes can be inverted
//! - Describe changes structurally with `ChangeDescriptor`s that can be
//!   resolved against another model

mod change;
mod descriptor;
mod error;
mod factory;
mod group;
mod ops;

pub use change::Change;
pub use descriptor::ChangeDescriptor;
pub use error::{CreationError, CreationResult};
pub use factory::ChangeFactory;
pub use group::ChangeGroup;
pub use ops::{
    data_validator, ChangeAddChild, ChangeAddControl, ChangeAddPort, ChangeAlias,
    ChangeConnect, ChangeControlKind, ChangeDisconnect, ChangeExtendedData, ChangeLayout,
    ChangeName, ChangeParameter, ChangeParameterPolicy, ChangeRemove, ChangeRemoveControl,
    ChangeRemovePort, ExtendedDataValidator,
};
