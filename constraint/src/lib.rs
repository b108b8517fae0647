//! Big Red Constraints
//!
//! The validator chain every change passes through before it reaches the
//! live model.
//!
//! Responsibilities:
//! - Define the `StepValidator` participant contract and its rejections
//! - Check the structural invariants of bigraphs and signatures against a
//!   scratchpad-shadowed view of the model
//! - Collect deferred checks that only make sense once a whole batch has
//!   been simulated

mod container;
mod data;
mod layout;
pub mod messages;
mod naming;
mod node;
mod point;
mod rejection;
mod signature;
mod step;

pub use container::ContainerValidator;
pub use data::{DataValidator, PatternValidator};
pub use layout::LayoutValidator;
pub use node::NodeValidator;
pub use point::PointValidator;
pub use rejection::Rejection;
pub use signature::SignatureValidator;
pub use step::{DeferredCheck, Deferrals, StepValidator, Verdict};
