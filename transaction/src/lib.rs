//! Big Red Transactions
//!
//! Two-phase validate-then-apply of changes against a model.
//!
//! Responsibilities:
//! - Validate a change (or a whole group) against a scratchpad so the
//!   live model is never touched by a rejected change
//! - Apply validated changes leaf by leaf through the executors,
//!   snapshotting each leaf so it can be inverted
//! - Materialise change descriptors against a model one leaf at a time
//! - Hold the engine configuration

mod config;
mod descriptor;
mod error;
mod executor;
mod manager;

pub use config::{DivergencePolicy, EngineConfig};
pub use error::{ChangeError, ChangeResult};
pub use executor::{BigraphExecutor, ChangeExecutor, DataExecutor, SignatureExecutor, StepExecutor};
pub use manager::{ExecutorManager, ValidatorManager};
