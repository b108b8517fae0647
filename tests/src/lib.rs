//! Big Red Integration Test Framework
//!
//! Provides a fluent API for writing scenario tests against a session.
//!
//! # Structure
//!
//! - **scenarios/*.ops** - Named operations: change descriptors in JSON,
//!   `VALIDATE` followed by a descriptor, `UNDO` or `REDO`
//! - **scenarios/seed_*.ops** - Steps committed before a scenario starts;
//!   several seeds may be layered in order
//! - **tests/** - Test orchestration (Rust: seeds + operations + assertions)
//!
//! # Example
//!
//! ```ignore
//! use bigred_tests::prelude::*;
//!
//! pub fn scenario() -> Scenario {
//!     Scenario::new("roots", "names.ops")
//!         .step("add_root", |a| a.leaves(1).exists(Identifier::root("0")))
//!         .step("add_duplicate_root", |a| a.error(messages::NAMES_MUST_BE_UNIQUE))
//! }
//!
//! #[test]
//! fn test() {
//!     scenario().run().unwrap();
//! }
//! ```

mod assertion;
mod error;
mod loader;
mod runner;
mod scenario;

pub use assertion::{Assertion, AssertionBuilder};
pub use error::{ScenarioError, ScenarioResult};
pub use loader::{Operation, Operations};
pub use runner::Runner;
pub use scenario::{Scenario, Step};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::assertion::{Assertion, AssertionBuilder};
    pub use crate::error::{ScenarioError, ScenarioResult};
    pub use crate::scenario::Scenario;
    pub use bigred_constraint::messages;
    pub use bigred_graph::Identifier;
    pub use bigred_transaction::EngineConfig;
}
