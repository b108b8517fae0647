//! Big Red Session
//!
//! A session owns one document and everything needed to change it:
//! - The live `Model`
//! - The validator and executor managers, built from an `EngineConfig`
//! - The undo/redo `History`
//! - The observers notified of every live property mutation

mod error;
mod session;

pub use error::{SessionError, SessionResult};
pub use session::{ObserverId, Session, SessionId};

pub use bigred_transaction::ChangeExecutor;
