//! Big Red Rule
//!
//! Reaction rules: a redex and the changes that turn it into the reactum.
//!
//! Responsibilities:
//! - Keep a rule's changes as descriptors, so they survive across models
//! - Derive the reactum by replaying the changes onto a copy of the redex
//! - Replay the changes onto another agent as one transaction

mod error;
mod rule;

pub use error::{RuleError, RuleResult};
pub use rule::ReactionRule;
