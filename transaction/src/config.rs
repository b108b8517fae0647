//! Engine configuration.

use serde::{Deserialize, Serialize};

/// What to do when a validated leaf is not applied by any executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DivergencePolicy {
    /// Treat it as a bug in the engine and abort.
    #[default]
    Panic,
    /// Return [`ChangeError::Diverged`](crate::ChangeError::Diverged).
    /// Leaves applied before the divergent one stay applied.
    Error,
}

/// Configuration for a change engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Check that laid-out places fit their containers and don't overlap
    pub governed_layout: bool,
    /// Reaction to a leaf that validated but wasn't applied
    pub divergence: DivergencePolicy,
    /// Maximum number of undoable transactions kept, unbounded if None
    pub history_limit: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            governed_layout: true,
            divergence: DivergencePolicy::Panic,
            history_limit: Some(100),
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_governed_layout(mut self, governed: bool) -> Self {
        self.governed_layout = governed;
        self
    }

    pub fn with_divergence(mut self, divergence: DivergencePolicy) -> Self {
        self.divergence = divergence;
        self
    }

    pub fn with_history_limit(mut self, limit: Option<usize>) -> Self {
        self.history_limit = limit;
        self
    }

    /// Structural checks only, recoverable divergence and a short history.
    pub fn minimal() -> Self {
        Self {
            governed_layout: false,
            divergence: DivergencePolicy::Error,
            history_limit: Some(10),
        }
    }

    /// Parse a configuration; missing fields take their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
