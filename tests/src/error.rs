//! Why a scenario did not pass.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type ScenarioResult<T> = Result<T, ScenarioError>;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("couldn't read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    /// An operations file is malformed. `line` is 1-based.
    #[error("{origin}, line {line}: {message}")]
    Parse {
        origin: String,
        line: usize,
        message: String,
    },

    /// A seed step failed, so the scenario never started.
    #[error("seed step {origin}:{step} was rejected: {message}")]
    SeedRejected {
        origin: String,
        step: String,
        message: String,
    },

    /// A step ran, but the session didn't end up as expected.
    #[error("step '{step}': {message}")]
    Unmet { step: String, message: String },

    #[error("{origin} has no step named '{step}'")]
    UnknownStep { origin: String, step: String },
}

impl ScenarioError {
    pub fn parse(origin: &str, line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            origin: origin.to_string(),
            line,
            message: message.into(),
        }
    }

    pub fn unmet(step: &str, message: impl Into<String>) -> Self {
        Self::Unmet {
            step: step.to_string(),
            message: message.into(),
        }
    }
}
