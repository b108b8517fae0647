//! Scenarios: a session prepared by seed files, then driven through named
//! steps of one operations file with expectations checked after each.

use std::path::{Path, PathBuf};

use bigred_transaction::EngineConfig;

use crate::assertion::{Assertion, AssertionBuilder};
use crate::error::ScenarioResult;
use crate::loader::Operations;
use crate::runner::Runner;

/// A named step of the operations, and what must hold after it ran.
#[derive(Debug)]
pub struct Step {
    pub name: String,
    pub assertion: Assertion,
}

/// Where the operations of a scenario come from.
#[derive(Debug)]
enum Script {
    /// A file under `scenarios/`, read when the scenario runs.
    File(PathBuf),
    Inline(Operations),
}

pub struct Scenario {
    name: String,
    script: Script,
    seeds: Vec<PathBuf>,
    config: EngineConfig,
    steps: Vec<Step>,
}

impl Scenario {
    /// A scenario driven by an operations file.
    ///
    /// Relative paths are resolved against this crate's `scenarios/`.
    pub fn new(name: impl Into<String>, operations: impl Into<PathBuf>) -> Self {
        Self::with_script(name.into(), Script::File(operations.into()))
    }

    /// A scenario driven by operations given as text.
    pub fn inline(name: impl Into<String>, source: &str) -> ScenarioResult<Self> {
        let operations = Operations::parse(source)?;
        Ok(Self::with_script(name.into(), Script::Inline(operations)))
    }

    fn with_script(name: String, script: Script) -> Self {
        Self {
            name,
            script,
            seeds: Vec::new(),
            config: EngineConfig::default(),
            steps: Vec::new(),
        }
    }

    /// Commit every step of a seed file before the first step runs.
    ///
    /// Seeds are applied in the order they were added, and end up in the
    /// session's history like any other change.
    pub fn seed(mut self, path: impl Into<PathBuf>) -> Self {
        self.seeds.push(path.into());
        self
    }

    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the step `name` next, then check what `expect` describes.
    ///
    /// Steps run in the order they are added here, not in file order, and
    /// a file's steps may be left out or reused by other scenarios.
    pub fn step<F>(mut self, name: impl Into<String>, expect: F) -> Self
    where
        F: FnOnce(AssertionBuilder) -> AssertionBuilder,
    {
        self.steps.push(Step {
            name: name.into(),
            assertion: expect(AssertionBuilder::new()).build(),
        });
        self
    }

    pub fn run(&self) -> ScenarioResult<()> {
        tracing::debug!(scenario = %self.name, steps = self.steps.len(), "running scenario");
        Runner::new(self)?.run()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn engine_config(&self) -> &EngineConfig {
        &self.config
    }

    /// Load every seed file, in order.
    pub fn load_seeds(&self) -> ScenarioResult<Vec<Operations>> {
        self.seeds
            .iter()
            .map(|path| Operations::load(&in_scenarios_dir(path)))
            .collect()
    }

    pub fn load_operations(&self) -> ScenarioResult<Operations> {
        match &self.script {
            Script::File(path) => Operations::load(&in_scenarios_dir(path)),
            Script::Inline(operations) => Ok(operations.clone()),
        }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}

fn in_scenarios_dir(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(path)
    }
}
