//! Loader for operations files.
//!
//! An `.ops` file is a list of named steps. Each `--# name` marker opens a
//! step whose body is one operation: a change descriptor in JSON, `VALIDATE`
//! followed by a descriptor, `UNDO` or `REDO`. Other lines starting with
//! `--` are comments.

use std::path::Path;

use bigred_change::ChangeDescriptor;

use crate::error::{ScenarioError, ScenarioResult};

/// What a step does to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Resolve the descriptor and commit the result.
    Apply(ChangeDescriptor),
    /// Resolve and validate the descriptor without committing.
    Validate(ChangeDescriptor),
    Undo,
    Redo,
}

impl Operation {
    /// Parse a step body.
    pub fn parse(body: &str) -> Result<Self, String> {
        let body = body.trim();
        if body.is_empty() {
            return Err("step has no operation".to_string());
        }
        match body {
            "UNDO" => Ok(Operation::Undo),
            "REDO" => Ok(Operation::Redo),
            _ => match body.strip_prefix("VALIDATE") {
                Some(rest) => descriptor(rest).map(Operation::Validate),
                None => descriptor(body).map(Operation::Apply),
            },
        }
    }
}

fn descriptor(json: &str) -> Result<ChangeDescriptor, String> {
    serde_json::from_str(json.trim()).map_err(|e| e.to_string())
}

/// The steps of one operations file, in file order.
#[derive(Debug, Clone)]
pub struct Operations {
    origin: String,
    steps: Vec<(String, Operation)>,
}

impl Operations {
    /// Parse operations given as text.
    pub fn parse(source: &str) -> ScenarioResult<Self> {
        Self::parse_from("<inline>", source)
    }

    /// Read and parse an operations file.
    pub fn load(path: &Path) -> ScenarioResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| ScenarioError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let origin = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        Self::parse_from(&origin, &source)
    }

    fn parse_from(origin: &str, source: &str) -> ScenarioResult<Self> {
        // (name, marker line, body)
        let mut open: Vec<(String, usize, String)> = Vec::new();

        for (index, line) in source.lines().enumerate() {
            let trimmed = line.trim();
            if let Some(name) = trimmed.strip_prefix("--#") {
                let name = name.trim();
                if name.is_empty() {
                    return Err(ScenarioError::parse(origin, index + 1, "step marker without a name"));
                }
                if open.iter().any(|(existing, ..)| existing == name) {
                    return Err(ScenarioError::parse(
                        origin,
                        index + 1,
                        format!("step '{}' is defined twice", name),
                    ));
                }
                open.push((name.to_string(), index + 1, String::new()));
            } else if trimmed.starts_with("--") {
                continue;
            } else if let Some((.., body)) = open.last_mut() {
                body.push_str(line);
                body.push('\n');
            }
        }

        let steps = open
            .into_iter()
            .map(|(name, line, body)| {
                Operation::parse(&body)
                    .map(|operation| (name, operation))
                    .map_err(|message| ScenarioError::parse(origin, line, message))
            })
            .collect::<ScenarioResult<Vec<_>>>()?;

        Ok(Self {
            origin: origin.to_string(),
            steps,
        })
    }

    /// The file the operations came from, or `<inline>`.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn get(&self, name: &str) -> Option<&Operation> {
        self.steps.iter().find(|(n, _)| n == name).map(|(_, op)| op)
    }

    /// Every step, in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Operation)> {
        self.steps.iter().map(|(name, op)| (name.as_str(), op))
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigred_graph::Identifier;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_steps_in_order() {
        // GIVEN
        let source = r#"
-- Lines before the first marker are ignored

--# add_root
{"AddChild": {"parent": "Bigraph", "child": {"Root": {"name": "0"}}}}

--# check_site
-- Only validated, never committed
VALIDATE {"AddChild": {"parent": {"Root": {"name": "0"}}, "child": {"Site": {"name": "0"}}}}

--# undo
UNDO
"#;

        // WHEN
        let ops = Operations::parse(source).unwrap();

        // THEN
        let names: Vec<&str> = ops.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["add_root", "check_site", "undo"]);
        assert_eq!(
            ops.get("add_root"),
            Some(&Operation::Apply(ChangeDescriptor::AddChild {
                parent: Identifier::Bigraph,
                child: Identifier::root("0"),
                position: None,
            }))
        );
        assert!(matches!(ops.get("check_site"), Some(Operation::Validate(_))));
        assert_eq!(ops.get("undo"), Some(&Operation::Undo));
    }

    #[test]
    fn test_bad_json_reports_the_marker_line() {
        let source = "--# fine\nUNDO\n\n--# broken\n{\"AddChild\": \n";

        let error = Operations::parse(source).unwrap_err();

        assert!(matches!(error, ScenarioError::Parse { line: 4, .. }));
        assert!(error.to_string().starts_with("<inline>, line 4:"));
    }

    #[test]
    fn test_unnamed_duplicate_and_empty_steps_rejected() {
        assert!(matches!(
            Operations::parse("--#\nUNDO\n"),
            Err(ScenarioError::Parse { line: 1, .. })
        ));
        assert!(matches!(
            Operations::parse("--# a\nUNDO\n--# a\nREDO\n"),
            Err(ScenarioError::Parse { line: 3, .. })
        ));
        assert!(Operations::parse("--# empty\n-- nothing here\n").is_err());
    }
}
