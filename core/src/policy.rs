//! Name policies.
//!
//! A policy decides which strings are legal names in a namespace and
//! generates candidate default names. Controls also use a policy to
//! describe the values their nodes' parameters may take.

use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A name policy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamePolicy {
    /// Any non-empty string without whitespace. Defaults are `{prefix}1`, `{prefix}2`, ...
    String { prefix: String },
    /// Canonical 64-bit integers. Defaults are `0`, `1`, ...
    Long,
    /// Canonical integers greater than zero. Defaults are `1`, `2`, ...
    PositiveInteger,
    /// `true` or `false`; `1`, `0`, `yes` and `no` normalise to these.
    Boolean,
    /// Strings fully matching a regular expression.
    Pattern { pattern: String, prefix: String },
}

impl NamePolicy {
    /// A string policy with the given default-name prefix.
    pub fn string(prefix: impl Into<String>) -> Self {
        NamePolicy::String {
            prefix: prefix.into(),
        }
    }

    /// A pattern policy with the given default-name prefix.
    pub fn pattern(pattern: impl Into<String>, prefix: impl Into<String>) -> Self {
        NamePolicy::Pattern {
            pattern: pattern.into(),
            prefix: prefix.into(),
        }
    }

    /// Returns the canonical form of `name`, or None if it is not acceptable.
    pub fn normalise(&self, name: &str) -> Option<String> {
        match self {
            NamePolicy::String { .. } => {
                if name.is_empty() || name.chars().any(char::is_whitespace) {
                    None
                } else {
                    Some(name.to_string())
                }
            }
            NamePolicy::Long => name.parse::<i64>().ok().map(|n| n.to_string()),
            NamePolicy::PositiveInteger => match name.parse::<u64>() {
                Ok(n) if n >= 1 => Some(n.to_string()),
                _ => None,
            },
            NamePolicy::Boolean => match name.to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Some("true".to_string()),
                "false" | "0" | "no" => Some("false".to_string()),
                _ => None,
            },
            NamePolicy::Pattern { pattern, .. } => {
                // An invalid pattern accepts nothing
                let regex = Regex::new(&format!("^(?:{})$", pattern)).ok()?;
                regex.is_match(name).then(|| name.to_string())
            }
        }
    }

    /// Returns true if `name` is acceptable and already in canonical form.
    pub fn is_legal(&self, name: &str) -> bool {
        self.normalise(name).as_deref() == Some(name)
    }

    /// The `index`th candidate default name.
    pub fn name_for(&self, index: usize) -> String {
        match self {
            NamePolicy::String { prefix } | NamePolicy::Pattern { prefix, .. } => {
                format!("{}{}", prefix, index + 1)
            }
            NamePolicy::Long => index.to_string(),
            NamePolicy::PositiveInteger => (index + 1).to_string(),
            NamePolicy::Boolean => {
                if index % 2 == 0 {
                    "true".to_string()
                } else {
                    "false".to_string()
                }
            }
        }
    }
}

impl fmt::Display for NamePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamePolicy::String { .. } => write!(f, "string"),
            NamePolicy::Long => write!(f, "integer"),
            NamePolicy::PositiveInteger => write!(f, "positive integer"),
            NamePolicy::Boolean => write!(f, "boolean"),
            NamePolicy::Pattern { pattern, .. } => write!(f, "pattern /{}/", pattern),
        }
    }
}
