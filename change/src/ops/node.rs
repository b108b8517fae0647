//! PARAMETER / ALIAS operations - node parameters and site aliases.

use super::Operation;
use crate::Change;
use bigred_core::{ObjectId, Property};
use bigred_graph::{PropertyTarget, View};
use std::fmt;

/// Set or clear the parameter of a node.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeParameter {
    pub node: ObjectId,
    pub new_parameter: Option<String>,
    old_parameter: Option<Option<String>>,
}

impl ChangeParameter {
    pub fn new(node: ObjectId, new_parameter: Option<String>) -> Self {
        Self {
            node,
            new_parameter,
            old_parameter: None,
        }
    }
}

impl Operation for ChangeParameter {
    fn before_apply(&mut self, view: View<'_>) {
        self.old_parameter = Some(view.parameter(self.node));
    }

    fn can_invert(&self) -> bool {
        self.old_parameter.is_some()
    }

    fn inverse(&self) -> Option<Change> {
        Some(ChangeParameter::new(self.node, self.old_parameter.clone()?).into())
    }

    fn perform(&self, target: &mut dyn PropertyTarget) {
        target.set(self.node, Property::Parameter, self.new_parameter.clone().into());
    }
}

impl fmt::Display for ChangeParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Change(set parameter of {} to {:?})", self.node, self.new_parameter)
    }
}

/// Set or clear the alias of a site.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeAlias {
    pub site: ObjectId,
    pub new_alias: Option<String>,
    old_alias: Option<Option<String>>,
}

impl ChangeAlias {
    pub fn new(site: ObjectId, new_alias: Option<String>) -> Self {
        Self {
            site,
            new_alias,
            old_alias: None,
        }
    }
}

impl Operation for ChangeAlias {
    fn before_apply(&mut self, view: View<'_>) {
        self.old_alias = Some(view.alias(self.site));
    }

    fn can_invert(&self) -> bool {
        self.old_alias.is_some()
    }

    fn inverse(&self) -> Option<Change> {
        Some(ChangeAlias::new(self.site, self.old_alias.clone()?).into())
    }

    fn perform(&self, target: &mut dyn PropertyTarget) {
        target.set(self.site, Property::Alias, self.new_alias.clone().into());
    }
}

impl fmt::Display for ChangeAlias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Change(set alias of {} to {:?})", self.site, self.new_alias)
    }
}
