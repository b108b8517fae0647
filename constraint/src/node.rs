//! Node parameters and site aliases.

use crate::naming::{check_in_bigraph, check_parameter, kind_of};
use crate::{Deferrals, Rejection, StepValidator, Verdict};
use bigred_change::Change;
use bigred_core::{NamespaceKind, ObjectKind};
use bigred_graph::View;

#[derive(Debug, Default)]
pub struct NodeValidator;

impl NodeValidator {
    pub fn new() -> Self {
        Self
    }

    fn check(&self, view: View<'_>, change: &Change, deferred: &mut Deferrals) -> Result<Verdict, String> {
        match change {
            Change::Parameter(c) => {
                if kind_of(view, c.node)? != ObjectKind::Node {
                    return Err(format!("{} is not a node", view.describe(c.node)));
                }
                check_in_bigraph(view, c.node)?;
                // The control's policy may still change later in the batch
                let node = c.node;
                deferred.defer(change, "NodeValidator", move |view| check_parameter(view, node));
                Ok(Verdict::Accepted)
            }
            Change::Alias(c) => {
                if kind_of(view, c.site)? != ObjectKind::Site {
                    return Err(format!("{} is not a site", view.describe(c.site)));
                }
                check_in_bigraph(view, c.site)?;
                // Aliases need not be unique, only well-formed
                let model = view.model();
                let policy = model.namespace(model.bigraph(), NamespaceKind::Site).map(|ns| ns.policy());
                if let (Some(policy), Some(alias)) = (policy, c.new_alias.as_deref()) {
                    if !policy.is_legal(alias) {
                        return Err(format!(
                            "\"{}\" is not a valid alias for {}",
                            alias,
                            view.describe(c.site)
                        ));
                    }
                }
                Ok(Verdict::Accepted)
            }
            Change::Group(_)
            | Change::Name(_)
            | Change::AddChild(_)
            | Change::Remove(_)
            | Change::Connect(_)
            | Change::Disconnect(_)
            | Change::Layout(_)
            | Change::ExtendedData(_)
            | Change::AddControl(_)
            | Change::RemoveControl(_)
            | Change::ControlKind(_)
            | Change::ParameterPolicy(_)
            | Change::AddPort(_)
            | Change::RemovePort(_) => Ok(Verdict::Unrecognised),
        }
    }
}

impl StepValidator for NodeValidator {
    fn name(&self) -> &'static str {
        "NodeValidator"
    }

    fn validate_step(
        &self,
        view: View<'_>,
        change: &Change,
        deferred: &mut Deferrals,
    ) -> Result<Verdict, Rejection> {
        self.check(view, change, deferred)
            .map_err(|rationale| Rejection::new(change, self.name(), rationale))
    }
}
