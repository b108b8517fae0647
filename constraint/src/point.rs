//! Link graph structure: connecting and disconnecting points.

use crate::naming::{check_in_bigraph, kind_of};
use crate::{messages, Deferrals, Rejection, StepValidator, Verdict};
use bigred_change::Change;
use bigred_core::ObjectId;
use bigred_graph::View;

/// Keeps every point connected to at most one link.
#[derive(Debug, Default)]
pub struct PointValidator;

impl PointValidator {
    pub fn new() -> Self {
        Self
    }

    fn check(&self, view: View<'_>, change: &Change) -> Result<Verdict, String> {
        match change {
            Change::Connect(c) => {
                self.check_ends(view, c.point, c.link)?;
                if view.link(c.point).is_some() {
                    return Err(messages::ALREADY_CONNECTED.to_string());
                }
                Ok(Verdict::Accepted)
            }
            Change::Disconnect(c) => {
                self.check_ends(view, c.point, c.link)?;
                match view.link(c.point) {
                    None => Err(messages::ALREADY_DISCONNECTED.to_string()),
                    Some(link) if link != c.link => Err(format!(
                        "{} is not connected to {}",
                        view.describe(c.point),
                        view.describe(c.link)
                    )),
                    Some(_) => Ok(Verdict::Accepted),
                }
            }
            Change::Group(_)
            | Change::Name(_)
            | Change::AddChild(_)
            | Change::Remove(_)
            | Change::Layout(_)
            | Change::Parameter(_)
            | Change::Alias(_)
            | Change::ExtendedData(_)
            | Change::AddControl(_)
            | Change::RemoveControl(_)
            | Change::ControlKind(_)
            | Change::ParameterPolicy(_)
            | Change::AddPort(_)
            | Change::RemovePort(_) => Ok(Verdict::Unrecognised),
        }
    }

    fn check_ends(&self, view: View<'_>, point: ObjectId, link: ObjectId) -> Result<(), String> {
        if !kind_of(view, point)?.is_point() {
            return Err(format!("{} is not a point", view.describe(point)));
        }
        if !kind_of(view, link)?.is_link() {
            return Err(format!("{} is not a link", view.describe(link)));
        }
        check_in_bigraph(view, link)?;
        check_in_bigraph(view, point)
    }
}

impl StepValidator for PointValidator {
    fn name(&self) -> &'static str {
        "PointValidator"
    }

    fn validate_step(
        &self,
        view: View<'_>,
        change: &Change,
        _deferred: &mut Deferrals,
    ) -> Result<Verdict, Rejection> {
        self.check(view, change)
            .map_err(|rationale| Rejection::new(change, self.name(), rationale))
    }
}
