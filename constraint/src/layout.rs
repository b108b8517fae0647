//! Layout geometry.

use crate::naming::{check_in_bigraph, kind_of};
use crate::{messages, Deferrals, Rejection, StepValidator, Verdict};
use bigred_change::Change;
use bigred_core::{ObjectId, ObjectKind};
use bigred_graph::View;

/// Checks layout changes and, when layout is governed, that laid-out
/// places fit their containers without overlapping their siblings.
///
/// Geometry is only checked once the whole batch has been simulated, so a
/// container may be grown and its children moved in either order.
#[derive(Debug)]
pub struct LayoutValidator {
    governed: bool,
}

impl Default for LayoutValidator {
    fn default() -> Self {
        Self::new(true)
    }
}

impl LayoutValidator {
    pub fn new(governed: bool) -> Self {
        Self { governed }
    }

    pub fn is_governed(&self) -> bool {
        self.governed
    }

    fn check(&self, view: View<'_>, change: &Change, deferred: &mut Deferrals) -> Result<Verdict, String> {
        match change {
            Change::Layout(c) => {
                let kind = kind_of(view, c.target)?;
                if kind == ObjectKind::Bigraph {
                    return Err(messages::BIGRAPH_LAYOUT.to_string());
                }
                if !kind.is_layoutable() {
                    return Ok(Verdict::Unrecognised);
                }
                check_in_bigraph(view, c.target)?;
                if let Some(layout) = c.new_layout {
                    if !layout.is_valid() {
                        return Err(format!(
                            "{} can't have a negative size",
                            view.describe(c.target)
                        ));
                    }
                }
                self.defer_geometry(change, c.target, deferred);
                Ok(Verdict::Accepted)
            }
            Change::AddChild(c) if self.governed => {
                self.defer_geometry(change, c.child, deferred);
                Ok(Verdict::Accepted)
            }
            Change::AddChild(_)
            | Change::Group(_)
            | Change::Name(_)
            | Change::Remove(_)
            | Change::Connect(_)
            | Change::Disconnect(_)
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

    fn defer_geometry(&self, change: &Change, target: ObjectId, deferred: &mut Deferrals) {
        if self.governed {
            deferred.defer(change, "LayoutValidator", move |view| check_geometry(view, target));
        }
    }
}

/// Check a laid-out object against its parent, children and siblings.
fn check_geometry(view: View<'_>, id: ObjectId) -> Result<(), String> {
    // Removed later in the batch
    let Some(parent) = view.parent(id) else {
        return Ok(());
    };
    let Some(layout) = view.layout(id) else {
        return Ok(());
    };
    let kind = view.kind(id);

    if view.kind(parent) != Some(ObjectKind::Bigraph) {
        if let Some(bounds) = view.layout(parent) {
            if !bounds.at_origin().contains(&layout) {
                return Err(messages::CANNOT_FIT.to_string());
            }
        }
    }

    if kind.is_some_and(|k| k.is_container()) {
        let inner = layout.at_origin();
        for child in view.children(id) {
            if view.layout(child).is_some_and(|l| !inner.contains(&l)) {
                return Err(messages::TOO_SMALL.to_string());
            }
        }
    }

    if kind.is_some_and(|k| k.is_place()) {
        for sibling in view.children(parent) {
            if sibling == id || !view.kind(sibling).is_some_and(|k| k.is_place()) {
                continue;
            }
            if view.layout(sibling).is_some_and(|l| l.intersects(&layout)) {
                return Err(format!(
                    "{} would overlap {}",
                    view.describe(id),
                    view.describe(sibling)
                ));
            }
        }
    }
    Ok(())
}

impl StepValidator for LayoutValidator {
    fn name(&self) -> &'static str {
        "LayoutValidator"
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
