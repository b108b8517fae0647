//! CONNECT / DISCONNECT operations - attach points to links.

use super::{position_in, Operation};
use crate::Change;
use bigred_core::{ObjectId, Property, PropertyValue};
use bigred_graph::{PropertyTarget, View};
use std::fmt;

/// Connect a point to a link.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChangeConnect {
    pub point: ObjectId,
    pub link: ObjectId,
    /// Index among the link's points; appended when None.
    pub position: Option<usize>,
}

impl ChangeConnect {
    pub fn new(point: ObjectId, link: ObjectId) -> Self {
        Self {
            point,
            link,
            position: None,
        }
    }

    pub fn at(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }
}

impl Operation for ChangeConnect {
    fn inverse(&self) -> Option<Change> {
        Some(ChangeDisconnect::new(self.point, self.link).into())
    }

    fn perform(&self, target: &mut dyn PropertyTarget) {
        let (point, position) = (self.point, self.position);
        target.edit_objects(self.link, Property::Points, &mut |points| match position {
            Some(i) if i <= points.len() => points.insert(i, point),
            _ => points.push(point),
        });
        target.set(point, Property::Link, PropertyValue::Object(self.link));
    }
}

impl fmt::Display for ChangeConnect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Change(connect {} to {})", self.point, self.link)
    }
}

/// Disconnect a point from the link it is connected to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChangeDisconnect {
    pub point: ObjectId,
    pub link: ObjectId,
    old_position: Option<usize>,
}

impl ChangeDisconnect {
    pub fn new(point: ObjectId, link: ObjectId) -> Self {
        Self {
            point,
            link,
            old_position: None,
        }
    }
}

impl Operation for ChangeDisconnect {
    fn before_apply(&mut self, view: View<'_>) {
        self.old_position = position_in(view, self.link, &Property::Points, self.point);
    }

    fn inverse(&self) -> Option<Change> {
        let connect = ChangeConnect::new(self.point, self.link);
        Some(match self.old_position {
            Some(position) => connect.at(position),
            None => connect,
        }
        .into())
    }

    fn perform(&self, target: &mut dyn PropertyTarget) {
        let point = self.point;
        target.edit_objects(self.link, Property::Points, &mut |points| {
            points.retain(|p| *p != point)
        });
        target.set(point, Property::Link, PropertyValue::Absent);
    }
}

impl fmt::Display for ChangeDisconnect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Change(disconnect {} from {})", self.point, self.link)
    }
}
