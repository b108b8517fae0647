//! Rejection rationales shared by the validators.
//!
//! Tests match on these, so keep them stable.

/// Two objects of one namespace would share a name.
pub const NAMES_MUST_BE_UNIQUE: &str = "Names must be unique";

/// A point is connected twice.
pub const ALREADY_CONNECTED: &str =
    "Connections can only be established to Points that aren't already connected";

/// A point is disconnected twice.
pub const ALREADY_DISCONNECTED: &str = "The Point is already disconnected";

/// Suffix naming the control that refused a child.
pub const IS_ATOMIC: &str = "is an atomic control";

/// An edge was added below the top level.
pub const EDGES_IN_BIGRAPH: &str = "Edges must be children of the top-level Bigraph";

/// The bigraph itself was given a layout.
pub const BIGRAPH_LAYOUT: &str = "Bigraphs cannot be moved or resized";

/// A laid-out object sticks out of its parent.
pub const CANNOT_FIT: &str = "The object can no longer fit into its container";

/// A container shrank below its children.
pub const TOO_SMALL: &str = "The new size is too small";

/// Suffix for leaves no validator accepted.
pub const NOT_RECOGNISED: &str = "was not recognised by the validator";

/// Suffix for containers removed while they still have children.
pub const HAS_CHILDREN: &str = "has child objects which must be removed first";

/// Suffix for controls without a parameter policy.
pub const NO_PARAMETER: &str = "does not define a parameter";
