//! Transition notifications
//!
//! Structured records emitted when an element+range pair changes on-screen
//! status, replacing ad-hoc event payloads with one explicit shape.

use onscreen_geometry::{ElementId, GeometrySnapshot};

/// Did the element enter or leave the range?
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TransitionKind {
    Entered,
    Exited,
}

/// Which viewport edges the element currently sits beyond
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeFlags {
    /// Element is below the (range-extended) viewport
    pub below: bool,
    /// Element is above it
    pub above: bool,
    /// Element is left of it (horizontal tracking only)
    pub left: bool,
    /// Element is right of it (horizontal tracking only)
    pub right: bool,
}

/// Numeric bounds a range resolved to for one evaluation
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedBounds {
    pub top: f64,
    pub bottom: f64,
    /// Resolved only under horizontal tracking
    pub left: Option<f64>,
    pub right: Option<f64>,
}

/// One on/off-screen status change for an element+range pair
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    pub kind: TransitionKind,
    pub element: ElementId,
    /// Name of the range that changed status
    pub range: String,
    /// The range's bounds as resolved this evaluation
    pub bounds: ResolvedBounds,
    /// Geometry the decision was made against
    pub snapshot: GeometrySnapshot,
    /// Directional flags at the moment of transition
    pub edges: EdgeFlags,
    /// Whether left/right boundaries participated
    pub horizontal: bool,
    /// Whether geometry was re-measured this evaluation
    pub recalculated: bool,
}

impl Transition {
    /// True for `Entered`
    pub fn entered(&self) -> bool {
        self.kind == TransitionKind::Entered
    }
}
