//! onscreen Geometry
//!
//! Geometry primitives and the measurement interface the monitor evaluates
//! against: element bounds, viewport scroll window, and combined snapshots.

mod bounds;
mod rect;
mod source;

pub use bounds::{ElementBounds, GeometrySnapshot, Side, Span, ViewportBounds};
pub use rect::Rect;
pub use source::{GeometrySource, MemoryGeometry};

/// Element identifier (minted by the embedding application)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementId(pub u64);
