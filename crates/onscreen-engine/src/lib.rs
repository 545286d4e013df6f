//! onscreen Engine
//!
//! The range evaluation core: named thresholds around the viewport, per-side
//! value resolution with memoization, per-element cached geometry, and
//! entered/exited transition detection.

mod element;
mod evaluate;
mod event;
mod options;
mod range;

pub use element::ElementState;
pub use evaluate::{LastScroll, evaluate};
pub use event::{EdgeFlags, ResolvedBounds, Transition, TransitionKind};
pub use options::{MonitorOptions, RangeDef, RangeSpec, SideValue};
pub use range::{PercentBasis, Range, RangeFn, RangeValue, TokenError};
