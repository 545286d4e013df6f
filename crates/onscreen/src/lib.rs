//! onscreen
//!
//! Viewport proximity monitoring: named threshold ranges around the
//! viewport, entered/exited transitions per element and range, with cached
//! or live geometry measurement.
//!
//! # Example
//! ```rust,ignore
//! use onscreen::{MemoryGeometry, Monitor, MonitorOptions, RangeSpec, Rect, TickCause};
//!
//! let mut geometry = MemoryGeometry::new(1024.0, 768.0);
//! let hero = geometry.insert(Rect::from_xywh(0.0, 1200.0, 1024.0, 400.0));
//!
//! let mut monitor = Monitor::new(geometry);
//! monitor.run(hero, MonitorOptions::default().ranges(RangeSpec::Radius(100.0)));
//!
//! monitor.geometry_mut().scroll_by(0.0, 800.0);
//! for transition in monitor.tick(TickCause::Scroll) {
//!     println!("{} {:?}", transition.range, transition.kind);
//! }
//! ```

mod config;
mod monitor;
mod scheduler;

pub use config::Config;
pub use monitor::Monitor;
pub use scheduler::{Throttle, TickCause};

pub use onscreen_engine::{
    EdgeFlags, ElementState, MonitorOptions, PercentBasis, Range, RangeDef, RangeFn, RangeSpec,
    RangeValue, ResolvedBounds, SideValue, TokenError, Transition, TransitionKind,
};
pub use onscreen_geometry::{
    ElementBounds, ElementId, GeometrySnapshot, GeometrySource, MemoryGeometry, Rect, Side, Span,
    ViewportBounds,
};

// Re-export sub-crates for advanced usage
pub use onscreen_engine as engine;
pub use onscreen_geometry as geometry;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
