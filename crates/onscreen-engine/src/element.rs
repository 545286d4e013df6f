//! Element state
//!
//! One record per monitored element: cached geometry, the live flag, and the
//! ordered set of named ranges with their last-known status.

use onscreen_geometry::{ElementBounds, ElementId};

use crate::range::Range;

/// Per-monitored-element record
#[derive(Debug, Clone)]
pub struct ElementState {
    pub(crate) id: ElementId,
    pub(crate) live: bool,
    pub(crate) horizontal: bool,
    pub(crate) geometry: Option<ElementBounds>,
    pub(crate) ranges: Vec<Range>,
}

impl ElementState {
    /// Create an unmeasured state; geometry fills in on first evaluation
    pub fn new(id: ElementId, live: bool, horizontal: bool, ranges: Vec<Range>) -> Self {
        Self {
            id,
            live,
            horizontal,
            geometry: None,
            ranges,
        }
    }

    /// Element this state tracks
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Whether geometry and dynamic values recompute every tick
    pub fn live(&self) -> bool {
        self.live
    }

    pub fn set_live(&mut self, live: bool) {
        self.live = live;
    }

    /// Whether left/right boundaries are evaluated
    pub fn horizontal(&self) -> bool {
        self.horizontal
    }

    /// Toggle horizontal tracking. Enabling it drops cached geometry so the
    /// next evaluation measures the missing axis.
    pub fn set_horizontal(&mut self, horizontal: bool) {
        if horizontal && !self.horizontal {
            self.geometry = None;
        }
        self.horizontal = horizontal;
    }

    /// Cached bounds, `None` until first measured
    pub fn geometry(&self) -> Option<&ElementBounds> {
        self.geometry.as_ref()
    }

    /// Ranges in insertion order
    pub fn ranges(&self) -> &[Range] {
        &self.ranges
    }

    /// Look up a range by name
    pub fn range(&self, name: &str) -> Option<&Range> {
        self.ranges.iter().find(|r| r.name() == name)
    }

    /// Mutable range lookup, for adjusting bounds before the next tick
    pub fn range_mut(&mut self, name: &str) -> Option<&mut Range> {
        self.ranges.iter_mut().find(|r| r.name() == name)
    }

    /// Swap in a new range set; statuses reset to unknown
    pub fn replace_ranges(&mut self, ranges: Vec<Range>) {
        self.ranges = ranges;
    }

    /// Drop cached geometry and every memoized range value.
    ///
    /// Last-known statuses survive, so the next evaluation only reports
    /// genuine changes.
    pub fn invalidate(&mut self) {
        self.geometry = None;
        for range in &mut self.ranges {
            range.invalidate();
        }
    }
}
