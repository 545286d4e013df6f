//! Bounds and snapshots
//!
//! Element and viewport bounds as the evaluation engine consumes them:
//! the vertical axis is always present, the horizontal axis only when an
//! element tracks left/right boundaries.

use crate::Rect;

/// Side of a range boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    /// All four sides, in normalization order
    pub const ALL: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];

    /// Vertical sides measure against heights, horizontal sides against widths
    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Side::Top | Side::Bottom)
    }

    /// Stable index for per-side caches
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::Top => 0,
            Side::Bottom => 1,
            Side::Left => 2,
            Side::Right => 3,
        }
    }

    /// Side name as it appears in notifications and logs
    pub fn name(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// One axis of a bounding box
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: f64,
    pub length: f64,
}

impl Span {
    /// Create a span
    pub fn new(start: f64, length: f64) -> Self {
        Self { start, length }
    }

    /// Far edge
    #[inline]
    pub fn end(&self) -> f64 {
        self.start + self.length
    }
}

/// An element's measured bounding box in page coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementBounds {
    pub top: f64,
    pub height: f64,
    /// Left/width, measured only for horizontally tracked elements
    pub horizontal: Option<Span>,
}

impl ElementBounds {
    /// Bottom edge
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Build from a raw rect. `horizontal` keeps the left/width axis.
    pub fn from_rect(rect: &Rect, horizontal: bool) -> Self {
        Self {
            top: rect.top(),
            height: rect.height,
            horizontal: horizontal.then(|| Span::new(rect.left(), rect.width)),
        }
    }
}

/// The viewport's scroll window in page coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportBounds {
    /// Scroll offset from the top of the page
    pub top: f64,
    pub height: f64,
    /// Scroll-left/width, sampled only when some element tracks horizontally
    pub horizontal: Option<Span>,
}

impl ViewportBounds {
    /// Bottom edge of the scroll window
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Combined geometry handed to range callbacks and notifications
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeometrySnapshot {
    pub viewport: ViewportBounds,
    pub element: ElementBounds,
    /// Scroll top at the previous evaluation, `None` on the first run
    pub last_scroll_top: Option<f64>,
    /// Scroll left at the previous evaluation, `None` on the first run
    pub last_scroll_left: Option<f64>,
}

impl GeometrySnapshot {
    /// Viewport dimension a percentage value on `side` measures against.
    ///
    /// Zero when the horizontal axis was not sampled for this element.
    pub fn viewport_dimension(&self, side: Side) -> f64 {
        if side.is_vertical() {
            self.viewport.height
        } else {
            self.viewport.horizontal.map(|s| s.length).unwrap_or(0.0)
        }
    }

    /// Element dimension a percentage value on `side` measures against.
    ///
    /// Zero when the horizontal axis was not measured for this element.
    pub fn element_dimension(&self, side: Side) -> f64 {
        if side.is_vertical() {
            self.element.height
        } else {
            self.element.horizontal.map(|s| s.length).unwrap_or(0.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_axis() {
        assert!(Side::Top.is_vertical());
        assert!(Side::Bottom.is_vertical());
        assert!(!Side::Left.is_vertical());
        assert!(!Side::Right.is_vertical());
    }

    #[test]
    fn test_element_bounds_from_rect() {
        let rect = Rect::from_xywh(40.0, 700.0, 300.0, 50.0);

        let vertical = ElementBounds::from_rect(&rect, false);
        assert_eq!(vertical.top, 700.0);
        assert_eq!(vertical.bottom(), 750.0);
        assert_eq!(vertical.horizontal, None);

        let both = ElementBounds::from_rect(&rect, true);
        let span = both.horizontal.unwrap();
        assert_eq!(span.start, 40.0);
        assert_eq!(span.end(), 340.0);
    }

    #[test]
    fn test_snapshot_dimensions() {
        let snapshot = GeometrySnapshot {
            viewport: ViewportBounds {
                top: 0.0,
                height: 600.0,
                horizontal: Some(Span::new(0.0, 1000.0)),
            },
            element: ElementBounds {
                top: 700.0,
                height: 200.0,
                horizontal: None,
            },
            ..Default::default()
        };

        assert_eq!(snapshot.viewport_dimension(Side::Bottom), 600.0);
        assert_eq!(snapshot.viewport_dimension(Side::Left), 1000.0);
        assert_eq!(snapshot.element_dimension(Side::Top), 200.0);
        // Horizontal axis never measured for this element
        assert_eq!(snapshot.element_dimension(Side::Right), 0.0);
    }
}
