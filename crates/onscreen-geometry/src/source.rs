//! Measurement sources
//!
//! The narrow interface the evaluation engine measures through, plus an
//! in-memory implementation for headless embeddings and tests.

use std::collections::HashMap;

use crate::{ElementBounds, ElementId, Rect, Span, ViewportBounds};

/// Measurement interface: element bounds and the viewport scroll window.
///
/// Queries are pure and infallible; callers cache results according to their
/// own policy. `horizontal` asks for the left/width axis in addition to the
/// always-measured vertical axis.
pub trait GeometrySource {
    /// Current bounding box of one element
    fn element_bounds(&self, id: ElementId, horizontal: bool) -> ElementBounds;

    /// Current viewport scroll position and size
    fn viewport(&self, horizontal: bool) -> ViewportBounds;
}

/// In-memory geometry source
///
/// Holds element rects in page coordinates plus mutable scroll/viewport
/// state. Drives the monitor anywhere a real measurement backend is absent.
#[derive(Debug, Clone, Default)]
pub struct MemoryGeometry {
    rects: HashMap<ElementId, Rect>,
    next_id: u64,
    scroll_top: f64,
    scroll_left: f64,
    width: f64,
    height: f64,
}

impl MemoryGeometry {
    /// Create with a viewport size
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Add an element, handing out a fresh id
    pub fn insert(&mut self, rect: Rect) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.rects.insert(id, rect);
        id
    }

    /// Move or resize an existing element (or place one under a caller id)
    pub fn place(&mut self, id: ElementId, rect: Rect) {
        self.next_id = self.next_id.max(id.0 + 1);
        self.rects.insert(id, rect);
    }

    /// Forget an element
    pub fn remove(&mut self, id: ElementId) -> Option<Rect> {
        self.rects.remove(&id)
    }

    /// Current rect of an element
    pub fn rect(&self, id: ElementId) -> Option<Rect> {
        self.rects.get(&id).copied()
    }

    /// Scroll to an absolute position
    pub fn scroll_to(&mut self, left: f64, top: f64) {
        tracing::trace!(left, top, "scroll");
        self.scroll_left = left;
        self.scroll_top = top;
    }

    /// Scroll by a delta
    pub fn scroll_by(&mut self, dx: f64, dy: f64) {
        self.scroll_to(self.scroll_left + dx, self.scroll_top + dy);
    }

    /// Resize the viewport
    pub fn resize(&mut self, width: f64, height: f64) {
        tracing::trace!(width, height, "resize");
        self.width = width;
        self.height = height;
    }

    /// Current scroll top
    pub fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    /// Current scroll left
    pub fn scroll_left(&self) -> f64 {
        self.scroll_left
    }
}

impl GeometrySource for MemoryGeometry {
    fn element_bounds(&self, id: ElementId, horizontal: bool) -> ElementBounds {
        match self.rects.get(&id) {
            Some(rect) => ElementBounds::from_rect(rect, horizontal),
            None => {
                tracing::warn!(?id, "measuring unknown element");
                ElementBounds::default()
            }
        }
    }

    fn viewport(&self, horizontal: bool) -> ViewportBounds {
        ViewportBounds {
            top: self.scroll_top,
            height: self.height,
            horizontal: horizontal.then(|| Span::new(self.scroll_left, self.width)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_measure() {
        let mut geometry = MemoryGeometry::new(1000.0, 600.0);
        let id = geometry.insert(Rect::from_xywh(40.0, 700.0, 300.0, 50.0));

        let bounds = geometry.element_bounds(id, true);
        assert_eq!(bounds.top, 700.0);
        assert_eq!(bounds.bottom(), 750.0);
        assert_eq!(bounds.horizontal, Some(Span::new(40.0, 300.0)));
    }

    #[test]
    fn test_viewport_follows_scroll() {
        let mut geometry = MemoryGeometry::new(1000.0, 600.0);
        geometry.scroll_to(50.0, 200.0);

        let viewport = geometry.viewport(false);
        assert_eq!(viewport.top, 200.0);
        assert_eq!(viewport.bottom(), 800.0);
        assert_eq!(viewport.horizontal, None);

        let viewport = geometry.viewport(true);
        assert_eq!(viewport.horizontal, Some(Span::new(50.0, 1000.0)));

        geometry.scroll_by(-50.0, 100.0);
        assert_eq!(geometry.scroll_left(), 0.0);
        assert_eq!(geometry.scroll_top(), 300.0);
    }

    #[test]
    fn test_unknown_element_measures_empty() {
        let geometry = MemoryGeometry::new(1000.0, 600.0);

        let bounds = geometry.element_bounds(ElementId(99), false);
        assert_eq!(bounds, ElementBounds::default());
    }

    #[test]
    fn test_place_keeps_ids_fresh() {
        let mut geometry = MemoryGeometry::new(1000.0, 600.0);
        geometry.place(ElementId(7), Rect::from_xywh(0.0, 0.0, 10.0, 10.0));

        let next = geometry.insert(Rect::new());
        assert!(next.0 > 7);
    }
}
