//! Rectangular brushing over scatterplot points.

use crate::projection::Point;

/// Drags narrower than this (in pixels, on either axis) count as a click
/// and clear the brush.
pub const MIN_BRUSH_SIZE: f64 = 1.0;

/// A normalized brush rectangle in plot coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushExtent {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl BrushExtent {
    /// Build from the drag origin and current pointer, in any order, clamped
    /// to the plot area `[0, width] x [0, height]`.
    pub fn from_corners(a: Point, b: Point, width: f64, height: f64) -> Self {
        let clamp_x = |v: f64| v.clamp(0.0, width);
        let clamp_y = |v: f64| v.clamp(0.0, height);
        Self {
            x0: clamp_x(a.0.min(b.0)),
            y0: clamp_y(a.1.min(b.1)),
            x1: clamp_x(a.0.max(b.0)),
            y1: clamp_y(a.1.max(b.1)),
        }
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// A brush with no area selects nothing.
    pub fn is_empty(&self) -> bool {
        self.width() < MIN_BRUSH_SIZE || self.height() < MIN_BRUSH_SIZE
    }

    pub fn contains(&self, p: Point) -> bool {
        p.0 >= self.x0 && p.0 <= self.x1 && p.1 >= self.y0 && p.1 <= self.y1
    }
}

/// In-progress drag state kept by the scatterplot between mouse events.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrushDrag {
    /// Drag origin in plot coordinates.
    origin: Option<Point>,
    /// Page position of the plot origin, so later page coordinates can be
    /// converted without querying the DOM.
    page_offset: Point,
    current: Option<BrushExtent>,
}

impl BrushDrag {
    /// Start a drag at `local` (plot coordinates) given the matching page
    /// coordinates of the same pointer event.
    pub fn start(local: Point, page: Point) -> Self {
        Self {
            origin: Some(local),
            page_offset: (page.0 - local.0, page.1 - local.1),
            current: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }

    /// Update with a page-coordinate pointer position; returns the new extent.
    pub fn update(&mut self, page: Point, width: f64, height: f64) -> Option<BrushExtent> {
        let origin = self.origin?;
        let local = (page.0 - self.page_offset.0, page.1 - self.page_offset.1);
        let extent = BrushExtent::from_corners(origin, local, width, height);
        self.current = Some(extent);
        Some(extent)
    }

    /// Finish the drag, returning the final extent (or `None` for a click).
    pub fn finish(&mut self) -> Option<BrushExtent> {
        let extent = self.current.filter(|e| !e.is_empty());
        *self = Self::default();
        extent
    }

    /// The extent to draw while dragging.
    pub fn current(&self) -> Option<BrushExtent> {
        self.current.filter(|e| !e.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_are_normalized_and_clamped() {
        let e = BrushExtent::from_corners((50.0, 80.0), (-10.0, 20.0), 100.0, 100.0);
        assert_eq!(e, BrushExtent { x0: 0.0, y0: 20.0, x1: 50.0, y1: 80.0 });
        assert!(e.contains((25.0, 50.0)));
        assert!(!e.contains((60.0, 50.0)));
    }

    #[test]
    fn zero_size_brush_is_empty() {
        let e = BrushExtent::from_corners((10.0, 10.0), (10.5, 10.0), 100.0, 100.0);
        assert!(e.is_empty());
    }

    #[test]
    fn drag_tracks_page_coordinates() {
        // Plot origin sits at page (300, 200).
        let mut drag = BrushDrag::start((10.0, 10.0), (310.0, 210.0));
        assert!(drag.is_active());
        let e = drag.update((350.0, 260.0), 500.0, 300.0).unwrap();
        assert_eq!(e, BrushExtent { x0: 10.0, y0: 10.0, x1: 50.0, y1: 60.0 });
        assert_eq!(drag.finish(), Some(e));
        assert!(!drag.is_active());
    }

    #[test]
    fn click_without_drag_finishes_empty() {
        let mut drag = BrushDrag::start((10.0, 10.0), (310.0, 210.0));
        assert_eq!(drag.finish(), None);

        let mut idle = BrushDrag::default();
        assert_eq!(idle.update((1.0, 1.0), 10.0, 10.0), None);
    }
}
