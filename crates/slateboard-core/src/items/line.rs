//! Line item.

use super::{ItemId, ShapeOptions, new_item_id};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// A straight line segment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(skip, default = "new_item_id")]
    pub(crate) id: ItemId,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    #[serde(default)]
    pub options: ShapeOptions,
}

impl LineItem {
    /// Create a new line.
    pub fn new(start: Point, end: Point, options: ShapeOptions) -> Self {
        Self {
            id: new_item_id(),
            x1: start.x,
            y1: start.y,
            x2: end.x,
            y2: end.y,
            options,
        }
    }

    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    pub fn set_end(&mut self, end: Point) {
        self.x2 = end.x;
        self.y2 = end.y;
    }

    /// Bounding box inflated by half the stroke width.
    pub fn bounds(&self) -> Rect {
        let half = self.options.stroke_width / 2.0;
        Rect::new(
            self.x1.min(self.x2),
            self.y1.min(self.y2),
            self.x1.max(self.x2),
            self.y1.max(self.y2),
        )
        .inflate(half, half)
    }

    /// Both endpoints move together; the segment keeps its length and angle.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        let mut moved = self.clone();
        moved.x1 += dx;
        moved.y1 += dy;
        moved.x2 += dx;
        moved.y2 += dy;
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_cover_both_endpoints() {
        let line = LineItem::new(
            Point::new(50.0, 10.0),
            Point::new(10.0, 80.0),
            ShapeOptions::default(),
        );
        let bounds = line.bounds();
        let half = line.options.stroke_width / 2.0;
        assert!((bounds.x0 - (10.0 - half)).abs() < f64::EPSILON);
        assert!((bounds.y0 - (10.0 - half)).abs() < f64::EPSILON);
        assert!((bounds.x1 - (50.0 + half)).abs() < f64::EPSILON);
        assert!((bounds.y1 - (80.0 + half)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_translated_moves_both_endpoints() {
        let line = LineItem::new(Point::ZERO, Point::new(10.0, 0.0), ShapeOptions::default());
        let moved = line.translated(5.0, 5.0);
        assert!((moved.x1 - 5.0).abs() < f64::EPSILON);
        assert!((moved.y1 - 5.0).abs() < f64::EPSILON);
        assert!((moved.x2 - 15.0).abs() < f64::EPSILON);
        assert!((moved.y2 - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_thin_horizontal_line_stays_selectable() {
        let line = LineItem::new(Point::ZERO, Point::new(100.0, 0.0), ShapeOptions::default());
        let bounds = line.bounds();
        assert!(bounds.height() > 0.0);
        assert!(bounds.contains(Point::new(50.0, 0.5)));
    }
}
