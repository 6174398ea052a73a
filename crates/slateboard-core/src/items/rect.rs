//! Rectangle item.

use super::{ItemId, ShapeOptions, new_item_id};
use crate::handles::HandleKind;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RectItem {
    #[serde(skip, default = "new_item_id")]
    pub(crate) id: ItemId,
    /// Top-left corner, world coordinates.
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub options: ShapeOptions,
}

impl RectItem {
    /// Create a new rectangle from its top-left corner.
    pub fn new(position: Point, width: f64, height: f64, options: ShapeOptions) -> Self {
        Self {
            id: new_item_id(),
            x: position.x,
            y: position.y,
            width,
            height,
            options,
        }
    }

    /// The geometric rectangle, without stroke inflation.
    pub fn as_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// Bounding box inflated by half the stroke width.
    pub fn bounds(&self) -> Rect {
        let half = self.options.stroke_width / 2.0;
        self.as_rect().inflate(half, half)
    }

    /// Replace the geometry so the rectangle spans `anchor` to `current`.
    /// Used by the shape tool while a drag is in progress.
    pub fn set_corners(&mut self, anchor: Point, current: Point) {
        self.x = anchor.x.min(current.x);
        self.y = anchor.y.min(current.y);
        self.width = (current.x - anchor.x).abs();
        self.height = (current.y - anchor.y).abs();
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        let mut moved = self.clone();
        moved.x += dx;
        moved.y += dy;
        moved
    }

    /// Resize by a drag delta at the named corner. The opposite corner stays
    /// fixed; degenerate sizes are valid state and are not clamped.
    pub fn resized(&self, dx: f64, dy: f64, handle: HandleKind) -> Self {
        let mut resized = self.clone();
        match handle {
            HandleKind::TopLeft => {
                resized.x += dx;
                resized.y += dy;
                resized.width -= dx;
                resized.height -= dy;
            }
            HandleKind::TopRight => {
                resized.y += dy;
                resized.width += dx;
                resized.height -= dy;
            }
            HandleKind::BottomLeft => {
                resized.x += dx;
                resized.width -= dx;
                resized.height += dy;
            }
            HandleKind::BottomRight => {
                resized.width += dx;
                resized.height += dy;
            }
        }
        resized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_inflate_by_half_stroke() {
        let mut options = ShapeOptions::default();
        options.stroke_width = 4.0;
        let rect = RectItem::new(Point::new(10.0, 10.0), 100.0, 50.0, options);

        let bounds = rect.bounds();
        assert!((bounds.x0 - 8.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 8.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 112.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 62.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_set_corners_normalizes() {
        let mut rect = RectItem::new(Point::ZERO, 0.0, 0.0, ShapeOptions::default());
        rect.set_corners(Point::new(100.0, 100.0), Point::new(40.0, 70.0));
        assert!((rect.x - 40.0).abs() < f64::EPSILON);
        assert!((rect.y - 70.0).abs() < f64::EPSILON);
        assert!((rect.width - 60.0).abs() < f64::EPSILON);
        assert!((rect.height - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_translated_keeps_size() {
        let rect = RectItem::new(Point::new(5.0, 5.0), 20.0, 10.0, ShapeOptions::default());
        let moved = rect.translated(3.0, -2.0);
        assert!((moved.x - 8.0).abs() < f64::EPSILON);
        assert!((moved.y - 3.0).abs() < f64::EPSILON);
        assert!((moved.width - 20.0).abs() < f64::EPSILON);
        assert!((moved.height - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_resized_bottom_right() {
        let rect = RectItem::new(Point::ZERO, 100.0, 100.0, ShapeOptions::default());
        let resized = rect.resized(50.0, 25.0, HandleKind::BottomRight);
        assert!((resized.x).abs() < f64::EPSILON);
        assert!((resized.width - 150.0).abs() < f64::EPSILON);
        assert!((resized.height - 125.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_resized_top_left_moves_origin() {
        let rect = RectItem::new(Point::new(10.0, 10.0), 100.0, 100.0, ShapeOptions::default());
        let resized = rect.resized(5.0, 5.0, HandleKind::TopLeft);
        assert!((resized.x - 15.0).abs() < f64::EPSILON);
        assert!((resized.y - 15.0).abs() < f64::EPSILON);
        assert!((resized.width - 95.0).abs() < f64::EPSILON);
        assert!((resized.height - 95.0).abs() < f64::EPSILON);
    }
}
