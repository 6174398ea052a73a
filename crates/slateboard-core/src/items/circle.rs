//! Circle item.

use super::{ItemId, ShapeOptions, new_item_id};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// A circle, stored as its center and diameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircleItem {
    #[serde(skip, default = "new_item_id")]
    pub(crate) id: ItemId,
    /// Center, world coordinates.
    pub x: f64,
    pub y: f64,
    pub diameter: f64,
    #[serde(default)]
    pub options: ShapeOptions,
}

impl CircleItem {
    /// Create a circle centered at `center`.
    pub fn new(center: Point, diameter: f64, options: ShapeOptions) -> Self {
        Self {
            id: new_item_id(),
            x: center.x,
            y: center.y,
            diameter,
            options,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Set the diameter from a drag: twice the distance from the center to
    /// the pointer.
    pub fn set_edge_point(&mut self, point: Point) {
        let dx = point.x - self.x;
        let dy = point.y - self.y;
        self.diameter = 2.0 * (dx * dx + dy * dy).sqrt();
    }

    /// Bounding box inflated by half the stroke width.
    pub fn bounds(&self) -> Rect {
        let r = self.diameter / 2.0 + self.options.stroke_width / 2.0;
        Rect::new(self.x - r, self.y - r, self.x + r, self.y + r)
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        let mut moved = self.clone();
        moved.x += dx;
        moved.y += dy;
        moved
    }
}
