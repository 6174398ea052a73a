//! Resize handles for the pointer tool.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Side length of the square hit box around each handle anchor, in world
/// units at hit-test time. Not compensated for zoom.
pub const HANDLE_HIT_SIZE: f64 = 10.0;

/// A named control point on a resizable item's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandleKind {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl HandleKind {
    /// The four corner handles, the full set resizable items offer.
    pub fn corners() -> &'static [HandleKind] {
        &[
            HandleKind::TopLeft,
            HandleKind::TopRight,
            HandleKind::BottomLeft,
            HandleKind::BottomRight,
        ]
    }

    /// World-coordinate anchor of this handle on a bounding box.
    pub fn anchor(&self, bounds: Rect) -> Point {
        match self {
            HandleKind::TopLeft => Point::new(bounds.x0, bounds.y0),
            HandleKind::TopRight => Point::new(bounds.x1, bounds.y0),
            HandleKind::BottomLeft => Point::new(bounds.x0, bounds.y1),
            HandleKind::BottomRight => Point::new(bounds.x1, bounds.y1),
        }
    }
}

/// Find the handle whose hit box contains `point`, if any.
pub fn handle_at(bounds: Rect, point: Point) -> Option<HandleKind> {
    let half = HANDLE_HIT_SIZE / 2.0;
    HandleKind::corners().iter().copied().find(|handle| {
        let anchor = handle.anchor(bounds);
        (point.x - anchor.x).abs() <= half && (point.y - anchor.y).abs() <= half
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_positions() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert_eq!(HandleKind::TopLeft.anchor(bounds), Point::new(0.0, 0.0));
        assert_eq!(
            HandleKind::BottomRight.anchor(bounds),
            Point::new(100.0, 50.0)
        );
    }

    #[test]
    fn test_handle_hit_box() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 50.0);

        assert_eq!(
            handle_at(bounds, Point::new(102.0, 48.0)),
            Some(HandleKind::BottomRight)
        );
        // Just outside the 10x10 box.
        assert_eq!(handle_at(bounds, Point::new(106.0, 50.0)), None);
        // Center of the box hits nothing.
        assert_eq!(handle_at(bounds, Point::new(50.0, 25.0)), None);
    }

    #[test]
    fn test_handles_are_disjoint_on_normal_boxes() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert_eq!(
            handle_at(bounds, Point::new(1.0, 1.0)),
            Some(HandleKind::TopLeft)
        );
        assert_eq!(
            handle_at(bounds, Point::new(99.0, 1.0)),
            Some(HandleKind::TopRight)
        );
        assert_eq!(
            handle_at(bounds, Point::new(1.0, 49.0)),
            Some(HandleKind::BottomLeft)
        );
    }
}
