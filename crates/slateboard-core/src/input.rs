//! Pointer input normalization for mouse and touch events.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A normalized pointer event in canvas pixel coordinates.
///
/// Mouse events carry element-relative offsets directly; touch events go
/// through [`touch_to_canvas`] first. The board routes these to the active
/// tool, which converts to world coordinates before touching item payloads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    /// Primary button or first touch went down.
    Down { position: Point },
    /// The pointer moved while down (a drawing move).
    Move { position: Point },
    /// Primary button or touch lifted.
    Up,
    /// The gesture was cancelled by the platform (e.g. touch-cancel).
    /// Aborts the in-progress item without committing it.
    Cancel,
    /// Plain movement with no button down. Drives hover tracking only.
    Hover { position: Point },
}

impl PointerEvent {
    /// The position carried by this event, if any.
    pub fn position(&self) -> Option<Point> {
        match self {
            PointerEvent::Down { position }
            | PointerEvent::Move { position }
            | PointerEvent::Hover { position } => Some(*position),
            PointerEvent::Up | PointerEvent::Cancel => None,
        }
    }
}

/// Convert touch client coordinates to the canvas-pixel basis mouse events
/// already use, by subtracting the canvas bounding-rect origin.
pub fn touch_to_canvas(client: Point, surface_origin: Point) -> Point {
    Point::new(client.x - surface_origin.x, client.y - surface_origin.y)
}
