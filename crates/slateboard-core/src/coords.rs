//! World/canvas coordinate transforms with pan, offset and zoom.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Smallest accepted zoom factor. Non-positive zoom would divide by zero on
/// the way back to world coordinates and mirror the scene, so `set_zoom`
/// clamps here instead.
pub const MIN_ZOOM: f64 = 0.05;
/// Largest accepted zoom factor.
pub const MAX_ZOOM: f64 = 20.0;

/// Bidirectional transform between world coordinates (where item geometry is
/// stored) and canvas pixel coordinates.
///
/// `pan` is the committed view origin; `offset` is the in-flight delta of an
/// active pan gesture. Both are summed by every conversion, so consumers see
/// a single translation regardless of whether a pan gesture is in progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoordsContext {
    /// Committed view origin in canvas pixels.
    pub pan: Vec2,
    /// Uncommitted pan delta of the gesture in progress.
    pub offset: Vec2,
    /// Zoom factor, always positive.
    zoom: f64,
}

impl Default for CoordsContext {
    fn default() -> Self {
        Self {
            pan: Vec2::ZERO,
            offset: Vec2::ZERO,
            zoom: 1.0,
        }
    }
}

impl CoordsContext {
    /// Create a new context at the identity transform.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current zoom factor.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Set the zoom factor, clamped into `[MIN_ZOOM, MAX_ZOOM]`.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Convert a world point to canvas pixels.
    pub fn to_canvas(&self, world: Point) -> Point {
        Point::new(
            world.x * self.zoom + self.pan.x + self.offset.x,
            world.y * self.zoom + self.pan.y + self.offset.y,
        )
    }

    /// Convert a canvas pixel point to world coordinates.
    pub fn to_world(&self, canvas: Point) -> Point {
        Point::new(
            (canvas.x - self.pan.x - self.offset.x) / self.zoom,
            (canvas.y - self.pan.y - self.offset.y) / self.zoom,
        )
    }

    /// Fold the in-flight offset into the committed pan and reset it.
    /// The pan tool calls this when its gesture ends.
    pub fn commit_offset(&mut self) {
        self.pan += self.offset;
        self.offset = Vec2::ZERO;
    }

    /// Zoom by `factor`, keeping the given canvas point stationary.
    ///
    /// Used for wheel and pinch gestures so the content under the pointer
    /// does not drift while zooming.
    pub fn zoom_at(&mut self, canvas_point: Point, factor: f64) {
        let new_zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        if (new_zoom - self.zoom).abs() < f64::EPSILON {
            return;
        }

        let world = self.to_world(canvas_point);
        self.zoom = new_zoom;

        let moved = self.to_canvas(world);
        self.pan += Vec2::new(canvas_point.x - moved.x, canvas_point.y - moved.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_transform() {
        let coords = CoordsContext::new();
        let p = Point::new(42.0, -7.0);
        assert_eq!(coords.to_canvas(p), p);
        assert_eq!(coords.to_world(p), p);
    }

    #[test]
    fn test_roundtrip() {
        let mut coords = CoordsContext::new();
        coords.pan = Vec2::new(30.0, -20.0);
        coords.offset = Vec2::new(5.0, 12.5);
        coords.set_zoom(1.7);

        let original = Point::new(123.0, 456.0);
        let world = coords.to_world(original);
        let back = coords.to_canvas(world);

        assert!((back.x - original.x).abs() < 1e-10);
        assert!((back.y - original.y).abs() < 1e-10);
    }

    #[test]
    fn test_pan_and_offset_are_summed() {
        let mut coords = CoordsContext::new();
        coords.pan = Vec2::new(10.0, 0.0);
        coords.offset = Vec2::new(5.0, 0.0);

        let canvas = coords.to_canvas(Point::new(0.0, 0.0));
        assert!((canvas.x - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_commit_offset() {
        let mut coords = CoordsContext::new();
        coords.pan = Vec2::new(10.0, 10.0);
        coords.offset = Vec2::new(-4.0, 6.0);

        let before = coords.to_canvas(Point::new(1.0, 1.0));
        coords.commit_offset();
        let after = coords.to_canvas(Point::new(1.0, 1.0));

        assert!((before.x - after.x).abs() < f64::EPSILON);
        assert!((before.y - after.y).abs() < f64::EPSILON);
        assert_eq!(coords.offset, Vec2::ZERO);
        assert!((coords.pan.x - 6.0).abs() < f64::EPSILON);
        assert!((coords.pan.y - 16.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_set_zoom_rejects_non_positive() {
        let mut coords = CoordsContext::new();
        coords.set_zoom(0.0);
        assert!((coords.zoom() - MIN_ZOOM).abs() < f64::EPSILON);

        coords.set_zoom(-3.0);
        assert!((coords.zoom() - MIN_ZOOM).abs() < f64::EPSILON);

        coords.set_zoom(1_000.0);
        assert!((coords.zoom() - MAX_ZOOM).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zoom_scales_world() {
        let mut coords = CoordsContext::new();
        coords.set_zoom(2.0);

        let canvas = coords.to_canvas(Point::new(50.0, 100.0));
        assert!((canvas.x - 100.0).abs() < f64::EPSILON);
        assert!((canvas.y - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zoom_at_keeps_anchor_fixed() {
        let mut coords = CoordsContext::new();
        coords.pan = Vec2::new(40.0, -10.0);

        let anchor = Point::new(200.0, 150.0);
        let world_before = coords.to_world(anchor);
        coords.zoom_at(anchor, 1.5);
        let world_after = coords.to_world(anchor);

        assert!((world_before.x - world_after.x).abs() < 1e-9);
        assert!((world_before.y - world_after.y).abs() < 1e-9);
    }
}
