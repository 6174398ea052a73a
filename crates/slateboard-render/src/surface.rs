//! Paint surface abstraction.

use image::RgbaImage;
use kurbo::{BezPath, Point, Rect, Shape as KurboShape};
use peniko::Color;

/// Canvas-pixel-space paint operations.
///
/// Implemented by real rendering backends (a GPU scene builder, a 2D
/// context) outside this repository. All coordinates and sizes arrive
/// already converted and zoom-scaled by the [`crate::Painter`].
pub trait Surface {
    /// Fill the whole surface with a color.
    fn clear(&mut self, color: Color);

    /// Fill a closed path.
    fn fill_path(&mut self, path: &BezPath, color: Color);

    /// Stroke a path with the given width in pixels.
    fn stroke_path(&mut self, path: &BezPath, color: Color, width: f64);

    /// Draw text with its top-left corner at `origin`.
    fn fill_text(&mut self, text: &str, origin: Point, size: f64, family: &str, color: Color);

    /// Draw decoded image pixels scaled into `rect`.
    fn draw_image(&mut self, image: &RgbaImage, rect: Rect);
}

/// One recorded paint operation. Paths are captured as their bounding boxes,
/// which is what the render tests assert against.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintOp {
    Clear {
        color: Color,
    },
    FillPath {
        bounds: Rect,
        color: Color,
    },
    StrokePath {
        bounds: Rect,
        color: Color,
        width: f64,
    },
    Text {
        content: String,
        origin: Point,
        size: f64,
        color: Color,
    },
    Image {
        rect: Rect,
    },
}

/// A surface that records its operations instead of painting.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<PaintOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, color: Color) {
        self.ops.push(PaintOp::Clear { color });
    }

    fn fill_path(&mut self, path: &BezPath, color: Color) {
        self.ops.push(PaintOp::FillPath {
            bounds: path.bounding_box(),
            color,
        });
    }

    fn stroke_path(&mut self, path: &BezPath, color: Color, width: f64) {
        self.ops.push(PaintOp::StrokePath {
            bounds: path.bounding_box(),
            color,
            width,
        });
    }

    fn fill_text(&mut self, text: &str, origin: Point, size: f64, _family: &str, color: Color) {
        self.ops.push(PaintOp::Text {
            content: text.to_string(),
            origin,
            size,
            color,
        });
    }

    fn draw_image(&mut self, _image: &RgbaImage, rect: Rect) {
        self.ops.push(PaintOp::Image { rect });
    }
}
