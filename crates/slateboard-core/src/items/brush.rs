//! Freehand brush strokes (pen and eraser share this payload).

use super::{ItemId, Rgba, new_item_id};
use kurbo::{BezPath, Circle, Point, Rect, Shape as KurboShape, Vec2};
use serde::{Deserialize, Serialize};

fn default_size() -> f64 {
    6.0
}

fn default_coefficient() -> f64 {
    0.5
}

fn default_brush_color() -> Rgba {
    Rgba::black()
}

/// Options for the filled-outline computation of a brush stroke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrushOptions {
    /// Brush color (ignored for eraser strokes, which paint the background).
    #[serde(default = "default_brush_color")]
    pub color: Rgba,
    /// Stroke diameter in world units.
    #[serde(default = "default_size")]
    pub size: f64,
    /// Neighbor averaging strength, 0..=1.
    #[serde(default = "default_coefficient")]
    pub smoothing: f64,
    /// Velocity-driven radius taper, 0..=1.
    #[serde(default = "default_coefficient")]
    pub thinning: f64,
    /// Input interpolation toward the previous point, 0..=1.
    #[serde(default = "default_coefficient")]
    pub streamline: f64,
}

impl Default for BrushOptions {
    fn default() -> Self {
        Self {
            color: default_brush_color(),
            size: default_size(),
            smoothing: default_coefficient(),
            thinning: default_coefficient(),
            streamline: default_coefficient(),
        }
    }
}

/// A freehand stroke: the raw point sequence plus brush options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrushStroke {
    #[serde(skip, default = "new_item_id")]
    pub(crate) id: ItemId,
    /// Raw input points in world coordinates, in input order.
    pub points: Vec<Point>,
    #[serde(default)]
    pub options: BrushOptions,
}

impl BrushStroke {
    /// Start a stroke from its first point.
    pub fn new(start: Point, options: BrushOptions) -> Self {
        Self {
            id: new_item_id(),
            points: vec![start],
            options,
        }
    }

    /// Append a point. Every move event appends; there is no decimation.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Min/max of the raw points, inflated by half the brush size.
    pub fn bounds(&self) -> Rect {
        if self.points.is_empty() {
            return Rect::ZERO;
        }

        let mut min_x = f64::MAX;
        let mut min_y = f64::MAX;
        let mut max_x = f64::MIN;
        let mut max_y = f64::MIN;

        for point in &self.points {
            min_x = min_x.min(point.x);
            min_y = min_y.min(point.y);
            max_x = max_x.max(point.x);
            max_y = max_y.max(point.y);
        }

        let half = self.options.size / 2.0;
        Rect::new(min_x, min_y, max_x, max_y).inflate(half, half)
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        let mut moved = self.clone();
        for point in &mut moved.points {
            point.x += dx;
            point.y += dy;
        }
        moved
    }

    /// The filled outline path of this stroke in world coordinates.
    pub fn outline(&self) -> BezPath {
        stroke_outline(&self.points, &self.options, 1.0)
    }
}

/// Compute the filled outline of a polyline stroke.
///
/// `scale` multiplies the brush size; the renderer passes the current zoom
/// together with canvas-space points so stroke thickness scales with the
/// view instead of being re-derived from pixel deltas.
///
/// The shaping steps mirror the usual freehand pipeline: streamline pulls
/// each input point toward its predecessor, smoothing averages neighbors,
/// and thinning tapers the radius where the input moved fast.
pub fn stroke_outline(points: &[Point], options: &BrushOptions, scale: f64) -> BezPath {
    let base_radius = options.size * scale / 2.0;

    if points.is_empty() {
        return BezPath::new();
    }
    if points.len() == 1 {
        return Circle::new(points[0], base_radius.max(0.1)).to_path(0.1);
    }

    let shaped = shape_points(points, options);
    let radii = point_radii(&shaped, options, base_radius);

    let mut left = Vec::with_capacity(shaped.len());
    let mut right = Vec::with_capacity(shaped.len());
    for i in 0..shaped.len() {
        let prev = shaped[i.saturating_sub(1)];
        let next = shaped[(i + 1).min(shaped.len() - 1)];
        let dir = Vec2::new(next.x - prev.x, next.y - prev.y);
        let len = dir.hypot();
        let normal = if len < f64::EPSILON {
            Vec2::new(0.0, 1.0)
        } else {
            Vec2::new(-dir.y / len, dir.x / len)
        };
        let r = radii[i];
        left.push(Point::new(
            shaped[i].x + normal.x * r,
            shaped[i].y + normal.y * r,
        ));
        right.push(Point::new(
            shaped[i].x - normal.x * r,
            shaped[i].y - normal.y * r,
        ));
    }

    let mut path = BezPath::new();
    path.move_to(left[0]);
    for point in left.iter().skip(1) {
        path.line_to(*point);
    }
    for point in right.iter().rev() {
        path.line_to(*point);
    }
    path.close_path();
    path
}

/// Apply streamline interpolation, then neighbor smoothing.
fn shape_points(points: &[Point], options: &BrushOptions) -> Vec<Point> {
    // Streamline: interpolate toward the previously emitted point. A higher
    // coefficient follows the input more lazily.
    let t = (1.0 - options.streamline.clamp(0.0, 1.0)).max(0.15);
    let mut streamlined = Vec::with_capacity(points.len());
    streamlined.push(points[0]);
    for point in points.iter().skip(1) {
        let prev = *streamlined.last().unwrap_or(&points[0]);
        streamlined.push(Point::new(
            prev.x + (point.x - prev.x) * t,
            prev.y + (point.y - prev.y) * t,
        ));
    }

    let s = options.smoothing.clamp(0.0, 1.0) * 0.5;
    if s < f64::EPSILON || streamlined.len() < 3 {
        return streamlined;
    }

    let mut smoothed = streamlined.clone();
    for i in 1..streamlined.len() - 1 {
        let mid = Point::new(
            (streamlined[i - 1].x + streamlined[i + 1].x) / 2.0,
            (streamlined[i - 1].y + streamlined[i + 1].y) / 2.0,
        );
        smoothed[i] = Point::new(
            streamlined[i].x + (mid.x - streamlined[i].x) * s,
            streamlined[i].y + (mid.y - streamlined[i].y) * s,
        );
    }
    smoothed
}

/// Per-point radius: fast segments get thinner, down to a quarter of the
/// base radius.
fn point_radii(points: &[Point], options: &BrushOptions, base_radius: f64) -> Vec<f64> {
    let thinning = options.thinning.clamp(0.0, 1.0);
    let reference = (options.size).max(1.0);

    let mut radii = Vec::with_capacity(points.len());
    for i in 0..points.len() {
        if thinning < f64::EPSILON {
            radii.push(base_radius);
            continue;
        }
        let prev = points[i.saturating_sub(1)];
        let step = ((points[i].x - prev.x).powi(2) + (points[i].y - prev.y).powi(2)).sqrt();
        let speed = (step / reference).min(1.0);
        radii.push((base_radius * (1.0 - thinning * speed)).max(base_radius * 0.25));
    }
    if radii.len() > 1 {
        radii[0] = radii[1];
    }
    radii
}
