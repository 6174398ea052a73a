//! Scene painter: walks a board and issues paint operations.

use crate::surface::Surface;
use kurbo::{BezPath, Circle, Point, Rect, Shape as KurboShape};
use peniko::Color;
use slateboard_core::board::Board;
use slateboard_core::coords::CoordsContext;
use slateboard_core::items::{Item, stroke_outline};

/// Full-scene painter.
///
/// Every frame paints the whole board: background, items back-to-front so
/// the newest end up on top, then the in-progress item, then the selection
/// highlight. Every coordinate goes through the world→canvas conversion and
/// every size-like field is multiplied by the current zoom, so shapes stay
/// crisp and proportional at any zoom level.
pub struct Painter {
    /// Canvas background. Eraser strokes paint with this color, masking what
    /// lies underneath.
    pub background: Color,
    /// Color of the selection highlight box.
    pub selection_color: Color,
}

impl Default for Painter {
    fn default() -> Self {
        Self {
            background: Color::from_rgba8(250, 250, 250, 255),
            selection_color: Color::from_rgba8(59, 130, 246, 255),
        }
    }
}

impl Painter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paint one full frame of the board onto the surface.
    pub fn render(&self, board: &Board, surface: &mut dyn Surface) {
        surface.clear(self.background);

        let state = board.state();
        let coords = state.coords();

        for item in state.items_back_to_front() {
            self.draw_item(item, coords, surface);
        }
        if let Some(pending) = state.pending() {
            self.draw_item(pending, coords, surface);
        }
        if let Some(bounds) = state.selected_item().and_then(|item| item.bounds()) {
            let path = canvas_rect_path(bounds, coords);
            surface.stroke_path(&path, self.selection_color, 1.0);
        }
    }

    /// Paint a single item.
    pub fn draw_item(&self, item: &Item, coords: &CoordsContext, surface: &mut dyn Surface) {
        let zoom = coords.zoom();
        match item {
            Item::Rect(rect) => {
                let path = canvas_rect_path(rect.as_rect(), coords);
                if let Some(fill) = rect.options.fill_color {
                    surface.fill_path(&path, fill.into());
                }
                surface.stroke_path(
                    &path,
                    rect.options.stroke_color.into(),
                    rect.options.stroke_width * zoom,
                );
            }
            Item::Circle(circle) => {
                let center = coords.to_canvas(circle.center());
                let path = Circle::new(center, circle.diameter / 2.0 * zoom).to_path(0.1);
                if let Some(fill) = circle.options.fill_color {
                    surface.fill_path(&path, fill.into());
                }
                surface.stroke_path(
                    &path,
                    circle.options.stroke_color.into(),
                    circle.options.stroke_width * zoom,
                );
            }
            Item::Line(line) => {
                let mut path = BezPath::new();
                path.move_to(coords.to_canvas(line.start()));
                path.line_to(coords.to_canvas(line.end()));
                surface.stroke_path(
                    &path,
                    line.options.stroke_color.into(),
                    line.options.stroke_width * zoom,
                );
            }
            Item::Pen(stroke) => {
                let outline = canvas_outline(stroke, coords);
                surface.fill_path(&outline, stroke.options.color.into());
            }
            Item::Eraser(stroke) => {
                let outline = canvas_outline(stroke, coords);
                surface.fill_path(&outline, self.background);
            }
            Item::Text(text) => {
                // The overlay editor renders in its place while editing.
                if text.editing {
                    return;
                }
                surface.fill_text(
                    &text.content,
                    coords.to_canvas(text.position()),
                    text.options.font_size * zoom,
                    &text.options.font_family,
                    text.options.color.into(),
                );
            }
            Item::Picture(picture) => {
                // An undecodable source stays visibly empty.
                if let Some(image) = picture.decoded() {
                    let rect = canvas_rect(picture.as_rect(), coords);
                    surface.draw_image(&image, rect);
                }
            }
            Item::Move(_) | Item::Pointer(_) => {}
        }
    }
}

/// Transform a world rect into canvas space.
fn canvas_rect(world: Rect, coords: &CoordsContext) -> Rect {
    let p0 = coords.to_canvas(Point::new(world.x0, world.y0));
    let p1 = coords.to_canvas(Point::new(world.x1, world.y1));
    Rect::new(p0.x, p0.y, p1.x, p1.y)
}

fn canvas_rect_path(world: Rect, coords: &CoordsContext) -> BezPath {
    canvas_rect(world, coords).to_path(0.1)
}

/// Brush outline computed from canvas-space points with the zoom-scaled
/// brush size.
fn canvas_outline(
    stroke: &slateboard_core::items::BrushStroke,
    coords: &CoordsContext,
) -> BezPath {
    let canvas_points: Vec<Point> = stroke
        .points
        .iter()
        .map(|point| coords.to_canvas(*point))
        .collect();
    stroke_outline(&canvas_points, &stroke.options, coords.zoom())
}
