//! Pen and eraser tools.

use super::{Tool, ToolKind};
use crate::board::BoardState;
use crate::items::{BrushOptions, BrushStroke, Item, Rgba};
use kurbo::Point;

/// Freehand stroke tool. The pen and the eraser share the same gesture; the
/// eraser's strokes are painted with the canvas background color, masking
/// what lies underneath rather than deleting it.
pub struct BrushTool {
    kind: ToolKind,
    /// Options applied to newly started strokes.
    pub options: BrushOptions,
}

impl BrushTool {
    pub fn pen() -> Self {
        Self {
            kind: ToolKind::Pen,
            options: BrushOptions::default(),
        }
    }

    pub fn eraser() -> Self {
        let mut options = BrushOptions::default();
        options.size = 16.0;
        Self {
            kind: ToolKind::Eraser,
            options,
        }
    }

    fn wrap(&self, stroke: BrushStroke) -> Item {
        match self.kind {
            ToolKind::Eraser => Item::Eraser(stroke),
            _ => Item::Pen(stroke),
        }
    }
}

impl Tool for BrushTool {
    fn kind(&self) -> ToolKind {
        self.kind
    }

    fn handle_drawing_start(&mut self, board: &mut BoardState, position: Point) {
        let world = board.coords().to_world(position);
        let stroke = BrushStroke::new(world, self.options.clone());
        board.begin_pending(self.wrap(stroke));
    }

    fn handle_drawing_move(&mut self, board: &mut BoardState, position: Point) {
        let world = board.coords().to_world(position);
        if let Some(Item::Pen(stroke) | Item::Eraser(stroke)) = board.pending_mut() {
            stroke.add_point(world);
        }
    }

    fn handle_drawing_end(&mut self, board: &mut BoardState) {
        if let Some(item) = board.take_pending() {
            board.add_item(item, true);
        }
    }

    fn handle_gesture_cancel(&mut self, board: &mut BoardState) {
        board.abort_pending();
    }

    fn handle_color_chosen(&mut self, color: Rgba) {
        self.options.color = color;
    }
}
