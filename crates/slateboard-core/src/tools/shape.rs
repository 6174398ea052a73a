//! Shape tools: rectangle, circle, line.

use super::{Tool, ToolKind};
use crate::board::BoardState;
use crate::items::{CircleItem, Item, ItemId, LineItem, RectItem, Rgba, ShapeOptions};
use kurbo::Point;

/// Drag-to-size tool shared by the rect, circle and line modalities.
///
/// The item is committed on drawing-start with zero-size geometry and then
/// reshaped in place on every move; a click with no drag leaves a valid
/// zero-size item on the board.
pub struct ShapeTool {
    kind: ToolKind,
    /// Options applied to newly created items.
    pub options: ShapeOptions,
    /// World-coordinate anchor of the gesture in progress.
    anchor: Option<Point>,
    /// Id of the item being shaped.
    active_id: Option<ItemId>,
}

impl ShapeTool {
    fn new(kind: ToolKind) -> Self {
        Self {
            kind,
            options: ShapeOptions::default(),
            anchor: None,
            active_id: None,
        }
    }

    pub fn rect() -> Self {
        Self::new(ToolKind::Rect)
    }

    pub fn circle() -> Self {
        Self::new(ToolKind::Circle)
    }

    pub fn line() -> Self {
        Self::new(ToolKind::Line)
    }
}

impl Tool for ShapeTool {
    fn kind(&self) -> ToolKind {
        self.kind
    }

    fn handle_drawing_start(&mut self, board: &mut BoardState, position: Point) {
        let world = board.coords().to_world(position);
        let item = match self.kind {
            ToolKind::Rect => Item::Rect(RectItem::new(world, 0.0, 0.0, self.options.clone())),
            ToolKind::Circle => Item::Circle(CircleItem::new(world, 0.0, self.options.clone())),
            ToolKind::Line => Item::Line(LineItem::new(world, world, self.options.clone())),
            _ => return,
        };
        let id = item.id().clone();
        board.add_item(item, true);
        self.anchor = Some(world);
        self.active_id = Some(id);
    }

    fn handle_drawing_move(&mut self, board: &mut BoardState, position: Point) {
        // A move with no gesture in progress (tool switched mid-drag) is a
        // no-op.
        let (Some(anchor), Some(id)) = (self.anchor, self.active_id.clone()) else {
            return;
        };
        let world = board.coords().to_world(position);
        board.mutate_item_by_id(&id, false, |item| match item {
            Item::Rect(rect) => rect.set_corners(anchor, world),
            Item::Circle(circle) => circle.set_edge_point(world),
            Item::Line(line) => line.set_end(world),
            _ => {}
        });
    }

    fn handle_drawing_end(&mut self, board: &mut BoardState) {
        self.anchor = None;
        if let Some(id) = self.active_id.take() {
            board.notify_item_update(&id);
        }
    }

    fn handle_gesture_cancel(&mut self, _board: &mut BoardState) {
        self.anchor = None;
        self.active_id = None;
    }

    fn handle_color_chosen(&mut self, color: Rgba) {
        self.options.stroke_color = color;
    }
}
