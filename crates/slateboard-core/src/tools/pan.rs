//! Pan tool.

use super::{Tool, ToolKind};
use crate::board::BoardState;
use kurbo::{Point, Vec2};

/// Drag-to-pan. While the gesture is live the delta goes into the coords
/// context's uncommitted offset; releasing commits it into the pan.
pub struct PanTool {
    /// Canvas-pixel anchor of the gesture in progress.
    anchor: Option<Point>,
}

impl PanTool {
    pub fn new() -> Self {
        Self { anchor: None }
    }
}

impl Default for PanTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for PanTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Pan
    }

    fn handle_drawing_start(&mut self, _board: &mut BoardState, position: Point) {
        self.anchor = Some(position);
    }

    fn handle_drawing_move(&mut self, board: &mut BoardState, position: Point) {
        let Some(anchor) = self.anchor else {
            return;
        };
        board.coords_mut().offset = Vec2::new(position.x - anchor.x, position.y - anchor.y);
    }

    fn handle_drawing_end(&mut self, board: &mut BoardState) {
        if self.anchor.take().is_some() {
            board.coords_mut().commit_offset();
        }
    }

    fn handle_gesture_cancel(&mut self, board: &mut BoardState) {
        if self.anchor.take().is_some() {
            board.coords_mut().offset = Vec2::ZERO;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::input::PointerEvent;

    #[test]
    fn test_pan_accumulates_into_offset_then_pan() {
        let mut board = Board::new();
        board.set_tool(ToolKind::Pan);

        board.pointer_event(PointerEvent::Down {
            position: Point::new(100.0, 100.0),
        });
        board.pointer_event(PointerEvent::Move {
            position: Point::new(130.0, 90.0),
        });

        // Live gesture: delta sits in the offset, pan untouched.
        let coords = board.state().coords();
        assert!((coords.offset.x - 30.0).abs() < f64::EPSILON);
        assert!((coords.offset.y + 10.0).abs() < f64::EPSILON);
        assert!((coords.pan.x).abs() < f64::EPSILON);

        board.pointer_event(PointerEvent::Up);

        let coords = board.state().coords();
        assert_eq!(coords.offset, Vec2::ZERO);
        assert!((coords.pan.x - 30.0).abs() < f64::EPSILON);
        assert!((coords.pan.y + 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cancel_drops_uncommitted_offset() {
        let mut board = Board::new();
        board.set_tool(ToolKind::Pan);

        board.pointer_event(PointerEvent::Down {
            position: Point::new(0.0, 0.0),
        });
        board.pointer_event(PointerEvent::Move {
            position: Point::new(50.0, 50.0),
        });
        board.pointer_event(PointerEvent::Cancel);

        let coords = board.state().coords();
        assert_eq!(coords.offset, Vec2::ZERO);
        assert!((coords.pan.x).abs() < f64::EPSILON);
    }
}
