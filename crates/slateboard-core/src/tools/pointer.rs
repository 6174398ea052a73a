//! Pointer tool: selection, dragging and resizing.

use super::{Tool, ToolKind};
use crate::board::BoardState;
use crate::handles::{HandleKind, handle_at};
use crate::items::ItemId;
use crate::throttle::Throttle;
use kurbo::Point;
use std::time::{Duration, Instant};

/// Minimum interval between hover hit-test passes.
const HOVER_THROTTLE: Duration = Duration::from_millis(150);

/// The three mutually exclusive gesture states. Entered on drawing-start,
/// exited on drawing-end.
#[derive(Debug, Clone)]
enum DragState {
    Idle,
    /// Moving the item as a whole; `last` is the previous move's world point.
    Dragging { id: ItemId, last: Point },
    /// Dragging one resize handle of the selected item.
    Resizing {
        id: ItemId,
        handle: HandleKind,
        last: Point,
    },
}

/// Selection/drag/resize state machine.
pub struct PointerTool {
    state: DragState,
    hover_throttle: Throttle,
}

impl PointerTool {
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
            hover_throttle: Throttle::new(HOVER_THROTTLE),
        }
    }
}

impl Default for PointerTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for PointerTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Pointer
    }

    fn handle_drawing_start(&mut self, board: &mut BoardState, position: Point) {
        let world = board.coords().to_world(position);

        // Resize wins: a resizable item is selected and the press lands in
        // one of its handle boxes.
        if let Some(selected) = board.selected_item_id().cloned() {
            let handle = board
                .get_item_by_id(&selected)
                .filter(|item| item.is_resizable())
                .and_then(|item| item.bounds())
                .and_then(|bounds| handle_at(bounds, world));
            if let Some(handle) = handle {
                self.state = DragState::Resizing {
                    id: selected,
                    handle,
                    last: world,
                };
                return;
            }
        }

        // Drag: the press lands on an item that is already selected or
        // already hovered.
        let candidates = [
            board.selected_item_id().cloned(),
            board.hovered_item_id().cloned(),
        ];
        for candidate in candidates.into_iter().flatten() {
            let hit = board
                .get_item_by_id(&candidate)
                .and_then(|item| item.bounds())
                .is_some_and(|bounds| bounds.contains(world));
            if hit {
                board.set_selected_item(Some(candidate.clone()));
                self.state = DragState::Dragging {
                    id: candidate,
                    last: world,
                };
                return;
            }
        }

        // Select: topmost-wins over the bounding boxes, or clear.
        let hit = board.item_at(world);
        board.set_selected_item(hit);
    }

    fn handle_drawing_move(&mut self, board: &mut BoardState, position: Point) {
        let world = board.coords().to_world(position);
        match &mut self.state {
            DragState::Idle => {}
            DragState::Dragging { id, last } => {
                let dx = world.x - last.x;
                let dy = world.y - last.y;
                *last = world;
                let id = id.clone();
                board.mutate_item_by_id(&id, false, |item| {
                    if let Some(moved) = item.translated(dx, dy) {
                        *item = moved;
                    }
                });
            }
            DragState::Resizing { id, handle, last } => {
                let dx = world.x - last.x;
                let dy = world.y - last.y;
                *last = world;
                let id = id.clone();
                let handle = *handle;
                board.mutate_item_by_id(&id, false, |item| {
                    if let Some(resized) = item.resized(dx, dy, handle) {
                        *item = resized;
                    }
                });
            }
        }
    }

    fn handle_drawing_end(&mut self, board: &mut BoardState) {
        let finished = std::mem::replace(&mut self.state, DragState::Idle);
        match finished {
            DragState::Dragging { id, .. } | DragState::Resizing { id, .. } => {
                board.notify_item_update(&id);
            }
            DragState::Idle => {}
        }
    }

    fn handle_gesture_cancel(&mut self, _board: &mut BoardState) {
        self.state = DragState::Idle;
    }

    fn handle_hover_move(&mut self, board: &mut BoardState, position: Point, now: Instant) {
        // Hover is suppressed entirely while a drag or resize is in
        // progress.
        if !matches!(self.state, DragState::Idle) {
            return;
        }
        if !self.hover_throttle.fire(now) {
            return;
        }
        let world = board.coords().to_world(position);
        let hit = board.item_at(world);
        board.set_hovered_item(hit);
    }
}
