//! Clear tool.

use super::{Tool, ToolKind, ToolSwitch};
use crate::board::BoardState;

/// Not a drawing tool: selecting it empties the item collection and hands
/// control back to whichever tool was active before, so it can never stay
/// active itself.
pub struct ClearTool;

impl ClearTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ClearTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for ClearTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Clear
    }

    fn on_selected(&mut self, board: &mut BoardState) -> ToolSwitch {
        board.clear_items(true);
        ToolSwitch::Previous
    }
}
