//! Text tool.

use super::{Tool, ToolKind, ToolSwitch};
use crate::board::BoardState;
use crate::items::{FontOptions, Item, ItemId, Rgba, TextItem};
use kurbo::Point;

/// Creates a text item and hands it to the overlay editor.
///
/// Selecting the tool immediately places an empty item at the world origin
/// and enters edit mode; drawing gestures are not used for placement.
pub struct TextTool {
    /// Options applied to newly created items.
    pub options: FontOptions,
    /// The item created by the current activation.
    active_id: Option<ItemId>,
}

impl TextTool {
    pub fn new() -> Self {
        Self {
            options: FontOptions::default(),
            active_id: None,
        }
    }
}

impl Default for TextTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for TextTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Text
    }

    fn on_selected(&mut self, board: &mut BoardState) -> ToolSwitch {
        let item = Item::Text(TextItem::new(
            Point::ZERO,
            String::new(),
            self.options.clone(),
        ));
        let id = item.id().clone();
        board.add_item(item, true);
        board.set_selected_item(Some(id.clone()));
        board.begin_text_editing(&id);
        self.active_id = Some(id);
        ToolSwitch::None
    }

    fn on_unselected(&mut self, board: &mut BoardState) {
        if let Some(id) = self.active_id.take() {
            board.end_text_editing(&id);
        }
    }

    fn handle_color_chosen(&mut self, color: Rgba) {
        self.options.color = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn test_selecting_tool_creates_editing_text_at_origin() {
        let mut board = Board::new();
        board.set_tool(ToolKind::Text);

        let items: Vec<_> = board.state().items().collect();
        assert_eq!(items.len(), 1);
        match items[0] {
            Item::Text(text) => {
                assert!((text.x).abs() < f64::EPSILON);
                assert!((text.y).abs() < f64::EPSILON);
                assert!(text.editing);
                assert!(text.content.is_empty());
            }
            other => panic!("expected text, got {:?}", other.kind()),
        }
        assert!(board.state().selected_item_id().is_some());
    }

    #[test]
    fn test_deselecting_item_leaves_edit_mode() {
        let mut board = Board::new();
        board.set_tool(ToolKind::Text);
        let id = board.state().selected_item_id().unwrap().clone();

        board.state_mut().set_selected_item(None);

        match board.state().get_item_by_id(&id).unwrap() {
            Item::Text(text) => assert!(!text.editing),
            other => panic!("expected text, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_backspace_edits_instead_of_deleting_while_editing() {
        let mut board = Board::new();
        board.set_tool(ToolKind::Text);
        let id = board.state().selected_item_id().unwrap().clone();
        board
            .state_mut()
            .set_text_content(&id, "note".to_string(), false);

        // Still in edit mode: backspace must not delete the item.
        assert!(!board.state_mut().handle_backspace(false));
        assert!(board.state().get_item_by_id(&id).is_some());

        board.state_mut().end_text_editing(&id);
        assert!(board.state_mut().handle_backspace(false));
        assert!(board.state().get_item_by_id(&id).is_none());
    }
}
