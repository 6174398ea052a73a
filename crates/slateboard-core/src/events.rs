//! Change notifications emitted by the board.

use crate::items::{ItemId, ItemRecord};
use serde::{Deserialize, Serialize};

/// A committed mutation of the item collection, for the surrounding
/// application to persist or sync. Speculative in-gesture mutations do not
/// emit; at least one notification fires per completed gesture.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BoardEvent {
    Add { item: ItemRecord },
    Update { item: ItemRecord },
    Remove { id: ItemId },
    Clear,
}

/// Change listener callback. Registered on the board, invoked synchronously
/// after each committed mutation.
pub type ChangeListener = Box<dyn FnMut(&BoardEvent)>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{Item, LineItem, ShapeOptions};
    use kurbo::Point;

    #[test]
    fn test_event_serialization_shape() {
        let line = Item::Line(LineItem::new(
            Point::ZERO,
            Point::new(1.0, 0.0),
            ShapeOptions::default(),
        ));
        let event = BoardEvent::Add {
            item: ItemRecord::from_item(&line),
        };

        let value: serde_json::Value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["type"], "add");
        assert_eq!(value["item"]["type"], "line");

        let clear: serde_json::Value = serde_json::to_value(BoardEvent::Clear).unwrap();
        assert_eq!(clear["type"], "clear");
    }
}
