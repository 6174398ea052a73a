//! Picture tool.

use super::{Tool, ToolKind};
use crate::board::BoardState;
use crate::items::{Item, ItemId, PictureItem};
use kurbo::Point;

/// Display size used when the source bytes do not decode; the item stays on
/// the board, visibly empty.
const FALLBACK_SIZE: (f64, f64) = (200.0, 150.0);

/// Fraction of the viewport a freshly placed picture may occupy.
const PLACEMENT_FRACTION: f64 = 0.8;

/// Places user-picked images on the board. There is no canvas gesture: the
/// embedding UI runs its file picker and feeds the chosen bytes through
/// [`crate::board::Board::insert_picture`], which sizes the item to fit
/// within 80% of the viewport, centers it in the current view, selects it
/// and returns to the default tool.
pub struct PictureTool;

impl PictureTool {
    pub fn new() -> Self {
        Self
    }
}

/// Create the item for the given image bytes. Returns the new item's id.
pub(crate) fn place_picture(board: &mut BoardState, bytes: &[u8]) -> ItemId {
    let mut picture = PictureItem::new(Point::ZERO, FALLBACK_SIZE.0, FALLBACK_SIZE.1, bytes);

    let viewport = board.viewport_size();
    let zoom = board.coords().zoom();
    picture.fit_within(
        viewport.width * PLACEMENT_FRACTION / zoom,
        viewport.height * PLACEMENT_FRACTION / zoom,
    );

    let view_center = board
        .coords()
        .to_world(Point::new(viewport.width / 2.0, viewport.height / 2.0));
    picture.x = view_center.x - picture.width / 2.0;
    picture.y = view_center.y - picture.height / 2.0;

    let item = Item::Picture(picture);
    let id = item.id().clone();
    board.add_item(item, true);
    board.set_selected_item(Some(id.clone()));
    id
}

impl Default for PictureTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for PictureTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Picture
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let mut bytes = Vec::new();
        let image = image::RgbaImage::new(width, height);
        image::DynamicImage::ImageRgba8(image)
            .write_to(
                &mut std::io::Cursor::new(&mut bytes),
                image::ImageFormat::Png,
            )
            .unwrap();
        bytes
    }

    #[test]
    fn test_insert_fits_within_80_percent_of_viewport() {
        let mut board = Board::new();
        board.state_mut().set_viewport_size(1000.0, 500.0);

        board.insert_picture(&png_bytes(2000, 1000));

        let items: Vec<_> = board.state().items().collect();
        match items[0] {
            Item::Picture(picture) => {
                assert!(picture.width <= 800.0 + 1e-9);
                assert!(picture.height <= 400.0 + 1e-9);
                // Aspect ratio preserved (2:1).
                assert!((picture.width / picture.height - 2.0).abs() < 1e-9);
            }
            other => panic!("expected picture, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_insert_centers_selects_and_restores_default_tool() {
        let mut board = Board::new();
        board.state_mut().set_viewport_size(800.0, 600.0);
        board.set_tool(ToolKind::Picture);

        let id = board.insert_picture(&png_bytes(100, 100));

        assert_eq!(board.state().selected_item_id(), Some(&id));
        assert_eq!(board.active_tool(), ToolKind::Pointer);

        match board.state().get_item_by_id(&id).unwrap() {
            Item::Picture(picture) => {
                let center_x = picture.x + picture.width / 2.0;
                let center_y = picture.y + picture.height / 2.0;
                assert!((center_x - 400.0).abs() < 1e-9);
                assert!((center_y - 300.0).abs() < 1e-9);
            }
            other => panic!("expected picture, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_undecodable_bytes_leave_an_empty_item() {
        let mut board = Board::new();
        let id = board.insert_picture(b"definitely not an image");

        match board.state().get_item_by_id(&id).unwrap() {
            Item::Picture(picture) => {
                assert!(picture.decoded().is_none());
                assert!((picture.width - FALLBACK_SIZE.0).abs() < f64::EPSILON);
            }
            other => panic!("expected picture, got {:?}", other.kind()),
        }
    }
}
