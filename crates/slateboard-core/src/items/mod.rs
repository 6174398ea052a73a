//! Item definitions for the whiteboard.

mod brush;
mod circle;
mod line;
mod picture;
mod rect;
mod text;

pub use brush::{BrushOptions, BrushStroke, stroke_outline};
pub use circle::CircleItem;
pub use line::LineItem;
pub use picture::{DecodeCache, PictureItem};
pub use rect::RectItem;
pub use text::{FontOptions, TextItem};

use kurbo::Rect;
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::handles::HandleKind;

/// Unique identifier for items. Stored as a string so that imported
/// collections keep whatever ids they were exported with.
pub type ItemId = String;

/// Generate a fresh item id.
pub fn new_item_id() -> ItemId {
    Uuid::new_v4().to_string()
}

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

fn default_stroke_color() -> Rgba {
    Rgba::black()
}

fn default_stroke_width() -> f64 {
    2.0
}

/// Stroke/fill options shared by the shape variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeOptions {
    #[serde(default = "default_stroke_color")]
    pub stroke_color: Rgba,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    /// Fill color (None = outline only).
    #[serde(default)]
    pub fill_color: Option<Rgba>,
}

impl Default for ShapeOptions {
    fn default() -> Self {
        Self {
            stroke_color: default_stroke_color(),
            stroke_width: default_stroke_width(),
            fill_color: None,
        }
    }
}

/// The variant tag carried by every item. Doubles as the serialized `type`
/// field of the export format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Rect,
    Circle,
    Line,
    Pen,
    Eraser,
    Text,
    Picture,
    Move,
    Pointer,
}

impl ItemKind {
    /// The serialized type tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Rect => "rect",
            ItemKind::Circle => "circle",
            ItemKind::Line => "line",
            ItemKind::Pen => "pen",
            ItemKind::Eraser => "eraser",
            ItemKind::Text => "text",
            ItemKind::Picture => "picture",
            ItemKind::Move => "move",
            ItemKind::Pointer => "pointer",
        }
    }
}

/// Payload of the pseudo-items that only exist to drive a tool's gesture.
/// They carry no geometry and are never painted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PseudoItem {
    #[serde(skip, default = "new_item_id")]
    pub(crate) id: ItemId,
}

impl PseudoItem {
    pub fn new() -> Self {
        Self { id: new_item_id() }
    }
}

/// One drawing entity. The serde representation is the persisted
/// `{type, data}` pair; [`ItemRecord`] adds the `id` alongside it. The tag
/// is also the type-tag → constructor registry that import relies on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum Item {
    Rect(RectItem),
    Circle(CircleItem),
    Line(LineItem),
    Pen(BrushStroke),
    Eraser(BrushStroke),
    Text(TextItem),
    Picture(PictureItem),
    Move(PseudoItem),
    Pointer(PseudoItem),
}

impl Item {
    /// The item's id, unique within one board's collection.
    pub fn id(&self) -> &ItemId {
        match self {
            Item::Rect(i) => &i.id,
            Item::Circle(i) => &i.id,
            Item::Line(i) => &i.id,
            Item::Pen(i) => &i.id,
            Item::Eraser(i) => &i.id,
            Item::Text(i) => &i.id,
            Item::Picture(i) => &i.id,
            Item::Move(i) => &i.id,
            Item::Pointer(i) => &i.id,
        }
    }

    /// Replace the id (used by import to restore persisted identities).
    pub(crate) fn set_id(&mut self, id: ItemId) {
        match self {
            Item::Rect(i) => i.id = id,
            Item::Circle(i) => i.id = id,
            Item::Line(i) => i.id = id,
            Item::Pen(i) => i.id = id,
            Item::Eraser(i) => i.id = id,
            Item::Text(i) => i.id = id,
            Item::Picture(i) => i.id = id,
            Item::Move(i) => i.id = id,
            Item::Pointer(i) => i.id = id,
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            Item::Rect(_) => ItemKind::Rect,
            Item::Circle(_) => ItemKind::Circle,
            Item::Line(_) => ItemKind::Line,
            Item::Pen(_) => ItemKind::Pen,
            Item::Eraser(_) => ItemKind::Eraser,
            Item::Text(_) => ItemKind::Text,
            Item::Picture(_) => ItemKind::Picture,
            Item::Move(_) => ItemKind::Move,
            Item::Pointer(_) => ItemKind::Pointer,
        }
    }

    /// Axis-aligned bounding box in world coordinates, inflated by half the
    /// stroke width for stroked variants so thin shapes stay selectable.
    /// Pseudo-items have no geometry and return `None`.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Item::Rect(i) => Some(i.bounds()),
            Item::Circle(i) => Some(i.bounds()),
            Item::Line(i) => Some(i.bounds()),
            Item::Pen(i) | Item::Eraser(i) => Some(i.bounds()),
            Item::Text(i) => Some(i.bounds()),
            Item::Picture(i) => Some(i.bounds()),
            Item::Move(_) | Item::Pointer(_) => None,
        }
    }

    /// The copy of this item moved by `(dx, dy)` in world units, or `None`
    /// when the variant does not support moving.
    pub fn translated(&self, dx: f64, dy: f64) -> Option<Item> {
        match self {
            Item::Rect(i) => Some(Item::Rect(i.translated(dx, dy))),
            Item::Circle(i) => Some(Item::Circle(i.translated(dx, dy))),
            Item::Line(i) => Some(Item::Line(i.translated(dx, dy))),
            Item::Pen(i) => Some(Item::Pen(i.translated(dx, dy))),
            Item::Eraser(i) => Some(Item::Eraser(i.translated(dx, dy))),
            Item::Text(i) => Some(Item::Text(i.translated(dx, dy))),
            Item::Picture(i) => Some(Item::Picture(i.translated(dx, dy))),
            Item::Move(_) | Item::Pointer(_) => None,
        }
    }

    /// Whether the variant opts into the resize contract.
    pub fn is_resizable(&self) -> bool {
        matches!(self, Item::Rect(_) | Item::Picture(_))
    }

    /// The resize handles this item offers. Empty unless the variant opts in.
    pub fn resize_handles(&self) -> &'static [HandleKind] {
        if self.is_resizable() {
            HandleKind::corners()
        } else {
            &[]
        }
    }

    /// The copy of this item resized by `(dx, dy)` at the given handle, or
    /// `None` when the variant is not resizable.
    pub fn resized(&self, dx: f64, dy: f64, handle: HandleKind) -> Option<Item> {
        match self {
            Item::Rect(i) => Some(Item::Rect(i.resized(dx, dy, handle))),
            Item::Picture(i) => Some(Item::Picture(i.resized(dx, dy, handle))),
            _ => None,
        }
    }

    /// Whether pressing backspace with this item selected deletes it. Text
    /// opts out while its overlay editor is open, where backspace must edit
    /// the content instead.
    pub fn removable_with_backspace(&self) -> bool {
        match self {
            Item::Text(i) => !i.editing,
            _ => true,
        }
    }
}

/// The persisted `{id, type, data}` triple. `data` carries exactly the
/// geometric and style payload; derived state (a picture's decoded handle,
/// a text item's editing flag) never round-trips.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: ItemId,
    #[serde(flatten)]
    pub item: Item,
}

impl ItemRecord {
    /// Snapshot an item into its persisted form.
    pub fn from_item(item: &Item) -> Self {
        Self {
            id: item.id().clone(),
            item: item.clone(),
        }
    }

    /// Rebuild the live item, restoring the persisted id.
    pub fn into_item(self) -> Item {
        let mut item = self.item;
        item.set_id(self.id);
        item
    }
}
