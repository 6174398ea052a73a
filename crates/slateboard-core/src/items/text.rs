//! Text item.

use super::{ItemId, Rgba, new_item_id};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

fn default_font_size() -> f64 {
    20.0
}

fn default_font_family() -> String {
    "sans-serif".to_string()
}

fn default_text_color() -> Rgba {
    Rgba::black()
}

/// Font options for text items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontOptions {
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(default = "default_text_color")]
    pub color: Rgba,
}

impl Default for FontOptions {
    fn default() -> Self {
        Self {
            font_size: default_font_size(),
            font_family: default_font_family(),
            color: default_text_color(),
        }
    }
}

/// Average glyph width as a fraction of the font size, for approximate
/// bounds when no real text layout is available.
const CHAR_WIDTH_FACTOR: f64 = 0.55;
/// Line height as a fraction of the font size.
const LINE_HEIGHT_FACTOR: f64 = 1.2;

/// A text item. While `editing` is set the embedding UI shows an overlay
/// input in place of the painted text; the flag is transient state and never
/// round-trips through export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextItem {
    #[serde(skip, default = "new_item_id")]
    pub(crate) id: ItemId,
    /// Top-left corner, world coordinates.
    pub x: f64,
    pub y: f64,
    pub content: String,
    #[serde(default)]
    pub options: FontOptions,
    /// Whether the overlay editor is currently shown for this item.
    #[serde(skip)]
    pub editing: bool,
}

impl TextItem {
    /// Create a new text item.
    pub fn new(position: Point, content: String, options: FontOptions) -> Self {
        Self {
            id: new_item_id(),
            x: position.x,
            y: position.y,
            content,
            options,
            editing: false,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn set_content(&mut self, content: String) {
        self.content = content;
    }

    /// Approximate width from the widest line; exact layout is the
    /// renderer's business.
    fn approximate_width(&self) -> f64 {
        let max_line = self
            .content
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        (max_line as f64 * self.options.font_size * CHAR_WIDTH_FACTOR).max(
            // Keep empty text clickable.
            self.options.font_size,
        )
    }

    fn approximate_height(&self) -> f64 {
        let lines = self.content.lines().count().max(1);
        lines as f64 * self.options.font_size * LINE_HEIGHT_FACTOR
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.x,
            self.y,
            self.x + self.approximate_width(),
            self.y + self.approximate_height(),
        )
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        let mut moved = self.clone();
        moved.x += dx;
        moved.y += dy;
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::Item;

    #[test]
    fn test_empty_text_has_clickable_bounds() {
        let text = TextItem::new(Point::ZERO, String::new(), FontOptions::default());
        let bounds = text.bounds();
        assert!(bounds.width() > 0.0);
        assert!(bounds.height() > 0.0);
    }

    #[test]
    fn test_multiline_bounds_use_widest_line() {
        let text = TextItem::new(
            Point::ZERO,
            "hi\nlonger line".to_string(),
            FontOptions::default(),
        );
        let single = TextItem::new(Point::ZERO, "hi".to_string(), FontOptions::default());
        assert!(text.bounds().width() > single.bounds().width());
        assert!(text.bounds().height() > single.bounds().height());
    }

    #[test]
    fn test_backspace_policy_follows_editing_state() {
        let mut text = TextItem::new(Point::ZERO, "note".to_string(), FontOptions::default());
        assert!(Item::Text(text.clone()).removable_with_backspace());

        text.editing = true;
        assert!(!Item::Text(text).removable_with_backspace());
    }

    #[test]
    fn test_editing_flag_does_not_export() {
        let mut text = TextItem::new(Point::ZERO, "note".to_string(), FontOptions::default());
        text.editing = true;

        let json = serde_json::to_string(&text).unwrap();
        let restored: TextItem = serde_json::from_str(&json).unwrap();
        assert!(!restored.editing);
        assert_eq!(restored.content, "note");
    }
}
