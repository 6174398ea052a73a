//! Tool system for the whiteboard.
//!
//! One stateful handler per interaction modality. Tools hold only transient
//! gesture state plus the default options for newly created items; the item
//! collection itself is owned by the board and mutated exclusively through
//! its API.

mod brush;
mod clear;
mod pan;
mod picture;
mod pointer;
mod shape;
mod text;

pub use brush::BrushTool;
pub use clear::ClearTool;
pub use pan::PanTool;
pub use picture::PictureTool;
pub(crate) use picture::place_picture;
pub use pointer::PointerTool;
pub use shape::ShapeTool;
pub use text::TextTool;

use crate::board::BoardState;
use crate::items::Rgba;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Available tools, addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    #[default]
    Pointer,
    Pan,
    Rect,
    Circle,
    Line,
    Pen,
    Eraser,
    Text,
    Picture,
    Clear,
}

impl ToolKind {
    /// The tool's registration name.
    pub fn name(&self) -> &'static str {
        match self {
            ToolKind::Pointer => "pointer",
            ToolKind::Pan => "pan",
            ToolKind::Rect => "rect",
            ToolKind::Circle => "circle",
            ToolKind::Line => "line",
            ToolKind::Pen => "pen",
            ToolKind::Eraser => "eraser",
            ToolKind::Text => "text",
            ToolKind::Picture => "picture",
            ToolKind::Clear => "clear",
        }
    }

    /// Look a tool up by name.
    pub fn from_name(name: &str) -> Option<ToolKind> {
        match name {
            "pointer" => Some(ToolKind::Pointer),
            "pan" => Some(ToolKind::Pan),
            "rect" => Some(ToolKind::Rect),
            "circle" => Some(ToolKind::Circle),
            "line" => Some(ToolKind::Line),
            "pen" => Some(ToolKind::Pen),
            "eraser" => Some(ToolKind::Eraser),
            "text" => Some(ToolKind::Text),
            "picture" => Some(ToolKind::Picture),
            "clear" => Some(ToolKind::Clear),
            _ => None,
        }
    }
}

/// What the board should do with the active tool after a selection hook ran.
/// Lets a tool hand control back (the clear tool re-activates the prior
/// tool; the picture tool returns to the default) without re-entering the
/// board's dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolSwitch {
    /// Stay on this tool.
    None,
    /// Re-activate the previously active tool.
    Previous,
    /// Activate the board's default tool.
    Default,
}

/// A stateful handler for one drawing modality.
///
/// Positions arrive in canvas pixel coordinates; implementations convert to
/// world coordinates through the board's coords context before touching item
/// payloads. All handlers default to no-ops so each tool implements only the
/// subset it needs.
pub trait Tool {
    fn kind(&self) -> ToolKind;

    /// The tool became the active tool.
    fn on_selected(&mut self, board: &mut BoardState) -> ToolSwitch {
        let _ = board;
        ToolSwitch::None
    }

    /// The tool stopped being the active tool.
    fn on_unselected(&mut self, board: &mut BoardState) {
        let _ = board;
    }

    /// Pointer went down.
    fn handle_drawing_start(&mut self, board: &mut BoardState, position: Point) {
        let _ = (board, position);
    }

    /// Pointer moved while down.
    fn handle_drawing_move(&mut self, board: &mut BoardState, position: Point) {
        let _ = (board, position);
    }

    /// Pointer lifted.
    fn handle_drawing_end(&mut self, board: &mut BoardState) {
        let _ = board;
    }

    /// The platform cancelled the gesture; drop transient state without
    /// committing anything.
    fn handle_gesture_cancel(&mut self, board: &mut BoardState) {
        let _ = board;
    }

    /// Plain pointer movement with no button down.
    fn handle_hover_move(&mut self, board: &mut BoardState, position: Point, now: Instant) {
        let _ = (board, position, now);
    }

    /// The color-swatch widget emitted a color; the tool is the sole
    /// consumer and applies it to its default options.
    fn handle_color_chosen(&mut self, color: Rgba) {
        let _ = color;
    }
}
