//! Slateboard Core Library
//!
//! Platform-agnostic item model, coordinate transforms and tool state
//! machines for the slateboard whiteboard widget. Rendering backends and the
//! embedding UI live outside this crate and talk to it through [`Board`],
//! the provider traits and the render boundary in `slateboard-render`.

pub mod board;
pub mod coords;
pub mod events;
pub mod handles;
pub mod input;
pub mod items;
pub mod providers;
pub mod throttle;
pub mod tools;

pub use board::{Board, BoardError, BoardState};
pub use coords::CoordsContext;
pub use events::BoardEvent;
pub use handles::HandleKind;
pub use input::PointerEvent;
pub use items::{Item, ItemId, ItemKind, ItemRecord};
pub use tools::{Tool, ToolKind};
