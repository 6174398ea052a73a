//! Slateboard Render Library
//!
//! The paint boundary of the whiteboard: a canvas-style [`Surface`] trait
//! that real backends implement, and the [`Painter`] that walks a board and
//! issues zoom-correct paint operations for every item.

pub mod painter;
pub mod surface;

pub use painter::Painter;
pub use surface::{PaintOp, RecordingSurface, Surface};
