//! Traits for the collaborators the embedding application provides.

use crate::items::ItemId;
use kurbo::Point;
use thiserror::Error;

/// Errors from resource providers. Recoverable at the call site: callers
/// fall back to a default icon or keep the previous locale instead of
/// propagating a crash into the interaction loop.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("icon not found: {0}")]
    IconNotFound(String),
    #[error("unknown locale: {0}")]
    UnknownLocale(String),
}

/// Decorative icon lookup for the surrounding UI. No behavioral coupling.
pub trait IconProvider {
    /// Markup for the named icon, or [`ProviderError::IconNotFound`].
    fn icon_markup(&self, name: &str, size: u32) -> Result<String, ProviderError>;
}

/// String localization for the surrounding UI.
///
/// A failed locale switch leaves the previously active locale serving
/// lookups; `translate` itself never fails (unknown keys fall back to the
/// key).
pub trait Localizer {
    fn translate(&self, key: &str) -> String;
    fn set_locale(&mut self, locale: &str) -> Result<(), ProviderError>;
}

/// Overlay text editor shown in place of a text item while it is being
/// edited. The item itself only carries `editing: bool` and the content;
/// the real input control lives in the embedding UI layer.
pub trait TextOverlay {
    /// Show the editor for `id` at the given canvas position, seeded with
    /// the current content.
    fn show(&mut self, id: &ItemId, canvas_position: Point, content: &str);
    /// Hide the editor for `id`.
    fn hide(&mut self, id: &ItemId);
}
