//! Picture item for embedded raster images.

use super::{ItemId, new_item_id};
use crate::handles::HandleKind;
use base64::{Engine, engine::general_purpose::STANDARD};
use image::RgbaImage;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};

/// Decode state of a picture's source bytes.
#[derive(Debug, Clone, Default)]
pub enum DecodeCache {
    /// Not decoded yet (or invalidated by a source change).
    #[default]
    Unresolved,
    /// Decoding failed; the item renders empty.
    Failed,
    /// Decoded pixels, shared with the renderer.
    Ready(Arc<RgbaImage>),
}

/// A raster image placed on the board.
///
/// The source bytes are the persisted payload; the decoded pixels are a
/// lazily computed cache that is dropped whenever the source changes and is
/// never exported.
#[derive(Debug, Serialize, Deserialize)]
pub struct PictureItem {
    #[serde(skip, default = "new_item_id")]
    pub(crate) id: ItemId,
    /// Top-left corner, world coordinates.
    pub x: f64,
    pub y: f64,
    /// Display size in world units.
    pub width: f64,
    pub height: f64,
    /// Image bytes (any decodable raster format), base64-encoded.
    pub source: String,
    #[serde(skip)]
    decoded: RwLock<DecodeCache>,
}

impl Clone for PictureItem {
    fn clone(&self) -> Self {
        let cache = self
            .decoded
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default();
        Self {
            id: self.id.clone(),
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            source: self.source.clone(),
            decoded: RwLock::new(cache),
        }
    }
}

impl PictureItem {
    /// Create a picture from raw image bytes.
    pub fn new(position: Point, width: f64, height: f64, bytes: &[u8]) -> Self {
        Self {
            id: new_item_id(),
            x: position.x,
            y: position.y,
            width,
            height,
            source: STANDARD.encode(bytes),
            decoded: RwLock::new(DecodeCache::Unresolved),
        }
    }

    pub fn as_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    pub fn bounds(&self) -> Rect {
        self.as_rect()
    }

    /// Replace the source bytes and drop the decoded cache.
    pub fn set_source(&mut self, bytes: &[u8]) {
        self.source = STANDARD.encode(bytes);
        if let Ok(mut cache) = self.decoded.write() {
            *cache = DecodeCache::Unresolved;
        }
    }

    /// The decoded pixels, decoding on first use. A corrupt or unsupported
    /// source yields `None` and a logged warning; the item stays on the
    /// board, visibly empty.
    pub fn decoded(&self) -> Option<Arc<RgbaImage>> {
        if let Ok(cache) = self.decoded.read() {
            match &*cache {
                DecodeCache::Ready(image) => return Some(Arc::clone(image)),
                DecodeCache::Failed => return None,
                DecodeCache::Unresolved => {}
            }
        }

        let result = STANDARD
            .decode(&self.source)
            .ok()
            .and_then(|bytes| image::load_from_memory(&bytes).ok())
            .map(|decoded| Arc::new(decoded.to_rgba8()));

        if let Ok(mut cache) = self.decoded.write() {
            *cache = match &result {
                Some(image) => DecodeCache::Ready(Arc::clone(image)),
                None => {
                    log::warn!("picture {}: source did not decode, leaving it empty", self.id);
                    DecodeCache::Failed
                }
            };
        }
        result
    }

    /// Shrink the display size to fit within the given box while preserving
    /// the decoded source's aspect ratio. No-op when the source has not
    /// decoded.
    pub fn fit_within(&mut self, max_width: f64, max_height: f64) {
        let Some(image) = self.decoded() else {
            return;
        };
        let source_w = image.width() as f64;
        let source_h = image.height() as f64;
        if source_w <= 0.0 || source_h <= 0.0 {
            return;
        }

        let aspect = source_w / source_h;
        if aspect > max_width / max_height {
            self.width = max_width;
            self.height = max_width / aspect;
        } else {
            self.height = max_height;
            self.width = max_height * aspect;
        }
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        let mut moved = self.clone();
        moved.x += dx;
        moved.y += dy;
        moved
    }

    /// Same corner semantics as the rectangle item.
    pub fn resized(&self, dx: f64, dy: f64, handle: HandleKind) -> Self {
        let mut resized = self.clone();
        match handle {
            HandleKind::TopLeft => {
                resized.x += dx;
                resized.y += dy;
                resized.width -= dx;
                resized.height -= dy;
            }
            HandleKind::TopRight => {
                resized.y += dy;
                resized.width += dx;
                resized.height -= dy;
            }
            HandleKind::BottomLeft => {
                resized.x += dx;
                resized.width -= dx;
                resized.height += dy;
            }
            HandleKind::BottomRight => {
                resized.width += dx;
                resized.height += dy;
            }
        }
        resized
    }
}
