// SPDX-License-Identifier: MPL-2.0
//! Face preview thumbnails.
//!
//! A face preview is the media thumbnail cropped to a square around the
//! face's bounding rectangle. Decoded previews are kept in an LRU cache keyed
//! by face id; the cache also remembers which faces are being fetched and
//! which failed so the same thumbnail is never requested twice.

use crate::domain::people::{FaceId, FaceRectangle};
use iced::widget::image::Handle;
use image_rs::{imageops::FilterType, GenericImageView};
use lru::LruCache;
use std::collections::HashSet;
use std::fmt;
use std::num::NonZeroUsize;

/// Edge length (pixels) of a decoded face preview.
pub const PREVIEW_EDGE_PX: u32 = 150;

/// Decoded, cropped RGBA face preview.
#[derive(Clone, PartialEq, Eq)]
pub struct FacePreview {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl fmt::Debug for FacePreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FacePreview")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.pixels.len())
            .finish()
    }
}

/// Decodes an encoded thumbnail and crops it to the face.
pub fn decode_face_preview(
    bytes: &[u8],
    rectangle: &FaceRectangle,
    edge: u32,
) -> Result<FacePreview, String> {
    let image = image_rs::load_from_memory(bytes).map_err(|e| e.to_string())?;
    let (width, height) = image.dimensions();
    let region = rectangle.square_region(width, height);
    if region.width == 0 || region.height == 0 {
        return Err("thumbnail is empty".to_string());
    }

    let edge = edge.max(1);
    let face = image
        .crop_imm(region.x, region.y, region.width, region.height)
        .resize_exact(edge, edge, FilterType::Triangle)
        .to_rgba8();

    Ok(FacePreview {
        width: face.width(),
        height: face.height(),
        pixels: face.into_vec(),
    })
}

/// A thumbnail the caller must download and decode.
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailRequest {
    pub face_id: FaceId,
    pub url: String,
    pub rectangle: FaceRectangle,
}

/// Preview availability for one face.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewState<'a> {
    Ready(&'a Handle),
    Loading,
    Unavailable,
}

/// LRU cache of decoded face previews.
pub struct ThumbnailCache {
    cache: LruCache<FaceId, Handle>,
    pending: HashSet<FaceId>,
    failed: HashSet<FaceId>,
}

impl fmt::Debug for ThumbnailCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThumbnailCache")
            .field("cached", &self.cache.len())
            .field("pending", &self.pending.len())
            .field("failed", &self.failed.len())
            .finish()
    }
}

impl ThumbnailCache {
    /// Creates a cache holding at most `capacity` previews (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            cache: LruCache::new(NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN)),
            pending: HashSet::new(),
            failed: HashSet::new(),
        }
    }

    /// Marks the request as pending and returns it, unless the face is
    /// already cached, pending or known to have failed.
    pub fn claim(&mut self, request: ThumbnailRequest) -> Option<ThumbnailRequest> {
        let id = &request.face_id;
        if self.cache.contains(id) || self.pending.contains(id) || self.failed.contains(id) {
            return None;
        }
        self.pending.insert(request.face_id.clone());
        Some(request)
    }

    /// Stores a decoded preview. Returns `false` (and drops the preview) if
    /// the face was not pending, e.g. because the cache was cleared since.
    pub fn insert(&mut self, face_id: FaceId, preview: FacePreview) -> bool {
        if !self.pending.remove(&face_id) {
            return false;
        }
        let handle = Handle::from_rgba(preview.width, preview.height, preview.pixels);
        self.cache.put(face_id, handle);
        true
    }

    /// Records a failed fetch; the face keeps its placeholder.
    pub fn mark_failed(&mut self, face_id: FaceId) {
        if self.pending.remove(&face_id) {
            self.failed.insert(face_id);
        }
    }

    /// Looks up a preview without touching the LRU order.
    #[must_use]
    pub fn state(&self, face_id: &FaceId) -> PreviewState<'_> {
        if let Some(handle) = self.cache.peek(face_id) {
            PreviewState::Ready(handle)
        } else if self.pending.contains(face_id) {
            PreviewState::Loading
        } else {
            PreviewState::Unavailable
        }
    }

    /// Drops every preview and forgets pending and failed faces.
    pub fn clear(&mut self) {
        self.cache.clear();
        self.pending.clear();
        self.failed.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
