// SPDX-License-Identifier: MPL-2.0
//! Face group snapshots as returned by the photo server.

use super::newtypes::{FaceGroupId, FaceId};

/// A cluster of detected faces believed to belong to the same person.
///
/// `image_face_count` and `preview_faces` are server-derived; the client only
/// changes `label`, and only after the server confirmed the change.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceGroup {
    pub id: FaceGroupId,
    pub label: Option<String>,
    pub image_face_count: u32,
    /// At most one face is fetched per group for the preview.
    pub preview_faces: Vec<FaceRef>,
}

impl FaceGroup {
    /// Returns the label, if the group has one.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    #[must_use]
    pub fn is_labeled(&self) -> bool {
        self.label.is_some()
    }

    /// Returns the face used as the group's preview.
    #[must_use]
    pub fn preview_face(&self) -> Option<&FaceRef> {
        self.preview_faces.first()
    }
}

/// A detected face inside a media item. Immutable snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceRef {
    pub id: FaceId,
    pub rectangle: FaceRectangle,
    pub media: MediaRef,
}

/// Media item a face was detected in.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaRef {
    pub id: String,
    pub title: String,
    pub thumbnail: Option<Thumbnail>,
}

/// Thumbnail of a media item.
#[derive(Debug, Clone, PartialEq)]
pub struct Thumbnail {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

/// Face bounding box in coordinates relative to the image (0.0 to 1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceRectangle {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

/// Pixel region inside a decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl FaceRectangle {
    /// Returns a square pixel region centred on the face, for an image of the
    /// given size. The square is clamped to the image bounds and is never
    /// empty for a non-empty image.
    #[must_use]
    pub fn square_region(&self, image_width: u32, image_height: u32) -> PixelRegion {
        if image_width == 0 || image_height == 0 {
            return PixelRegion {
                x: 0,
                y: 0,
                width: 0,
                height: 0,
            };
        }

        let (w, h) = (f64::from(image_width), f64::from(image_height));
        let min_x = self.min_x.clamp(0.0, 1.0) * w;
        let max_x = self.max_x.clamp(0.0, 1.0) * w;
        let min_y = self.min_y.clamp(0.0, 1.0) * h;
        let max_y = self.max_y.clamp(0.0, 1.0) * h;

        let side = (max_x - min_x)
            .abs()
            .max((max_y - min_y).abs())
            .clamp(1.0, w.min(h));
        let center_x = (min_x + max_x) / 2.0;
        let center_y = (min_y + max_y) / 2.0;

        let x = (center_x - side / 2.0).clamp(0.0, w - side);
        let y = (center_y - side / 2.0).clamp(0.0, h - side);

        PixelRegion {
            x: x.round() as u32,
            y: y.round() as u32,
            width: (side.round() as u32).min(image_width),
            height: (side.round() as u32).min(image_height),
        }
    }
}
