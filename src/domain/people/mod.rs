// SPDX-License-Identifier: MPL-2.0
//! People domain types.
//!
//! A face group is a server-side cluster of detected faces believed to
//! belong to the same person. The client only ever edits its label.

pub mod newtypes;
pub mod types;

pub use newtypes::{FaceGroupId, FaceId, JobId, PageSize};
pub use types::{FaceGroup, FaceRectangle, FaceRef, MediaRef, PixelRegion, Thumbnail};
