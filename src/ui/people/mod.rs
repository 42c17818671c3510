// SPDX-License-Identifier: MPL-2.0
//! People gallery.
//!
//! Lists the user's face groups in a scrollable grid, loading further pages
//! as the user approaches the end. Each cell shows the group's preview face,
//! its image count and its label, which can be edited inline. A header
//! button asks the server to recognize faces that are not labeled yet.
//!
//! The component never talks to the server itself: it returns an
//! [`Effect`] describing the remote call, and the application feeds the
//! result back as a [`Message`].

pub mod component;
pub mod thumbnails;
pub mod view;

pub use component::{Effect, Message, Settings, State, GALLERY_SCROLLABLE_ID, LABEL_INPUT_ID};
pub use thumbnails::{decode_face_preview, FacePreview, ThumbnailRequest, PREVIEW_EDGE_PX};
pub use view::view;

use crate::domain::people::{FaceGroup, FaceGroupId};
use crate::ui::state::Keyed;

impl Keyed for FaceGroup {
    type Key = FaceGroupId;

    fn key(&self) -> FaceGroupId {
        self.id.clone()
    }
}
