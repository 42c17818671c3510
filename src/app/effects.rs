// SPDX-License-Identifier: MPL-2.0
//! Remote calls behind the gallery's effects.
//!
//! Each function runs one port operation and turns its outcome into the
//! gallery message that reports it, so `update` only has to wrap them in
//! `Task::perform`.

use crate::application::port::{RemoteDataPort, RemoteError};
use crate::ui::people::{self, ThumbnailRequest};
use crate::ui::state::{LabelChange, PageRequest};
use std::sync::Arc;

/// Port handle shared by every task. Holds the construction error when the
/// remote client could not be built, so each call fails the same way.
pub type SharedPort = Result<Arc<dyn RemoteDataPort>, RemoteError>;

pub async fn fetch_page(port: SharedPort, request: PageRequest) -> people::Message {
    let result = match port {
        Ok(port) => port.my_faces(request.limit, request.offset).await,
        Err(error) => Err(error),
    };
    people::Message::PageLoaded { request, result }
}

pub async fn set_label(port: SharedPort, change: LabelChange) -> people::Message {
    let LabelChange { group_id, label } = change;
    let result = match port {
        Ok(port) => port.set_group_label(group_id.clone(), label).await,
        Err(error) => Err(error),
    };
    people::Message::LabelUpdated { group_id, result }
}

pub async fn recognize_unlabeled(port: SharedPort) -> people::Message {
    let result = match port {
        Ok(port) => port.recognize_unlabeled_faces().await,
        Err(error) => Err(error),
    };
    people::Message::RecognizeFinished(result)
}

/// Downloads a thumbnail and crops it to the requested face.
pub async fn load_thumbnail(port: SharedPort, request: ThumbnailRequest) -> people::Message {
    let ThumbnailRequest {
        face_id,
        url,
        rectangle,
    } = request;

    let bytes = match port {
        Ok(port) => port.fetch_thumbnail(url).await,
        Err(error) => Err(error),
    };
    let result = bytes.map_err(|e| e.to_string()).and_then(|bytes| {
        people::decode_face_preview(&bytes, &rectangle, people::PREVIEW_EDGE_PX)
    });

    people::Message::ThumbnailLoaded { face_id, result }
}
