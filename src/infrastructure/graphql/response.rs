// SPDX-License-Identifier: MPL-2.0
//! Response envelopes and wire types.
//!
//! Wire types mirror the server schema (camelCase) and are converted into
//! domain snapshots right after decoding; nothing outside this module sees
//! them.

use crate::application::port::{LabelUpdated, RemoteError};
use crate::domain::people::{
    FaceGroup, FaceGroupId, FaceId, FaceRectangle, FaceRef, JobId, MediaRef, Thumbnail,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Standard GraphQL response envelope.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

/// Decodes a response body, turning reported errors into [`RemoteError`].
///
/// A non-empty `errors` array wins over partial `data`.
pub fn decode_envelope<T: DeserializeOwned>(body: &[u8]) -> Result<T, RemoteError> {
    let envelope: Envelope<T> =
        serde_json::from_slice(body).map_err(|e| RemoteError::Decode(e.to_string()))?;

    if !envelope.errors.is_empty() {
        let messages: Vec<&str> = envelope
            .errors
            .iter()
            .map(|error| error.message.as_str())
            .collect();
        return Err(RemoteError::GraphQl(messages.join("; ")));
    }

    envelope
        .data
        .ok_or_else(|| RemoteError::Decode("response has no data".to_string()))
}

// =============================================================================
// myFaces
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MyFacesData {
    pub my_face_groups: Vec<FaceGroupDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceGroupDto {
    id: String,
    label: Option<String>,
    image_face_count: u32,
    #[serde(default)]
    image_faces: Vec<ImageFaceDto>,
}

#[derive(Debug, Deserialize)]
struct ImageFaceDto {
    id: String,
    rectangle: RectangleDto,
    media: MediaDto,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RectangleDto {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

#[derive(Debug, Deserialize)]
struct MediaDto {
    id: String,
    #[serde(default)]
    title: String,
    thumbnail: Option<ThumbnailDto>,
}

#[derive(Debug, Deserialize)]
struct ThumbnailDto {
    url: String,
    width: u32,
    height: u32,
}

impl FaceGroupDto {
    /// Converts into a domain snapshot. `resolve` turns server-relative
    /// thumbnail URLs into absolute ones.
    pub fn into_domain(self, resolve: &impl Fn(&str) -> String) -> FaceGroup {
        FaceGroup {
            id: FaceGroupId::new(self.id),
            label: self.label,
            image_face_count: self.image_face_count,
            preview_faces: self
                .image_faces
                .into_iter()
                .map(|face| FaceRef {
                    id: FaceId::new(face.id),
                    rectangle: FaceRectangle {
                        min_x: face.rectangle.min_x,
                        max_x: face.rectangle.max_x,
                        min_y: face.rectangle.min_y,
                        max_y: face.rectangle.max_y,
                    },
                    media: MediaRef {
                        id: face.media.id,
                        title: face.media.title,
                        thumbnail: face.media.thumbnail.map(|thumbnail| Thumbnail {
                            url: resolve(&thumbnail.url),
                            width: thumbnail.width,
                            height: thumbnail.height,
                        }),
                    },
                })
                .collect(),
        }
    }
}

// =============================================================================
// setGroupLabel
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetGroupLabelData {
    set_face_group_label: LabelDto,
}

#[derive(Debug, Deserialize)]
struct LabelDto {
    id: String,
    label: Option<String>,
}

impl From<SetGroupLabelData> for LabelUpdated {
    fn from(data: SetGroupLabelData) -> Self {
        Self {
            id: FaceGroupId::new(data.set_face_group_label.id),
            label: data.set_face_group_label.label,
        }
    }
}

// =============================================================================
// recognizeUnlabeledFaces
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognizeData {
    recognize_unlabeled_faces: Vec<IdDto>,
}

#[derive(Debug, Deserialize)]
struct IdDto {
    id: String,
}

impl From<RecognizeData> for Vec<JobId> {
    fn from(data: RecognizeData) -> Self {
        data.recognize_unlabeled_faces
            .into_iter()
            .map(|job| JobId::new(job.id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MY_FACES_BODY: &str = r#"{
        "data": {
            "myFaceGroups": [
                {
                    "id": "7",
                    "label": null,
                    "imageFaceCount": 12,
                    "imageFaces": [
                        {
                            "id": "70",
                            "rectangle": { "minX": 0.1, "maxX": 0.3, "minY": 0.2, "maxY": 0.5 },
                            "media": {
                                "id": "m1",
                                "title": "beach.jpg",
                                "thumbnail": { "url": "/photo/thumb_1.jpg", "width": 1024, "height": 768 }
                            }
                        }
                    ]
                },
                { "id": "8", "label": "Alice", "imageFaceCount": 3, "imageFaces": [] }
            ]
        }
    }"#;

    #[test]
    fn decodes_face_groups() {
        let data: MyFacesData = decode_envelope(MY_FACES_BODY.as_bytes()).expect("decode");
        let groups: Vec<FaceGroup> = data
            .my_face_groups
            .into_iter()
            .map(|dto| dto.into_domain(&|url| format!("https://photos.example{url}")))
            .collect();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].id, FaceGroupId::new("7"));
        assert_eq!(groups[0].label, None);
        assert_eq!(groups[0].image_face_count, 12);

        let face = groups[0].preview_face().expect("preview");
        assert_eq!(face.id, FaceId::new("70"));
        assert_eq!(face.media.title, "beach.jpg");
        let thumbnail = face.media.thumbnail.as_ref().expect("thumbnail");
        assert_eq!(thumbnail.url, "https://photos.example/photo/thumb_1.jpg");
        assert_eq!(thumbnail.width, 1024);

        assert_eq!(groups[1].label(), Some("Alice"));
        assert!(groups[1].preview_face().is_none());
    }

    #[test]
    fn errors_array_maps_to_graphql_error() {
        let body = br#"{"data": null, "errors": [{"message": "unauthorized"}, {"message": "try again"}]}"#;
        let result: Result<MyFacesData, _> = decode_envelope(body);
        assert_eq!(
            result.unwrap_err(),
            RemoteError::GraphQl("unauthorized; try again".into())
        );
    }

    #[test]
    fn missing_data_is_decode_error() {
        let result: Result<MyFacesData, _> = decode_envelope(br#"{}"#);
        assert!(matches!(result, Err(RemoteError::Decode(_))));
    }

    #[test]
    fn malformed_body_is_decode_error() {
        let result: Result<MyFacesData, _> = decode_envelope(b"<html>502</html>");
        assert!(matches!(result, Err(RemoteError::Decode(_))));
    }

    #[test]
    fn decodes_label_update() {
        let body = br#"{"data": {"setFaceGroupLabel": {"id": "7", "label": "Alice"}}}"#;
        let data: SetGroupLabelData = decode_envelope(body).expect("decode");
        let updated = LabelUpdated::from(data);
        assert_eq!(updated.id, FaceGroupId::new("7"));
        assert_eq!(updated.label.as_deref(), Some("Alice"));
    }

    #[test]
    fn decodes_recognize_jobs() {
        let body = br#"{"data": {"recognizeUnlabeledFaces": [{"id": "j1"}, {"id": "j2"}]}}"#;
        let data: RecognizeData = decode_envelope(body).expect("decode");
        let jobs: Vec<JobId> = data.into();
        assert_eq!(jobs, vec![JobId::new("j1"), JobId::new("j2")]);
    }
}
