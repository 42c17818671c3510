// SPDX-License-Identifier: MPL-2.0
//! GraphQL documents sent to the photo server.

pub const MY_FACES_OPERATION: &str = "myFaces";

pub const MY_FACES_QUERY: &str = r"
query myFaces($limit: Int, $offset: Int) {
  myFaceGroups(paginate: { limit: $limit, offset: $offset }) {
    id
    label
    imageFaceCount
    imageFaces(paginate: { limit: 1 }) {
      id
      rectangle {
        minX
        maxX
        minY
        maxY
      }
      media {
        id
        title
        thumbnail {
          url
          width
          height
        }
      }
    }
  }
}
";

pub const SET_GROUP_LABEL_OPERATION: &str = "setGroupLabel";

pub const SET_GROUP_LABEL_MUTATION: &str = r"
mutation setGroupLabel($groupID: ID!, $label: String) {
  setFaceGroupLabel(faceGroupID: $groupID, label: $label) {
    id
    label
  }
}
";

pub const RECOGNIZE_UNLABELED_OPERATION: &str = "recognizeUnlabeledFaces";

pub const RECOGNIZE_UNLABELED_MUTATION: &str = r"
mutation recognizeUnlabeledFaces {
  recognizeUnlabeledFaces {
    id
  }
}
";
