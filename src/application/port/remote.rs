// SPDX-License-Identifier: MPL-2.0
//! Remote data port definition.
//!
//! This module defines the [`RemoteDataPort`] trait: the named queries and
//! mutations the people gallery issues against the photo server.
//!
//! # Design Notes
//!
//! - Timeouts and retries belong to the implementation, not to callers
//! - Errors are `Clone` so they can be carried inside Iced messages
//! - Results are plain domain snapshots; callers decide how to merge them

use crate::domain::people::{FaceGroup, FaceGroupId, JobId};
use futures_util::future::BoxFuture;

// =============================================================================
// RemoteError
// =============================================================================

/// Errors that can occur while talking to the photo server.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemoteError {
    /// The request never produced a response (DNS, TLS, timeout, ...).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success HTTP status.
    #[error("server returned HTTP status {0}")]
    Status(u16),

    /// The server answered but reported errors for the operation.
    #[error("server rejected the operation: {0}")]
    GraphQl(String),

    /// The response could not be understood.
    #[error("unexpected response: {0}")]
    Decode(String),
}

// =============================================================================
// Results
// =============================================================================

/// Server-confirmed label of a face group after `setGroupLabel`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelUpdated {
    pub id: FaceGroupId,
    pub label: Option<String>,
}

/// Future returned by every port operation.
pub type PortFuture<T> = BoxFuture<'static, Result<T, RemoteError>>;

// =============================================================================
// RemoteDataPort
// =============================================================================

/// Query/mutation access to the photo server.
pub trait RemoteDataPort: Send + Sync {
    /// `myFaces(limit, offset)`: one page of the user's face groups, in
    /// server order.
    fn my_faces(&self, limit: u32, offset: u32) -> PortFuture<Vec<FaceGroup>>;

    /// `setGroupLabel(groupId, label)`: `None` removes the label.
    fn set_group_label(
        &self,
        group_id: FaceGroupId,
        label: Option<String>,
    ) -> PortFuture<LabelUpdated>;

    /// `recognizeUnlabeledFaces()`: starts server-side recognition jobs and
    /// returns their ids.
    fn recognize_unlabeled_faces(&self) -> PortFuture<Vec<JobId>>;

    /// Downloads the raw bytes of a thumbnail.
    fn fetch_thumbnail(&self, url: String) -> PortFuture<Vec<u8>>;
}
