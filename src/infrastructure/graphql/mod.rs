// SPDX-License-Identifier: MPL-2.0
//! GraphQL adapter for the photo server.
//!
//! Implements [`RemoteDataPort`](crate::application::port::RemoteDataPort)
//! by POSTing `{ query, operationName, variables }` documents with `reqwest`
//! and decoding the standard `{ data, errors }` envelope with `serde_json`.
//!
//! # Error mapping
//!
//! - no response (connection, TLS, timeout) → `RemoteError::Transport`
//! - non-2xx status → `RemoteError::Status`
//! - non-empty `errors` array → `RemoteError::GraphQl`
//! - unparseable body or missing `data` → `RemoteError::Decode`

mod client;
mod queries;
mod response;

pub use client::{GraphQlClient, GraphQlSettings};
