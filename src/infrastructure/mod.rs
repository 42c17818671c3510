// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`graphql`]: photo server access over GraphQL (implements [`RemoteDataPort`])
//!
//! [`RemoteDataPort`]: crate::application::port::RemoteDataPort

pub mod graphql;

pub use graphql::{GraphQlClient, GraphQlSettings};
