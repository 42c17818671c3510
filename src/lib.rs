// SPDX-License-Identifier: MPL-2.0
//! `people_lens` is a people gallery for a self-hosted photo server, built
//! with the Iced GUI framework.
//!
//! It lists the face groups detected by the server, pages through them as
//! the user scrolls, lets the user name each group inline and asks the
//! server to recognize faces that are not labeled yet.
//!
//! # Layers
//!
//! - [`domain`] - framework-free value types (face groups, ids, page size)
//! - [`application`] - the [`application::port::RemoteDataPort`] trait
//! - [`infrastructure`] - the GraphQL implementation of that port
//! - [`ui`] - state machines, the gallery component and its widgets
//! - [`app`] - the Iced application root, config and logging

#![doc(html_root_url = "https://docs.rs/people_lens/0.1.0")]

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
