// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`remote`]: Query/mutation access to the photo server
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no HTTP types)
//! - Traits are `Send + Sync` so one adapter can be shared behind an `Arc`
//! - Methods return `'static` boxed futures; callers wrap them in Iced's
//!   `Task::perform`, so the UI thread is never blocked

pub mod remote;

// Re-export main types for convenience
pub use remote::{LabelUpdated, PortFuture, RemoteDataPort, RemoteError};
