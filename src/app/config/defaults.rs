// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Server**: endpoint and request timeout
//! - **Gallery**: paging and scroll threshold
//! - **Thumbnails**: preview cache size
//! - **Logging**: fallback log filter

pub use crate::domain::people::newtypes::page_size_bounds::{
    DEFAULT as DEFAULT_PAGE_SIZE, MAX as MAX_PAGE_SIZE, MIN as MIN_PAGE_SIZE,
};

// ==========================================================================
// Server Defaults
// ==========================================================================

/// GraphQL endpoint used when neither config, CLI nor environment set one.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:4001/api/graphql";

/// Default request timeout (in seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Minimum request timeout (in seconds).
pub const MIN_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout (in seconds).
pub const MAX_TIMEOUT_SECS: u64 = 300;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Distance to the end of the grid (in pixels) below which the next page is
/// requested.
pub const DEFAULT_LOAD_THRESHOLD_PX: f32 = 400.0;

/// Largest accepted scroll threshold (in pixels).
pub const MAX_LOAD_THRESHOLD_PX: f32 = 10_000.0;

// ==========================================================================
// Thumbnail Defaults
// ==========================================================================

/// Number of decoded face previews kept in memory.
pub const DEFAULT_THUMBNAIL_CACHE_SIZE: usize = 256;

/// Smallest thumbnail cache (must hold at least one screen of faces).
pub const MIN_THUMBNAIL_CACHE_SIZE: usize = 16;

/// Largest thumbnail cache.
pub const MAX_THUMBNAIL_CACHE_SIZE: usize = 4096;

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Log filter used when neither `RUST_LOG` nor the config set one.
pub const DEFAULT_LOG_FILTER: &str = "people_lens=info";
