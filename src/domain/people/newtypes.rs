// SPDX-License-Identifier: MPL-2.0
//! People newtypes.
//!
//! Identifiers are opaque server strings; wrapping them keeps a group id from
//! being passed where a face id or a job id is expected.

use std::fmt;

// =============================================================================
// Identifiers
// =============================================================================

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            /// Wraps a raw server identifier.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the raw identifier.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id!(
    /// Identity of a face group.
    FaceGroupId
);

string_id!(
    /// Identity of a single detected face.
    FaceId
);

string_id!(
    /// Identity of a server-side job (e.g. a face recognition run).
    JobId
);

// =============================================================================
// Page Size
// =============================================================================

/// Page size bounds.
pub mod page_size_bounds {
    /// Smallest page the gallery requests.
    pub const MIN: u32 = 1;
    /// Largest page the gallery requests.
    pub const MAX: u32 = 500;
    /// Default page size of the people gallery.
    pub const DEFAULT: u32 = 50;
}

/// Number of face groups requested per page, guaranteed to be within 1–500.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(u32);

impl PageSize {
    /// Creates a page size, clamping the value to the valid range.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.clamp(page_size_bounds::MIN, page_size_bounds::MAX))
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the value as a `usize` for length comparisons.
    #[must_use]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(page_size_bounds::DEFAULT)
    }
}
