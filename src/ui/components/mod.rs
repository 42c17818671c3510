// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across multiple screens.
//!
//! # Components
//!
//! - [`error_display`] - Full-view error presentation with an optional
//!   action and expandable technical details

pub mod error_display;
