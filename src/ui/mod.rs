// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`people`] - Face group gallery with inline labels and paging
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Reusable state machines (paged list, label editor, action trigger, viewport)
//! - [`components`] - Reusable UI components (error display)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod components;
pub mod design_tokens;
pub mod notifications;
pub mod people;
pub mod state;
pub mod styles;
pub mod theming;
