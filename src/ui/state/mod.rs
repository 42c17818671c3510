// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Plain state machines with no rendering dependency. The gallery screen
//! projects them into widgets and turns their requests into async tasks.

pub mod action_trigger;
pub mod label_editor;
pub mod pagination;
pub mod viewport;

// Re-export commonly used types for convenience
pub use action_trigger::ActionTrigger;
pub use label_editor::{CloseOutcome, LabelChange, LabelEditor};
pub use pagination::{IncrementalList, Keyed, PageOutcome, PageRequest};
pub use viewport::ViewportState;
