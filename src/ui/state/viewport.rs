// SPDX-License-Identifier: MPL-2.0
//! Viewport state management
//!
//! Tracks the vertical scroll position of the gallery grid and decides when
//! the user is close enough to the end of the loaded content to fetch more.

use iced::widget::scrollable::AbsoluteOffset;
use iced::{Rectangle, Size};

/// Manages viewport and scroll state
#[derive(Debug, Clone)]
pub struct ViewportState {
    /// Current scroll offset
    pub offset: AbsoluteOffset,

    /// Current viewport bounds
    pub bounds: Option<Rectangle>,

    /// Size of the whole scrollable content
    pub content: Option<Size>,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            offset: AbsoluteOffset { x: 0.0, y: 0.0 },
            bounds: None,
            content: None,
        }
    }
}

impl ViewportState {
    /// Records a scroll event.
    pub fn update(&mut self, bounds: Rectangle, content: Size, offset: AbsoluteOffset) {
        self.offset = offset;
        self.bounds = Some(bounds);
        self.content = Some(content);
    }

    /// Distance in pixels between the bottom of the viewport and the end of
    /// the content. `None` until the first scroll event.
    #[must_use]
    pub fn remaining(&self) -> Option<f32> {
        let bounds = self.bounds?;
        let content = self.content?;
        Some((content.height - (self.offset.y + bounds.height)).max(0.0))
    }

    /// Whether the viewport is within `threshold` pixels of the content end.
    #[must_use]
    pub fn is_near_end(&self, threshold: f32) -> bool {
        self.remaining()
            .is_some_and(|remaining| remaining <= threshold)
    }

    /// Forgets the scroll position (after the list was reloaded).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
