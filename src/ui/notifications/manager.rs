// SPDX-License-Identifier: MPL-2.0
//! Toast queue for the gallery.
//!
//! Toasts are kept in arrival order. Only the oldest [`MAX_VISIBLE`] are on
//! screen; the rest wait until one of them is dismissed.

use super::notification::{Notification, NotificationId, Severity};
use std::collections::VecDeque;

/// Maximum number of toasts on screen at once.
const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    /// Close button of a toast.
    Dismiss(NotificationId),
}

#[derive(Debug, Default)]
pub struct Manager {
    toasts: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a toast behind the ones already waiting. Warnings and errors are
    /// logged as well, since an error toast may be dismissed unread.
    pub fn push(&mut self, notification: Notification) {
        match notification.severity() {
            Severity::Warning => tracing::warn!(message = notification.message(), "toast"),
            Severity::Error => tracing::error!(message = notification.message(), "toast"),
            Severity::Success | Severity::Info => {
                tracing::debug!(message = notification.message(), "toast");
            }
        }
        self.toasts.push_back(notification);
    }

    /// Removes a toast. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id() != id);
        self.toasts.len() != before
    }

    /// Drops on-screen toasts whose display time ran out. Waiting toasts
    /// are left alone until they are shown.
    pub fn tick(&mut self) {
        let expired: Vec<NotificationId> = self
            .visible()
            .filter(|toast| toast.should_auto_dismiss())
            .map(Notification::id)
            .collect();
        for id in expired {
            self.dismiss(id);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.toasts.iter().take(MAX_VISIBLE)
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.toasts.len().min(MAX_VISIBLE)
    }

    /// Whether the tick subscription is needed.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn only_three_toasts_are_shown_at_once() {
        let mut manager = Manager::new();
        for i in 0..=MAX_VISIBLE {
            manager.push(Notification::error(format!("error-{i}")));
        }

        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        let shown: Vec<_> = manager.visible().map(Notification::message).collect();
        assert_eq!(shown, ["error-0", "error-1", "error-2"]);
    }

    #[test]
    fn dismiss_reveals_waiting_toast() {
        let mut manager = Manager::new();
        let first = Notification::error("first");
        let first_id = first.id();
        manager.push(first);
        for i in 1..=MAX_VISIBLE {
            manager.push(Notification::error(format!("error-{i}")));
        }

        manager.handle_message(&Message::Dismiss(first_id));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert!(manager
            .visible()
            .any(|toast| toast.message() == "error-3"));
    }

    #[test]
    fn dismiss_unknown_returns_false() {
        let mut manager = Manager::new();
        let stray = Notification::success("never pushed").id();
        assert!(!manager.dismiss(stray));
    }

    #[test]
    fn tick_keeps_errors_and_drops_expired() {
        let mut manager = Manager::new();
        manager.push(Notification::error("page fetch failed"));
        manager.push(Notification::info("done").auto_dismiss(Duration::ZERO));

        manager.tick();
        assert_eq!(manager.visible_count(), 1);
        assert_eq!(
            manager.visible().next().map(Notification::message),
            Some("page fetch failed")
        );
    }

    #[test]
    fn tick_ignores_waiting_toasts() {
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE {
            manager.push(Notification::error(format!("error-{i}")));
        }
        manager.push(Notification::info("later").auto_dismiss(Duration::ZERO));

        manager.tick();
        assert!(manager.has_notifications());
        let first = manager.visible().next().map(Notification::id);
        if let Some(id) = first {
            manager.dismiss(id);
        }
        assert!(manager.visible().any(|toast| toast.message() == "later"));
    }
}
