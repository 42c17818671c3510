// SPDX-License-Identifier: MPL-2.0
//! One-shot action with an in-flight guard.

/// Tracks a single remote action that must not run twice concurrently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionTrigger {
    busy: bool,
    last_error: Option<String>,
}

impl ActionTrigger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the action as started.
    ///
    /// Returns `false` (and changes nothing) if it is already in flight; the
    /// caller must only issue the request when this returns `true`.
    pub fn activate(&mut self) -> bool {
        if self.busy {
            tracing::debug!("action already in flight");
            return false;
        }
        self.busy = true;
        self.last_error = None;
        true
    }

    /// The action settled. A failure is kept until the next activation.
    pub fn settle<T>(&mut self, result: Result<T, String>) {
        self.busy = false;
        if let Err(message) = result {
            self.last_error = Some(message);
        }
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_activation_while_busy_is_ignored() {
        let mut trigger = ActionTrigger::new();
        assert!(trigger.activate());
        assert!(!trigger.activate());
        assert!(trigger.is_busy());
    }

    #[test]
    fn failure_is_surfaced_and_does_not_block() {
        let mut trigger = ActionTrigger::new();
        trigger.activate();
        trigger.settle::<()>(Err("no permission".into()));

        assert!(!trigger.is_busy());
        assert_eq!(trigger.last_error(), Some("no permission"));

        assert!(trigger.activate());
        assert!(trigger.last_error().is_none());
    }

    #[test]
    fn success_clears_busy() {
        let mut trigger = ActionTrigger::new();
        trigger.activate();
        trigger.settle(Ok(3_usize));
        assert!(!trigger.is_busy());
        assert!(trigger.last_error().is_none());
    }
}
