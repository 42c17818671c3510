// SPDX-License-Identifier: MPL-2.0
//! Inline label editor state.
//!
//! A [`LabelEditor`] exists only while a face group's label is in edit mode.
//! Closing the editor (cancel, blur, or a settled commit) drops it, so the
//! next activation always starts from the server-confirmed label.
//!
//! While a commit is in flight the editor is read-only: typing, cancel and
//! blur are absorbed and a second commit is ignored. Settlement closes the
//! editor whatever the outcome.

use crate::domain::people::FaceGroupId;

/// Label update the caller must send to the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelChange {
    pub group_id: FaceGroupId,
    /// `None` removes the label.
    pub label: Option<String>,
}

/// Result of a request to leave edit mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// The editor closed; the draft was discarded.
    Closed,
    /// A commit is in flight; the editor stays open until it settles.
    Pending,
}

/// Draft state of one open label editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelEditor {
    group_id: FaceGroupId,
    draft: String,
    in_flight: bool,
}

impl LabelEditor {
    /// Enters edit mode with the draft initialized to the server label.
    #[must_use]
    pub fn open(group_id: FaceGroupId, server_label: Option<&str>) -> Self {
        Self {
            group_id,
            draft: server_label.unwrap_or_default().to_string(),
            in_flight: false,
        }
    }

    /// Replaces the draft with the current input text.
    pub fn input(&mut self, text: String) {
        if self.in_flight {
            tracing::debug!(group = %self.group_id, "ignoring input while label update is in flight");
            return;
        }
        self.draft = text;
    }

    /// Discards the draft (escape key). No network call.
    pub fn cancel(&mut self) -> CloseOutcome {
        self.close("cancel")
    }

    /// Focus moved elsewhere: discards the draft. No network call.
    pub fn blur(&mut self) -> CloseOutcome {
        self.close("blur")
    }

    fn close(&mut self, reason: &str) -> CloseOutcome {
        if self.in_flight {
            tracing::debug!(group = %self.group_id, reason, "close deferred until label update settles");
            return CloseOutcome::Pending;
        }
        CloseOutcome::Closed
    }

    /// Starts a label update with the current draft, sent as typed. Only
    /// the empty draft is special: it removes the label.
    ///
    /// Returns `None` if an update for this group is already in flight.
    pub fn commit(&mut self) -> Option<LabelChange> {
        if self.in_flight {
            tracing::debug!(group = %self.group_id, "ignoring commit while label update is in flight");
            return None;
        }
        self.in_flight = true;

        let label = (!self.draft.is_empty()).then(|| self.draft.clone());
        Some(LabelChange {
            group_id: self.group_id.clone(),
            label,
        })
    }

    /// The label update settled. The editor must now be closed by the owner.
    pub fn settle(&mut self) {
        self.in_flight = false;
    }

    #[must_use]
    pub fn group_id(&self) -> &FaceGroupId {
        &self.group_id
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// The input control is disabled while an update is in flight.
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.in_flight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor(label: Option<&str>) -> LabelEditor {
        LabelEditor::open(FaceGroupId::new("g1"), label)
    }

    #[test]
    fn open_initializes_draft_from_server_label() {
        assert_eq!(editor(Some("Bob")).draft(), "Bob");
        assert_eq!(editor(None).draft(), "");
    }

    #[test]
    fn cancel_closes_without_change() {
        let mut editor = editor(Some("Bob"));
        editor.input("Robert".into());
        assert_eq!(editor.cancel(), CloseOutcome::Closed);
        assert!(!editor.is_in_flight());
    }

    #[test]
    fn commit_issues_draft_label() {
        let mut editor = editor(None);
        editor.input("Alice".into());
        let change = editor.commit().expect("change");
        assert_eq!(change.group_id, FaceGroupId::new("g1"));
        assert_eq!(change.label.as_deref(), Some("Alice"));
        assert!(editor.is_read_only());
    }

    #[test]
    fn empty_draft_commits_none() {
        let mut editor = editor(Some("Bob"));
        editor.input(String::new());
        assert_eq!(editor.commit().and_then(|c| c.label), None);

    }

    #[test]
    fn surrounding_whitespace_is_sent_unchanged() {
        let mut padded = LabelEditor::open(FaceGroupId::new("g2"), None);
        padded.input(" Alice ".into());
        assert_eq!(
            padded.commit().and_then(|c| c.label).as_deref(),
            Some(" Alice ")
        );

        let mut blank = LabelEditor::open(FaceGroupId::new("g3"), None);
        blank.input("   ".into());
        assert_eq!(
            blank.commit().and_then(|c| c.label).as_deref(),
            Some("   ")
        );
    }

    #[test]
    fn second_commit_while_in_flight_is_ignored() {
        let mut editor = editor(None);
        editor.input("Alice".into());
        assert!(editor.commit().is_some());
        assert!(editor.commit().is_none());
    }

    #[test]
    fn in_flight_absorbs_input_cancel_and_blur() {
        let mut editor = editor(None);
        editor.input("Alice".into());
        editor.commit();

        editor.input("Alicia".into());
        assert_eq!(editor.draft(), "Alice");
        assert_eq!(editor.cancel(), CloseOutcome::Pending);
        assert_eq!(editor.blur(), CloseOutcome::Pending);
    }

    #[test]
    fn settle_clears_in_flight() {
        let mut editor = editor(None);
        editor.input("Alice".into());
        editor.commit();
        editor.settle();
        assert!(!editor.is_read_only());
        assert_eq!(editor.blur(), CloseOutcome::Closed);
    }
}
