// SPDX-License-Identifier: MPL-2.0
//! People gallery component encapsulating state and update logic.

use super::thumbnails::{FacePreview, ThumbnailCache, ThumbnailRequest};
use crate::app::config::{self, GalleryConfig};
use crate::application::port::{LabelUpdated, RemoteError};
use crate::domain::people::{FaceGroup, FaceGroupId, FaceId, JobId, PageSize};
use crate::ui::notifications::Notification;
use crate::ui::state::{
    ActionTrigger, CloseOutcome, IncrementalList, LabelChange, LabelEditor, PageOutcome,
    PageRequest, ViewportState,
};
use iced::widget::scrollable::{AbsoluteOffset, RelativeOffset};
use iced::widget::{operation, Id};
use iced::{Rectangle, Size, Task};
use std::collections::{HashMap, HashSet};

/// Identifier used for the gallery scrollable widget.
pub const GALLERY_SCROLLABLE_ID: &str = "people-gallery-scrollable";

/// Identifier of the label input of the focused editor. Only one editor has
/// focus at a time, so a single id is enough.
pub const LABEL_INPUT_ID: &str = "people-label-input";

/// Gallery tuning taken from the `[gallery]` config section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub page_size: PageSize,
    /// Remaining scroll distance (pixels) below which the next page loads.
    pub load_threshold: f32,
    pub thumbnail_cache_size: usize,
}

impl From<&GalleryConfig> for Settings {
    fn from(config: &GalleryConfig) -> Self {
        Self {
            page_size: config.page_size(),
            load_threshold: config.load_threshold(),
            thumbnail_cache_size: config.thumbnail_cache_size(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_size: PageSize::default(),
            load_threshold: config::DEFAULT_LOAD_THRESHOLD_PX,
            thumbnail_cache_size: config::DEFAULT_THUMBNAIL_CACHE_SIZE,
        }
    }
}

/// Messages emitted by the gallery widgets and by completed remote calls.
#[derive(Debug, Clone)]
pub enum Message {
    PageLoaded {
        request: PageRequest,
        result: Result<Vec<FaceGroup>, RemoteError>,
    },
    Scrolled {
        bounds: Rectangle,
        content: Size,
        offset: AbsoluteOffset,
    },
    /// Explicit "Load more" button on the sentinel.
    LoadMore,
    /// Retry after a pagination failure.
    RetryPage,
    /// Start over from the first page.
    Reload,
    ToggleErrorDetails,
    EditLabel(FaceGroupId),
    LabelInput(FaceGroupId, String),
    SubmitLabel(FaceGroupId),
    /// Escape pressed: cancels the focused editor.
    CancelEdit,
    LabelUpdated {
        group_id: FaceGroupId,
        result: Result<LabelUpdated, RemoteError>,
    },
    RecognizeUnlabeled,
    RecognizeFinished(Result<Vec<JobId>, RemoteError>),
    ThumbnailLoaded {
        face_id: FaceId,
        result: Result<FacePreview, String>,
    },
}

/// Side effects the application should perform after handling a gallery
/// message.
#[derive(Debug, Clone)]
pub enum Effect {
    None,
    FetchPage(PageRequest),
    SetLabel(LabelChange),
    Recognize,
    FetchThumbnails(Vec<ThumbnailRequest>),
    Notify(Notification),
}

/// Complete gallery state.
#[derive(Debug)]
pub struct State {
    groups: IncrementalList<FaceGroup>,
    editors: HashMap<FaceGroupId, LabelEditor>,
    /// Groups with a label update awaiting its result. Survives Reload, so
    /// a group never has two updates in flight.
    labels_in_flight: HashSet<FaceGroupId>,
    focused: Option<FaceGroupId>,
    recognize: ActionTrigger,
    viewport: ViewportState,
    thumbnails: ThumbnailCache,
    settings: Settings,
    show_error_details: bool,
}

impl State {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            groups: IncrementalList::new(),
            editors: HashMap::new(),
            labels_in_flight: HashSet::new(),
            focused: None,
            recognize: ActionTrigger::new(),
            viewport: ViewportState::default(),
            thumbnails: ThumbnailCache::new(settings.thumbnail_cache_size),
            settings,
            show_error_details: false,
        }
    }

    /// Requests the first page. Called once on mount.
    pub fn init(&mut self) -> Effect {
        Effect::FetchPage(self.groups.initialize(self.settings.page_size.value()))
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::PageLoaded { request, result } => {
                (self.on_page_loaded(request, result), Task::none())
            }
            Message::Scrolled {
                bounds,
                content,
                offset,
            } => {
                self.viewport.update(bounds, content, offset);
                if self.viewport.is_near_end(self.settings.load_threshold) {
                    (self.fetch_next_page(), Task::none())
                } else {
                    (Effect::None, Task::none())
                }
            }
            Message::LoadMore => (self.fetch_next_page(), Task::none()),
            Message::RetryPage => {
                let effect = self
                    .groups
                    .retry()
                    .map_or(Effect::None, Effect::FetchPage);
                (effect, Task::none())
            }
            Message::Reload => {
                tracing::info!("reloading people gallery");
                self.editors.clear();
                self.focused = None;
                self.thumbnails.clear();
                self.viewport.reset();
                self.show_error_details = false;
                let scroll_top = operation::snap_to(
                    Id::new(GALLERY_SCROLLABLE_ID),
                    RelativeOffset { x: 0.0, y: 0.0 },
                );
                (self.init(), scroll_top)
            }
            Message::ToggleErrorDetails => {
                self.show_error_details = !self.show_error_details;
                (Effect::None, Task::none())
            }
            Message::EditLabel(group_id) => self.on_edit_label(group_id),
            Message::LabelInput(group_id, text) => {
                if let Some(editor) = self.editors.get_mut(&group_id) {
                    editor.input(text);
                }
                (Effect::None, Task::none())
            }
            Message::SubmitLabel(group_id) => (self.on_submit_label(&group_id), Task::none()),
            Message::CancelEdit => {
                if let Some(group_id) = self.focused.clone() {
                    if let Some(editor) = self.editors.get_mut(&group_id) {
                        if editor.cancel() == CloseOutcome::Closed {
                            self.editors.remove(&group_id);
                            self.focused = None;
                        }
                    }
                }
                (Effect::None, Task::none())
            }
            Message::LabelUpdated { group_id, result } => {
                (self.on_label_updated(group_id, result), Task::none())
            }
            Message::RecognizeUnlabeled => {
                let effect = if self.recognize.activate() {
                    tracing::info!("requesting recognition of unlabeled faces");
                    Effect::Recognize
                } else {
                    Effect::None
                };
                (effect, Task::none())
            }
            Message::RecognizeFinished(result) => {
                let effect = match &result {
                    Ok(jobs) => {
                        tracing::info!(jobs = jobs.len(), "recognition started");
                        Effect::Notify(Notification::success(recognition_summary(jobs.len())))
                    }
                    Err(error) => {
                        tracing::warn!(%error, "recognition request failed");
                        Effect::Notify(Notification::error(format!(
                            "Could not start face recognition: {error}"
                        )))
                    }
                };
                self.recognize.settle(result.map_err(|e| e.to_string()));
                (effect, Task::none())
            }
            Message::ThumbnailLoaded { face_id, result } => {
                match result {
                    Ok(preview) => {
                        if !self.thumbnails.insert(face_id.clone(), preview) {
                            tracing::trace!(face = %face_id, "dropping stale thumbnail");
                        }
                    }
                    Err(error) => {
                        tracing::warn!(face = %face_id, %error, "face thumbnail unavailable");
                        self.thumbnails.mark_failed(face_id);
                    }
                }
                (Effect::None, Task::none())
            }
        }
    }

    fn fetch_next_page(&mut self) -> Effect {
        self.groups
            .on_approaching_end()
            .map_or(Effect::None, Effect::FetchPage)
    }

    fn on_page_loaded(
        &mut self,
        request: PageRequest,
        result: Result<Vec<FaceGroup>, RemoteError>,
    ) -> Effect {
        match self
            .groups
            .apply_page(request, result.map_err(|e| e.to_string()))
        {
            PageOutcome::Appended { appended, .. } => {
                tracing::info!(
                    offset = request.offset,
                    appended,
                    total = self.groups.len(),
                    "people page loaded"
                );
                let new_groups = &self.groups.items()[self.groups.len() - appended..];
                let requests: Vec<_> = new_groups
                    .iter()
                    .filter_map(thumbnail_request)
                    .filter_map(|request| self.thumbnails.claim(request))
                    .collect();
                if requests.is_empty() {
                    Effect::None
                } else {
                    Effect::FetchThumbnails(requests)
                }
            }
            PageOutcome::Failed | PageOutcome::Stale => Effect::None,
        }
    }

    fn on_edit_label(&mut self, group_id: FaceGroupId) -> (Effect, Task<Message>) {
        let Some(group) = self.groups.items().iter().find(|g| g.id == group_id) else {
            tracing::debug!(group = %group_id, "edit requested for unknown group");
            return (Effect::None, Task::none());
        };
        let server_label = group.label.clone();
        if self.labels_in_flight.contains(&group_id) && !self.editors.contains_key(&group_id) {
            tracing::debug!(group = %group_id, "label update still pending, not reopening editor");
            return (Effect::None, Task::none());
        }

        // Focus moves to this editor: every other open editor loses it
        self.editors.retain(|id, editor| {
            id == &group_id || editor.blur() == CloseOutcome::Pending
        });

        self.editors
            .entry(group_id.clone())
            .or_insert_with(|| LabelEditor::open(group_id.clone(), server_label.as_deref()));
        self.focused = Some(group_id);

        (Effect::None, operation::focus(Id::new(LABEL_INPUT_ID)))
    }

    fn on_submit_label(&mut self, group_id: &FaceGroupId) -> Effect {
        if self.labels_in_flight.contains(group_id) {
            tracing::debug!(group = %group_id, "ignoring commit while label update is in flight");
            return Effect::None;
        }
        let Some(change) = self.editors.get_mut(group_id).and_then(LabelEditor::commit) else {
            return Effect::None;
        };
        tracing::info!(group = %change.group_id, labeled = change.label.is_some(), "updating label");
        self.labels_in_flight.insert(change.group_id.clone());
        Effect::SetLabel(change)
    }

    fn on_label_updated(
        &mut self,
        group_id: FaceGroupId,
        result: Result<LabelUpdated, RemoteError>,
    ) -> Effect {
        if !self.labels_in_flight.remove(&group_id) {
            tracing::debug!(group = %group_id, "ignoring label result without a pending update");
            return Effect::None;
        }
        // Only the editor that issued the update closes on its result
        let issued_here = self
            .editors
            .get(&group_id)
            .is_some_and(LabelEditor::is_in_flight);
        if issued_here {
            if let Some(mut editor) = self.editors.remove(&group_id) {
                editor.settle();
            }
            if self.focused.as_ref() == Some(&group_id) {
                self.focused = None;
            }
        }

        match result {
            Ok(updated) => {
                let applied = self.groups.update_item(&updated.id, |group| {
                    group.label = updated.label.clone();
                });
                if applied {
                    tracing::info!(group = %updated.id, "label updated");
                } else {
                    tracing::debug!(group = %updated.id, "label update for a group no longer loaded");
                }
                Effect::None
            }
            Err(error) => {
                tracing::warn!(group = %group_id, %error, "label update failed");
                Effect::Notify(Notification::error(format!("Could not rename person: {error}")))
            }
        }
    }

    /// Loaded face groups in server order.
    #[must_use]
    pub fn groups(&self) -> &IncrementalList<FaceGroup> {
        &self.groups
    }

    /// The open editor of a group, if it is in edit mode.
    #[must_use]
    pub fn editor(&self, group_id: &FaceGroupId) -> Option<&LabelEditor> {
        self.editors.get(group_id)
    }

    #[must_use]
    pub fn focused(&self) -> Option<&FaceGroupId> {
        self.focused.as_ref()
    }

    #[must_use]
    pub fn is_recognizing(&self) -> bool {
        self.recognize.is_busy()
    }

    /// Error of the last recognition request, until the next attempt.
    #[must_use]
    pub fn recognize_error(&self) -> Option<&str> {
        self.recognize.last_error()
    }

    #[must_use]
    pub fn thumbnails(&self) -> &ThumbnailCache {
        &self.thumbnails
    }

    #[must_use]
    pub fn show_error_details(&self) -> bool {
        self.show_error_details
    }
}

fn thumbnail_request(group: &FaceGroup) -> Option<ThumbnailRequest> {
    let face = group.preview_face()?;
    let thumbnail = face.media.thumbnail.as_ref()?;
    Some(ThumbnailRequest {
        face_id: face.id.clone(),
        url: thumbnail.url.clone(),
        rectangle: face.rectangle,
    })
}

fn recognition_summary(jobs: usize) -> String {
    match jobs {
        0 => "Face recognition is already up to date".to_string(),
        1 => "Started 1 face recognition job".to_string(),
        n => format!("Started {n} face recognition jobs"),
    }
}
