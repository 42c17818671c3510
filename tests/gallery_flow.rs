// SPDX-License-Identifier: MPL-2.0
//! End-to-end gallery flows against an in-memory photo server.

use futures_util::future::FutureExt;
use image_rs::{DynamicImage, ImageBuffer, ImageFormat, Rgba};
use people_lens::app::effects::{self, SharedPort};
use people_lens::application::port::{LabelUpdated, PortFuture, RemoteDataPort, RemoteError};
use people_lens::domain::people::{
    FaceGroup, FaceGroupId, FaceId, FaceRectangle, FaceRef, JobId, MediaRef, PageSize, Thumbnail,
};
use people_lens::ui::notifications::{Notification, Severity};
use people_lens::ui::people::thumbnails::PreviewState;
use people_lens::ui::people::{Effect, Message, Settings, State};
use std::collections::VecDeque;
use std::io::Cursor;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    MyFaces { limit: u32, offset: u32 },
    SetLabel(FaceGroupId, Option<String>),
    Recognize,
    Thumbnail(String),
}

/// Photo server holding `total` face groups.
struct FakeRemote {
    groups: Mutex<Vec<FaceGroup>>,
    calls: Mutex<Vec<Call>>,
    fail_pages: Mutex<bool>,
    thumbnail: Vec<u8>,
}

impl FakeRemote {
    fn new(total: usize) -> Arc<Self> {
        Arc::new(Self {
            groups: Mutex::new((0..total).map(group).collect()),
            calls: Mutex::new(Vec::new()),
            fail_pages: Mutex::new(false),
            thumbnail: png(),
        })
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn count(&self, matches: impl Fn(&Call) -> bool) -> usize {
        self.calls().iter().filter(|call| matches(call)).count()
    }

    fn set_failing(&self, failing: bool) {
        *self.fail_pages.lock().unwrap() = failing;
    }
}

impl RemoteDataPort for FakeRemote {
    fn my_faces(&self, limit: u32, offset: u32) -> PortFuture<Vec<FaceGroup>> {
        self.record(Call::MyFaces { limit, offset });
        let result = if *self.fail_pages.lock().unwrap() {
            Err(RemoteError::Status(503))
        } else {
            Ok(self
                .groups
                .lock()
                .unwrap()
                .iter()
                .skip(offset as usize)
                .take(limit as usize)
                .cloned()
                .collect())
        };
        async move { result }.boxed()
    }

    fn set_group_label(
        &self,
        group_id: FaceGroupId,
        label: Option<String>,
    ) -> PortFuture<LabelUpdated> {
        self.record(Call::SetLabel(group_id.clone(), label.clone()));
        let mut groups = self.groups.lock().unwrap();
        let result = match groups.iter_mut().find(|g| g.id == group_id) {
            Some(group) => {
                group.label = label.clone();
                Ok(LabelUpdated {
                    id: group_id,
                    label,
                })
            }
            None => Err(RemoteError::GraphQl("face group not found".into())),
        };
        async move { result }.boxed()
    }

    fn recognize_unlabeled_faces(&self) -> PortFuture<Vec<JobId>> {
        self.record(Call::Recognize);
        async move { Ok(vec![JobId::new("job-1"), JobId::new("job-2")]) }.boxed()
    }

    fn fetch_thumbnail(&self, url: String) -> PortFuture<Vec<u8>> {
        self.record(Call::Thumbnail(url));
        let bytes = self.thumbnail.clone();
        async move { Ok(bytes) }.boxed()
    }
}

fn group(index: usize) -> FaceGroup {
    FaceGroup {
        id: FaceGroupId::new(format!("group-{index}")),
        label: None,
        image_face_count: 2,
        preview_faces: vec![FaceRef {
            id: FaceId::new(format!("face-{index}")),
            rectangle: FaceRectangle {
                min_x: 0.25,
                max_x: 0.75,
                min_y: 0.25,
                max_y: 0.75,
            },
            media: MediaRef {
                id: format!("media-{index}"),
                title: format!("IMG_{index:04}.jpg"),
                thumbnail: Some(Thumbnail {
                    url: format!("https://photos.example/thumb/{index}.png"),
                    width: 8,
                    height: 8,
                }),
            },
        }],
    }
}

fn png() -> Vec<u8> {
    let buffer = ImageBuffer::from_pixel(8, 8, Rgba([10, 200, 30, 255]));
    let mut bytes = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(buffer)
        .write_to(&mut bytes, ImageFormat::Png)
        .expect("encode png");
    bytes.into_inner()
}

/// Gallery wired to a fake server; runs every effect to completion.
struct Harness {
    state: State,
    remote: Arc<FakeRemote>,
    notifications: Vec<Notification>,
}

impl Harness {
    fn new(total: usize, page_size: u32) -> Self {
        Self {
            state: State::new(Settings {
                page_size: PageSize::new(page_size),
                ..Settings::default()
            }),
            remote: FakeRemote::new(total),
            notifications: Vec::new(),
        }
    }

    fn port(&self) -> SharedPort {
        Ok(self.remote.clone() as Arc<dyn RemoteDataPort>)
    }

    async fn mount(&mut self) {
        let effect = self.state.init();
        self.run(effect).await;
    }

    async fn send(&mut self, message: Message) {
        let (effect, _task) = self.state.handle_message(message);
        self.run(effect).await;
    }

    async fn run(&mut self, effect: Effect) {
        let mut pending = VecDeque::from([effect]);
        while let Some(effect) = pending.pop_front() {
            let replies = match effect {
                Effect::None => Vec::new(),
                Effect::FetchPage(request) => vec![effects::fetch_page(self.port(), request).await],
                Effect::SetLabel(change) => vec![effects::set_label(self.port(), change).await],
                Effect::Recognize => vec![effects::recognize_unlabeled(self.port()).await],
                Effect::FetchThumbnails(requests) => {
                    let mut replies = Vec::new();
                    for request in requests {
                        replies.push(effects::load_thumbnail(self.port(), request).await);
                    }
                    replies
                }
                Effect::Notify(notification) => {
                    self.notifications.push(notification);
                    Vec::new()
                }
            };
            for reply in replies {
                let (effect, _task) = self.state.handle_message(reply);
                pending.push_back(effect);
            }
        }
    }

    fn page_calls(&self) -> usize {
        self.remote
            .count(|call| matches!(call, Call::MyFaces { .. }))
    }

    fn label(&self, index: usize) -> Option<String> {
        let id = FaceGroupId::new(format!("group-{index}"));
        self.state
            .groups()
            .items()
            .iter()
            .find(|g| g.id == id)
            .and_then(|g| g.label.clone())
    }
}

fn group_id(index: usize) -> FaceGroupId {
    FaceGroupId::new(format!("group-{index}"))
}

#[tokio::test]
async fn scrolling_loads_second_short_page_then_stops() {
    let mut harness = Harness::new(80, 50);
    harness.mount().await;
    assert_eq!(harness.state.groups().len(), 50);

    harness.send(Message::LoadMore).await;
    assert_eq!(harness.state.groups().len(), 80);
    assert!(harness.state.groups().is_exhausted());

    harness.send(Message::LoadMore).await;
    harness.send(Message::LoadMore).await;

    let pages: Vec<_> = harness
        .remote
        .calls()
        .into_iter()
        .filter(|call| matches!(call, Call::MyFaces { .. }))
        .collect();
    assert_eq!(
        pages,
        [
            Call::MyFaces {
                limit: 50,
                offset: 0
            },
            Call::MyFaces {
                limit: 50,
                offset: 50
            },
        ]
    );

    let ids: Vec<_> = harness
        .state
        .groups()
        .items()
        .iter()
        .map(|g| g.id.clone())
        .collect();
    let expected: Vec<_> = (0..80).map(group_id).collect();
    assert_eq!(ids, expected);
}

#[tokio::test]
async fn duplicate_proximity_signals_issue_one_request() {
    let mut harness = Harness::new(200, 50);
    harness.mount().await;

    let (first, _) = harness.state.handle_message(Message::LoadMore);
    let (second, _) = harness.state.handle_message(Message::LoadMore);
    assert!(matches!(first, Effect::FetchPage(_)));
    assert!(matches!(second, Effect::None));

    harness.run(first).await;
    assert_eq!(harness.page_calls(), 2);
    assert_eq!(harness.state.groups().len(), 100);
}

#[tokio::test]
async fn commit_label_round_trips_through_server() {
    let mut harness = Harness::new(3, 50);
    harness.mount().await;

    harness.send(Message::EditLabel(group_id(1))).await;
    harness
        .send(Message::LabelInput(group_id(1), "Alice".into()))
        .await;
    harness.send(Message::SubmitLabel(group_id(1))).await;

    assert_eq!(
        harness
            .remote
            .count(|call| matches!(call, Call::SetLabel(..))),
        1
    );
    assert!(harness
        .remote
        .calls()
        .contains(&Call::SetLabel(group_id(1), Some("Alice".into()))));
    assert_eq!(harness.label(1).as_deref(), Some("Alice"));
    assert!(harness.state.editor(&group_id(1)).is_none());
}

#[tokio::test]
async fn clearing_a_label_sends_none() {
    let mut harness = Harness::new(3, 50);
    harness.mount().await;
    harness.send(Message::EditLabel(group_id(0))).await;
    harness
        .send(Message::LabelInput(group_id(0), "Bob".into()))
        .await;
    harness.send(Message::SubmitLabel(group_id(0))).await;

    harness.send(Message::EditLabel(group_id(0))).await;
    harness
        .send(Message::LabelInput(group_id(0), String::new()))
        .await;
    harness.send(Message::SubmitLabel(group_id(0))).await;

    assert!(harness
        .remote
        .calls()
        .contains(&Call::SetLabel(group_id(0), None)));
    assert_eq!(harness.label(0), None);
}

#[tokio::test]
async fn escape_discards_draft_without_server_call() {
    let mut harness = Harness::new(3, 50);
    harness.mount().await;

    harness.send(Message::EditLabel(group_id(2))).await;
    harness
        .send(Message::LabelInput(group_id(2), "Mallory".into()))
        .await;
    harness.send(Message::CancelEdit).await;

    assert_eq!(
        harness
            .remote
            .count(|call| matches!(call, Call::SetLabel(..))),
        0
    );
    assert_eq!(harness.label(2), None);
}

#[tokio::test]
async fn label_update_for_unknown_group_reports_error() {
    let mut harness = Harness::new(2, 50);
    harness.mount().await;
    harness.remote.groups.lock().unwrap().clear();

    harness.send(Message::EditLabel(group_id(0))).await;
    harness
        .send(Message::LabelInput(group_id(0), "Trent".into()))
        .await;
    harness.send(Message::SubmitLabel(group_id(0))).await;

    assert_eq!(harness.label(0), None);
    assert!(harness
        .notifications
        .iter()
        .any(|n| n.severity() == Severity::Error));
}

#[tokio::test]
async fn recognize_is_single_flight_and_reports_jobs() {
    let mut harness = Harness::new(3, 50);
    harness.mount().await;

    let (first, _) = harness.state.handle_message(Message::RecognizeUnlabeled);
    let (second, _) = harness.state.handle_message(Message::RecognizeUnlabeled);
    assert!(matches!(second, Effect::None));
    harness.run(first).await;

    assert_eq!(
        harness
            .remote
            .count(|call| matches!(call, Call::Recognize)),
        1
    );
    assert!(!harness.state.is_recognizing());
    let last = harness.notifications.last().expect("notification");
    assert_eq!(last.severity(), Severity::Success);
    assert_eq!(last.message(), "Started 2 face recognition jobs");
}

#[tokio::test]
async fn initial_failure_is_recovered_by_reload() {
    let mut harness = Harness::new(10, 50);
    harness.remote.set_failing(true);
    harness.mount().await;
    assert!(harness.state.groups().initial_load_failed());
    assert!(harness.state.groups().is_empty());

    harness.remote.set_failing(false);
    harness.send(Message::Reload).await;
    assert!(!harness.state.groups().initial_load_failed());
    assert_eq!(harness.state.groups().len(), 10);
}

#[tokio::test]
async fn pagination_failure_keeps_loaded_groups() {
    let mut harness = Harness::new(120, 50);
    harness.mount().await;

    harness.remote.set_failing(true);
    harness.send(Message::LoadMore).await;
    assert_eq!(harness.state.groups().len(), 50);
    assert!(harness.state.groups().error().is_some());

    harness.send(Message::LoadMore).await;
    assert_eq!(harness.page_calls(), 2);

    harness.remote.set_failing(false);
    harness.send(Message::RetryPage).await;
    assert_eq!(harness.state.groups().len(), 100);
    assert!(harness.state.groups().error().is_none());
}

#[tokio::test]
async fn preview_faces_are_downloaded_once() {
    let mut harness = Harness::new(3, 50);
    harness.mount().await;

    for index in 0..3 {
        let face = FaceId::new(format!("face-{index}"));
        assert!(matches!(
            harness.state.thumbnails().state(&face),
            PreviewState::Ready(_)
        ));
    }
    assert_eq!(
        harness
            .remote
            .count(|call| matches!(call, Call::Thumbnail(_))),
        3
    );
}

#[tokio::test]
async fn missing_client_fails_every_operation() {
    let mut state = State::new(Settings::default());
    let Effect::FetchPage(request) = state.init() else {
        panic!("expected first page request");
    };

    let reply = effects::fetch_page(people_lens::app::disconnected(), request).await;
    state.handle_message(reply);
    assert!(state.groups().initial_load_failed());
}
