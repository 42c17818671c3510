// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Gallery messages go through the component first; the [`people::Effect`]
//! it returns is then translated here into remote tasks or notifications.

use super::effects::{self, SharedPort};
use super::Message;
use crate::ui::notifications;
use crate::ui::people;
use iced::Task;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub gallery: &'a mut people::State,
    pub notifications: &'a mut notifications::Manager,
    pub port: &'a SharedPort,
}

/// Handles gallery component messages.
pub fn handle_people_message(
    ctx: &mut UpdateContext<'_>,
    message: people::Message,
) -> Task<Message> {
    let (effect, task) = ctx.gallery.handle_message(message);
    let gallery_task = task.map(Message::People);
    let side_effect = run_effect(ctx, effect);
    Task::batch([gallery_task, side_effect])
}

/// Translates a gallery effect into the task that performs it.
pub fn run_effect(ctx: &mut UpdateContext<'_>, effect: people::Effect) -> Task<Message> {
    match effect {
        people::Effect::None => Task::none(),
        people::Effect::FetchPage(request) => {
            tracing::debug!(offset = request.offset, limit = request.limit, "fetching page");
            Task::perform(
                effects::fetch_page(ctx.port.clone(), request),
                Message::People,
            )
        }
        people::Effect::SetLabel(change) => Task::perform(
            effects::set_label(ctx.port.clone(), change),
            Message::People,
        ),
        people::Effect::Recognize => Task::perform(
            effects::recognize_unlabeled(ctx.port.clone()),
            Message::People,
        ),
        people::Effect::FetchThumbnails(requests) => {
            tracing::debug!(count = requests.len(), "fetching face thumbnails");
            Task::batch(requests.into_iter().map(|request| {
                Task::perform(
                    effects::load_thumbnail(ctx.port.clone(), request),
                    Message::People,
                )
            }))
        }
        people::Effect::Notify(notification) => {
            ctx.notifications.push(notification);
            Task::none()
        }
    }
}

/// Handles notification messages (dismiss, tick).
pub fn handle_notification_message(
    notifications: &mut notifications::Manager,
    message: &notifications::NotificationMessage,
) -> Task<Message> {
    notifications.handle_message(message);
    Task::none()
}
