// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::ui::notifications::{Manager, Toast};
use crate::ui::people;
use iced::{
    widget::{Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub gallery: &'a people::State,
    pub notifications: &'a Manager,
}

/// Renders the gallery with the toast overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let gallery = Container::new(people::view(ctx.gallery).map(Message::People))
        .width(Length::Fill)
        .height(Length::Fill);

    let toasts = Toast::view_overlay(ctx.notifications).map(Message::Notification);

    Stack::new()
        .push(gallery)
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
