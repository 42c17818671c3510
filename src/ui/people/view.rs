// SPDX-License-Identifier: MPL-2.0
//! Rendering of the people gallery.
//!
//! The view only projects [`State`]; every interaction is turned into a
//! [`Message`] handled by the component.

use super::component::{Message, State, GALLERY_SCROLLABLE_ID, LABEL_INPUT_ID};
use super::thumbnails::PreviewState;
use crate::domain::people::FaceGroup;
use crate::ui::components::error_display::{centered_error_view, ErrorDisplay};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::scrollable::Viewport;
use iced::widget::{
    button, column, container, text, text_input, Column, Container, Id, Image, Row, Scrollable,
    Space,
};
use iced::{Element, Length};

/// Placeholder shown instead of a missing label.
pub const UNLABELED: &str = "Unlabeled";

pub fn view(state: &State) -> Element<'_, Message> {
    let groups = state.groups();

    if groups.initial_load_failed() {
        return centered_error_view(
            ErrorDisplay::new("Unable to load people")
                .message("The photo server could not be reached or rejected the request.")
                .details(groups.error().unwrap_or_default())
                .details_visible(state.show_error_details())
                .action("Retry", Message::Reload)
                .on_toggle_details(Message::ToggleErrorDetails),
        );
    }

    if !groups.has_loaded_initial() {
        return centered(text("Loading people").size(typography::BODY_LG).into());
    }

    let cells: Vec<Element<'_, Message>> = groups
        .items()
        .iter()
        .map(|group| face_cell(state, group))
        .collect();
    let grid = Row::with_children(cells).spacing(spacing::MD).wrap();

    let content = Column::new()
        .push(grid)
        .push(sentinel(state))
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .width(Length::Fill);

    let gallery = Scrollable::new(content)
        .id(Id::new(GALLERY_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::Scrolled {
            bounds: viewport.bounds(),
            content: viewport.content_bounds().size(),
            offset: viewport.absolute_offset(),
        });

    column![header(state), gallery].into()
}

fn header(state: &State) -> Element<'_, Message> {
    let busy = state.is_recognizing();
    let label = if busy {
        "Recognizing faces…"
    } else {
        "Recognize unlabeled faces"
    };
    let recognize = button(text(label).size(typography::BODY))
        .on_press_maybe((!busy).then_some(Message::RecognizeUnlabeled))
        .padding([spacing::XS, spacing::MD])
        .style(button_styles::primary);

    let mut bar = Row::new()
        .push(text("People").size(typography::TITLE_LG))
        .push(Space::new().width(Length::Fill))
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .padding([spacing::MD, spacing::LG]);

    if let Some(error) = state.recognize_error() {
        bar = bar.push(
            text(format!("Recognition failed: {error}"))
                .size(typography::CAPTION)
                .color(palette::ERROR_500),
        );
    }

    bar.push(recognize).into()
}

fn face_cell<'a>(state: &'a State, group: &'a FaceGroup) -> Element<'a, Message> {
    let count = container(text(group.image_face_count.to_string()).size(typography::CAPTION))
        .padding([2, 6])
        .style(container_styles::count_badge);

    let label_row = Row::new()
        .push(count)
        .push(label_control(state, group))
        .spacing(spacing::XXS)
        .align_y(Vertical::Center);

    let body = Column::new()
        .push(preview(state, group))
        .push(label_row)
        .spacing(spacing::XS)
        .align_x(Horizontal::Center);

    Container::new(body)
        .width(Length::Fixed(sizing::FACE_CELL_WIDTH))
        .padding(spacing::XS)
        .align_x(Horizontal::Center)
        .style(container_styles::cell)
        .into()
}

fn preview<'a>(state: &'a State, group: &'a FaceGroup) -> Element<'a, Message> {
    let edge = Length::Fixed(sizing::FACE_PREVIEW);
    let preview_state = group
        .preview_face()
        .map_or(PreviewState::Unavailable, |face| {
            state.thumbnails().state(&face.id)
        });

    match preview_state {
        PreviewState::Ready(handle) => Image::new(handle.clone()).width(edge).height(edge).into(),
        PreviewState::Loading => placeholder("…"),
        PreviewState::Unavailable => placeholder(""),
    }
}

fn placeholder(hint: &str) -> Element<'_, Message> {
    let edge = Length::Fixed(sizing::FACE_PREVIEW);
    Container::new(text(hint).size(typography::TITLE_MD))
        .width(edge)
        .height(edge)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(container_styles::preview_placeholder)
        .into()
}

fn label_control<'a>(state: &'a State, group: &'a FaceGroup) -> Element<'a, Message> {
    let group_id = group.id.clone();

    if let Some(editor) = state.editor(&group.id) {
        let mut input = text_input(UNLABELED, editor.draft())
            .size(typography::BODY)
            .width(Length::Fixed(sizing::LABEL_INPUT_WIDTH));
        if state.focused() == Some(&group.id) {
            input = input.id(Id::new(LABEL_INPUT_ID));
        }
        if !editor.is_read_only() {
            let input_id = group_id.clone();
            input = input
                .on_input(move |value| Message::LabelInput(input_id.clone(), value))
                .on_submit(Message::SubmitLabel(group_id));
        }
        return input.into();
    }

    let (label, style): (&str, fn(&iced::Theme, button::Status) -> button::Style) =
        match group.label() {
            Some(label) => (label, button_styles::link),
            None => (UNLABELED, button_styles::placeholder_link),
        };

    button(text(label).size(typography::BODY))
        .on_press(Message::EditLabel(group_id))
        .padding([spacing::XXS, spacing::XS])
        .style(style)
        .into()
}

/// Bottom of the grid: loading indicator, retry or "Load more".
fn sentinel(state: &State) -> Element<'_, Message> {
    let groups = state.groups();

    let content: Element<'_, Message> = if let Some(error) = groups.error() {
        Row::new()
            .push(
                text(format!("Could not load more people: {error}"))
                    .size(typography::BODY_SM)
                    .color(palette::ERROR_500),
            )
            .push(
                button(text("Retry").size(typography::BODY))
                    .on_press(Message::RetryPage)
                    .style(button_styles::secondary),
            )
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .into()
    } else if groups.is_loading() {
        text("Loading more people").size(typography::BODY_SM).into()
    } else if groups.is_exhausted() {
        if groups.is_empty() {
            text("No people found yet").size(typography::BODY).into()
        } else {
            Space::new().into()
        }
    } else {
        button(text("Load more").size(typography::BODY))
            .on_press(Message::LoadMore)
            .style(button_styles::secondary)
            .into()
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::SENTINEL_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

fn centered(content: Element<'_, Message>) -> Element<'_, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::RemoteError;
    use crate::domain::people::FaceGroupId;
    use crate::ui::people::component::{Effect, Settings};

    fn group(id: &str, label: Option<&str>) -> FaceGroup {
        FaceGroup {
            id: FaceGroupId::new(id),
            label: label.map(str::to_string),
            image_face_count: 1,
            preview_faces: Vec::new(),
        }
    }

    fn state_with(result: Result<Vec<FaceGroup>, RemoteError>) -> State {
        let mut state = State::new(Settings::default());
        if let Effect::FetchPage(request) = state.init() {
            state.handle_message(Message::PageLoaded { request, result });
        }
        state
    }

    #[test]
    fn view_renders_while_loading() {
        let mut state = State::new(Settings::default());
        let _ = state.init();
        let _element = view(&state);
    }

    #[test]
    fn view_renders_initial_error() {
        let state = state_with(Err(RemoteError::Status(500)));
        assert!(state.groups().initial_load_failed());
        let _element = view(&state);
    }

    #[test]
    fn view_renders_groups_and_open_editor() {
        let mut state = state_with(Ok(vec![group("a", Some("Alice")), group("b", None)]));
        state.handle_message(Message::EditLabel(FaceGroupId::new("b")));
        let _element = view(&state);
    }
}
