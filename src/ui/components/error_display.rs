// SPDX-License-Identifier: MPL-2.0
//! Full-view error presentation.
//!
//! Replaces a whole screen when it cannot render anything useful, e.g. when
//! the first page of people failed to load. Shows:
//! - a title describing the issue
//! - a user-facing message
//! - an optional action button (e.g. "Retry")
//! - optional collapsible technical details
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::components::error_display::{centered_error_view, ErrorDisplay};
//!
//! centered_error_view(
//!     ErrorDisplay::new("Unable to load people")
//!         .message("The photo server could not be reached.")
//!         .details("request failed: connection refused")
//!         .action("Retry", Message::Retry),
//! )
//! ```

use crate::ui::design_tokens::{palette, radius, spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::widget::{button, container, rule, text, Column, Container, Text};
use iced::{alignment, Element, Length, Theme};

/// Builder for the error view.
#[derive(Debug, Clone)]
pub struct ErrorDisplay<Message> {
    title: String,
    message: Option<String>,
    details: Option<String>,
    show_details: bool,
    action_label: Option<String>,
    action_message: Option<Message>,
    toggle_details_message: Option<Message>,
}

impl<Message: Clone + 'static> ErrorDisplay<Message> {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: None,
            details: None,
            show_details: false,
            action_label: None,
            action_message: None,
            toggle_details_message: None,
        }
    }

    /// Sets the user-friendly explanation.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the technical details (collapsible).
    #[must_use]
    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    #[must_use]
    pub fn details_visible(mut self, visible: bool) -> Self {
        self.show_details = visible;
        self
    }

    /// Sets the action button label and message.
    #[must_use]
    pub fn action(mut self, label: impl Into<String>, message: Message) -> Self {
        self.action_label = Some(label.into());
        self.action_message = Some(message);
        self
    }

    /// Sets the message to emit when toggling details visibility.
    #[must_use]
    pub fn on_toggle_details(mut self, message: Message) -> Self {
        self.toggle_details_message = Some(message);
        self
    }

    pub fn view(self) -> Element<'static, Message> {
        let mut content = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill)
            .push(
                Text::new(format!("! {}", self.title))
                    .size(typography::TITLE_MD)
                    .style(|_theme: &Theme| text::Style {
                        color: Some(palette::ERROR_500),
                    }),
            );

        if let Some(message_text) = self.message {
            content = content.push(
                Container::new(Text::new(message_text).size(typography::BODY))
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Center),
            );
        }

        if let (Some(label), Some(msg)) = (self.action_label, self.action_message) {
            let action_btn = button(Text::new(label))
                .on_press(msg)
                .style(button_styles::primary);
            content = content.push(Container::new(action_btn).padding(spacing::SM));
        }

        if let Some(details_text) = self.details {
            if let Some(toggle_msg) = self.toggle_details_message {
                let toggle_label = if self.show_details {
                    "Hide details"
                } else {
                    "Show details"
                };
                content = content.push(
                    button(Text::new(toggle_label).size(typography::BODY_SM))
                        .on_press(toggle_msg)
                        .style(button_styles::link),
                );
            }

            if self.show_details {
                let details_body = Text::new(details_text)
                    .size(typography::CAPTION)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.extended_palette().secondary.base.text),
                    });
                content = content.push(
                    Column::new()
                        .spacing(spacing::XS)
                        .width(Length::Fill)
                        .push(rule::horizontal(1))
                        .push(details_body),
                );
            }
        }

        Container::new(content)
            .width(Length::Fill)
            .max_width(500.0)
            .padding(spacing::LG)
            .style(|theme: &Theme| {
                let extended = theme.extended_palette();
                container::Style {
                    background: Some(iced::Background::Color(extended.background.weak.color)),
                    border: iced::Border {
                        color: extended.background.strong.color,
                        width: 1.0,
                        radius: radius::MD.into(),
                    },
                    text_color: Some(theme.palette().text),
                    ..Default::default()
                }
            })
            .into()
    }
}

/// Creates a centered error display that fills its container.
pub fn centered_error_view<Message: Clone + 'static>(
    error_display: ErrorDisplay<Message>,
) -> Element<'static, Message> {
    Container::new(error_display.view())
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum TestMessage {
        Retry,
        ToggleDetails,
    }

    #[test]
    fn builder_collects_all_parts() {
        let display: ErrorDisplay<TestMessage> = ErrorDisplay::new("Unable to load people")
            .message("The photo server could not be reached.")
            .details("server returned HTTP status 502")
            .details_visible(true)
            .action("Retry", TestMessage::Retry)
            .on_toggle_details(TestMessage::ToggleDetails);

        assert_eq!(display.title, "Unable to load people");
        assert_eq!(
            display.details.as_deref(),
            Some("server returned HTTP status 502")
        );
        assert!(display.show_details);
        assert_eq!(display.action_message, Some(TestMessage::Retry));
        assert_eq!(display.action_label.as_deref(), Some("Retry"));
    }

    #[test]
    fn details_hidden_by_default() {
        let display: ErrorDisplay<TestMessage> = ErrorDisplay::new("Oops");
        assert!(!display.show_details);
        assert!(display.message.is_none());
    }
}
