// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action (e.g. "Recognize unlabeled faces", "Retry").
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let (background, border_color, shadow) = match status {
        button::Status::Active | button::Status::Pressed => {
            (palette::PRIMARY_500, palette::PRIMARY_600, shadow::SM)
        }
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500, shadow::MD),
        button::Status::Disabled => {
            let bg = if is_light {
                palette::GRAY_200
            } else {
                palette::GRAY_700
            };
            return button::Style {
                background: Some(Background::Color(bg)),
                text_color: palette::GRAY_400,
                border: Border {
                    color: palette::GRAY_400,
                    width: 1.0,
                    radius: radius::SM.into(),
                },
                shadow: shadow::NONE,
                snap: true,
            };
        }
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow,
        snap: true,
    }
}

/// Secondary action (e.g. "Load more").
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let (bg_color, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };

    let (background, border_color) = match status {
        button::Status::Hovered => (
            if is_light {
                palette::GRAY_200
            } else {
                Color::from_rgb(0.35, 0.35, 0.35)
            },
            palette::PRIMARY_500,
        ),
        _ => (bg_color, palette::GRAY_400),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: if matches!(status, button::Status::Disabled) {
            palette::GRAY_400
        } else {
            text_color
        },
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Borderless text button, used for face labels that open the editor.
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let text = theme.palette().text;

    let (background, text_color) = match status {
        button::Status::Hovered | button::Status::Pressed => (
            Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::PRIMARY_400
            })),
            palette::PRIMARY_500,
        ),
        button::Status::Active => (None, text),
        button::Status::Disabled => (
            None,
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..text
            },
        ),
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Like [`link`] but dimmed, for the "Unlabeled" placeholder.
pub fn placeholder_link(theme: &Theme, status: button::Status) -> button::Style {
    let style = link(theme, status);
    if matches!(status, button::Status::Active) {
        button::Style {
            text_color: palette::GRAY_400,
            ..style
        }
    } else {
        style
    }
}
