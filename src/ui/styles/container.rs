// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Surface of a face group cell.
///
/// Derived from the active theme background with a slight opacity so cells
/// stay readable in both light and dark modes.
pub fn cell(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Neutral placeholder shown where a face preview is missing or loading.
pub fn preview_placeholder(theme: &Theme) -> container::Style {
    let fill = if matches!(theme, Theme::Light) {
        palette::GRAY_200
    } else {
        palette::GRAY_700
    };

    container::Style {
        background: Some(Background::Color(fill)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Pill showing a face group's image count next to its label.
pub fn count_badge(theme: &Theme) -> container::Style {
    let (background, text) = if matches!(theme, Theme::Light) {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, palette::WHITE)
    };

    container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
