// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the page and lightbox components.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{BLACK, GRAY_700, PRIMARY_400, WHITE},
    radius,
};
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

fn backdrop_color() -> Color {
    Color {
        a: opacity::BACKDROP,
        ..BLACK
    }
}

fn chrome_background(alpha: f32) -> Color {
    Color { a: alpha, ..BLACK }
}

/// Style for the dimmed backdrop behind the lightbox overlay.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(backdrop_color())),
        ..Default::default()
    }
}

/// Style for the caption/credit bar and the slide counter.
pub fn caption_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(chrome_background(opacity::OVERLAY_STRONG))),
        text_color: Some(WHITE),
        border: Border {
            color: GRAY_700,
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

/// Style for overlay buttons (previous, next, close).
pub fn overlay_button(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_HOVER,
        button::Status::Pressed => opacity::OVERLAY_PRESSED,
        _ => opacity::OVERLAY_STRONG,
    };

    button::Style {
        background: Some(Background::Color(chrome_background(alpha))),
        text_color: WHITE,
        border: Border {
            color: GRAY_700,
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

/// Style for a thumbnail button; the active thumbnail carries a highlight
/// ring while the rest stay flat.
pub fn thumbnail_button(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let ring = if active || status == button::Status::Hovered {
            Border {
                color: PRIMARY_400,
                width: border::ACTIVE_RING,
                radius: radius::SM.into(),
            }
        } else {
            Border {
                color: GRAY_700,
                width: 1.0,
                radius: radius::SM.into(),
            }
        };

        button::Style {
            background: None,
            text_color: WHITE,
            border: ring,
            ..Default::default()
        }
    }
}
