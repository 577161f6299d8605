// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.
//!
//! The site has no boxed buttons: almost everything interactive is serif
//! text that dims on hover, matching the underline-link look of the
//! original design.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn bare(text_color: Color) -> button::Style {
    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Plain text link: white, dimming on hover.
pub fn link(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered | button::Status::Pressed => bare(Color {
            a: opacity::HOVER,
            ..palette::WHITE
        }),
        _ => bare(palette::WHITE),
    }
}

/// Category tab. The active tab stays solid white; inactive tabs are muted
/// until hovered.
pub fn tab(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let color = if active {
            palette::WHITE
        } else {
            match status {
                button::Status::Hovered | button::Status::Pressed => palette::WHITE,
                _ => palette::TEXT_MUTED,
            }
        };
        bare(color)
    }
}

/// Large glyph buttons floating over the carousel and lightbox (‹ › ×).
pub fn overlay_glyph(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered | button::Status::Pressed => bare(Color {
            a: opacity::HOVER,
            ..palette::WHITE
        }),
        _ => bare(palette::WHITE),
    }
}

/// Square zoom control (+ − 1:1) on a translucent panel.
pub fn zoom_control(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => 0.9,
        _ => opacity::PANEL,
    };
    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::BLACK
        })),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
