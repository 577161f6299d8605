// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Page background surface.
pub fn page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BACKGROUND)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Neutral block shown while a rendition is still loading.
pub fn placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SURFACE)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Near-opaque black backdrop behind the lightbox.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Floating panel over the backdrop (captions, metadata).
pub fn overlay_panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::PANEL,
            ..palette::BLACK
        })),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Raised card for the stacked collection banner.
pub fn banner_card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SURFACE_RAISED)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Banner preview image frame with a card shadow.
pub fn banner_preview(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SURFACE)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::CARD,
        ..Default::default()
    }
}

/// Surface carrying the ambient glow sampled from an image.
pub fn glow_surface(color: Color, blur_radius: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(palette::SURFACE)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::glow(color, blur_radius),
        ..Default::default()
    }
}
