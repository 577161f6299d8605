// SPDX-License-Identifier: MPL-2.0
//! Loading, empty and placeholder states shared by both screens.
//!
//! Every failure in this application degrades to one of these: a quiet
//! serif message or a neutral block, never an error dialog.

use crate::app::Message;
use crate::ui::design_tokens::{palette, typography};
use crate::ui::styles;
use iced::widget::{Container, Space, Text};
use iced::{alignment, Element, Length};

/// Message shown while the carousel has fewer than three featured images.
pub const CAROUSEL_PLACEHOLDER: &str =
    "Add at least 3 featured images in the admin panel to see the carousel!";

/// Message shown when a category has no images yet.
pub const EMPTY_GALLERY: &str = "No images in this category yet. Add them in the admin panel!";

pub const LOADING: &str = "Loading...";

pub const COLLECTION_NOT_FOUND: &str = "Collection not found";

/// Centered serif status line used for loading/empty/placeholder states.
pub fn status_line(message: &str, height: f32) -> Element<'_, Message> {
    Container::new(
        Text::new(message.to_string())
            .font(typography::SERIF)
            .size(typography::SUBTITLE)
            .color(palette::TEXT_FAINT),
    )
    .width(Length::Fill)
    .height(Length::Fixed(height))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}

/// Neutral block standing in for an image whose rendition has not arrived.
pub fn placeholder_block(width: Length, height: Length) -> Element<'static, Message> {
    Container::new(Space::new().width(Length::Fill).height(Length::Fill))
        .width(width)
        .height(height)
        .style(styles::container::placeholder)
        .into()
}
