// SPDX-License-Identifier: MPL-2.0
//! The lightbox overlay: backdrop, image stage, navigation, zoom controls
//! and the metadata column.
//!
//! The stage is a hidden-scrollbar scrollable whose virtual size grows with
//! the zoom factor; the pan offset is applied to it from the update loop via
//! scroll operations. A [`PhotoShield`] around the whole overlay keeps wheel
//! input for zoom, stops the page underneath from scrolling, and swallows
//! secondary clicks over the photo.

use crate::app::{LightboxMessage, Message};
use crate::lightbox::LightboxState;
use crate::media::{GlowCache, ImageCache};
use crate::ui::components::status;
use crate::ui::design_tokens::{palette, shadow, sizing, spacing, typography};
use crate::ui::metadata_panel;
use crate::ui::styles;
use crate::ui::widgets::PhotoShield;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{
    button, mouse_area, responsive, Column, Container, Id, Image, Row, Scrollable, Space, Stack,
    Text,
};
use iced::{alignment, mouse, ContentFit, Element, Length, Size};

/// Identifier of the stage scrollable, targeted by pan scroll operations.
pub const STAGE_SCROLL_ID: &str = "lightbox-stage";

pub struct LightboxContext<'a> {
    pub state: &'a LightboxState,
    pub glow: &'a GlowCache,
    pub images: &'a ImageCache,
    pub site_title: &'a str,
}

/// Renders the overlay, or nothing while the lightbox is closed.
pub fn view<'a>(ctx: LightboxContext<'a>) -> Option<Element<'a, Message>> {
    let item = ctx.state.current()?;

    let backdrop = mouse_area(
        Container::new(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop),
    )
    .on_press(Message::Lightbox(LightboxMessage::BackdropPressed));

    // Stage with ambient glow sampled from the current image.
    let glow_color = ctx.glow.color_or_fallback(Some(&item.url));
    let stage = Container::new(stage(ctx.state, ctx.images, &item.url))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::glow_surface(
            glow_color,
            shadow::LIGHTBOX_GLOW_BLUR,
        ));

    let mut side = Column::new()
        .spacing(spacing::LG)
        .width(Length::Fixed(sizing::METADATA_PANEL_WIDTH));
    if let Some(panel) = metadata_panel::caption_panel(item) {
        side = side.push(panel);
    }
    if let Some(panel) = metadata_panel::exif_panel(item) {
        side = side.push(panel);
    }
    side = side.push(zoom_controls(ctx.state));
    side = side.push(copyright(ctx.site_title));

    let mut center = Row::new()
        .spacing(spacing::LG)
        .align_y(alignment::Vertical::Center)
        .width(Length::Fill)
        .height(Length::Fill);

    if ctx.state.has_previous() {
        center = center.push(glyph_button(
            "‹",
            Message::Lightbox(LightboxMessage::PreviousPressed),
        ));
    } else {
        center = center.push(glyph_spacer());
    }
    center = center.push(stage);
    center = center.push(side);
    if ctx.state.has_next() {
        center = center.push(glyph_button(
            "›",
            Message::Lightbox(LightboxMessage::NextPressed),
        ));
    } else {
        center = center.push(glyph_spacer());
    }

    let content = Container::new(center)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL);

    let close = Container::new(glyph_button(
        "×",
        Message::Lightbox(LightboxMessage::ClosePressed),
    ))
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Right)
    .padding(spacing::LG);

    let overlay = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop)
        .push(content)
        .push(close);

    // The whole overlay swallows wheel input so the page underneath cannot
    // scroll while the lightbox is open; zoom receives the wheel through
    // the event subscription instead.
    Some(PhotoShield::new(overlay).block_wheel().into())
}

/// The zoomable, pannable image stage.
fn stage<'a>(state: &LightboxState, images: &ImageCache, url: &str) -> Element<'a, Message> {
    let Some(handle) = images.peek(url) else {
        // The full-size rendition is still downloading.
        return status::status_line(status::LOADING, sizing::SLOT_HEIGHTS[0]);
    };

    let zoom = state.zoom_factor();
    let interaction = if state.is_dragging() {
        mouse::Interaction::Grabbing
    } else if state.is_zoomed() {
        mouse::Interaction::Grab
    } else {
        mouse::Interaction::default()
    };

    responsive(move |available: Size| {
        // The virtual canvas grows with the zoom factor; the image stays
        // contained inside it, so identity zoom exactly fits the stage and
        // anything above it overflows into the scrollable.
        let canvas_width = available.width * zoom;
        let canvas_height = available.height * zoom;

        let photo = Image::new(handle.clone())
            .width(Length::Fixed(canvas_width))
            .height(Length::Fixed(canvas_height))
            .content_fit(ContentFit::Contain);

        let interactive = mouse_area(photo)
            .interaction(interaction)
            .on_press(Message::Lightbox(LightboxMessage::ImagePressed))
            .on_release(Message::Lightbox(LightboxMessage::ImageReleased));

        // The overlay-level shield already keeps wheel input away from this
        // scrollable; its offset moves only through pan operations.
        Scrollable::new(interactive)
            .id(Id::new(STAGE_SCROLL_ID))
            .width(Length::Fill)
            .height(Length::Fill)
            .direction(Direction::Both {
                vertical: Scrollbar::hidden(),
                horizontal: Scrollbar::hidden(),
            })
            .into()
    })
    .into()
}

fn zoom_controls<'a>(state: &LightboxState) -> Element<'a, Message> {
    let control = |glyph: &'a str, size: f32, message: Message| {
        button(
            Container::new(
                Text::new(glyph)
                    .font(typography::SERIF)
                    .size(size)
                    .color(palette::WHITE),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
        )
        .width(Length::Fixed(sizing::ZOOM_BUTTON))
        .height(Length::Fixed(sizing::ZOOM_BUTTON))
        .style(styles::button::zoom_control)
        .on_press(message)
    };

    let mut column = Column::new()
        .spacing(spacing::SM)
        .push(control(
            "+",
            typography::TITLE,
            Message::Lightbox(LightboxMessage::ZoomInPressed),
        ))
        .push(control(
            "−",
            typography::TITLE,
            Message::Lightbox(LightboxMessage::ZoomOutPressed),
        ));

    if state.is_zoomed() {
        column = column.push(control(
            "1:1",
            typography::BODY,
            Message::Lightbox(LightboxMessage::ResetZoomPressed),
        ));
    }

    column.into()
}

fn copyright(site_title: &str) -> Element<'_, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(format!("© {site_title}"))
                .font(typography::SERIF)
                .size(typography::CAPTION)
                .color(palette::WHITE),
        )
        .push(
            Text::new("Todos los derechos reservados")
                .font(typography::SERIF)
                .size(typography::CAPTION)
                .color(palette::TEXT_MUTED),
        )
        .into()
}

fn glyph_button(glyph: &str, message: Message) -> Element<'_, Message> {
    button(
        Text::new(glyph)
            .font(typography::SERIF)
            .size(typography::DISPLAY)
            .color(palette::WHITE),
    )
    .style(styles::button::overlay_glyph)
    .on_press(message)
    .into()
}

/// Keeps the stage centered when a navigation button is absent at a
/// sequence boundary.
fn glyph_spacer() -> Element<'static, Message> {
    Space::new().width(Length::Fixed(sizing::ZOOM_BUTTON)).height(Length::Fixed(0.0)).into()
}
