// SPDX-License-Identifier: MPL-2.0
//! Caption and camera-metadata panels shown beside the lightbox image.

use crate::app::Message;
use crate::lightbox::LightboxItem;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Text};
use iced::{Element, Length};

/// Panel with the image's caption and location, when either exists.
pub fn caption_panel(item: &LightboxItem) -> Option<Element<'_, Message>> {
    if item.caption.is_none() && item.location.is_none() {
        return None;
    }

    let mut column = Column::new().spacing(spacing::XS);
    if let Some(caption) = &item.caption {
        column = column.push(
            Text::new(caption.as_str())
                .font(typography::SERIF)
                .size(typography::BODY)
                .color(palette::WHITE),
        );
    }
    if let Some(location) = &item.location {
        column = column.push(
            Text::new(location.as_str())
                .font(typography::SERIF)
                .size(typography::BODY_SM)
                .color(palette::TEXT_MUTED),
        );
    }

    Some(
        Container::new(column)
            .padding([spacing::MD, spacing::LG])
            .width(Length::Fill)
            .style(styles::container::overlay_panel)
            .into(),
    )
}

/// Panel with the EXIF block, when the store resolved one.
pub fn exif_panel(item: &LightboxItem) -> Option<Element<'_, Message>> {
    let exif = item.exif.as_ref().filter(|exif| exif.has_any())?;

    let mut column = Column::new().spacing(spacing::SM);
    if let Some(camera) = exif.camera() {
        column = column.push(labeled("Camera", camera));
    }
    if let Some(lens) = exif.lens_model.clone() {
        column = column.push(labeled("Lens", lens));
    }
    if let Some(focal) = exif.focal_length_display() {
        column = column.push(labeled("Focal Length", focal));
    }
    if let Some(aperture) = exif.aperture() {
        column = column.push(labeled("Aperture", aperture));
    }
    if let Some(shutter) = exif.shutter_speed() {
        column = column.push(labeled("Shutter Speed", shutter));
    }
    if let Some(iso) = exif.iso {
        column = column.push(labeled("ISO", iso.to_string()));
    }
    if let Some(date) = exif.capture_date() {
        column = column.push(labeled("Date", date));
    }

    Some(
        Container::new(column)
            .padding([spacing::MD, spacing::LG])
            .width(Length::Fill)
            .style(styles::container::overlay_panel)
            .into(),
    )
}

fn labeled<'a>(label: &'a str, value: String) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(label)
                .font(typography::SERIF)
                .size(typography::CAPTION)
                .color(palette::TEXT_FAINT),
        )
        .push(
            Text::new(value)
                .font(typography::SERIF)
                .size(typography::BODY_SM)
                .color(palette::WHITE),
        )
        .into()
}
