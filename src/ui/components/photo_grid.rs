// SPDX-License-Identifier: MPL-2.0
//! The paginated photo grid shared by the home and collection screens.
//!
//! Records without a resolvable asset URL are skipped entirely — no broken
//! cells. Click indices refer to positions in the *renderable* sequence,
//! which is exactly the sibling list the lightbox will be opened with.

use crate::app::{Message, PhotoOrigin};
use crate::content::asset;
use crate::domain::ImageRecord;
use crate::media::ImageCache;
use crate::ui::components::status;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::widgets::photo_shield;
use iced::widget::{mouse_area, Column, Image, Row, Space};
use iced::{mouse, ContentFit, Element, Length};

/// Lays out the URL-bearing records in `columns` columns of equal width.
pub fn photo_grid<'a>(
    records: &'a [ImageRecord],
    columns: usize,
    images: &ImageCache,
    origin: PhotoOrigin,
) -> Element<'a, Message> {
    let columns = columns.max(1);
    let cells: Vec<&ImageRecord> = records
        .iter()
        .filter(|record| record.asset_url().is_some())
        .collect();

    let mut grid = Column::new().spacing(spacing::MD).width(Length::Fill);

    for (row_index, chunk) in cells.chunks(columns).enumerate() {
        let mut row = Row::new().spacing(spacing::MD).width(Length::Fill);
        for (cell_index, record) in chunk.iter().enumerate() {
            let index = row_index * columns + cell_index;
            row = row.push(grid_cell(record, images, origin, index));
        }
        // Pad the last row so cells keep a constant width.
        for _ in chunk.len()..columns {
            row = row.push(Space::new().width(Length::Fill).height(Length::Fixed(0.0)));
        }
        grid = grid.push(row);
    }

    grid.into()
}

fn grid_cell<'a>(
    record: &'a ImageRecord,
    images: &ImageCache,
    origin: PhotoOrigin,
    index: usize,
) -> Element<'a, Message> {
    let height = Length::Fixed(sizing::GRID_CELL_HEIGHT);

    let content: Element<'a, Message> = match record
        .asset_url()
        .and_then(|url| images.peek(&asset::grid_rendition(url)))
    {
        Some(handle) => Image::new(handle)
            .width(Length::Fill)
            .height(height)
            .content_fit(ContentFit::Cover)
            .into(),
        None => status::placeholder_block(Length::Fill, height),
    };

    mouse_area(photo_shield(content))
        .interaction(mouse::Interaction::Pointer)
        .on_press(Message::PhotoClicked { origin, index })
        .into()
}
