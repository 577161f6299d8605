// SPDX-License-Identifier: MPL-2.0
//! Collection detail screen: back link, header and the paginated grid over
//! the collection's full image set.

use crate::app::{Message, PhotoOrigin};
use crate::collection::CollectionState;
use crate::media::ImageCache;
use crate::ui::components::photo_grid::photo_grid;
use crate::ui::components::status;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::home::load_more;
use crate::ui::styles;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Element, Length};

const CONTENT_MAX_WIDTH: f32 = 1200.0;

pub struct CollectionContext<'a> {
    pub state: &'a CollectionState,
    pub images: &'a ImageCache,
}

pub fn view<'a>(ctx: CollectionContext<'a>) -> Element<'a, Message> {
    let content: Element<'a, Message> = if ctx.state.is_loading() {
        status::status_line(status::LOADING, 400.0)
    } else if ctx.state.is_not_found() {
        not_found()
    } else if let Some(record) = ctx.state.record() {
        let mut column = Column::new().spacing(spacing::XL).width(Length::Fill);

        column = column.push(back_link());

        // Header: subtitle over title over description, tight like the site.
        let mut header = Column::new().width(Length::Fill);
        if let Some(subtitle) = &record.subtitle {
            header = header.push(
                Text::new(subtitle.as_str())
                    .font(typography::SERIF)
                    .size(typography::SUBTITLE)
                    .color(palette::TEXT_MUTED),
            );
        }
        header = header
            .push(
                Text::new(record.title.as_str())
                    .font(typography::SERIF)
                    .size(typography::DISPLAY)
                    .color(palette::WHITE),
            )
            .push(
                Text::new(record.description.as_str())
                    .font(typography::SERIF)
                    .size(typography::SUBTITLE)
                    .color(palette::WHITE),
            );
        column = column.push(header);

        column = column.push(photo_grid(
            ctx.state.displayed(),
            sizing::COLLECTION_GRID_COLUMNS,
            ctx.images,
            PhotoOrigin::Collection,
        ));

        if ctx.state.has_more() {
            column = column.push(load_more(Message::CollectionLoadMorePressed));
        }

        column.into()
    } else {
        // Nothing fetched yet (transient frame before the task spawns).
        status::status_line(status::LOADING, 400.0)
    };

    Container::new(
        Container::new(content)
            .max_width(CONTENT_MAX_WIDTH)
            .width(Length::Fill)
            .padding([spacing::XXL, spacing::XL]),
    )
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .into()
}

fn back_link() -> Element<'static, Message> {
    button(
        Text::new("volver")
            .font(typography::SERIF)
            .size(typography::TITLE),
    )
    .style(styles::button::link)
    .on_press(Message::BackToHomePressed)
    .into()
}

fn not_found() -> Element<'static, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::LG)
            .align_x(alignment::Horizontal::Center)
            .push(
                Text::new(status::COLLECTION_NOT_FOUND)
                    .font(typography::SERIF)
                    .size(typography::SUBTITLE)
                    .color(palette::WHITE),
            )
            .push(back_link()),
    )
    .width(Length::Fill)
    .height(Length::Fixed(400.0))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}
