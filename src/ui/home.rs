// SPDX-License-Identifier: MPL-2.0
//! Home screen: serif header, featured carousel with ambient glow,
//! collection banner, category tabs and the paginated photo grid.

use crate::app::{CarouselMessage, Message, PhotoOrigin};
use crate::carousel::{CarouselState, ViewportClass};
use crate::config::SiteConfig;
use crate::content::asset;
use crate::domain::{Category, CollectionRecord};
use crate::gallery::GalleryState;
use crate::media::{GlowCache, ImageCache};
use crate::ui::components::photo_grid::photo_grid;
use crate::ui::components::status;
use crate::ui::design_tokens::{palette, shadow, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::photo_shield;
use iced::widget::{button, mouse_area, Column, Container, Image, Row, Space, Text};
use iced::{alignment, mouse, ContentFit, Element, Length};

/// Maximum content width, matching the site's centered column.
const CONTENT_MAX_WIDTH: f32 = 1200.0;

pub struct HomeContext<'a> {
    pub site: &'a SiteConfig,
    pub carousel: &'a CarouselState,
    pub gallery: &'a GalleryState,
    pub banner: Option<&'a CollectionRecord>,
    pub glow: &'a GlowCache,
    pub images: &'a ImageCache,
    pub viewport: ViewportClass,
}

pub fn view<'a>(ctx: HomeContext<'a>) -> Element<'a, Message> {
    let mut page = Column::new().spacing(spacing::XXL).width(Length::Fill);

    page = page.push(centered(header(ctx.site)));
    page = page.push(carousel_section(&ctx));
    if let Some(banner) = ctx.banner.filter(|c| c.is_active && c.has_valid_preview()) {
        page = page.push(centered(banner_section(banner, ctx.images)));
    }
    page = page.push(centered(gallery_section(ctx.gallery, ctx.images)));
    page = page.push(Space::new().width(Length::Fill).height(Length::Fixed(spacing::XXL)));

    page.into()
}

fn centered(content: Element<'_, Message>) -> Element<'_, Message> {
    Container::new(
        Container::new(content)
            .max_width(CONTENT_MAX_WIDTH)
            .width(Length::Fill)
            .padding([0.0, spacing::XL]),
    )
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .into()
}

fn header(site: &SiteConfig) -> Element<'_, Message> {
    let mut row = Row::new()
        .align_y(alignment::Vertical::Center)
        .padding([spacing::LG, 0.0])
        .push(
            Text::new(site.title.as_str())
                .font(typography::SERIF)
                .size(typography::TITLE)
                .color(palette::WHITE),
        )
        .push(Space::new().width(Length::Fill).height(Length::Fixed(0.0)));

    if let Some(email) = &site.contact_email {
        row = row.push(
            Text::new(email.as_str())
                .font(typography::SERIF)
                .size(typography::SUBTITLE)
                .color(palette::TEXT_MUTED),
        );
        row = row.push(Space::new().width(Length::Fixed(spacing::LG)).height(Length::Fixed(0.0)));
    }
    if let Some(instagram) = &site.instagram_url {
        row = row.push(
            Text::new(instagram.as_str())
                .font(typography::SERIF)
                .size(typography::SUBTITLE)
                .color(palette::TEXT_MUTED),
        );
    }

    row.into()
}

// ---------------------------------------------------------------------------
// Carousel
// ---------------------------------------------------------------------------

fn carousel_section<'a>(ctx: &HomeContext<'a>) -> Element<'a, Message> {
    if !ctx.carousel.is_active() {
        return status::status_line(status::CAROUSEL_PLACEHOLDER, sizing::SLOT_HEIGHTS[0]);
    }

    let mut slots = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center);

    for offset in ctx.carousel.visible_offsets(ctx.viewport) {
        slots = slots.push(carousel_slot(ctx, offset));
    }

    Row::new()
        .align_y(alignment::Vertical::Center)
        .width(Length::Fill)
        .push(Space::new().width(Length::Fill).height(Length::Fixed(0.0)))
        .push(carousel_arrow(
            "‹",
            Message::Carousel(CarouselMessage::PreviousPressed),
        ))
        .push(slots)
        .push(carousel_arrow(
            "›",
            Message::Carousel(CarouselMessage::NextPressed),
        ))
        .push(Space::new().width(Length::Fill).height(Length::Fixed(0.0)))
        .into()
}

fn carousel_arrow(glyph: &str, message: Message) -> Element<'_, Message> {
    Container::new(
        button(
            Text::new(glyph)
                .font(typography::SERIF)
                .size(typography::DISPLAY)
                .color(palette::WHITE),
        )
        .style(styles::button::overlay_glyph)
        .on_press(message),
    )
    .padding([0.0, spacing::MD])
    .into()
}

fn carousel_slot<'a>(ctx: &HomeContext<'a>, offset: i32) -> Element<'a, Message> {
    let (width, height) = sizing::slot_size(offset);
    let is_center = offset == 0;

    let Some(index) = ctx.carousel.index_at_offset(offset) else {
        return status::placeholder_block(Length::Fixed(width), Length::Fixed(height));
    };
    let Some(record) = ctx.carousel.record_at_offset(offset) else {
        return status::placeholder_block(Length::Fixed(width), Length::Fixed(height));
    };

    let handle = record
        .asset_url()
        .and_then(|url| ctx.images.peek(&asset::carousel_rendition(url, is_center)));

    let photo: Element<'a, Message> = match handle {
        Some(handle) => Image::new(handle)
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Cover)
            .opacity(CarouselState::slot_opacity(offset))
            .into(),
        None => status::placeholder_block(Length::Fixed(width), Length::Fixed(height)),
    };

    // The center slot carries the ambient glow sampled from its image.
    let framed: Element<'a, Message> = if is_center {
        let glow_color = ctx.glow.color_or_fallback(record.asset_url());
        Container::new(photo)
            .style(styles::container::glow_surface(
                glow_color,
                shadow::GLOW_BLUR,
            ))
            .into()
    } else {
        photo
    };

    mouse_area(photo_shield(framed))
        .interaction(mouse::Interaction::Pointer)
        .on_press(Message::PhotoClicked {
            origin: PhotoOrigin::Carousel,
            index,
        })
        .into()
}

// ---------------------------------------------------------------------------
// Collection banner
// ---------------------------------------------------------------------------

fn banner_section<'a>(collection: &'a CollectionRecord, images: &ImageCache) -> Element<'a, Message> {
    let mut previews = Row::new().spacing(spacing::MD);
    for record in &collection.preview_images {
        let content: Element<'a, Message> = match record
            .asset_url()
            .and_then(|url| images.peek(&asset::grid_rendition(url)))
        {
            Some(handle) => Image::new(handle)
                .width(Length::Fixed(sizing::BANNER_PREVIEW_WIDTH))
                .height(Length::Fixed(sizing::BANNER_PREVIEW_HEIGHT))
                .content_fit(ContentFit::Cover)
                .into(),
            None => status::placeholder_block(
                Length::Fixed(sizing::BANNER_PREVIEW_WIDTH),
                Length::Fixed(sizing::BANNER_PREVIEW_HEIGHT),
            ),
        };
        previews = previews.push(
            Container::new(photo_shield(content)).style(styles::container::banner_preview),
        );
    }

    let mut text_column = Column::new()
        .spacing(spacing::XS)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::BANNER_PREVIEW_HEIGHT));
    if let Some(subtitle) = &collection.subtitle {
        text_column = text_column.push(
            Text::new(subtitle.as_str())
                .font(typography::SERIF)
                .size(typography::BODY)
                .color(palette::TEXT_MUTED),
        );
    }
    text_column = text_column
        .push(
            Text::new(collection.title.as_str())
                .font(typography::SERIF)
                .size(typography::DISPLAY)
                .color(palette::WHITE),
        )
        .push(
            Text::new(collection.description.as_str())
                .font(typography::SERIF)
                .size(typography::SUBTITLE)
                .color(palette::WHITE),
        )
        .push(Space::new().width(Length::Fill).height(Length::Fill))
        .push(
            Text::new("ver más")
                .font(typography::SERIF)
                .size(typography::TITLE)
                .color(palette::WHITE),
        );

    let card = Container::new(
        Row::new()
            .spacing(spacing::XL)
            .push(previews)
            .push(text_column),
    )
    .padding(spacing::XL)
    .width(Length::Fill)
    .style(styles::container::banner_card);

    mouse_area(card)
        .interaction(mouse::Interaction::Pointer)
        .on_press(Message::OpenCollectionPressed(
            collection.slug.current.clone(),
        ))
        .into()
}

// ---------------------------------------------------------------------------
// Gallery
// ---------------------------------------------------------------------------

fn gallery_section<'a>(gallery: &'a GalleryState, images: &ImageCache) -> Element<'a, Message> {
    let mut section = Column::new().spacing(spacing::LG).width(Length::Fill);

    // Filter tabs.
    let mut tabs = Row::new().spacing(spacing::LG);
    for category in Category::FILTERABLE {
        tabs = tabs.push(
            button(
                Text::new(category.label())
                    .font(typography::SERIF)
                    .size(typography::TITLE),
            )
            .style(styles::button::tab(category == gallery.category()))
            .on_press(Message::CategorySelected(category)),
        );
    }
    section = section.push(tabs);

    if gallery.is_loading() {
        section = section.push(status::status_line(status::LOADING, 200.0));
    } else if gallery
        .displayed()
        .iter()
        .all(|record| record.asset_url().is_none())
    {
        section = section.push(status::status_line(status::EMPTY_GALLERY, 200.0));
    } else {
        section = section.push(photo_grid(
            gallery.displayed(),
            sizing::HOME_GRID_COLUMNS,
            images,
            PhotoOrigin::Gallery,
        ));

        if gallery.has_more() {
            section = section.push(load_more(Message::LoadMorePressed));
        }
    }

    section.into()
}

/// The "cargar más" control shared with the collection screen.
pub fn load_more(message: Message) -> Element<'static, Message> {
    Container::new(
        button(
            Text::new("cargar más")
                .font(typography::SERIF)
                .size(typography::TITLE),
        )
        .style(styles::button::link)
        .on_press(message),
    )
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .padding([spacing::MD, 0.0])
    .into()
}
