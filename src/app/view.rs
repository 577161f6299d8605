// SPDX-License-Identifier: MPL-2.0
//! Top-level view: the active screen inside the page scrollable, with the
//! lightbox overlay stacked on top while open.

use super::{App, Message, Screen};
use crate::ui;
use crate::ui::styles;
use iced::widget::scrollable::Viewport;
use iced::widget::{Container, Id, Scrollable, Stack};
use iced::{Element, Length};

pub fn view(app: &App) -> Element<'_, Message> {
    let screen: Element<'_, Message> = match app.screen {
        Screen::Home => ui::home::view(ui::home::HomeContext {
            site: &app.config.site,
            carousel: &app.carousel,
            gallery: &app.gallery,
            banner: app.banner.as_ref(),
            glow: &app.glow,
            images: &app.images,
            viewport: app.viewport_class(),
        }),
        Screen::Collection => ui::collection::view(ui::collection::CollectionContext {
            state: &app.collection,
            images: &app.images,
        }),
    };

    let page = Scrollable::new(screen)
        .id(Id::new(ui::PAGE_SCROLL_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::PageScrolled(viewport.absolute_offset()));

    let base = Container::new(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page);

    match ui::lightbox::view(ui::lightbox::LightboxContext {
        state: &app.lightbox,
        glow: &app.glow,
        images: &app.images,
        site_title: &app.config.site.title,
    }) {
        Some(overlay) => Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(base)
            .push(overlay)
            .into(),
        None => base.into(),
    }
}
