// SPDX-License-Identifier: MPL-2.0
//! Message handlers and task spawners for the update loop.
//!
//! Every network operation is spawned as a `Task` and re-enters the loop as
//! a message tagged with the epoch it was spawned under; the owning state
//! machine drops results whose epoch went stale. No handler blocks, and no
//! handler surfaces a remote failure as anything stronger than a log line
//! and a quiet UI state.

use super::{App, CarouselMessage, LightboxMessage, Message, PhotoOrigin, Screen};
use crate::content::{asset, ContentClient};
use crate::domain::{Category, ImageRecord};
use crate::lightbox::LightboxItem;
use crate::media::{glow, loader};
use crate::ui;
use iced::keyboard;
use iced::mouse;
use iced::widget::scrollable::{AbsoluteOffset, RelativeOffset};
use iced::widget::{operation, Id};
use iced::{event, window, Point, Task};
use std::time::Instant;

// ---------------------------------------------------------------------------
// Task spawners
// ---------------------------------------------------------------------------

pub(super) fn fetch_featured(client: ContentClient, epoch: u64) -> Task<Message> {
    Task::perform(
        async move { client.fetch_featured().await },
        move |result| Message::FeaturedFetched { epoch, result },
    )
}

pub(super) fn fetch_gallery(client: ContentClient, category: Category, epoch: u64) -> Task<Message> {
    Task::perform(
        async move { client.fetch_gallery(category).await },
        move |result| Message::GalleryFetched { epoch, result },
    )
}

pub(super) fn fetch_banner(client: ContentClient) -> Task<Message> {
    Task::perform(
        async move { client.fetch_active_collection().await },
        |result| Message::BannerFetched { result },
    )
}

pub(super) fn fetch_collection(client: ContentClient, slug: String, epoch: u64) -> Task<Message> {
    Task::perform(
        async move { client.fetch_collection(&slug).await },
        move |result| Message::CollectionFetched { epoch, result },
    )
}

fn fetch_image(url: String) -> Task<Message> {
    let task_url = url.clone();
    Task::perform(
        async move { loader::fetch_image(task_url).await },
        move |result| Message::ImageFetched {
            url: url.clone(),
            result,
        },
    )
}

/// Spawns one sampling task per record; results carry the glow epoch and
/// the bare asset URL they were sampled for.
fn sample_glow_set(records: &[ImageRecord], epoch: u64) -> Task<Message> {
    let tasks: Vec<Task<Message>> = records
        .iter()
        .filter_map(ImageRecord::asset_url)
        .map(|url| {
            let key = url.to_string();
            let rendition = asset::sampling_rendition(url);
            Task::perform(
                async move { glow::sample_average_color(rendition).await },
                move |color| Message::GlowSampled {
                    epoch,
                    url: key.clone(),
                    color,
                },
            )
        })
        .collect();
    Task::batch(tasks)
}

/// Fetches every rendition URL not already cached or in flight.
fn queue_images(app: &mut App, urls: Vec<String>) -> Task<Message> {
    let mut tasks: Vec<Task<Message>> = Vec::new();
    for url in urls {
        if !app.images.contains(&url) && !app.pending_images.contains(&url) {
            app.pending_images.insert(url.clone());
            tasks.push(fetch_image(url));
        }
    }
    Task::batch(tasks)
}

fn grid_renditions(records: &[ImageRecord]) -> Vec<String> {
    records
        .iter()
        .filter_map(ImageRecord::asset_url)
        .map(asset::grid_rendition)
        .collect()
}

fn carousel_renditions(records: &[ImageRecord]) -> Vec<String> {
    // Any featured record can become the center slot, so both renditions
    // are fetched up front.
    records
        .iter()
        .filter_map(ImageRecord::asset_url)
        .flat_map(|url| {
            [
                asset::carousel_rendition(url, true),
                asset::carousel_rendition(url, false),
            ]
        })
        .collect()
}

fn snap_stage_to_origin() -> Task<Message> {
    operation::snap_to(
        Id::new(ui::lightbox::STAGE_SCROLL_ID),
        RelativeOffset { x: 0.0, y: 0.0 },
    )
}

// ---------------------------------------------------------------------------
// Fetch results
// ---------------------------------------------------------------------------

pub(super) fn handle_featured_fetched(
    app: &mut App,
    epoch: u64,
    result: Result<Vec<ImageRecord>, crate::error::Error>,
) -> Task<Message> {
    if epoch != app.featured_epoch {
        return Task::none();
    }
    match result {
        Ok(records) => {
            app.carousel.set_records(records);
            let glow_epoch = app.glow.begin_set();
            let samples = sample_glow_set(app.carousel.records(), glow_epoch);
            let renditions = carousel_renditions(app.carousel.records());
            let images = queue_images(app, renditions);
            Task::batch([samples, images])
        }
        Err(err) => {
            log::warn!("featured fetch failed: {err}");
            Task::none()
        }
    }
}

pub(super) fn handle_gallery_fetched(
    app: &mut App,
    epoch: u64,
    result: Result<Vec<ImageRecord>, crate::error::Error>,
) -> Task<Message> {
    if app.gallery.apply_fetch(epoch, result) {
        let renditions = grid_renditions(app.gallery.displayed());
        queue_images(app, renditions)
    } else {
        Task::none()
    }
}

pub(super) fn handle_banner_fetched(
    app: &mut App,
    result: Result<Option<crate::domain::CollectionRecord>, crate::error::Error>,
) -> Task<Message> {
    match result {
        Ok(banner) => {
            app.banner = banner;
            let renditions = app
                .banner
                .as_ref()
                .map(|collection| grid_renditions(&collection.preview_images))
                .unwrap_or_default();
            queue_images(app, renditions)
        }
        Err(err) => {
            log::warn!("collection banner fetch failed: {err}");
            Task::none()
        }
    }
}

pub(super) fn handle_collection_fetched(
    app: &mut App,
    epoch: u64,
    result: Result<Option<crate::domain::CollectionRecord>, crate::error::Error>,
) -> Task<Message> {
    if !app.collection.apply_fetch(epoch, result) {
        return Task::none();
    }
    let Some(record) = app.collection.record() else {
        return Task::none();
    };
    let glow_epoch = app.glow.begin_set();
    let samples = sample_glow_set(&record.all_images, glow_epoch);
    let renditions = grid_renditions(app.collection.displayed());
    let images = queue_images(app, renditions);
    Task::batch([samples, images])
}

pub(super) fn handle_image_fetched(
    app: &mut App,
    url: String,
    result: Result<iced::widget::image::Handle, crate::error::Error>,
) -> Task<Message> {
    app.pending_images.remove(&url);
    match result {
        Ok(handle) => app.images.insert(url, handle),
        // The cell keeps its placeholder; nothing to retry.
        Err(err) => log::debug!("image fetch failed for {url}: {err}"),
    }
    Task::none()
}

// ---------------------------------------------------------------------------
// Gallery interactions
// ---------------------------------------------------------------------------

pub(super) fn handle_category_selected(app: &mut App, category: Category) -> Task<Message> {
    match app.gallery.select_category(category) {
        Some(epoch) => fetch_gallery(app.content.clone(), category, epoch),
        None => Task::none(),
    }
}

pub(super) fn handle_load_more(app: &mut App) -> Task<Message> {
    app.gallery.load_more();
    let renditions = grid_renditions(app.gallery.displayed());
    queue_images(app, renditions)
}

pub(super) fn handle_collection_load_more(app: &mut App) -> Task<Message> {
    app.collection.load_more();
    let renditions = grid_renditions(app.collection.displayed());
    queue_images(app, renditions)
}

// ---------------------------------------------------------------------------
// Navigation between screens
// ---------------------------------------------------------------------------

pub(super) fn handle_open_collection(app: &mut App, slug: String) -> Task<Message> {
    app.screen = Screen::Collection;
    let epoch = app.collection.open(slug.clone());
    fetch_collection(app.content.clone(), slug, epoch)
}

pub(super) fn handle_back_to_home(app: &mut App) -> Task<Message> {
    app.screen = Screen::Home;
    app.collection.close();
    // The collection's glow generation is gone; resample for the carousel
    // like a fresh mount of the home page would.
    let glow_epoch = app.glow.begin_set();
    sample_glow_set(app.carousel.records(), glow_epoch)
}

// ---------------------------------------------------------------------------
// Carousel
// ---------------------------------------------------------------------------

pub(super) fn handle_carousel_message(app: &mut App, message: CarouselMessage) -> Task<Message> {
    match message {
        CarouselMessage::NextPressed => {
            app.carousel.advance();
            app.last_manual_nav = Some(Instant::now());
        }
        CarouselMessage::PreviousPressed => {
            app.carousel.retreat();
            app.last_manual_nav = Some(Instant::now());
        }
        CarouselMessage::AutoAdvance(_instant) => {
            if !auto_advance_suppressed(app) {
                app.carousel.advance();
            }
        }
    }
    Task::none()
}

/// With `pause_on_manual` set, a manual step swallows the timer ticks for
/// one full interval, which restarts the cadence from the manual step.
fn auto_advance_suppressed(app: &App) -> bool {
    if !app.config.carousel.pause_on_manual {
        return false;
    }
    let interval = std::time::Duration::from_secs(app.config.carousel.effective_interval_secs());
    app.last_manual_nav
        .is_some_and(|last| last.elapsed() < interval)
}

// ---------------------------------------------------------------------------
// Lightbox
// ---------------------------------------------------------------------------

pub(super) fn handle_photo_clicked(
    app: &mut App,
    origin: PhotoOrigin,
    index: usize,
) -> Task<Message> {
    let (items, position) = match origin {
        PhotoOrigin::Carousel => {
            let records = app.carousel.records();
            // The carousel reports the record's true index; map it into the
            // URL-bearing sequence the lightbox navigates.
            let Some(record) = records.get(index) else {
                return Task::none();
            };
            if record.asset_url().is_none() {
                return Task::none();
            }
            let position = records
                .iter()
                .take(index)
                .filter(|r| r.asset_url().is_some())
                .count();
            (siblings(records), position)
        }
        PhotoOrigin::Gallery => (siblings(app.gallery.displayed()), index),
        PhotoOrigin::Collection => (siblings(app.collection.displayed()), index),
    };

    if items.is_empty() {
        return Task::none();
    }

    // Lock the page scroll: remember where it was, restore on close.
    app.saved_scroll = Some(app.page_scroll);
    app.lightbox.open(items, position);

    Task::batch([current_lightbox_images(app), snap_stage_to_origin()])
}

fn siblings(records: &[ImageRecord]) -> Vec<LightboxItem> {
    records
        .iter()
        .filter_map(LightboxItem::from_record)
        .collect()
}

/// Fetches the full-size rendition of the current item and its immediate
/// neighbors so boundary navigation feels instant.
fn current_lightbox_images(app: &mut App) -> Task<Message> {
    let index = app.lightbox.current_index();
    let urls: Vec<String> = app
        .lightbox
        .items()
        .iter()
        .enumerate()
        .filter(|(i, _)| index.abs_diff(*i) <= 1)
        .map(|(_, item)| item.url.clone())
        .collect();
    queue_images(app, urls)
}

pub(super) fn handle_lightbox_message(app: &mut App, message: LightboxMessage) -> Task<Message> {
    match message {
        LightboxMessage::ClosePressed | LightboxMessage::BackdropPressed => close_lightbox(app),
        LightboxMessage::NextPressed => {
            if app.lightbox.next() {
                Task::batch([current_lightbox_images(app), snap_stage_to_origin()])
            } else {
                Task::none()
            }
        }
        LightboxMessage::PreviousPressed => {
            if app.lightbox.previous() {
                Task::batch([current_lightbox_images(app), snap_stage_to_origin()])
            } else {
                Task::none()
            }
        }
        LightboxMessage::ZoomInPressed => {
            app.lightbox.zoom_in();
            Task::none()
        }
        LightboxMessage::ZoomOutPressed => {
            app.lightbox.zoom_out();
            if app.lightbox.is_zoomed() {
                Task::none()
            } else {
                snap_stage_to_origin()
            }
        }
        LightboxMessage::ResetZoomPressed => {
            app.lightbox.reset_zoom();
            snap_stage_to_origin()
        }
        LightboxMessage::ImagePressed => {
            if let Some(position) = app.cursor_position {
                app.lightbox.begin_drag(position);
            }
            Task::none()
        }
        LightboxMessage::ImageReleased => {
            app.lightbox.end_drag();
            Task::none()
        }
    }
}

fn close_lightbox(app: &mut App) -> Task<Message> {
    app.lightbox.close();
    // Restore the page scroll exactly where it was when the lightbox
    // opened.
    match app.saved_scroll.take() {
        Some(offset) => operation::scroll_to(Id::new(ui::PAGE_SCROLL_ID), offset),
        None => Task::none(),
    }
}

// ---------------------------------------------------------------------------
// Raw events
// ---------------------------------------------------------------------------

pub(super) fn handle_raw_event(app: &mut App, event: event::Event) -> Task<Message> {
    match event {
        event::Event::Window(window::Event::Resized(size)) => {
            app.window_size = size;
            Task::none()
        }
        event::Event::Mouse(mouse_event) => handle_mouse_event(app, mouse_event),
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
            handle_key_pressed(app, key)
        }
        _ => Task::none(),
    }
}

fn handle_mouse_event(app: &mut App, event: mouse::Event) -> Task<Message> {
    match event {
        mouse::Event::CursorMoved { position } => {
            app.cursor_position = Some(position);
            drag_lightbox_to(app, position)
        }
        mouse::Event::ButtonReleased(mouse::Button::Left) => {
            app.lightbox.end_drag();
            Task::none()
        }
        mouse::Event::CursorLeft => {
            app.cursor_position = None;
            app.lightbox.end_drag();
            Task::none()
        }
        mouse::Event::WheelScrolled { delta } if app.lightbox.is_open() => {
            let dy = match delta {
                mouse::ScrollDelta::Lines { y, .. } | mouse::ScrollDelta::Pixels { y, .. } => y,
            };
            app.lightbox.on_wheel(dy);
            if app.lightbox.is_zoomed() {
                Task::none()
            } else {
                snap_stage_to_origin()
            }
        }
        _ => Task::none(),
    }
}

fn drag_lightbox_to(app: &mut App, position: Point) -> Task<Message> {
    match app.lightbox.drag_to(position) {
        Some(pan) => operation::scroll_to(
            Id::new(ui::lightbox::STAGE_SCROLL_ID),
            AbsoluteOffset { x: pan.x, y: pan.y },
        ),
        None => Task::none(),
    }
}

fn handle_key_pressed(app: &mut App, key: keyboard::Key) -> Task<Message> {
    if !app.lightbox.is_open() {
        return Task::none();
    }
    match key {
        keyboard::Key::Named(keyboard::key::Named::Escape) => close_lightbox(app),
        keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
            handle_lightbox_message(app, LightboxMessage::NextPressed)
        }
        keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
            handle_lightbox_message(app, LightboxMessage::PreviousPressed)
        }
        _ => Task::none(),
    }
}
