// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens, the
//! lightbox overlay, and the content store.
//!
//! The `App` struct wires together the state machines (carousel, gallery,
//! collection, lightbox), the caches (image handles, glow colors), and
//! translates messages into side effects like content queries or scroll
//! operations. Policy decisions — page sizes, auto-advance cadence, zoom
//! bounds — stay in the configuration and are applied here, close to the
//! main update loop.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{CarouselMessage, Flags, LightboxMessage, Message, PhotoOrigin};
pub use screen::Screen;

use crate::carousel::{CarouselState, ViewportClass};
use crate::collection::CollectionState;
use crate::config::{self, Config};
use crate::content::ContentClient;
use crate::gallery::GalleryState;
use crate::lightbox::LightboxState;
use crate::media::{GlowCache, ImageCache};
use iced::widget::scrollable::AbsoluteOffset;
use iced::{window, Element, Point, Size, Subscription, Task, Theme};
use std::collections::HashSet;
use std::path::PathBuf;
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 860;
pub const MIN_WINDOW_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 700;

/// Root application state.
pub struct App {
    config: Config,
    content: ContentClient,
    screen: Screen,
    carousel: CarouselState,
    /// Epoch of the in-flight featured fetch; stale results are dropped.
    featured_epoch: u64,
    gallery: GalleryState,
    collection: CollectionState,
    /// The promoted collection shown as a banner on the home screen.
    banner: Option<crate::domain::CollectionRecord>,
    lightbox: LightboxState,
    glow: GlowCache,
    images: ImageCache,
    /// Rendition URLs currently downloading, to avoid duplicate fetches.
    pending_images: HashSet<String>,
    window_size: Size,
    cursor_position: Option<Point>,
    /// Live offset of the page scrollable.
    page_scroll: AbsoluteOffset,
    /// Offset recorded when the lightbox opened, restored on close.
    saved_scroll: Option<AbsoluteOffset>,
    /// Last manual carousel step, used to suppress timer ticks when
    /// `pause_on_manual` is configured.
    last_manual_nav: Option<Instant>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("featured", &self.carousel.len())
            .field("lightbox_open", &self.lightbox.is_open())
            .finish()
    }
}

/// Builds the window settings.
#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(Config::default())
    }
}

impl App {
    fn with_config(config: Config) -> Self {
        let content = ContentClient::new(&config.content);
        let gallery = GalleryState::new(config.gallery.effective_page_size());
        let collection = CollectionState::new(config.gallery.effective_collection_page_size());
        let lightbox = LightboxState::new(
            config.lightbox.effective_zoom_max(),
            config.lightbox.effective_zoom_step(),
        );
        Self {
            config,
            content,
            screen: Screen::Home,
            carousel: CarouselState::new(),
            featured_epoch: 0,
            gallery,
            collection,
            banner: None,
            lightbox,
            glow: GlowCache::default(),
            images: ImageCache::default(),
            pending_images: HashSet::new(),
            window_size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
            cursor_position: None,
            page_scroll: AbsoluteOffset::default(),
            saved_scroll: None,
            last_manual_nav: None,
        }
    }

    /// Initializes application state and kicks off the startup fetches
    /// (featured set, default gallery category, promoted collection).
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = match &flags.config_dir {
            Some(dir) => {
                let path = PathBuf::from(dir).join("settings.toml");
                match config::load_from_path(&path) {
                    Ok(config) => config,
                    Err(err) => {
                        log::warn!(
                            "ignoring unreadable settings file {}: {err}",
                            path.display()
                        );
                        Config::default()
                    }
                }
            }
            None => config::load(),
        };

        let mut app = Self::with_config(config);

        app.featured_epoch += 1;
        let featured = update::fetch_featured(app.content.clone(), app.featured_epoch);

        let gallery_epoch = app.gallery.refresh();
        let gallery = update::fetch_gallery(
            app.content.clone(),
            app.gallery.category(),
            gallery_epoch,
        );

        let banner = update::fetch_banner(app.content.clone());

        let startup_screen = match flags.collection {
            Some(slug) => update::handle_open_collection(&mut app, slug),
            None => Task::none(),
        };

        (app, Task::batch([featured, gallery, banner, startup_screen]))
    }

    fn title(&self) -> String {
        self.config.site.title.clone()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Viewport class of the current window width, driving carousel
    /// neighbor visibility.
    #[must_use]
    pub fn viewport_class(&self) -> ViewportClass {
        ViewportClass::classify(self.window_size.width, &self.config.carousel)
    }

    fn subscription(&self) -> Subscription<Message> {
        let events = subscription::create_event_subscription(self.lightbox.is_open());
        let carousel_active = self.screen == Screen::Home
            && self.carousel.is_active()
            && self.config.carousel.auto_advance;
        let ticks = subscription::create_carousel_subscription(
            carousel_active,
            Duration::from_secs(self.config.carousel.effective_interval_secs()),
        );
        Subscription::batch([events, ticks])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FeaturedFetched { epoch, result } => {
                update::handle_featured_fetched(self, epoch, result)
            }
            Message::GalleryFetched { epoch, result } => {
                update::handle_gallery_fetched(self, epoch, result)
            }
            Message::BannerFetched { result } => update::handle_banner_fetched(self, result),
            Message::CollectionFetched { epoch, result } => {
                update::handle_collection_fetched(self, epoch, result)
            }
            Message::ImageFetched { url, result } => {
                update::handle_image_fetched(self, url, result)
            }
            Message::GlowSampled { epoch, url, color } => {
                self.glow.apply(epoch, url, color);
                Task::none()
            }
            Message::CategorySelected(category) => {
                update::handle_category_selected(self, category)
            }
            Message::LoadMorePressed => update::handle_load_more(self),
            Message::CollectionLoadMorePressed => update::handle_collection_load_more(self),
            Message::Carousel(carousel_message) => {
                update::handle_carousel_message(self, carousel_message)
            }
            Message::Lightbox(lightbox_message) => {
                update::handle_lightbox_message(self, lightbox_message)
            }
            Message::PhotoClicked { origin, index } => {
                update::handle_photo_clicked(self, origin, index)
            }
            Message::OpenCollectionPressed(slug) => update::handle_open_collection(self, slug),
            Message::BackToHomePressed => update::handle_back_to_home(self),
            Message::PageScrolled(offset) => {
                self.page_scroll = offset;
                Task::none()
            }
            Message::RawEvent { event, .. } => update::handle_raw_event(self, event),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}
