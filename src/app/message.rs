// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::{Category, CollectionRecord, ImageRecord};
use crate::error::Error;
use iced::widget::image::Handle;
use iced::widget::scrollable::AbsoluteOffset;
use iced::{event, window, Color};
use std::time::Instant;

/// Which surface a photo click came from; decides the sibling list the
/// lightbox opens with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoOrigin {
    Carousel,
    Gallery,
    Collection,
}

/// Carousel interactions.
#[derive(Debug, Clone, Copy)]
pub enum CarouselMessage {
    /// Auto-advance timer fired.
    AutoAdvance(Instant),
    NextPressed,
    PreviousPressed,
}

/// Lightbox interactions coming from its widgets; keyboard, wheel and drag
/// input arrive through `Message::RawEvent` instead.
#[derive(Debug, Clone, Copy)]
pub enum LightboxMessage {
    ClosePressed,
    /// Click landed on the backdrop outside the image: closes.
    BackdropPressed,
    NextPressed,
    PreviousPressed,
    ZoomInPressed,
    ZoomOutPressed,
    ResetZoomPressed,
    /// Primary button went down over the image (drag start candidate).
    ImagePressed,
    ImageReleased,
}

/// Top-level messages consumed by `App::update`. Fetch results carry the
/// epoch they were spawned under so stale responses can be dropped.
#[derive(Debug, Clone)]
pub enum Message {
    FeaturedFetched {
        epoch: u64,
        result: Result<Vec<ImageRecord>, Error>,
    },
    GalleryFetched {
        epoch: u64,
        result: Result<Vec<ImageRecord>, Error>,
    },
    BannerFetched {
        result: Result<Option<CollectionRecord>, Error>,
    },
    CollectionFetched {
        epoch: u64,
        result: Result<Option<CollectionRecord>, Error>,
    },
    /// A rendition finished downloading (or failed; the cell keeps its
    /// placeholder).
    ImageFetched {
        url: String,
        result: Result<Handle, Error>,
    },
    /// The color sampler finished one image of generation `epoch`.
    GlowSampled {
        epoch: u64,
        url: String,
        color: Color,
    },
    CategorySelected(Category),
    LoadMorePressed,
    CollectionLoadMorePressed,
    Carousel(CarouselMessage),
    Lightbox(LightboxMessage),
    /// A photo cell was clicked; `index` is its position in the origin's
    /// renderable (URL-bearing) sequence.
    PhotoClicked {
        origin: PhotoOrigin,
        index: usize,
    },
    OpenCollectionPressed(String),
    BackToHomePressed,
    /// The page scrollable moved; tracked for the scroll lock.
    PageScrolled(AbsoluteOffset),
    /// Native events routed by the subscription (keyboard, wheel, pointer,
    /// resize).
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `GALERIA_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional collection slug to open at startup instead of the home
    /// screen.
    pub collection: Option<String>,
}
