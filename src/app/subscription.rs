// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Subscriptions are recomputed from state every frame, which is what makes
//! listener teardown symmetric by construction: when the lightbox closes or
//! the carousel goes inactive, the corresponding subscription simply stops
//! being produced.

use super::{CarouselMessage, Message};
use iced::{event, time, window, Event, Subscription};
use std::time::Duration;

/// Routes native events according to the lightbox state.
///
/// While the lightbox is open it owns keyboard, wheel and pointer input
/// (navigation, zoom, drag-pan). While it is closed only window resizes and
/// cursor tracking are routed; everything else stays with the widgets.
pub fn create_event_subscription(lightbox_open: bool) -> Subscription<Message> {
    if lightbox_open {
        event::listen_with(|event, _status, window| {
            let routed = matches!(
                &event,
                Event::Window(window::Event::Resized(_)) | Event::Keyboard(_) | Event::Mouse(_)
            );
            routed.then(|| Message::RawEvent { window, event })
        })
    } else {
        event::listen_with(|event, _status, window| {
            let routed = matches!(
                &event,
                Event::Window(window::Event::Resized(_))
                    | Event::Mouse(iced::mouse::Event::CursorMoved { .. })
            );
            routed.then(|| Message::RawEvent { window, event })
        })
    }
}

/// Auto-advance ticks for the carousel.
///
/// Produced only while the home screen shows an active carousel with
/// auto-advance enabled; manual navigation does not touch this timer (the
/// overlap is handled in the update loop when `pause_on_manual` is set).
pub fn create_carousel_subscription(active: bool, interval: Duration) -> Subscription<Message> {
    if active {
        time::every(interval).map(|instant| Message::Carousel(CarouselMessage::AutoAdvance(instant)))
    } else {
        Subscription::none()
    }
}
