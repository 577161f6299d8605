// SPDX-License-Identifier: MPL-2.0
//! `galeria` is a photography-portfolio gallery client built with the Iced
//! GUI framework.
//!
//! It renders a home screen (featured carousel with ambient glow, category
//! tabs, paginated photo grid, promoted-collection banner), a collection
//! detail screen, and a modal lightbox with zoom, pan and camera-metadata
//! display. Content comes from a hosted headless content store via
//! parameterized read queries; images are remote CDN renditions.

#![doc(html_root_url = "https://docs.rs/galeria/0.2.0")]

pub mod app;
pub mod carousel;
pub mod collection;
pub mod config;
pub mod content;
pub mod domain;
pub mod error;
pub mod gallery;
pub mod lightbox;
pub mod media;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
