// SPDX-License-Identifier: MPL-2.0
//! View layer: screens, the lightbox overlay, shared components, styles and
//! design tokens.

pub mod collection;
pub mod components;
pub mod design_tokens;
pub mod home;
pub mod lightbox;
pub mod metadata_panel;
pub mod styles;
pub mod widgets;

/// Identifier of the page scrollable shared by the home and collection
/// screens (only one exists at a time). The scroll lock records and restores
/// its offset around the lightbox.
pub const PAGE_SCROLL_ID: &str = "page-scroll";
