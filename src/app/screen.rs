// SPDX-License-Identifier: MPL-2.0
//! Top-level screens.

/// Which screen the application is showing. The lightbox is an overlay, not
/// a screen — it renders on top of whichever screen is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Collection,
}
