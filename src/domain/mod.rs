// SPDX-License-Identifier: MPL-2.0
//! Core domain types for the portfolio content.
//!
//! These types represent the records served by the content store as pure
//! data, without any presentation dependencies. The UI layer converts asset
//! references into framework-specific handles.

pub mod exif;
pub mod records;

pub use exif::ExifData;
pub use records::{
    AssetRef, Category, CollectionRecord, Dimensions, ImageRecord, ImageRef, Slug,
};
