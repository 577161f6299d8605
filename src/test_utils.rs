// SPDX-License-Identifier: MPL-2.0
//! Shared fixtures for unit tests.
//!
//! Record builders mirror the wire shapes the content store serves, so
//! tests construct state the same way a real fetch would.

use crate::domain::records::{AssetMetadata, AssetRef, ImageRef};
use crate::domain::{Category, CollectionRecord, ExifData, ImageRecord, Slug};
use crate::lightbox::LightboxItem;

/// A gallery record with a resolvable asset URL derived from its id.
#[must_use]
pub fn image_record(id: &str) -> ImageRecord {
    ImageRecord {
        id: id.to_string(),
        title: format!("Image {id}"),
        image: ImageRef {
            asset: Some(AssetRef {
                url: Some(format!("https://cdn.example/{id}.jpg")),
                metadata: None,
            }),
        },
        caption: None,
        location: None,
        category: Some(Category::Color),
        order: 0.0,
    }
}

/// A record carrying a full EXIF block, for metadata-panel tests.
#[must_use]
pub fn image_record_with_exif(id: &str) -> ImageRecord {
    let mut record = image_record(id);
    if let Some(asset) = record.image.asset.as_mut() {
        asset.metadata = Some(AssetMetadata {
            dimensions: None,
            exif: Some(ExifData {
                iso: Some(200),
                exposure_time: Some("0.004".into()),
                f_number: Some(2.8),
                focal_length: Some(35.0),
                lens_model: Some("XF35mmF1.4 R".into()),
                make: Some("Fujifilm".into()),
                model: Some("X-T4".into()),
                date_time_original: Some("2024:03:09 17:21:00".into()),
            }),
        });
    }
    record
}

/// Sibling items with URLs `https://cdn.example/{0..count}.jpg`.
#[must_use]
pub fn lightbox_items(count: usize) -> Vec<LightboxItem> {
    (0..count)
        .map(|i| LightboxItem {
            url: format!("https://cdn.example/{i}.jpg"),
            caption: None,
            location: None,
            exif: None,
        })
        .collect()
}

/// A collection with the requested number of preview records.
#[must_use]
pub fn collection_record(slug: &str, preview_count: usize) -> CollectionRecord {
    CollectionRecord {
        id: format!("col-{slug}"),
        title: "Mendoza 2025".into(),
        slug: Slug {
            current: slug.to_string(),
        },
        subtitle: Some("NUEVA COLECCIÓN".into()),
        description: "High desert light.".into(),
        preview_images: (0..preview_count)
            .map(|i| image_record(&format!("{slug}-preview-{i}")))
            .collect(),
        all_images: Vec::new(),
        is_active: true,
    }
}
