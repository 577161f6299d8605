// SPDX-License-Identifier: MPL-2.0
//! Image and collection records as served by the content store.
//!
//! Records are read-only from this application's perspective: they are
//! authored and ordered externally, fetched fresh per query, and never
//! written back. Deserialization is deliberately lenient — a record with a
//! missing asset or an unknown category still parses, and the renderers
//! skip what they cannot show.

use crate::domain::exif::ExifData;
use serde::{Deserialize, Deserializer, Serialize};

/// Number of preview images a collection banner requires, exactly.
pub const PREVIEW_IMAGE_COUNT: usize = 3;

/// Gallery category, assigned at authoring time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    #[default]
    Color,
    BlackAndWhite,
    Series,
}

impl Category {
    /// Categories offered as filter tabs on the home grid.
    pub const FILTERABLE: [Category; 2] = [Category::Color, Category::BlackAndWhite];

    /// Wire value used in content queries.
    #[must_use]
    pub fn query_value(self) -> &'static str {
        match self {
            Category::Color => "color",
            Category::BlackAndWhite => "blackAndWhite",
            Category::Series => "series",
        }
    }

    /// Human-facing tab label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Color => "color",
            Category::BlackAndWhite => "blanco y negro",
            Category::Series => "series",
        }
    }
}

/// Pixel dimensions resolved by the asset pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Dimensions {
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default, rename = "aspectRatio")]
    pub aspect_ratio: Option<f64>,
}

/// Asset metadata block: dimensions plus the optional camera metadata.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct AssetMetadata {
    #[serde(default)]
    pub dimensions: Option<Dimensions>,
    #[serde(default)]
    pub exif: Option<ExifData>,
}

/// Resolved binary-asset reference.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct AssetRef {
    /// CDN URL of the original upload. Absent on half-migrated records.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub metadata: Option<AssetMetadata>,
}

/// Image field wrapper mirroring the store's nesting (`image.asset`).
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ImageRef {
    #[serde(default)]
    pub asset: Option<AssetRef>,
}

/// A single portfolio image document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageRecord {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub image: ImageRef,

    #[serde(default)]
    pub caption: Option<String>,

    #[serde(default)]
    pub location: Option<String>,

    /// Absent on featured images; `None` also stands in for category values
    /// this build does not know about.
    #[serde(default, deserialize_with = "lenient_category")]
    pub category: Option<Category>,

    /// Externally assigned ordering rank. The store sorts by it; this side
    /// never re-sorts.
    #[serde(default)]
    pub order: f64,
}

impl ImageRecord {
    /// The resolvable asset URL, if the record has one.
    ///
    /// Records without a URL are skipped by every renderer rather than shown
    /// as broken cells.
    #[must_use]
    pub fn asset_url(&self) -> Option<&str> {
        self.image.asset.as_ref()?.url.as_deref()
    }

    #[must_use]
    pub fn exif(&self) -> Option<&ExifData> {
        self.image.asset.as_ref()?.metadata.as_ref()?.exif.as_ref()
    }

    #[must_use]
    pub fn dimensions(&self) -> Option<Dimensions> {
        self.image.asset.as_ref()?.metadata.as_ref()?.dimensions
    }
}

/// URL slug wrapper mirroring the store's `slug.current` shape.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Slug {
    #[serde(default)]
    pub current: String,
}

/// A curated collection with a stacked three-image preview.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionRecord {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub slug: Slug,

    #[serde(default)]
    pub subtitle: Option<String>,

    #[serde(default)]
    pub description: String,

    /// Exactly three references for the stacked banner. Enforced at
    /// authoring time; the banner renders nothing when violated.
    #[serde(default)]
    pub preview_images: Vec<ImageRecord>,

    /// Full image set, populated only by the detail query.
    #[serde(default)]
    pub all_images: Vec<ImageRecord>,

    /// Whether the collection should appear on the home page.
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

impl CollectionRecord {
    /// Whether the banner invariant (exactly three previews, all with
    /// resolvable URLs) holds.
    #[must_use]
    pub fn has_valid_preview(&self) -> bool {
        self.preview_images.len() == PREVIEW_IMAGE_COUNT
            && self
                .preview_images
                .iter()
                .all(|record| record.asset_url().is_some())
    }
}

fn default_is_active() -> bool {
    // Matches the authoring default; the banner query filters on it anyway.
    true
}

/// Accepts unknown category strings as `None` instead of failing the whole
/// record set.
fn lenient_category<'de, D>(deserializer: D) -> Result<Option<Category>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match value.as_str() {
        "color" => Some(Category::Color),
        "blackAndWhite" => Some(Category::BlackAndWhite),
        "series" => Some(Category::Series),
        _ => None,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn gallery_row(category: &str) -> serde_json::Value {
        json!({
            "_id": "img-1",
            "title": "Dunes",
            "image": {
                "asset": {
                    "url": "https://cdn.example/images/dunes.jpg",
                    "metadata": {
                        "dimensions": { "width": 4000, "height": 6000, "aspectRatio": 0.6667 },
                        "exif": { "ISO": 200, "FNumber": 5.6 }
                    }
                }
            },
            "caption": "Dunes at dusk",
            "location": "Cafayate",
            "category": category,
            "order": 2
        })
    }

    #[test]
    fn gallery_record_deserializes_fully() {
        let record: ImageRecord = serde_json::from_value(gallery_row("color")).unwrap();
        assert_eq!(record.id, "img-1");
        assert_eq!(record.category, Some(Category::Color));
        assert_eq!(
            record.asset_url(),
            Some("https://cdn.example/images/dunes.jpg")
        );
        assert_eq!(record.dimensions().map(|d| (d.width, d.height)), Some((4000, 6000)));
        assert_eq!(record.exif().and_then(|e| e.iso), Some(200));
    }

    #[test]
    fn unknown_category_becomes_none_instead_of_failing() {
        let record: ImageRecord = serde_json::from_value(gallery_row("sepia")).unwrap();
        assert_eq!(record.category, None);
    }

    #[test]
    fn featured_record_without_category_parses() {
        let record: ImageRecord = serde_json::from_value(json!({
            "_id": "feat-1",
            "title": "Front",
            "image": { "asset": { "url": "https://cdn.example/front.jpg" } },
            "order": 0
        }))
        .unwrap();
        assert_eq!(record.category, None);
        assert!(record.exif().is_none());
    }

    #[test]
    fn record_without_asset_url_is_skippable() {
        let record: ImageRecord = serde_json::from_value(json!({
            "_id": "img-2",
            "title": "Broken",
            "image": {},
            "order": 1
        }))
        .unwrap();
        assert_eq!(record.asset_url(), None);
    }

    #[test]
    fn category_wire_names_round_trip() {
        assert_eq!(
            serde_json::to_value(Category::BlackAndWhite).unwrap(),
            json!("blackAndWhite")
        );
        assert_eq!(Category::BlackAndWhite.query_value(), "blackAndWhite");
        assert_eq!(Category::BlackAndWhite.label(), "blanco y negro");
    }

    fn preview(url: Option<&str>) -> serde_json::Value {
        json!({
            "_id": format!("p-{}", url.unwrap_or("none")),
            "title": "Preview",
            "image": { "asset": { "url": url } },
            "order": 0
        })
    }

    #[test]
    fn collection_preview_invariant_requires_exactly_three() {
        let mut collection: CollectionRecord = serde_json::from_value(json!({
            "_id": "col-1",
            "title": "Mendoza 2025",
            "slug": { "current": "mendoza-2025" },
            "description": "High desert light.",
            "previewImages": [preview(Some("a")), preview(Some("b")), preview(Some("c"))],
            "isActive": true
        }))
        .unwrap();
        assert!(collection.has_valid_preview());

        collection.preview_images.pop();
        assert!(!collection.has_valid_preview());
    }

    #[test]
    fn collection_preview_invariant_requires_resolvable_urls() {
        let collection: CollectionRecord = serde_json::from_value(json!({
            "_id": "col-2",
            "title": "Mendoza 2025",
            "slug": { "current": "mendoza-2025" },
            "description": "High desert light.",
            "previewImages": [preview(Some("a")), preview(Some("b")), preview(None)]
        }))
        .unwrap();
        assert!(!collection.has_valid_preview());
        // Authoring default applies when the flag is omitted.
        assert!(collection.is_active);
    }
}
