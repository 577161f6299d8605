// SPDX-License-Identifier: MPL-2.0
//! Asset URL builder for the image CDN.
//!
//! The CDN serves the original upload at the bare asset URL and transformed
//! renditions via query-string parameters. Only the handful of parameters
//! this application actually uses are modeled; the exact syntax stays an
//! implementation detail of this module.

/// Transform quality used for every rendition request.
pub const RENDITION_QUALITY: u8 = 90;

/// Grid cell rendition (portrait 2:3).
pub const GRID_WIDTH: u32 = 400;
pub const GRID_HEIGHT: u32 = 600;

/// Carousel center slot rendition.
pub const CAROUSEL_CENTER_WIDTH: u32 = 566;
pub const CAROUSEL_CENTER_HEIGHT: u32 = 849;

/// Carousel neighbor slot rendition.
pub const CAROUSEL_SIDE_WIDTH: u32 = 494;
pub const CAROUSEL_SIDE_HEIGHT: u32 = 741;

/// Tiny rendition fetched only for average-color sampling.
pub const SAMPLING_WIDTH: u32 = 100;
pub const SAMPLING_HEIGHT: u32 = 100;

/// Builder for a CDN rendition URL.
///
/// ```
/// use galeria::content::AssetUrl;
///
/// let url = AssetUrl::new("https://cdn.example/images/abc.jpg")
///     .width(400)
///     .height(600)
///     .crop_center()
///     .quality(90)
///     .build();
/// assert_eq!(
///     url,
///     "https://cdn.example/images/abc.jpg?w=400&h=600&fit=crop&crop=center&q=90"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct AssetUrl<'a> {
    base: &'a str,
    width: Option<u32>,
    height: Option<u32>,
    crop_center: bool,
    quality: Option<u8>,
}

impl<'a> AssetUrl<'a> {
    #[must_use]
    pub fn new(base: &'a str) -> Self {
        Self {
            base,
            width: None,
            height: None,
            crop_center: false,
            quality: None,
        }
    }

    #[must_use]
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    /// Crop to the requested aspect, anchored at the center.
    #[must_use]
    pub fn crop_center(mut self) -> Self {
        self.crop_center = true;
        self
    }

    #[must_use]
    pub fn quality(mut self, quality: u8) -> Self {
        self.quality = Some(quality);
        self
    }

    /// Renders the final URL. Without any transform this is the bare asset
    /// URL (the original upload).
    #[must_use]
    pub fn build(self) -> String {
        let mut url = String::from(self.base);
        let mut separator = if self.base.contains('?') { '&' } else { '?' };

        let mut push = |url: &mut String, key: &str, value: String| {
            url.push(separator);
            url.push_str(key);
            url.push('=');
            url.push_str(&value);
            separator = '&';
        };

        if let Some(width) = self.width {
            push(&mut url, "w", width.to_string());
        }
        if let Some(height) = self.height {
            push(&mut url, "h", height.to_string());
        }
        if self.crop_center {
            push(&mut url, "fit", "crop".to_string());
            push(&mut url, "crop", "center".to_string());
        }
        if let Some(quality) = self.quality {
            push(&mut url, "q", quality.to_string());
        }

        url
    }
}

/// Rendition for a gallery or collection grid cell.
#[must_use]
pub fn grid_rendition(base: &str) -> String {
    AssetUrl::new(base)
        .width(GRID_WIDTH)
        .height(GRID_HEIGHT)
        .crop_center()
        .quality(RENDITION_QUALITY)
        .build()
}

/// Rendition for a carousel slot; the center slot is larger than its
/// neighbors.
#[must_use]
pub fn carousel_rendition(base: &str, is_center: bool) -> String {
    let (width, height) = if is_center {
        (CAROUSEL_CENTER_WIDTH, CAROUSEL_CENTER_HEIGHT)
    } else {
        (CAROUSEL_SIDE_WIDTH, CAROUSEL_SIDE_HEIGHT)
    };
    AssetUrl::new(base)
        .width(width)
        .height(height)
        .crop_center()
        .quality(RENDITION_QUALITY)
        .build()
}

/// Tiny rendition used only by the average-color sampler.
#[must_use]
pub fn sampling_rendition(base: &str) -> String {
    AssetUrl::new(base)
        .width(SAMPLING_WIDTH)
        .height(SAMPLING_HEIGHT)
        .build()
}
