// SPDX-License-Identifier: MPL-2.0
//! Average-color sampling for the ambient glow effect.
//!
//! Each image needing a glow gets a tiny rendition fetched and averaged to
//! one color, forced to a fixed low alpha so the effect stays consistent
//! across bright and dark photographs. Sampling is purely decorative:
//! failures substitute a constant instead of ever surfacing.

use crate::content::http_client;
use crate::error::{Error, Result};
use iced::Color;
use std::collections::HashMap;

/// Alpha applied to every sampled color.
pub const GLOW_ALPHA: f32 = 0.3;

/// Substitute used whenever sampling fails (network, decode, anything).
#[must_use]
pub fn fallback_glow() -> Color {
    Color::from_rgba8(100, 100, 150, GLOW_ALPHA)
}

/// Fetches the sampling rendition at `url` and averages it.
///
/// Infallible by design: any failure is logged at debug level and replaced
/// with [`fallback_glow`].
pub async fn sample_average_color(url: String) -> Color {
    match try_sample(&url).await {
        Ok(color) => color,
        Err(err) => {
            log::debug!("glow sampling failed for {url}: {err}");
            fallback_glow()
        }
    }
}

async fn try_sample(url: &str) -> Result<Color> {
    let client = http_client()?;
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Api(format!(
            "sampling fetch failed with status {status}"
        )));
    }
    let bytes = response.bytes().await?;
    decode_average(&bytes)
}

/// Decodes image bytes and averages their color.
///
/// # Errors
///
/// Returns an error if the bytes are not a decodable image.
pub fn decode_average(bytes: &[u8]) -> Result<Color> {
    let image = image_rs::load_from_memory(bytes)?;
    Ok(average_color(&image.to_rgba8()))
}

/// Plain per-channel mean over all pixels, with the alpha forced to
/// [`GLOW_ALPHA`]. An empty image yields the fallback.
#[must_use]
pub fn average_color(pixels: &image_rs::RgbaImage) -> Color {
    let count = u64::from(pixels.width()) * u64::from(pixels.height());
    if count == 0 {
        return fallback_glow();
    }

    let (mut r, mut g, mut b) = (0u64, 0u64, 0u64);
    for pixel in pixels.pixels() {
        r += u64::from(pixel.0[0]);
        g += u64::from(pixel.0[1]);
        b += u64::from(pixel.0[2]);
    }

    Color::from_rgba8(
        (r / count) as u8,
        (g / count) as u8,
        (b / count) as u8,
        GLOW_ALPHA,
    )
}

/// Sampled colors for the current record set, keyed by asset URL.
///
/// The cache is rebuilt from scratch whenever the owning set changes: the
/// epoch bumps, pending results for the old set no longer match and are
/// dropped on arrival. That is the whole cancellation story — in-flight
/// fetches are not aborted, their results just fall on the floor.
#[derive(Debug, Default)]
pub struct GlowCache {
    colors: HashMap<String, Color>,
    epoch: u64,
}

impl GlowCache {
    /// Starts a new sampling generation, discarding previous colors.
    /// Returns the epoch to tag in-flight sampling tasks with.
    pub fn begin_set(&mut self) -> u64 {
        self.epoch += 1;
        self.colors.clear();
        self.epoch
    }

    /// Applies a sampled color if it belongs to the current generation.
    /// Returns whether it was applied.
    pub fn apply(&mut self, epoch: u64, url: String, color: Color) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.colors.insert(url, color);
        true
    }

    #[must_use]
    pub fn get(&self, url: &str) -> Option<Color> {
        self.colors.get(url).copied()
    }

    /// Color for a glow consumer: the sampled value when present, otherwise
    /// the fallback constant.
    #[must_use]
    pub fn color_or_fallback(&self, url: Option<&str>) -> Color {
        url.and_then(|url| self.get(url)).unwrap_or_else(fallback_glow)
    }

    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};

    #[test]
    fn average_of_uniform_image_is_that_color() {
        let pixels = RgbaImage::from_pixel(8, 8, Rgba([200, 100, 50, 255]));
        let color = average_color(&pixels);
        assert_eq!(color, Color::from_rgba8(200, 100, 50, GLOW_ALPHA));
    }

    #[test]
    fn average_mixes_channels_evenly() {
        let mut pixels = RgbaImage::new(2, 1);
        pixels.put_pixel(0, 0, Rgba([0, 0, 0, 255]));
        pixels.put_pixel(1, 0, Rgba([200, 100, 50, 255]));
        let color = average_color(&pixels);
        assert_eq!(color, Color::from_rgba8(100, 50, 25, GLOW_ALPHA));
    }

    #[test]
    fn empty_image_falls_back() {
        let pixels = RgbaImage::new(0, 0);
        assert_eq!(average_color(&pixels), fallback_glow());
    }

    #[test]
    fn decode_average_accepts_real_png_bytes() {
        let pixels = RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 255]));
        let mut bytes = Vec::new();
        pixels
            .write_to(
                &mut std::io::Cursor::new(&mut bytes),
                image_rs::ImageFormat::Png,
            )
            .expect("encode test png");

        let color = decode_average(&bytes).expect("decode should succeed");
        assert_eq!(color, Color::from_rgba8(10, 20, 30, GLOW_ALPHA));
    }

    #[test]
    fn decode_average_rejects_garbage_bytes() {
        assert!(decode_average(b"definitely not an image").is_err());
    }

    #[test]
    fn stale_epoch_results_are_dropped() {
        let mut cache = GlowCache::default();
        let first = cache.begin_set();
        assert!(cache.apply(first, "a".into(), fallback_glow()));

        let second = cache.begin_set();
        assert!(cache.is_empty(), "new generation starts clean");
        assert!(!cache.apply(first, "b".into(), fallback_glow()));
        assert!(cache.apply(second, "b".into(), fallback_glow()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn missing_urls_resolve_to_the_fallback() {
        let cache = GlowCache::default();
        assert_eq!(cache.color_or_fallback(Some("missing")), fallback_glow());
        assert_eq!(cache.color_or_fallback(None), fallback_glow());
    }

    #[tokio::test]
    async fn sampling_an_unfetchable_url_yields_the_fallback() {
        // A relative URL is rejected before any network activity, so this
        // exercises the failure path without leaving the process.
        let color = sample_average_color("not-a-valid-url".into()).await;
        assert_eq!(color, fallback_glow());
    }
}
