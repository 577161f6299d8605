// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[site]` - Title and contact links shown in the header
//! - `[content]` - Content store project, dataset and API version
//! - `[gallery]` - Page sizes for the paginated grids
//! - `[carousel]` - Auto-advance timing and viewport breakpoints
//! - `[lightbox]` - Zoom bounds and step
//!
//! # Path Resolution
//!
//! 1. Explicit path via `load_from_path()`/`save_to_path()`
//! 2. `GALERIA_CONFIG_DIR` environment variable
//! 3. Platform config directory (`dirs::config_dir()/Galeria`)
//!
//! Unreadable or invalid files fall back to defaults; a warning is logged
//! rather than surfaced, so a broken settings file can never block startup.

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_DIR_NAME: &str = "Galeria";
const CONFIG_DIR_ENV: &str = "GALERIA_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// Site identity shown in the header and window title.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteConfig {
    #[serde(default = "default_site_title")]
    pub title: String,

    /// Contact e-mail rendered as a header link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,

    /// Instagram profile URL rendered as a header link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram_url: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_site_title(),
            contact_email: None,
            instagram_url: None,
        }
    }
}

/// Connection settings for the headless content store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentConfig {
    /// Project identifier on the hosted content store.
    #[serde(default)]
    pub project_id: String,

    #[serde(default = "default_dataset")]
    pub dataset: String,

    /// API version date (e.g. "2024-01-01").
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Full endpoint override; takes precedence over the project-derived URL.
    /// Mainly useful for tests and self-hosted mirrors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            dataset: default_dataset(),
            api_version: default_api_version(),
            endpoint: None,
        }
    }
}

/// Page sizes for the paginated grids.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GalleryConfig {
    /// Initial and incremental page size on the home grid.
    #[serde(default = "default_gallery_page_size")]
    pub page_size: usize,

    /// Initial and incremental page size on a collection detail grid.
    #[serde(default = "default_collection_page_size")]
    pub collection_page_size: usize,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            page_size: default_gallery_page_size(),
            collection_page_size: default_collection_page_size(),
        }
    }
}

impl GalleryConfig {
    /// Page size guarded against a pathological zero in the settings file.
    #[must_use]
    pub fn effective_page_size(&self) -> usize {
        self.page_size.max(1)
    }

    #[must_use]
    pub fn effective_collection_page_size(&self) -> usize {
        self.collection_page_size.max(1)
    }
}

/// Carousel timing and viewport breakpoints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CarouselConfig {
    /// Seconds between automatic advances.
    #[serde(default = "default_carousel_interval_secs")]
    pub advance_interval_secs: u64,

    /// Whether the carousel advances on its own at all.
    #[serde(default = "default_true")]
    pub auto_advance: bool,

    /// Whether manual prev/next resets the auto-advance timer.
    /// Off by default: the timer and manual navigation run independently.
    #[serde(default)]
    pub pause_on_manual: bool,

    /// Window width at which the ±2 neighbors appear.
    #[serde(default = "default_wide_viewport_min")]
    pub wide_viewport_min: f32,

    /// Window width at which the ±3 neighbors appear.
    #[serde(default = "default_ultra_wide_viewport_min")]
    pub ultra_wide_viewport_min: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            advance_interval_secs: default_carousel_interval_secs(),
            auto_advance: true,
            pause_on_manual: false,
            wide_viewport_min: default_wide_viewport_min(),
            ultra_wide_viewport_min: default_ultra_wide_viewport_min(),
        }
    }
}

impl CarouselConfig {
    /// Advance interval clamped to a sane lower bound.
    #[must_use]
    pub fn effective_interval_secs(&self) -> u64 {
        self.advance_interval_secs.max(MIN_CAROUSEL_INTERVAL_SECS)
    }
}

/// Lightbox zoom bounds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LightboxConfig {
    /// Maximum zoom factor, clamped to `[MIN_ZOOM_FACTOR, MAX_ZOOM_FACTOR]`.
    #[serde(default = "default_max_zoom_factor")]
    pub zoom_max: f32,

    /// Zoom factor change per step.
    #[serde(default = "default_zoom_step")]
    pub zoom_step: f32,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            zoom_max: default_max_zoom_factor(),
            zoom_step: default_zoom_step(),
        }
    }
}

impl LightboxConfig {
    /// Maximum zoom guarded against out-of-range settings values.
    #[must_use]
    pub fn effective_zoom_max(&self) -> f32 {
        self.zoom_max.clamp(MIN_ZOOM_FACTOR, MAX_ZOOM_FACTOR)
    }

    /// Step guarded against zero or negative settings values.
    #[must_use]
    pub fn effective_zoom_step(&self) -> f32 {
        if self.zoom_step > 0.0 {
            self.zoom_step
        } else {
            DEFAULT_ZOOM_STEP
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub content: ContentConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub carousel: CarouselConfig,

    #[serde(default)]
    pub lightbox: LightboxConfig,
}

// Serde default helpers. Kept as functions so the section structs can share
// them with `defaults.rs` constants.
fn default_site_title() -> String {
    DEFAULT_SITE_TITLE.to_string()
}
fn default_dataset() -> String {
    DEFAULT_DATASET.to_string()
}
fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}
fn default_gallery_page_size() -> usize {
    DEFAULT_GALLERY_PAGE_SIZE
}
fn default_collection_page_size() -> usize {
    DEFAULT_COLLECTION_PAGE_SIZE
}
fn default_carousel_interval_secs() -> u64 {
    DEFAULT_CAROUSEL_INTERVAL_SECS
}
fn default_wide_viewport_min() -> f32 {
    DEFAULT_WIDE_VIEWPORT_MIN
}
fn default_ultra_wide_viewport_min() -> f32 {
    DEFAULT_ULTRA_WIDE_VIEWPORT_MIN
}
fn default_max_zoom_factor() -> f32 {
    DEFAULT_MAX_ZOOM_FACTOR
}
fn default_zoom_step() -> f32 {
    DEFAULT_ZOOM_STEP
}
fn default_true() -> bool {
    true
}

// =============================================================================
// Load / Save
// =============================================================================

fn config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_DIR_NAME);
        path
    })
}

fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration, falling back to defaults on any problem.
///
/// A missing file is normal (first launch); an unreadable or invalid file is
/// logged as a warning and ignored.
#[must_use]
pub fn load() -> Config {
    let Some(path) = default_config_path() else {
        return Config::default();
    };
    if !path.exists() {
        return Config::default();
    }
    match load_from_path(&path) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring unreadable settings file {}: {err}", path.display());
            Config::default()
        }
    }
}

/// Saves the configuration to the default location.
///
/// # Errors
///
/// Returns an error if the file or its parent directory cannot be written.
pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Loads configuration from an explicit path.
///
/// Invalid TOML yields the default configuration rather than an error, so a
/// hand-edited file with a typo degrades gracefully.
///
/// # Errors
///
/// Returns an error only if the file cannot be read at all.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

/// Saves configuration to an explicit path, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization or the filesystem write fails.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_sections() {
        let config = Config {
            site: SiteConfig {
                title: "Test Folio".into(),
                contact_email: Some("me@example.com".into()),
                instagram_url: None,
            },
            content: ContentConfig {
                project_id: "abc123".into(),
                dataset: "staging".into(),
                ..ContentConfig::default()
            },
            gallery: GalleryConfig {
                page_size: 16,
                collection_page_size: 8,
            },
            ..Config::default()
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn default_config_matches_documented_page_sizes() {
        let config = Config::default();
        assert_eq!(config.gallery.page_size, DEFAULT_GALLERY_PAGE_SIZE);
        assert_eq!(
            config.gallery.collection_page_size,
            DEFAULT_COLLECTION_PAGE_SIZE
        );
        assert_eq!(
            config.carousel.advance_interval_secs,
            DEFAULT_CAROUSEL_INTERVAL_SECS
        );
        assert!(config.carousel.auto_advance);
        assert!(!config.carousel.pause_on_manual);
    }

    #[test]
    fn effective_zoom_max_clamps_out_of_range_values() {
        let lightbox = LightboxConfig {
            zoom_max: 99.0,
            zoom_step: 0.5,
        };
        assert_eq!(lightbox.effective_zoom_max(), MAX_ZOOM_FACTOR);

        let lightbox = LightboxConfig {
            zoom_max: 0.25,
            zoom_step: 0.5,
        };
        assert_eq!(lightbox.effective_zoom_max(), MIN_ZOOM_FACTOR);
    }

    #[test]
    fn effective_zoom_step_rejects_non_positive_values() {
        let lightbox = LightboxConfig {
            zoom_max: 3.0,
            zoom_step: 0.0,
        };
        assert_eq!(lightbox.effective_zoom_step(), DEFAULT_ZOOM_STEP);
    }

    #[test]
    fn effective_page_size_never_zero() {
        let gallery = GalleryConfig {
            page_size: 0,
            collection_page_size: 0,
        };
        assert_eq!(gallery.effective_page_size(), 1);
        assert_eq!(gallery.effective_collection_page_size(), 1);
    }

    #[test]
    fn effective_interval_enforces_lower_bound() {
        let carousel = CarouselConfig {
            advance_interval_secs: 0,
            ..CarouselConfig::default()
        };
        assert_eq!(
            carousel.effective_interval_secs(),
            MIN_CAROUSEL_INTERVAL_SECS
        );
    }
}
