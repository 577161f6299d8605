// SPDX-License-Identifier: MPL-2.0
//! Camera metadata as resolved by the content store.
//!
//! The store extracts EXIF at upload time and serves it inside the asset
//! metadata block, so this module only deserializes and formats — it never
//! parses image files itself.

use chrono::NaiveDateTime;
use serde::Deserialize;

/// EXIF timestamps use colons in the date part.
const EXIF_DATE_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

/// Camera metadata block attached to an image asset.
///
/// Every field is optional: scans, exports and phone pictures routinely
/// carry partial blocks.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ExifData {
    #[serde(default, rename = "ISO")]
    pub iso: Option<u32>,

    /// Exposure time in seconds, serialized as a decimal string
    /// (e.g. `"0.004"`).
    #[serde(default, rename = "ExposureTime")]
    pub exposure_time: Option<String>,

    #[serde(default, rename = "FNumber")]
    pub f_number: Option<f64>,

    /// Focal length in millimeters.
    #[serde(default, rename = "FocalLength")]
    pub focal_length: Option<f64>,

    #[serde(default, rename = "LensModel")]
    pub lens_model: Option<String>,

    #[serde(default, rename = "Make")]
    pub make: Option<String>,

    #[serde(default, rename = "Model")]
    pub model: Option<String>,

    /// Capture timestamp in EXIF format (`2023:08:12 14:32:11`).
    #[serde(default, rename = "DateTimeOriginal")]
    pub date_time_original: Option<String>,
}

impl ExifData {
    /// Camera line combining make and model, when both are present.
    #[must_use]
    pub fn camera(&self) -> Option<String> {
        match (&self.make, &self.model) {
            (Some(make), Some(model)) => Some(format!("{make} {model}")),
            _ => None,
        }
    }

    /// Shutter speed formatted for display (`1/250s`, `2s`).
    #[must_use]
    pub fn shutter_speed(&self) -> Option<String> {
        self.exposure_time
            .as_deref()
            .and_then(format_exposure_time)
    }

    /// Aperture formatted for display (`f/2.8`).
    #[must_use]
    pub fn aperture(&self) -> Option<String> {
        self.f_number.map(format_aperture)
    }

    /// Focal length formatted for display (`50mm`).
    #[must_use]
    pub fn focal_length_display(&self) -> Option<String> {
        self.focal_length.map(format_focal_length)
    }

    /// Capture date formatted for display (`12 Aug 2023`), when the EXIF
    /// timestamp parses.
    #[must_use]
    pub fn capture_date(&self) -> Option<String> {
        let raw = self.date_time_original.as_deref()?;
        NaiveDateTime::parse_from_str(raw, EXIF_DATE_FORMAT)
            .ok()
            .map(|dt| dt.format("%d %b %Y").to_string())
    }

    /// Whether any displayable field is present.
    #[must_use]
    pub fn has_any(&self) -> bool {
        self.iso.is_some()
            || self.exposure_time.is_some()
            || self.f_number.is_some()
            || self.focal_length.is_some()
            || self.lens_model.is_some()
            || self.camera().is_some()
            || self.date_time_original.is_some()
    }
}

/// Formats an exposure time given in seconds as a photographer-friendly
/// fraction. Unparseable input yields `None` rather than a bogus value.
#[must_use]
pub fn format_exposure_time(seconds: &str) -> Option<String> {
    let seconds: f64 = seconds.trim().parse().ok()?;
    if !seconds.is_finite() || seconds <= 0.0 {
        return None;
    }
    if seconds >= 1.0 {
        Some(format!("{}s", trim_number(seconds)))
    } else {
        let denominator = (1.0 / seconds).round() as u64;
        Some(format!("1/{denominator}s"))
    }
}

/// Formats an aperture f-number (`f/2.8`).
#[must_use]
pub fn format_aperture(f_number: f64) -> String {
    format!("f/{f_number:.1}")
}

/// Formats a focal length in millimeters (`50mm`).
#[must_use]
pub fn format_focal_length(focal_length: f64) -> String {
    format!("{}mm", trim_number(focal_length))
}

/// Renders a number without a trailing `.0` for integral values.
fn trim_number(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON {
        format!("{}", value as i64)
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shutter_speed_formats_fractions() {
        assert_eq!(format_exposure_time("0.004"), Some("1/250s".to_string()));
        assert_eq!(format_exposure_time("0.5"), Some("1/2s".to_string()));
    }

    #[test]
    fn shutter_speed_formats_long_exposures() {
        assert_eq!(format_exposure_time("2"), Some("2s".to_string()));
        assert_eq!(format_exposure_time("1.5"), Some("1.5s".to_string()));
    }

    #[test]
    fn shutter_speed_rejects_garbage() {
        assert_eq!(format_exposure_time("fast"), None);
        assert_eq!(format_exposure_time("0"), None);
        assert_eq!(format_exposure_time("-1"), None);
    }

    #[test]
    fn aperture_keeps_one_decimal() {
        assert_eq!(format_aperture(2.8), "f/2.8");
        assert_eq!(format_aperture(8.0), "f/8.0");
    }

    #[test]
    fn focal_length_drops_trailing_zero() {
        assert_eq!(format_focal_length(50.0), "50mm");
        assert_eq!(format_focal_length(23.5), "23.5mm");
    }

    #[test]
    fn camera_requires_both_make_and_model() {
        let exif = ExifData {
            make: Some("Fujifilm".into()),
            model: Some("X-T4".into()),
            ..ExifData::default()
        };
        assert_eq!(exif.camera(), Some("Fujifilm X-T4".to_string()));

        let partial = ExifData {
            make: Some("Fujifilm".into()),
            ..ExifData::default()
        };
        assert_eq!(partial.camera(), None);
    }

    #[test]
    fn capture_date_parses_exif_timestamps() {
        let exif = ExifData {
            date_time_original: Some("2023:08:12 14:32:11".into()),
            ..ExifData::default()
        };
        assert_eq!(exif.capture_date(), Some("12 Aug 2023".to_string()));
    }

    #[test]
    fn capture_date_ignores_malformed_timestamps() {
        let exif = ExifData {
            date_time_original: Some("yesterday".into()),
            ..ExifData::default()
        };
        assert_eq!(exif.capture_date(), None);
    }

    #[test]
    fn deserializes_upper_camel_wire_names() {
        let exif: ExifData = serde_json::from_str(
            r#"{
                "ISO": 400,
                "ExposureTime": "0.008",
                "FNumber": 1.8,
                "FocalLength": 35,
                "LensModel": "XF35mmF1.4 R",
                "Make": "Fujifilm",
                "Model": "X-T4",
                "DateTimeOriginal": "2024:01:02 10:00:00"
            }"#,
        )
        .expect("exif block should deserialize");

        assert_eq!(exif.iso, Some(400));
        assert_eq!(exif.shutter_speed(), Some("1/125s".to_string()));
        assert_eq!(exif.aperture(), Some("f/1.8".to_string()));
        assert_eq!(exif.focal_length_display(), Some("35mm".to_string()));
        assert!(exif.has_any());
    }

    #[test]
    fn empty_block_has_nothing_to_show() {
        assert!(!ExifData::default().has_any());
    }
}
