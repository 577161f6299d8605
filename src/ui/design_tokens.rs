// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the portfolio's dark, serif-heavy look.
//!
//! Organized by category (palette, opacity, spacing, sizing, typography,
//! radius, shadow). Components never hard-code colors or sizes; they pull
//! from here so the whole site reads as one surface.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    /// Page background (near-black).
    pub const BACKGROUND: Color = Color::from_rgb(0.04, 0.04, 0.04);

    /// Card and placeholder surfaces.
    pub const SURFACE: Color = Color::from_rgb(0.105, 0.105, 0.115);
    pub const SURFACE_RAISED: Color = Color::from_rgb(0.17, 0.17, 0.17);

    pub const WHITE: Color = Color::WHITE;
    pub const BLACK: Color = Color::BLACK;

    /// Secondary text (captions, metadata values).
    pub const TEXT_MUTED: Color = Color::from_rgb(0.63, 0.63, 0.66);

    /// Tertiary text (labels, hints, placeholders).
    pub const TEXT_FAINT: Color = Color::from_rgb(0.44, 0.44, 0.48);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Lightbox backdrop.
    pub const BACKDROP: f32 = 0.95;

    /// Panels floating over the backdrop.
    pub const PANEL: f32 = 0.7;

    /// Hovered interactive text.
    pub const HOVER: f32 = 0.7;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Carousel slot sizes by distance from center, all in the site's 2:3
    /// portrait ratio. Index 0 is the center slot.
    pub const SLOT_WIDTHS: [f32; 4] = [320.0, 264.0, 220.0, 180.0];
    pub const SLOT_HEIGHTS: [f32; 4] = [480.0, 396.0, 330.0, 270.0];

    /// Height of a gallery grid cell.
    pub const GRID_CELL_HEIGHT: f32 = 340.0;

    /// Columns on the home grid.
    pub const HOME_GRID_COLUMNS: usize = 5;

    /// Columns on a collection detail grid.
    pub const COLLECTION_GRID_COLUMNS: usize = 4;

    /// Stacked banner preview image size.
    pub const BANNER_PREVIEW_WIDTH: f32 = 213.0;
    pub const BANNER_PREVIEW_HEIGHT: f32 = 320.0;

    /// Width of the lightbox metadata column.
    pub const METADATA_PANEL_WIDTH: f32 = 300.0;

    /// Square zoom control buttons in the lightbox.
    pub const ZOOM_BUTTON: f32 = 56.0;

    /// Carousel slot size for a given slot offset.
    #[must_use]
    pub fn slot_size(offset: i32) -> (f32, f32) {
        let distance = offset.unsigned_abs().min(3) as usize;
        (SLOT_WIDTHS[distance], SLOT_HEIGHTS[distance])
    }
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    use iced::font::{Family, Stretch, Style, Weight};
    use iced::Font;

    /// Everything user-facing is set in a serif face, like the site.
    pub const SERIF: Font = Font {
        family: Family::Serif,
        weight: Weight::Normal,
        stretch: Stretch::Normal,
        style: Style::Normal,
    };

    /// Collection titles.
    pub const DISPLAY: f32 = 48.0;

    /// Page header, tabs, load-more.
    pub const TITLE: f32 = 32.0;

    /// Section text, collection descriptions.
    pub const SUBTITLE: f32 = 24.0;

    /// Captions and panel text.
    pub const BODY: f32 = 16.0;

    /// Metadata values.
    pub const BODY_SM: f32 = 14.0;

    /// Metadata labels, copyright line.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Card lift for the stacked banner previews.
    pub const CARD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 32.0,
    };

    /// Ambient glow radius behind the carousel center slot.
    pub const GLOW_BLUR: f32 = 200.0;

    /// Ambient glow radius behind the lightbox image.
    pub const LIGHTBOX_GLOW_BLUR: f32 = 150.0;

    /// Builds the ambient glow shadow from a sampled color.
    #[must_use]
    pub fn glow(color: iced::Color, blur_radius: f32) -> Shadow {
        Shadow {
            color,
            offset: Vector::ZERO,
            blur_radius,
        }
    }
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::XXL > spacing::XL);

    assert!(opacity::BACKDROP > opacity::PANEL);
    assert!(opacity::HOVER > 0.0 && opacity::HOVER < 1.0);

    // Slot sizes shrink with distance and keep the portrait orientation.
    assert!(sizing::SLOT_WIDTHS[0] > sizing::SLOT_WIDTHS[1]);
    assert!(sizing::SLOT_WIDTHS[1] > sizing::SLOT_WIDTHS[2]);
    assert!(sizing::SLOT_WIDTHS[2] > sizing::SLOT_WIDTHS[3]);
    assert!(sizing::SLOT_HEIGHTS[0] > sizing::SLOT_WIDTHS[0]);

    assert!(typography::DISPLAY > typography::TITLE);
    assert!(typography::TITLE > typography::SUBTITLE);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);
};
