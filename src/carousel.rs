// SPDX-License-Identifier: MPL-2.0
//! Carousel controller for the featured set.
//!
//! A circular index over the featured records. The carousel is inactive
//! below three records (a placeholder renders instead) and otherwise
//! advances by one step modulo the set size, either on the auto-advance
//! timer or on manual navigation. The two run independently by default —
//! manual steps do not reset the timer unless configured to.
//!
//! Which neighbors are visible is a pure function of the viewport class and
//! the set size; each visible offset carries a fade weight.

use crate::config::CarouselConfig;
use crate::domain::ImageRecord;

/// Minimum featured records for an active carousel.
pub const MIN_FEATURED: usize = 3;

/// Fade weight per absolute slot offset (center, ±1, ±2, ±3).
pub const SLOT_OPACITY: [f32; 4] = [1.0, 0.75, 0.45, 0.25];

/// Minimum set size at which the ±3 slots can render without duplicating an
/// index already shown by the center or nearer slots.
const ULTRA_FAR_MIN_RECORDS: usize = 7;

/// Window width classes driving neighbor visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    /// Narrow windows: center plus the ±1 neighbors.
    Base,
    /// Wide windows add the ±2 neighbors.
    Wide,
    /// Ultra-wide windows add the ±3 neighbors when the set is big enough.
    UltraWide,
}

impl ViewportClass {
    /// Classifies a window width against the configured thresholds.
    #[must_use]
    pub fn classify(width: f32, config: &CarouselConfig) -> Self {
        if width >= config.ultra_wide_viewport_min {
            ViewportClass::UltraWide
        } else if width >= config.wide_viewport_min {
            ViewportClass::Wide
        } else {
            ViewportClass::Base
        }
    }

    /// The furthest neighbor offset this class can show.
    #[must_use]
    fn max_offset(self) -> i32 {
        match self {
            ViewportClass::Base => 1,
            ViewportClass::Wide => 2,
            ViewportClass::UltraWide => 3,
        }
    }
}

/// Circular index over the featured set.
#[derive(Debug, Default)]
pub struct CarouselState {
    records: Vec<ImageRecord>,
    center: usize,
}

impl CarouselState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the featured set, recentering on the first record.
    pub fn set_records(&mut self, records: Vec<ImageRecord>) {
        self.records = records;
        self.center = 0;
    }

    #[must_use]
    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether the carousel renders at all; below [`MIN_FEATURED`] records a
    /// placeholder takes its place until data arrives.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.records.len() >= MIN_FEATURED
    }

    #[must_use]
    pub fn center_index(&self) -> usize {
        self.center
    }

    #[must_use]
    pub fn center_record(&self) -> Option<&ImageRecord> {
        self.records.get(self.center)
    }

    /// Steps forward one slot, wrapping from the last record to the first.
    /// Inert while inactive.
    pub fn advance(&mut self) {
        if self.is_active() {
            self.center = (self.center + 1) % self.records.len();
        }
    }

    /// Steps backward one slot, wrapping from the first record to the last.
    /// Inert while inactive.
    pub fn retreat(&mut self) {
        if self.is_active() {
            self.center = (self.center + self.records.len() - 1) % self.records.len();
        }
    }

    /// Resolves a slot offset relative to the center into a record index,
    /// wrapping modulo the set size.
    #[must_use]
    pub fn index_at_offset(&self, offset: i32) -> Option<usize> {
        let len = self.records.len();
        if len == 0 {
            return None;
        }
        let len = len as i64;
        let index = (self.center as i64 + i64::from(offset)).rem_euclid(len);
        Some(index as usize)
    }

    #[must_use]
    pub fn record_at_offset(&self, offset: i32) -> Option<&ImageRecord> {
        self.records.get(self.index_at_offset(offset)?)
    }

    /// Slot offsets to render for a viewport class, in left-to-right order.
    ///
    /// The ±1 neighbors always render; ±2 appear on wide viewports; ±3 on
    /// ultra-wide viewports only when the set has enough records that they
    /// cannot duplicate the center or a nearer slot.
    #[must_use]
    pub fn visible_offsets(&self, viewport: ViewportClass) -> Vec<i32> {
        if !self.is_active() {
            return Vec::new();
        }
        let mut max_offset = viewport.max_offset();
        if max_offset == 3 && self.records.len() < ULTRA_FAR_MIN_RECORDS {
            max_offset = 2;
        }
        (-max_offset..=max_offset).collect()
    }

    /// Fade weight for a slot offset.
    #[must_use]
    pub fn slot_opacity(offset: i32) -> f32 {
        let distance = offset.unsigned_abs().min(3) as usize;
        SLOT_OPACITY[distance]
    }
}
