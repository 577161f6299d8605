// SPDX-License-Identifier: MPL-2.0
//! Gallery state machine: category filter, visible-count cursor and the
//! fetched record set.
//!
//! One parameterized implementation serves both the home grid and the
//! collection detail grid — the page size is configuration, not a reason to
//! fork the logic. Fetches are tagged with an epoch; a result whose epoch no
//! longer matches is dropped, so a slow response can never overwrite state
//! that belongs to a newer selection.

use crate::domain::{Category, ImageRecord};
use crate::error::Error;

/// Visible-count cursor over an externally ordered record list.
///
/// The cursor exposes a prefix of the fetched set. It grows by one page per
/// "load more", never shrinks except by an explicit reset, and never grows
/// past the set length once the set is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    page_size: usize,
    visible: usize,
}

impl PageCursor {
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            page_size,
            visible: page_size,
        }
    }

    /// Back to the initial page.
    pub fn reset(&mut self) {
        self.visible = self.page_size;
    }

    /// Advances by one page, clamped to the set length. Monotonic: repeated
    /// calls never decrease the cursor.
    pub fn load_more(&mut self, total: usize) {
        let next = self.visible.saturating_add(self.page_size);
        self.visible = next.min(total.max(self.visible));
    }

    #[must_use]
    pub fn visible(&self) -> usize {
        self.visible
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Whether a "load more" control should be shown for a set of `total`
    /// records. Disappears exactly when the cursor covers the set.
    #[must_use]
    pub fn has_more(&self, total: usize) -> bool {
        self.visible < total
    }

    /// Length of the displayed prefix for a set of `total` records.
    #[must_use]
    pub fn displayed_len(&self, total: usize) -> usize {
        self.visible.min(total)
    }
}

/// Category-filtered, paginated gallery state.
#[derive(Debug)]
pub struct GalleryState {
    category: Category,
    records: Vec<ImageRecord>,
    cursor: PageCursor,
    is_loading: bool,
    epoch: u64,
}

impl GalleryState {
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            category: Category::default(),
            records: Vec::new(),
            cursor: PageCursor::new(page_size),
            is_loading: false,
            epoch: 0,
        }
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[must_use]
    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    /// The cursor-bounded prefix currently on screen.
    ///
    /// While a category switch is in flight the previous records stay
    /// visible behind the loading state; they are only replaced when the
    /// new fetch resolves.
    #[must_use]
    pub fn displayed(&self) -> &[ImageRecord] {
        let shown = self.cursor.displayed_len(self.records.len());
        &self.records[..shown]
    }

    #[must_use]
    pub fn has_more(&self) -> bool {
        self.cursor.has_more(self.records.len())
    }

    #[must_use]
    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }

    /// Switches the category filter.
    ///
    /// Resets the cursor to the initial page either way; returns the fetch
    /// epoch to tag the new query with, or `None` when the category did not
    /// actually change (re-clicking the active tab re-pages but does not
    /// re-fetch).
    pub fn select_category(&mut self, category: Category) -> Option<u64> {
        self.cursor.reset();
        if category == self.category && !self.records.is_empty() {
            return None;
        }
        self.category = category;
        Some(self.start_fetch())
    }

    /// Forces a fetch of the current category (startup, manual refresh).
    pub fn refresh(&mut self) -> u64 {
        self.cursor.reset();
        self.start_fetch()
    }

    fn start_fetch(&mut self) -> u64 {
        self.epoch += 1;
        self.is_loading = true;
        self.epoch
    }

    /// Grows the visible window by one page. Fetches nothing.
    pub fn load_more(&mut self) {
        self.cursor.load_more(self.records.len());
    }

    /// Applies a finished fetch. Returns whether it was applied.
    ///
    /// Stale epochs are ignored entirely — a newer fetch owns the loading
    /// flag. Errors keep the previous records and only clear the flag; the
    /// user recovers by switching category or navigating.
    pub fn apply_fetch(
        &mut self,
        epoch: u64,
        result: Result<Vec<ImageRecord>, Error>,
    ) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.is_loading = false;
        match result {
            Ok(records) => {
                self.records = records;
                true
            }
            Err(err) => {
                log::warn!(
                    "gallery fetch failed for {:?}: {err}",
                    self.category.query_value()
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::image_record;

    fn records(count: usize) -> Vec<ImageRecord> {
        (0..count)
            .map(|i| image_record(&format!("img-{i}")))
            .collect()
    }

    #[test]
    fn cursor_starts_at_one_page() {
        let cursor = PageCursor::new(15);
        assert_eq!(cursor.visible(), 15);
        assert!(cursor.has_more(40));
        assert!(!cursor.has_more(15));
    }

    #[test]
    fn cursor_grows_monotonically_and_clamps_to_total() {
        let mut cursor = PageCursor::new(12);
        cursor.load_more(30);
        assert_eq!(cursor.visible(), 24);
        cursor.load_more(30);
        assert_eq!(cursor.visible(), 30);
        cursor.load_more(30);
        assert_eq!(cursor.visible(), 30, "never exceeds the set length");
        assert!(!cursor.has_more(30));
    }

    #[test]
    fn cursor_never_shrinks_on_a_smaller_total() {
        let mut cursor = PageCursor::new(12);
        cursor.load_more(30);
        cursor.load_more(5);
        assert_eq!(cursor.visible(), 24, "load more never decreases the cursor");
    }

    #[test]
    fn category_switch_resets_cursor_and_starts_fetch() {
        let mut gallery = GalleryState::new(15);
        let first = gallery.refresh();
        assert!(gallery.apply_fetch(first, Ok(records(40))));
        gallery.load_more();
        assert_eq!(gallery.displayed().len(), 30);

        let epoch = gallery.select_category(Category::BlackAndWhite);
        assert!(epoch.is_some());
        assert!(gallery.is_loading());
        assert_eq!(gallery.cursor().visible(), 15);
        // Previous records stay until the new fetch resolves.
        assert_eq!(gallery.records().len(), 40);
    }

    #[test]
    fn reselecting_the_active_category_repages_without_refetch() {
        let mut gallery = GalleryState::new(15);
        let epoch = gallery.refresh();
        assert!(gallery.apply_fetch(epoch, Ok(records(40))));
        gallery.load_more();

        assert_eq!(gallery.select_category(Category::Color), None);
        assert_eq!(gallery.displayed().len(), 15);
        assert!(!gallery.is_loading());
    }

    #[test]
    fn stale_fetch_results_are_dropped() {
        let mut gallery = GalleryState::new(15);
        let stale = gallery.refresh();
        let current = gallery
            .select_category(Category::Series)
            .expect("category changed");

        assert!(!gallery.apply_fetch(stale, Ok(records(3))));
        assert!(gallery.records().is_empty());
        assert!(gallery.is_loading(), "stale result must not clear loading");

        assert!(gallery.apply_fetch(current, Ok(records(7))));
        assert_eq!(gallery.records().len(), 7);
        assert!(!gallery.is_loading());
    }

    #[test]
    fn fetch_error_keeps_previous_records() {
        let mut gallery = GalleryState::new(15);
        let epoch = gallery.refresh();
        assert!(gallery.apply_fetch(epoch, Ok(records(5))));

        let epoch = gallery
            .select_category(Category::BlackAndWhite)
            .expect("category changed");
        let applied = gallery.apply_fetch(epoch, Err(Error::Http("offline".into())));
        assert!(!applied);
        assert_eq!(gallery.records().len(), 5);
        assert!(!gallery.is_loading());
    }

    #[test]
    fn load_more_control_disappears_exactly_at_the_end() {
        let mut gallery = GalleryState::new(15);
        let epoch = gallery.refresh();
        assert!(gallery.apply_fetch(epoch, Ok(records(30))));

        assert!(gallery.has_more());
        gallery.load_more();
        assert!(!gallery.has_more());
        assert_eq!(gallery.displayed().len(), 30);
    }

    #[test]
    fn displayed_is_a_prefix_of_the_fetched_order() {
        let mut gallery = GalleryState::new(2);
        let epoch = gallery.refresh();
        assert!(gallery.apply_fetch(epoch, Ok(records(4))));

        let shown: Vec<&str> = gallery.displayed().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(shown, ["img-0", "img-1"]);
    }
}
