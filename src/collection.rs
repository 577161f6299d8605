// SPDX-License-Identifier: MPL-2.0
//! Collection detail state: one slug, its fetched record and a page cursor.
//!
//! Same fetch-epoch discipline as the gallery — opening a different
//! collection bumps the epoch, and results from an abandoned navigation are
//! dropped instead of overwriting the newer screen.

use crate::domain::{CollectionRecord, ImageRecord};
use crate::error::Error;
use crate::gallery::PageCursor;

/// State behind the collection detail screen.
#[derive(Debug)]
pub struct CollectionState {
    slug: Option<String>,
    record: Option<CollectionRecord>,
    cursor: PageCursor,
    is_loading: bool,
    loaded: bool,
    epoch: u64,
}

impl CollectionState {
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            slug: None,
            record: None,
            cursor: PageCursor::new(page_size),
            is_loading: false,
            loaded: false,
            epoch: 0,
        }
    }

    #[must_use]
    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    #[must_use]
    pub fn record(&self) -> Option<&CollectionRecord> {
        self.record.as_ref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// The fetch finished and the slug resolved to nothing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.loaded && self.record.is_none()
    }

    /// Starts showing the collection at `slug`. Resets the cursor and
    /// returns the epoch to tag the fetch with.
    pub fn open(&mut self, slug: String) -> u64 {
        self.slug = Some(slug);
        self.record = None;
        self.loaded = false;
        self.is_loading = true;
        self.cursor.reset();
        self.epoch += 1;
        self.epoch
    }

    /// Leaves the screen; any in-flight fetch result will be stale.
    pub fn close(&mut self) {
        self.slug = None;
        self.record = None;
        self.loaded = false;
        self.is_loading = false;
        self.epoch += 1;
    }

    /// Applies a finished fetch. Stale epochs are dropped. `Ok(None)` marks
    /// the slug as not found; errors land in the same quiet state with a
    /// log line.
    pub fn apply_fetch(
        &mut self,
        epoch: u64,
        result: Result<Option<CollectionRecord>, Error>,
    ) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.is_loading = false;
        self.loaded = true;
        match result {
            Ok(record) => {
                self.record = record;
                true
            }
            Err(err) => {
                log::warn!(
                    "collection fetch failed for {:?}: {err}",
                    self.slug.as_deref().unwrap_or("<none>")
                );
                false
            }
        }
    }

    /// The cursor-bounded prefix of the collection's image set.
    #[must_use]
    pub fn displayed(&self) -> &[ImageRecord] {
        match &self.record {
            Some(record) => {
                let shown = self.cursor.displayed_len(record.all_images.len());
                &record.all_images[..shown]
            }
            None => &[],
        }
    }

    #[must_use]
    pub fn has_more(&self) -> bool {
        self.record
            .as_ref()
            .is_some_and(|record| self.cursor.has_more(record.all_images.len()))
    }

    pub fn load_more(&mut self) {
        let total = self
            .record
            .as_ref()
            .map_or(0, |record| record.all_images.len());
        self.cursor.load_more(total);
    }

    #[must_use]
    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{collection_record, image_record};

    fn with_images(count: usize) -> CollectionRecord {
        let mut record = collection_record("mendoza-2025", 3);
        record.all_images = (0..count)
            .map(|i| image_record(&format!("col-{i}")))
            .collect();
        record
    }

    #[test]
    fn open_resets_and_starts_loading() {
        let mut state = CollectionState::new(12);
        let epoch = state.open("mendoza-2025".into());
        assert_eq!(state.slug(), Some("mendoza-2025"));
        assert!(state.is_loading());
        assert!(!state.is_not_found());
        assert!(state.apply_fetch(epoch, Ok(Some(with_images(30)))));
        assert_eq!(state.displayed().len(), 12);
    }

    #[test]
    fn unknown_slug_lands_in_not_found() {
        let mut state = CollectionState::new(12);
        let epoch = state.open("nope".into());
        assert!(state.apply_fetch(epoch, Ok(None)));
        assert!(state.is_not_found());
        assert!(!state.is_loading());
    }

    #[test]
    fn fetch_error_lands_in_not_found_quietly() {
        let mut state = CollectionState::new(12);
        let epoch = state.open("mendoza-2025".into());
        assert!(!state.apply_fetch(epoch, Err(Error::Http("offline".into()))));
        assert!(state.is_not_found());
    }

    #[test]
    fn stale_results_after_renavigation_are_dropped() {
        let mut state = CollectionState::new(12);
        let stale = state.open("first".into());
        let current = state.open("second".into());

        assert!(!state.apply_fetch(stale, Ok(Some(with_images(5)))));
        assert!(state.record().is_none());

        assert!(state.apply_fetch(current, Ok(Some(with_images(5)))));
        assert_eq!(state.displayed().len(), 5);
    }

    #[test]
    fn close_invalidates_in_flight_fetches() {
        let mut state = CollectionState::new(12);
        let epoch = state.open("first".into());
        state.close();
        assert!(!state.apply_fetch(epoch, Ok(Some(with_images(5)))));
        assert!(state.record().is_none());
        assert!(!state.is_not_found(), "closed screen is not a 404");
    }

    #[test]
    fn paging_covers_the_whole_set_then_stops() {
        let mut state = CollectionState::new(12);
        let epoch = state.open("mendoza-2025".into());
        assert!(state.apply_fetch(epoch, Ok(Some(with_images(30)))));

        assert!(state.has_more());
        state.load_more();
        assert_eq!(state.displayed().len(), 24);
        state.load_more();
        assert_eq!(state.displayed().len(), 30);
        assert!(!state.has_more());
    }
}
