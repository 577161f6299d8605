// SPDX-License-Identifier: MPL-2.0
//! Rendition fetching and the bounded handle cache.
//!
//! Every grid cell, carousel slot and lightbox image is a remote rendition.
//! Fetched bytes become `iced` image handles and live in an LRU cache so
//! paging through a large portfolio cannot grow memory without bound.

use crate::content::http_client;
use crate::error::{Error, Result};
use iced::widget::image::Handle;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Default number of decoded handles kept alive.
pub const DEFAULT_CACHE_CAPACITY: usize = 256;

/// Downloads one rendition and wraps the bytes in an image handle.
///
/// Decoding happens lazily inside the renderer; this function only moves
/// bytes.
///
/// # Errors
///
/// Returns an error on transport failure or a non-success status.
pub async fn fetch_image(url: String) -> Result<Handle> {
    let client = http_client()?;
    let response = client.get(&url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Api(format!(
            "image fetch failed with status {status}"
        )));
    }
    let bytes = response.bytes().await?;
    Ok(Handle::from_bytes(bytes.to_vec()))
}

/// LRU-bounded map from rendition URL to image handle.
#[derive(Debug)]
pub struct ImageCache {
    entries: LruCache<String, Handle>,
}

impl ImageCache {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// Looks up a handle, marking it most recently used.
    #[must_use]
    pub fn get(&mut self, url: &str) -> Option<Handle> {
        self.entries.get(url).cloned()
    }

    /// Looks up a handle without touching recency. The view layer reads
    /// through this; only explicit `get` calls promote entries.
    #[must_use]
    pub fn peek(&self, url: &str) -> Option<Handle> {
        self.entries.peek(url).cloned()
    }

    /// Whether a handle is cached, without touching recency.
    #[must_use]
    pub fn contains(&self, url: &str) -> bool {
        self.entries.contains(url)
    }

    pub fn insert(&mut self, url: String, handle: Handle) {
        self.entries.put(url, handle);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle(tag: u8) -> Handle {
        Handle::from_bytes(vec![tag; 4])
    }

    #[test]
    fn insert_then_get_round_trips() {
        let mut cache = ImageCache::new(4);
        cache.insert("a".into(), handle(1));
        assert!(cache.contains("a"));
        assert!(cache.get("a").is_some());
        assert!(cache.get("b").is_none());
    }

    #[test]
    fn capacity_bound_evicts_least_recently_used() {
        let mut cache = ImageCache::new(2);
        cache.insert("a".into(), handle(1));
        cache.insert("b".into(), handle(2));
        // Touch "a" so "b" becomes the eviction candidate.
        let _ = cache.get("a");
        cache.insert("c".into(), handle(3));

        assert!(cache.contains("a"));
        assert!(!cache.contains("b"));
        assert!(cache.contains("c"));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn zero_capacity_is_clamped_to_one() {
        let mut cache = ImageCache::new(0);
        cache.insert("a".into(), handle(1));
        assert_eq!(cache.len(), 1);
    }
}
