// SPDX-License-Identifier: MPL-2.0
//! Lightbox controller: the modal image viewer over a sibling list.
//!
//! Opening carries the clicked image's siblings (whatever grid or carousel
//! it came from) and its true index. While open, next/previous stop at the
//! sequence boundaries — no wraparound — and every navigation resets the
//! view transform. Zoom is a bounded factor; pan is a grab-and-drag offset
//! that only exists above identity zoom and snaps back to zero the moment
//! zoom returns to 1.0.
//!
//! The pan offset drives a hidden-scrollbar scrollable in the view layer,
//! so it is clamped to non-negative components the same way the viewer's
//! drag state clamps its viewport offset.

use crate::config::defaults::MIN_ZOOM_FACTOR;
use crate::domain::{ExifData, ImageRecord};
use iced::{Point, Vector};

/// One entry of the sibling list.
///
/// Carries everything the overlay needs so the lightbox never reaches back
/// into whichever set it was opened from.
#[derive(Debug, Clone, PartialEq)]
pub struct LightboxItem {
    /// Full-size asset URL; also the glow-cache key.
    pub url: String,
    pub caption: Option<String>,
    pub location: Option<String>,
    pub exif: Option<ExifData>,
}

impl LightboxItem {
    /// Builds an item from a record, skipping records without a resolvable
    /// asset URL (they are not rendered, so they cannot be clicked either).
    #[must_use]
    pub fn from_record(record: &ImageRecord) -> Option<Self> {
        Some(Self {
            url: record.asset_url()?.to_string(),
            caption: record.caption.clone(),
            location: record.location.clone(),
            exif: record.exif().cloned(),
        })
    }
}

/// Bounded zoom factor.
///
/// The minimum is always identity; the maximum and step come from
/// configuration since different surfaces historically used different
/// ceilings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLevel {
    factor: f32,
    max: f32,
    step: f32,
}

impl ZoomLevel {
    #[must_use]
    pub fn new(max: f32, step: f32) -> Self {
        Self {
            factor: MIN_ZOOM_FACTOR,
            max: max.max(MIN_ZOOM_FACTOR),
            step: step.max(0.0),
        }
    }

    #[must_use]
    pub fn factor(self) -> f32 {
        self.factor
    }

    #[must_use]
    pub fn max(self) -> f32 {
        self.max
    }

    #[must_use]
    pub fn is_zoomed(self) -> bool {
        self.factor > MIN_ZOOM_FACTOR
    }

    #[must_use]
    pub fn at_max(self) -> bool {
        self.factor >= self.max
    }

    fn zoom_in(&mut self) {
        self.factor = (self.factor + self.step).min(self.max);
    }

    fn zoom_out(&mut self) {
        self.factor = (self.factor - self.step).max(MIN_ZOOM_FACTOR);
    }

    fn reset(&mut self) {
        self.factor = MIN_ZOOM_FACTOR;
    }
}

/// Grab-and-drag bookkeeping while a pan is in progress.
#[derive(Debug, Clone, Copy)]
struct Drag {
    start_cursor: Point,
    start_pan: Vector,
}

/// Modal viewer state. Closed means an empty sibling list.
#[derive(Debug)]
pub struct LightboxState {
    items: Vec<LightboxItem>,
    current: usize,
    zoom: ZoomLevel,
    pan: Vector,
    drag: Option<Drag>,
}

impl LightboxState {
    #[must_use]
    pub fn new(zoom_max: f32, zoom_step: f32) -> Self {
        Self {
            items: Vec::new(),
            current: 0,
            zoom: ZoomLevel::new(zoom_max, zoom_step),
            pan: Vector::ZERO,
            drag: None,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        !self.items.is_empty()
    }

    /// Opens over a sibling list at the clicked index (clamped into range).
    /// An empty list is a no-op — there is nothing to show.
    pub fn open(&mut self, items: Vec<LightboxItem>, index: usize) {
        if items.is_empty() {
            return;
        }
        self.current = index.min(items.len() - 1);
        self.items = items;
        self.reset_view();
    }

    /// Closes and resets the view transform.
    pub fn close(&mut self) {
        self.items.clear();
        self.current = 0;
        self.reset_view();
    }

    #[must_use]
    pub fn items(&self) -> &[LightboxItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current(&self) -> Option<&LightboxItem> {
        self.items.get(self.current)
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current + 1 < self.items.len()
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.is_open() && self.current > 0
    }

    /// Advances to the next sibling. A no-op at the end of the sequence.
    /// Returns whether navigation happened.
    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.current += 1;
        self.reset_view();
        true
    }

    /// Steps back to the previous sibling. A no-op at index zero.
    /// Returns whether navigation happened.
    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.current -= 1;
        self.reset_view();
        true
    }

    #[must_use]
    pub fn zoom(&self) -> ZoomLevel {
        self.zoom
    }

    #[must_use]
    pub fn zoom_factor(&self) -> f32 {
        self.zoom.factor()
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.zoom.is_zoomed()
    }

    pub fn zoom_in(&mut self) {
        if self.is_open() {
            self.zoom.zoom_in();
        }
    }

    /// Zooms out one step; pan snaps to zero when the factor lands back on
    /// identity.
    pub fn zoom_out(&mut self) {
        if !self.is_open() {
            return;
        }
        self.zoom.zoom_out();
        if !self.zoom.is_zoomed() {
            self.pan = Vector::ZERO;
            self.drag = None;
        }
    }

    pub fn reset_zoom(&mut self) {
        if self.is_open() {
            self.reset_view();
        }
    }

    /// Wheel input: up zooms in, down zooms out.
    pub fn on_wheel(&mut self, delta_y: f32) {
        if delta_y > 0.0 {
            self.zoom_in();
        } else if delta_y < 0.0 {
            self.zoom_out();
        }
    }

    #[must_use]
    pub fn pan(&self) -> Vector {
        self.pan
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Starts a grab at the cursor. Ignored unless open and zoomed in.
    pub fn begin_drag(&mut self, cursor: Point) {
        if self.is_open() && self.is_zoomed() {
            self.drag = Some(Drag {
                start_cursor: cursor,
                start_pan: self.pan,
            });
        }
    }

    /// Updates the pan from cursor movement. Returns the new pan while a
    /// drag is in progress so the caller can scroll the stage.
    pub fn drag_to(&mut self, cursor: Point) -> Option<Vector> {
        let drag = self.drag?;
        if !self.is_zoomed() {
            return None;
        }
        let delta_x = cursor.x - drag.start_cursor.x;
        let delta_y = cursor.y - drag.start_cursor.y;
        // Scroll-offset semantics: moving the cursor right pulls the image
        // right, which means the stage offset shrinks. Clamped at zero like
        // any scrollable offset.
        self.pan = Vector::new(
            (drag.start_pan.x - delta_x).max(0.0),
            (drag.start_pan.y - delta_y).max(0.0),
        );
        Some(self.pan)
    }

    /// Ends the grab, keeping the pan where it landed.
    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    fn reset_view(&mut self) {
        self.zoom.reset();
        self.pan = Vector::ZERO;
        self.drag = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{image_record, lightbox_items};

    fn open_lightbox(count: usize, index: usize) -> LightboxState {
        let mut state = LightboxState::new(3.0, 0.5);
        state.open(lightbox_items(count), index);
        state
    }

    #[test]
    fn starts_closed() {
        let state = LightboxState::new(3.0, 0.5);
        assert!(!state.is_open());
        assert!(state.current().is_none());
    }

    #[test]
    fn open_lands_on_the_clicked_index() {
        let state = open_lightbox(5, 2);
        assert!(state.is_open());
        assert_eq!(state.current_index(), 2);
        assert_eq!(state.current().map(|i| i.url.as_str()), Some("https://cdn.example/2.jpg"));
    }

    #[test]
    fn open_clamps_an_out_of_range_index() {
        let state = open_lightbox(3, 99);
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn open_with_no_items_stays_closed() {
        let mut state = LightboxState::new(3.0, 0.5);
        state.open(Vec::new(), 0);
        assert!(!state.is_open());
    }

    #[test]
    fn navigation_stops_at_boundaries_without_wrapping() {
        let mut state = open_lightbox(5, 0);
        assert!(!state.has_previous());
        assert!(!state.previous(), "previous at index 0 is a no-op");
        assert_eq!(state.current_index(), 0);

        assert!(state.next());
        assert_eq!(state.current_index(), 1);

        let mut state = open_lightbox(5, 4);
        assert!(!state.has_next());
        assert!(!state.next(), "next at the last index is a no-op");
        assert_eq!(state.current_index(), 4);
    }

    #[test]
    fn navigation_resets_zoom_and_pan() {
        let mut state = open_lightbox(5, 1);
        state.zoom_in();
        state.zoom_in();
        state.begin_drag(Point::new(10.0, 10.0));
        state.drag_to(Point::new(4.0, 2.0));
        assert!(state.is_zoomed());

        assert!(state.next());
        assert_eq!(state.zoom_factor(), 1.0);
        assert_eq!(state.pan(), Vector::ZERO);
        assert!(!state.is_dragging());
    }

    #[test]
    fn zoom_clamps_to_its_configured_bounds() {
        let mut state = open_lightbox(3, 0);
        for _ in 0..20 {
            state.zoom_in();
        }
        assert_eq!(state.zoom_factor(), 3.0);
        assert!(state.zoom().at_max());

        for _ in 0..20 {
            state.zoom_out();
        }
        assert_eq!(state.zoom_factor(), 1.0);
    }

    #[test]
    fn wider_zoom_ceiling_is_honored() {
        let mut state = LightboxState::new(4.0, 0.5);
        state.open(lightbox_items(2), 0);
        for _ in 0..20 {
            state.zoom_in();
        }
        assert_eq!(state.zoom_factor(), 4.0);
    }

    #[test]
    fn returning_to_identity_snaps_pan_to_zero() {
        let mut state = open_lightbox(3, 0);
        state.zoom_in(); // 1.5
        state.begin_drag(Point::new(50.0, 50.0));
        state.drag_to(Point::new(20.0, 30.0));
        assert_ne!(state.pan(), Vector::ZERO);

        state.zoom_out(); // back to 1.0
        assert_eq!(state.zoom_factor(), 1.0);
        assert_eq!(state.pan(), Vector::ZERO);
        assert!(!state.is_dragging());
    }

    #[test]
    fn pan_is_ignored_at_identity_zoom() {
        let mut state = open_lightbox(3, 0);
        state.begin_drag(Point::new(10.0, 10.0));
        assert!(!state.is_dragging());
        assert_eq!(state.drag_to(Point::new(0.0, 0.0)), None);
        assert_eq!(state.pan(), Vector::ZERO);
    }

    #[test]
    fn drag_moves_pan_by_the_cursor_delta() {
        let mut state = open_lightbox(3, 0);
        state.zoom_in();
        // Pre-existing pan so the grab has somewhere to start from.
        state.begin_drag(Point::new(100.0, 100.0));
        let pan = state.drag_to(Point::new(80.0, 90.0));
        // Cursor moved left/up by (20, 10): the stage offset grows.
        assert_eq!(pan, Some(Vector::new(20.0, 10.0)));

        // Continue the same grab; deltas stay relative to the grab start.
        let pan = state.drag_to(Point::new(70.0, 85.0));
        assert_eq!(pan, Some(Vector::new(30.0, 15.0)));
    }

    #[test]
    fn pan_components_clamp_at_zero() {
        let mut state = open_lightbox(3, 0);
        state.zoom_in();
        state.begin_drag(Point::new(0.0, 0.0));
        let pan = state.drag_to(Point::new(500.0, 500.0));
        assert_eq!(pan, Some(Vector::ZERO));
    }

    #[test]
    fn end_drag_keeps_the_pan_in_place() {
        let mut state = open_lightbox(3, 0);
        state.zoom_in();
        state.begin_drag(Point::new(10.0, 10.0));
        state.drag_to(Point::new(0.0, 0.0));
        state.end_drag();
        assert!(!state.is_dragging());
        assert_eq!(state.pan(), Vector::new(10.0, 10.0));
        assert_eq!(state.drag_to(Point::new(100.0, 100.0)), None);
    }

    #[test]
    fn wheel_up_zooms_in_and_wheel_down_zooms_out() {
        let mut state = open_lightbox(3, 0);
        state.on_wheel(1.0);
        assert_eq!(state.zoom_factor(), 1.5);
        state.on_wheel(-1.0);
        assert_eq!(state.zoom_factor(), 1.0);
        state.on_wheel(0.0);
        assert_eq!(state.zoom_factor(), 1.0);
    }

    #[test]
    fn close_resets_everything() {
        let mut state = open_lightbox(4, 3);
        state.zoom_in();
        state.close();
        assert!(!state.is_open());
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.zoom_factor(), 1.0);
        assert_eq!(state.pan(), Vector::ZERO);
    }

    #[test]
    fn items_skip_records_without_urls() {
        let record = image_record("ok");
        assert!(LightboxItem::from_record(&record).is_some());

        let mut broken = image_record("broken");
        broken.image.asset = None;
        assert!(LightboxItem::from_record(&broken).is_none());
    }

    #[test]
    fn zoom_operations_are_inert_while_closed() {
        let mut state = LightboxState::new(3.0, 0.5);
        state.zoom_in();
        state.on_wheel(1.0);
        assert_eq!(state.zoom_factor(), 1.0);
    }
}
