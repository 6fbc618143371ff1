use crate::api::config::FolioConfig;
use crate::api::error::{FolioError, Result};
use crate::api::types::{Direction, ItemId};
use crate::gallery::collection::{MediaCollection, MediaItem};
use crate::input::gesture::{DragGesture, SwipeDecision};

/// Grid + lightbox state over a fixed media collection.
///
/// `selected == None` means the lightbox is closed. When it is open the id
/// always names an item in the collection. Explicit controls and swipe
/// gestures both funnel through [`Navigator::navigate`], so the same intent
/// yields the same state whichever input produced it.
#[derive(Debug, Clone)]
pub struct Navigator {
    items: MediaCollection,
    selected: Option<ItemId>,
    visible_count: usize,
    drag: DragGesture,
    swipe_enabled: bool,
}

impl Navigator {
    pub fn new(items: MediaCollection, config: &FolioConfig) -> Self {
        let visible_count = config.visible_cap.min(items.len());
        Self {
            items,
            selected: None,
            visible_count,
            drag: DragGesture::new(config.swipe_threshold),
            swipe_enabled: false,
        }
    }

    // -- Lightbox --

    /// Open the lightbox on `id`.
    pub fn select(&mut self, id: ItemId) -> Result<()> {
        if !self.items.contains(id) {
            return Err(FolioError::InvalidReference { id });
        }
        self.selected = Some(id);
        Ok(())
    }

    /// Close the lightbox. Idempotent. Any in-flight drag is dropped.
    pub fn close(&mut self) {
        self.selected = None;
        self.drag.cancel();
    }

    /// Step one item in `direction`, wrapping at both ends.
    /// Returns the newly selected id.
    pub fn navigate(&mut self, direction: Direction) -> Result<ItemId> {
        let current = self.selected.ok_or(FolioError::InvalidState)?;
        let index = self
            .items
            .index_of(current)
            .ok_or(FolioError::InvalidReference { id: current })?;
        let id = self
            .items
            .wrapped_index(index, direction.step())
            .and_then(|i| self.items.at(i))
            .map(|item| item.id)
            .ok_or(FolioError::InvalidReference { id: current })?;
        self.selected = Some(id);
        Ok(id)
    }

    pub fn next(&mut self) -> Result<ItemId> {
        self.navigate(Direction::Next)
    }

    pub fn previous(&mut self) -> Result<ItemId> {
        self.navigate(Direction::Previous)
    }

    // -- Grid --

    /// Show the whole collection. One-way; repeated calls do nothing.
    /// Returns true if the visible count grew.
    pub fn expand_visible(&mut self) -> bool {
        let grew = self.visible_count < self.items.len();
        self.visible_count = self.items.len();
        grew
    }

    /// Whether a "view all" control still has anything to reveal.
    pub fn can_expand(&self) -> bool {
        self.visible_count < self.items.len()
    }

    pub fn visible_items(&self) -> &[MediaItem] {
        &self.items.as_slice()[..self.visible_count]
    }

    // -- Swipe --

    /// Enable or disable drag navigation (compact layout only).
    /// Disabling drops any gesture in progress.
    pub fn set_swipe_enabled(&mut self, enabled: bool) {
        if !enabled {
            self.drag.cancel();
        }
        self.swipe_enabled = enabled;
    }

    fn accepts_gestures(&self) -> bool {
        self.swipe_enabled && self.selected.is_some()
    }

    pub fn on_gesture_start(&mut self) {
        if self.accepts_gestures() {
            self.drag.start();
        }
    }

    pub fn on_gesture_move(&mut self, offset: f32) {
        if self.accepts_gestures() {
            self.drag.track(offset);
        }
    }

    /// Finish a drag. Returns where the swipe went, if it was long enough.
    pub fn on_gesture_end(&mut self, offset: f32) -> Option<(Direction, ItemId)> {
        if !self.accepts_gestures() {
            self.drag.cancel();
            return None;
        }
        match self.drag.finish(offset) {
            SwipeDecision::Stay => None,
            SwipeDecision::Navigate(direction) => {
                self.navigate(direction).ok().map(|id| (direction, id))
            }
        }
    }

    /// Drag abandoned without an end event: no navigation.
    pub fn on_gesture_cancel(&mut self) {
        self.drag.cancel();
    }

    // -- Accessors --

    pub fn selected_id(&self) -> Option<ItemId> {
        self.selected
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected.and_then(|id| self.items.index_of(id))
    }

    pub fn selected_item(&self) -> Option<&MediaItem> {
        self.selected.and_then(|id| self.items.get(id))
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn drag_offset(&self) -> f32 {
        self.drag.offset()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    pub fn swipe_enabled(&self) -> bool {
        self.swipe_enabled
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn items(&self) -> &MediaCollection {
        &self.items
    }
}
