use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Stable identifier of a media item in a collection.
///
/// Ids travel to JS as f32, so only values up to [`ItemId::MAX`] are exact.
/// `MediaCollection::new` rejects anything larger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl ItemId {
    /// Largest id an f32 represents exactly (2^24).
    pub const MAX: u32 = 1 << 24;
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Direction of a single navigation step through the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    /// Signed step applied to the current index.
    pub fn step(self) -> isize {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }
}

/// A state-change notification communicated from Rust to JavaScript.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct FolioEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl FolioEvent {
    pub const FLOATS: usize = 4;

    pub const SELECTION_CHANGED: f32 = 1.0;
    pub const LIGHTBOX_CLOSED: f32 = 2.0;
    pub const VISIBLE_EXPANDED: f32 = 3.0;
    pub const LAYOUT_CHANGED: f32 = 4.0;
    pub const SWIPE_NAVIGATED: f32 = 5.0;
    pub const CARD_FLIPPED: f32 = 6.0;
    pub const CERTIFICATE_OPENED: f32 = 7.0;
    pub const CERTIFICATE_CLOSED: f32 = 8.0;

    pub fn selection_changed(id: ItemId) -> Self {
        Self { kind: Self::SELECTION_CHANGED, a: id.0 as f32, ..Default::default() }
    }

    pub fn lightbox_closed() -> Self {
        Self { kind: Self::LIGHTBOX_CLOSED, ..Default::default() }
    }

    pub fn visible_expanded(count: usize) -> Self {
        Self { kind: Self::VISIBLE_EXPANDED, a: count as f32, ..Default::default() }
    }

    pub fn layout_changed(compact: bool) -> Self {
        Self {
            kind: Self::LAYOUT_CHANGED,
            a: if compact { 1.0 } else { 0.0 },
            ..Default::default()
        }
    }

    pub fn swipe_navigated(id: ItemId, direction: Direction) -> Self {
        Self {
            kind: Self::SWIPE_NAVIGATED,
            a: id.0 as f32,
            b: direction.step() as f32,
            ..Default::default()
        }
    }

    /// `a` = card index, `b` = 1 when the back is now showing.
    pub fn card_flipped(index: usize, flipped: bool) -> Self {
        Self {
            kind: Self::CARD_FLIPPED,
            a: index as f32,
            b: if flipped { 1.0 } else { 0.0 },
            ..Default::default()
        }
    }

    pub fn certificate_opened(id: ItemId) -> Self {
        Self { kind: Self::CERTIFICATE_OPENED, a: id.0 as f32, ..Default::default() }
    }

    pub fn certificate_closed() -> Self {
        Self { kind: Self::CERTIFICATE_CLOSED, ..Default::default() }
    }
}
