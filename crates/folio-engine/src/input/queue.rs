use crate::api::types::ItemId;
use crate::layout::viewport::Bounds;

/// Key code the host sends for Escape (`KeyboardEvent.keyCode`).
pub const KEY_ESCAPE: u32 = 27;

/// Input events the runtime understands.
/// Coordinates are client (CSS pixel) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The viewport width changed (or was measured for the first time).
    Resize { width: f32 },
    /// The pointer moved over the parallax container.
    ScenePointerMove { x: f32, y: f32, bounds: Bounds },
    /// The pointer left the parallax container.
    ScenePointerLeave,
    /// A horizontal drag began on the lightbox media.
    GestureStart,
    /// The drag is now `dx` from where it started.
    GestureMove { dx: f32 },
    /// The drag ended `dx` from where it started.
    GestureEnd { dx: f32 },
    /// The drag was abandoned (pointer capture lost, touch cancelled).
    GestureCancel,
    /// A grid tile was clicked.
    Select { id: ItemId },
    /// The "next" control was clicked.
    Next,
    /// The "previous" control was clicked.
    Previous,
    /// The close control was clicked.
    Close,
    /// The overlay around the lightbox content was clicked.
    BackdropClick,
    /// The "view all" control was clicked.
    ExpandVisible,
    /// A key was pressed.
    KeyDown { key_code: u32 },
    /// The pointer entered certificate card `index`.
    CardEnter { index: usize },
    /// The pointer left certificate card `index`.
    CardLeave { index: usize },
    /// Certificate card `index` was clicked or tapped.
    CardClick { index: usize },
    /// A card's "preview" button was clicked.
    CertificatePreview { id: ItemId },
    /// The certificate preview was dismissed (close button or overlay).
    CertificateClose,
}

/// Input collected between frames, in the order the host saw it.
///
/// The runtime empties it at the top of every tick, so anything pushed after
/// a resize is handled under the new layout.
#[derive(Debug, Default)]
pub struct InputQueue {
    pending: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.pending.push(event);
    }

    /// Take everything pending, oldest first.
    pub fn drain(&mut self) -> std::vec::Drain<'_, InputEvent> {
        self.pending.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
