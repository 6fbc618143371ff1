use thiserror::Error;

use crate::api::types::ItemId;

/// Everything that can go wrong inside the engine.
///
/// None of these are fatal. Components return them so the caller can decide
/// how loudly to complain; `FolioRuntime` logs and carries on.
#[derive(Debug, Error)]
pub enum FolioError {
    /// A select/navigation request named an id that is not in the collection.
    #[error("no media item with id {id}")]
    InvalidReference { id: ItemId },

    /// Navigation was requested while the lightbox is closed.
    #[error("lightbox is closed")]
    InvalidState,

    /// The parallax container reported a zero-area or non-finite size.
    #[error("degenerate container bounds {width}x{height}")]
    DegenerateGeometry { width: f32, height: f32 },

    /// A certificate card index past the end of the deck.
    #[error("no certificate card at index {index} (deck has {count})")]
    NoSuchCard { index: usize, count: usize },

    /// An id too large to survive the f32 wire buffer.
    #[error("media item id {id} exceeds the wire limit")]
    IdOutOfRange { id: ItemId },

    /// Two items in a collection share an id.
    #[error("duplicate media item id {id}")]
    DuplicateId { id: ItemId },

    /// Collection or config JSON failed to parse.
    #[error("invalid json: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FolioError>;
