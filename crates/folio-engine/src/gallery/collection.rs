use serde::{Deserialize, Serialize};

use crate::api::error::{FolioError, Result};
use crate::api::types::ItemId;

/// One entry in the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: ItemId,
    pub title: String,
    /// Category for gallery items, issuer for certificates.
    #[serde(alias = "issuer")]
    pub category: String,
    /// Image URL or path, resolved by the rendering layer.
    #[serde(rename = "image")]
    pub image_ref: String,
}

impl MediaItem {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        category: impl Into<String>,
        image_ref: impl Into<String>,
    ) -> Self {
        Self {
            id: ItemId(id),
            title: title.into(),
            category: category.into(),
            image_ref: image_ref.into(),
        }
    }
}

/// Ordered, fixed set of media items with unique ids.
/// Sized for a gallery page (tens of items); lookups scan the slice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaCollection {
    items: Vec<MediaItem>,
}

impl MediaCollection {
    /// Build a collection, rejecting duplicate ids and ids above [`ItemId::MAX`].
    pub fn new(items: Vec<MediaItem>) -> Result<Self> {
        for (i, item) in items.iter().enumerate() {
            if item.id.0 > ItemId::MAX {
                return Err(FolioError::IdOutOfRange { id: item.id });
            }
            if items[..i].iter().any(|other| other.id == item.id) {
                return Err(FolioError::DuplicateId { id: item.id });
            }
        }
        Ok(Self { items })
    }

    /// Parse a JSON array of `{ id, title, category, image }` objects.
    pub fn from_json(json: &str) -> Result<Self> {
        let items: Vec<MediaItem> = serde_json::from_str(json)?;
        Self::new(items)
    }

    /// Ordinal position of `id`, if present.
    pub fn index_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn get(&self, id: ItemId) -> Option<&MediaItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn at(&self, index: usize) -> Option<&MediaItem> {
        self.items.get(index)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.index_of(id).is_some()
    }

    /// Index reached by moving `step` places from `index`, wrapping both ways.
    /// `None` only for an empty collection.
    pub fn wrapped_index(&self, index: usize, step: isize) -> Option<usize> {
        let len = self.items.len() as isize;
        if len == 0 {
            return None;
        }
        Some((index as isize + step).rem_euclid(len) as usize)
    }

    pub fn as_slice(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &MediaItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
