// SPDX-License-Identifier: MPL-2.0
//! Core gallery types for the domain layer.
//!
//! These types represent pure data. Serialized field names are camelCase so
//! that snapshots keep the shape of the original browser storage entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// ImageId
// =============================================================================

/// Unique, positive image identifier assigned by the store.
///
/// # Example
///
/// ```
/// use gallery_lens::domain::gallery::ImageId;
///
/// let id = ImageId::new(41);
/// assert_eq!(id.next().value(), 42);
/// assert_eq!(ImageId::FIRST.value(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(u64);

impl ImageId {
    /// Id given to the first image of an empty collection.
    pub const FIRST: Self = Self(1);

    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw id value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the id following this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl From<u64> for ImageId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Image
// =============================================================================

/// A single gallery entry with display metadata and engagement counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub id: ImageId,
    /// Full-size source URL.
    pub src: String,
    pub thumbnail: String,
    pub author: String,
    pub alt: String,
    /// Tags in display order. Matching ignores order.
    pub tags: Vec<String>,
    pub category: String,
    /// Like counter. Signed because unfavoriting decrements it without a floor.
    pub likes: i64,
    pub views: u64,
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
    /// Display-only resolution, e.g. `800x600`.
    pub resolution: String,
    /// Display-only file size, e.g. `2500 KB`.
    pub size: String,
}

impl Image {
    /// Builds an image from a draft and the id assigned to it.
    #[must_use]
    pub fn from_draft(id: ImageId, draft: ImageDraft) -> Self {
        Self {
            id,
            src: draft.src,
            thumbnail: draft.thumbnail,
            author: draft.author,
            alt: draft.alt,
            tags: draft.tags,
            category: draft.category,
            likes: draft.likes,
            views: draft.views,
            is_favorite: draft.is_favorite,
            created_at: draft.created_at,
            resolution: draft.resolution,
            size: draft.size,
        }
    }

    /// Returns `true` if the image carries the given tag (exact match).
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

// =============================================================================
// ImageDraft
// =============================================================================

/// An image payload that has not been given an id yet.
///
/// Produced by the upload flow; the store assigns the id on insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDraft {
    pub src: String,
    pub thumbnail: String,
    pub author: String,
    pub alt: String,
    pub tags: Vec<String>,
    pub category: String,
    pub likes: i64,
    pub views: u64,
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
    pub resolution: String,
    pub size: String,
}

impl From<Image> for ImageDraft {
    fn from(image: Image) -> Self {
        Self {
            src: image.src,
            thumbnail: image.thumbnail,
            author: image.author,
            alt: image.alt,
            tags: image.tags,
            category: image.category,
            likes: image.likes,
            views: image.views,
            is_favorite: image.is_favorite,
            created_at: image.created_at,
            resolution: image.resolution,
            size: image.size,
        }
    }
}

// =============================================================================
// ImagePatch
// =============================================================================

/// Partial update for an existing image. `None` fields are left unchanged.
///
/// The id is deliberately absent: an image keeps its id for its whole life.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePatch {
    pub src: Option<String>,
    pub thumbnail: Option<String>,
    pub author: Option<String>,
    pub alt: Option<String>,
    pub tags: Option<Vec<String>>,
    pub category: Option<String>,
    pub likes: Option<i64>,
    pub views: Option<u64>,
    pub is_favorite: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
    pub resolution: Option<String>,
    pub size: Option<String>,
}

impl ImagePatch {
    /// Returns `true` if the patch would not change anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Returns a copy of `image` with the patch merged in.
    #[must_use]
    pub fn applied_to(&self, image: &Image) -> Image {
        let patch = self.clone();
        Image {
            id: image.id,
            src: patch.src.unwrap_or_else(|| image.src.clone()),
            thumbnail: patch.thumbnail.unwrap_or_else(|| image.thumbnail.clone()),
            author: patch.author.unwrap_or_else(|| image.author.clone()),
            alt: patch.alt.unwrap_or_else(|| image.alt.clone()),
            tags: patch.tags.unwrap_or_else(|| image.tags.clone()),
            category: patch.category.unwrap_or_else(|| image.category.clone()),
            likes: patch.likes.unwrap_or(image.likes),
            views: patch.views.unwrap_or(image.views),
            is_favorite: patch.is_favorite.unwrap_or(image.is_favorite),
            created_at: patch.created_at.unwrap_or(image.created_at),
            resolution: patch.resolution.unwrap_or_else(|| image.resolution.clone()),
            size: patch.size.unwrap_or_else(|| image.size.clone()),
        }
    }
}
