// SPDX-License-Identifier: MPL-2.0
//! Bounded viewing history.
//!
//! The history keeps the most recently viewed images, newest first, with at
//! most one entry per image id and at most [`HISTORY_LIMIT`] entries.

use super::{Image, ImageId};
use serde::{Deserialize, Serialize};

/// Maximum number of entries kept in the viewing history.
pub const HISTORY_LIMIT: usize = 10;

/// Most-recent-first, id-unique list of viewed images.
///
/// Deserialization goes through [`ViewHistory::from_entries`], so a snapshot
/// with duplicates or too many entries still yields a valid history.
///
/// # Example
///
/// ```
/// use gallery_lens::domain::gallery::{ImageId, ViewHistory};
/// # use gallery_lens::domain::gallery::Image;
/// # fn sample(id: u64) -> Image {
/// #     Image {
/// #         id: ImageId::new(id), src: String::new(), thumbnail: String::new(),
/// #         author: String::new(), alt: String::new(), tags: vec![],
/// #         category: String::new(), likes: 0, views: 0, is_favorite: false,
/// #         created_at: chrono::DateTime::<chrono::Utc>::UNIX_EPOCH, resolution: String::new(),
/// #         size: String::new(),
/// #     }
/// # }
///
/// let mut history = ViewHistory::new();
/// history.push(sample(1));
/// history.push(sample(2));
/// history.push(sample(1));
///
/// let ids: Vec<u64> = history.iter().map(|img| img.id.value()).collect();
/// assert_eq!(ids, vec![1, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Image>", into = "Vec<Image>")]
pub struct ViewHistory {
    entries: Vec<Image>,
}

impl ViewHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a history from entries ordered newest first.
    ///
    /// Later duplicates of an id are dropped and the result is truncated to
    /// [`HISTORY_LIMIT`].
    #[must_use]
    pub fn from_entries(entries: Vec<Image>) -> Self {
        let mut unique: Vec<Image> = Vec::with_capacity(entries.len().min(HISTORY_LIMIT));
        for entry in entries {
            if unique.len() == HISTORY_LIMIT {
                break;
            }
            if !unique.iter().any(|seen| seen.id == entry.id) {
                unique.push(entry);
            }
        }
        Self { entries: unique }
    }

    /// Puts the image at the front, dropping any earlier entry for the same id.
    pub fn push(&mut self, image: Image) {
        self.entries.retain(|entry| entry.id != image.id);
        self.entries.insert(0, image);
        self.entries.truncate(HISTORY_LIMIT);
    }

    /// Returns the entries, newest first.
    #[must_use]
    pub fn as_slice(&self) -> &[Image] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &Image> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: ImageId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    /// Returns the most recently viewed image.
    #[must_use]
    pub fn latest(&self) -> Option<&Image> {
        self.entries.first()
    }
}

impl From<Vec<Image>> for ViewHistory {
    fn from(entries: Vec<Image>) -> Self {
        Self::from_entries(entries)
    }
}

impl From<ViewHistory> for Vec<Image> {
    fn from(history: ViewHistory) -> Self {
        history.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::image;

    fn ids(history: &ViewHistory) -> Vec<u64> {
        history.iter().map(|img| img.id.value()).collect()
    }

    #[test]
    fn push_puts_latest_first() {
        let mut history = ViewHistory::new();
        history.push(image(1, "A", &[], 0, 0));
        history.push(image(2, "A", &[], 0, 0));
        assert_eq!(ids(&history), vec![2, 1]);
        assert_eq!(history.latest().map(|img| img.id), Some(ImageId::new(2)));
    }

    #[test]
    fn revisiting_moves_to_front_without_growing() {
        let mut history = ViewHistory::new();
        for id in 1..=3 {
            history.push(image(id, "A", &[], 0, 0));
        }
        history.push(image(1, "A", &[], 0, 0));
        assert_eq!(ids(&history), vec![1, 3, 2]);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn revisit_replaces_stale_entry() {
        let mut history = ViewHistory::new();
        history.push(image(1, "A", &[], 0, 0));
        history.push(image(1, "A", &[], 1, 0));
        assert_eq!(history.len(), 1);
        assert_eq!(history.as_slice()[0].views, 1);
    }

    #[test]
    fn never_exceeds_limit() {
        let mut history = ViewHistory::new();
        for id in 1..=25 {
            history.push(image(id, "A", &[], 0, 0));
            assert!(history.len() <= HISTORY_LIMIT);
        }
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(ids(&history), (16..=25).rev().collect::<Vec<_>>());
    }

    #[test]
    fn from_entries_drops_duplicates_and_truncates() {
        let mut entries = vec![image(1, "A", &[], 0, 0), image(1, "A", &[], 9, 0)];
        entries.extend((2..=15).map(|id| image(id, "A", &[], 0, 0)));

        let history = ViewHistory::from_entries(entries);

        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history.as_slice()[0].views, 0);
        assert_eq!(ids(&history), (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn deserializing_sanitizes_entries() {
        let raw = vec![image(3, "A", &[], 0, 0), image(3, "A", &[], 0, 0)];
        let json = serde_json::to_string(&raw).unwrap();
        let history: ViewHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(ids(&history), vec![3]);
        assert!(history.contains(ImageId::new(3)));
    }
}
