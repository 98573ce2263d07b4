// SPDX-License-Identifier: MPL-2.0
//! Aggregate gallery statistics.

use super::Image;
use serde::Serialize;
use std::collections::HashSet;

/// Summary counters shown in the gallery header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageStats {
    pub total: usize,
    pub favorites: usize,
    /// Number of distinct categories across all images.
    pub categories: usize,
    pub total_views: u64,
    pub total_likes: i64,
}

impl ImageStats {
    /// Computes statistics over the collection and its favorites.
    #[must_use]
    pub fn collect(images: &[Image], favorites: &[Image]) -> Self {
        let categories: HashSet<&str> = images.iter().map(|img| img.category.as_str()).collect();
        Self {
            total: images.len(),
            favorites: favorites.len(),
            categories: categories.len(),
            total_views: images.iter().map(|img| img.views).sum(),
            total_likes: images.iter().map(|img| img.likes).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::image;

    #[test]
    fn empty_collection_has_zero_stats() {
        assert_eq!(ImageStats::collect(&[], &[]), ImageStats::default());
    }

    #[test]
    fn counts_distinct_categories_and_sums_counters() {
        let images = vec![
            image(1, "Nature", &["a"], 5, 2),
            image(2, "City", &["b"], 9, 1),
            image(3, "Nature", &[], 1, -1),
        ];
        let favorites = vec![images[1].clone()];

        let stats = ImageStats::collect(&images, &favorites);

        assert_eq!(stats.total, 3);
        assert_eq!(stats.favorites, 1);
        assert_eq!(stats.categories, 2);
        assert_eq!(stats.total_views, 15);
        assert_eq!(stats.total_likes, 2);
    }
}
