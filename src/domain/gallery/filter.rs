// SPDX-License-Identifier: MPL-2.0
//! Gallery filtering and sorting.
//!
//! Filters are combined with AND logic - all active clauses must match for an
//! image to be visible. An empty string or empty tag list means the clause is
//! inactive. Sorting is applied after filtering and is stable.
//!
//! # Example
//!
//! ```
//! use gallery_lens::domain::gallery::{FiltersPatch, GalleryFilters, SortBy};
//!
//! let mut filters = GalleryFilters::default();
//! filters.apply(FiltersPatch::new().category("Nature").sort_by(SortBy::Popular));
//!
//! assert!(filters.is_active());
//! assert_eq!(filters.active_count(), 1);
//! ```

use super::Image;
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Sort Order
// =============================================================================

/// Ordering applied to the filtered images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortBy {
    /// Most recent `created_at` first.
    #[default]
    Newest,
    /// Oldest `created_at` first.
    Oldest,
    /// Most viewed first.
    Popular,
    /// Most liked first.
    Likes,
}

impl SortBy {
    /// All sort orders, in the order a selector would list them.
    pub const ALL: [SortBy; 4] = [SortBy::Newest, SortBy::Oldest, SortBy::Popular, SortBy::Likes];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::Newest => "newest",
            SortBy::Oldest => "oldest",
            SortBy::Popular => "popular",
            SortBy::Likes => "likes",
        }
    }

    /// Compares two images according to this order.
    #[must_use]
    pub fn compare(self, a: &Image, b: &Image) -> Ordering {
        match self {
            SortBy::Newest => b.created_at.cmp(&a.created_at),
            SortBy::Oldest => a.created_at.cmp(&b.created_at),
            SortBy::Popular => b.views.cmp(&a.views),
            SortBy::Likes => b.likes.cmp(&a.likes),
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortBy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "newest" => Ok(SortBy::Newest),
            "oldest" => Ok(SortBy::Oldest),
            "popular" => Ok(SortBy::Popular),
            "likes" => Ok(SortBy::Likes),
            other => Err(Error::Cli(format!("invalid sort order: {}", other))),
        }
    }
}

// =============================================================================
// Gallery Filters
// =============================================================================

/// Active filter criteria. Always fully populated; empty values are inactive.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryFilters {
    /// Exact, case-sensitive category. Empty = no filter.
    pub category: String,
    /// Image must carry at least one of these tags. Empty = no filter.
    pub tags: Vec<String>,
    /// Exact author. Empty = no filter.
    pub author: String,
    pub sort_by: SortBy,
    /// Case-insensitive substring over author, tags and category. Empty = no filter.
    pub search_query: String,
}

impl GalleryFilters {
    /// Creates filters with no active criteria and the default sort order.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the image passes every active clause.
    #[must_use]
    pub fn matches(&self, image: &Image) -> bool {
        self.matches_category(image)
            && self.matches_tags(image)
            && self.matches_author(image)
            && self.matches_search(image)
    }

    #[must_use]
    pub fn matches_category(&self, image: &Image) -> bool {
        self.category.is_empty() || image.category == self.category
    }

    /// OR semantics: one shared tag is enough.
    #[must_use]
    pub fn matches_tags(&self, image: &Image) -> bool {
        self.tags.is_empty() || self.tags.iter().any(|tag| image.has_tag(tag))
    }

    #[must_use]
    pub fn matches_author(&self, image: &Image) -> bool {
        self.author.is_empty() || image.author == self.author
    }

    #[must_use]
    pub fn matches_search(&self, image: &Image) -> bool {
        if self.search_query.is_empty() {
            return true;
        }
        let query = self.search_query.to_lowercase();
        image.author.to_lowercase().contains(&query)
            || image
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&query))
            || image.category.to_lowercase().contains(&query)
    }

    /// Returns `true` if any narrowing clause is active.
    ///
    /// The sort order never narrows the set, so it does not count.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active_count() > 0
    }

    /// Returns the number of active narrowing clauses.
    #[must_use]
    pub fn active_count(&self) -> usize {
        [
            !self.category.is_empty(),
            !self.tags.is_empty(),
            !self.author.is_empty(),
            !self.search_query.is_empty(),
        ]
        .iter()
        .filter(|active| **active)
        .count()
    }

    /// Merges a partial change into these filters.
    pub fn apply(&mut self, patch: FiltersPatch) {
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
        if let Some(sort_by) = patch.sort_by {
            self.sort_by = sort_by;
        }
        if let Some(search_query) = patch.search_query {
            self.search_query = search_query;
        }
    }

    /// Resets all filters to their default (inactive) state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

// =============================================================================
// Filters Patch
// =============================================================================

/// Partial filter change. `None` fields keep their current value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FiltersPatch {
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub author: Option<String>,
    pub sort_by: Option<SortBy>,
    pub search_query: Option<String>,
}

impl FiltersPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    #[must_use]
    pub fn sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }

    #[must_use]
    pub fn search_query(mut self, query: impl Into<String>) -> Self {
        self.search_query = Some(query.into());
        self
    }
}

// =============================================================================
// Derivation
// =============================================================================

/// Returns a stably sorted copy of `images`.
#[must_use]
pub fn sort_images(images: &[Image], sort_by: SortBy) -> Vec<Image> {
    let mut sorted = images.to_vec();
    sorted.sort_by(|a, b| sort_by.compare(a, b));
    sorted
}

/// Derives the visible images: filter first, then sort.
#[must_use]
pub fn apply_filters_and_sorting(images: &[Image], filters: &GalleryFilters) -> Vec<Image> {
    let mut visible: Vec<Image> = images
        .iter()
        .filter(|image| filters.matches(image))
        .cloned()
        .collect();
    visible.sort_by(|a, b| filters.sort_by.compare(a, b));
    visible
}

// =============================================================================
// Tests
// =============================================================================
