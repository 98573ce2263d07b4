// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.
//!
//! This module contains the image model and the pure rules that derive the
//! visible gallery from it: filter matching, sorting, the bounded viewing
//! history and aggregate statistics.

pub mod filter;
pub mod history;
pub mod stats;
pub mod types;

// Re-export commonly used types
pub use filter::{apply_filters_and_sorting, sort_images, FiltersPatch, GalleryFilters, SortBy};
pub use history::{ViewHistory, HISTORY_LIMIT};
pub use stats::ImageStats;
pub use types::{Image, ImageDraft, ImageId, ImagePatch};
