// SPDX-License-Identifier: MPL-2.0
//! Plain-text rendering of the store for the command line.

use crate::domain::gallery::{Image, ImageStats};
use crate::gallery::{GalleryStore, ImageSource};
use std::fmt::Write;

/// Renders the visible images, the detail view and optionally the statistics.
#[must_use]
pub fn render<S: ImageSource>(store: &GalleryStore<S>, show_stats: bool) -> String {
    let mut out = String::new();
    let filters = store.filters();

    let _ = writeln!(
        out,
        "{} of {} images (sort: {}, active filters: {})",
        store.filtered_images().len(),
        store.images().len(),
        filters.sort_by,
        store.active_filter_count()
    );

    for image in store.filtered_images() {
        let _ = writeln!(out, "{}", image_line(image));
    }

    if let Some(selected) = store.selected_image() {
        let _ = writeln!(
            out,
            "\nViewing #{} \"{}\" by {} ({}, {}) at {:.0}%: {} views, {} likes",
            selected.id,
            selected.alt,
            selected.author,
            selected.resolution,
            selected.size,
            store.zoom().value(),
            selected.views,
            selected.likes
        );
    }

    if !store.history().is_empty() {
        let ids: Vec<String> = store.history().iter().map(|img| img.id.to_string()).collect();
        let _ = writeln!(out, "Recently viewed: {}", ids.join(", "));
    }

    if show_stats {
        let _ = writeln!(out, "\n{}", stats_line(&store.image_stats()));
    }

    out
}

fn image_line(image: &Image) -> String {
    let marker = if image.is_favorite { '*' } else { ' ' };
    format!(
        "{marker}{:>4}  {:<10} {:>5} likes {:>5} views  {}  [{}]  {}",
        image.id.value(),
        image.category,
        image.likes,
        image.views,
        image.author,
        image.tags.join(", "),
        image.created_at.format("%Y-%m-%d")
    )
}

fn stats_line(stats: &ImageStats) -> String {
    format!(
        "Total: {}  Favorites: {}  Categories: {}  Views: {}  Likes: {}",
        stats.total, stats.favorites, stats.categories, stats.total_views, stats.total_likes
    )
}
