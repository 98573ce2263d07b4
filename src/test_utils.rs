// SPDX-License-Identifier: MPL-2.0
//! Image fixtures shared by unit tests.

use crate::domain::gallery::{Image, ImageId};
use chrono::{DateTime, TimeDelta, TimeZone, Utc};

/// Fixed reference instant for fixtures.
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// Builds an image with the fields filters and sorts look at.
///
/// `created_at` grows with the id, so higher ids are newer.
pub fn image(id: u64, category: &str, tags: &[&str], views: u64, likes: i64) -> Image {
    Image {
        id: ImageId::new(id),
        src: format!("https://example.test/{id}/800/600"),
        thumbnail: format!("https://example.test/{id}/300/300"),
        author: format!("Fotógrafo {id}"),
        alt: format!("Imagem {id}"),
        tags: tags.iter().map(ToString::to_string).collect(),
        category: category.to_string(),
        likes,
        views,
        is_favorite: false,
        created_at: base_time() + TimeDelta::minutes(id as i64),
        resolution: "800x600".to_string(),
        size: "2500 KB".to_string(),
    }
}

/// Builds an image created `offset_secs` after [`base_time`].
pub fn image_created_at(id: u64, offset_secs: i64) -> Image {
    Image {
        created_at: base_time() + TimeDelta::seconds(offset_secs),
        ..image(id, "A", &[], 0, 0)
    }
}
