// SPDX-License-Identifier: MPL-2.0
//! Synthetic image generation.
//!
//! The store only depends on [`ImageSource`]; [`PicsumGenerator`] is the
//! default implementation and produces placeholder images backed by
//! picsum.photos URLs. Its random source is seedable so that tests and
//! repeatable demo runs get identical output.

use crate::domain::gallery::{Image, ImageId};
use crate::error::Result;
use crate::gallery::catalog::{GENERATED_CATEGORIES, GENERATED_TAGS};
use chrono::{DateTime, TimeDelta, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generated images are dated up to this many milliseconds in the past
/// (about 115 days).
pub const CREATED_AT_WINDOW_MS: i64 = 10_000_000_000;

const BASE_URL: &str = "https://picsum.photos/seed/picsum";
const MAIN_SIZE: &str = "800/600";
const THUMBNAIL_SIZE: &str = "300/300";
const RESOLUTION: &str = "800x600";

/// Producer of fully populated images for a given id.
pub trait ImageSource {
    /// Generates the image that will carry `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Load`](crate::error::Error::Load) if no image can be produced.
    fn generate(&mut self, id: ImageId) -> Result<Image>;

    /// Generates `count` images with ids `1..=count`.
    ///
    /// # Errors
    ///
    /// Fails on the first image that cannot be generated.
    fn generate_batch(&mut self, count: usize) -> Result<Vec<Image>> {
        (1..=count as u64)
            .map(|id| self.generate(ImageId::new(id)))
            .collect()
    }
}

/// Seedable placeholder image generator.
///
/// # Example
///
/// ```
/// use gallery_lens::gallery::{ImageSource, PicsumGenerator};
/// use gallery_lens::domain::gallery::ImageId;
///
/// let now = chrono::Utc::now();
/// let mut a = PicsumGenerator::seeded(7).with_reference_time(now);
/// let mut b = PicsumGenerator::seeded(7).with_reference_time(now);
///
/// assert_eq!(a.generate(ImageId::new(1)).unwrap(), b.generate(ImageId::new(1)).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct PicsumGenerator {
    rng: StdRng,
    /// Fixed "now" for `created_at`. `None` reads the clock on every call.
    reference_time: Option<DateTime<Utc>>,
}

impl PicsumGenerator {
    /// Creates a generator seeded from system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            reference_time: None,
        }
    }

    /// Creates a deterministic generator.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            reference_time: None,
        }
    }

    /// Uses the seed when given, entropy otherwise.
    #[must_use]
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }

    /// Pins the reference time used to compute `created_at`.
    #[must_use]
    pub fn with_reference_time(mut self, reference_time: DateTime<Utc>) -> Self {
        self.reference_time = Some(reference_time);
        self
    }

    fn pick<'a>(&mut self, pool: &[&'a str]) -> &'a str {
        pool[self.rng.gen_range(0..pool.len())]
    }
}

impl Default for PicsumGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl ImageSource for PicsumGenerator {
    fn generate(&mut self, id: ImageId) -> Result<Image> {
        let category = self.pick(&GENERATED_CATEGORIES);
        let tag = self.pick(&GENERATED_TAGS);
        let likes = self.rng.gen_range(0..1000);
        let views = self.rng.gen_range(0..5000);
        let age = TimeDelta::milliseconds(self.rng.gen_range(0..CREATED_AT_WINDOW_MS));
        let size_kb = self.rng.gen_range(1000..6000);
        let now = self.reference_time.unwrap_or_else(Utc::now);

        Ok(Image {
            id,
            src: format!("{BASE_URL}{id}/{MAIN_SIZE}"),
            thumbnail: format!("{BASE_URL}{id}/{THUMBNAIL_SIZE}"),
            author: format!("Fotógrafo {id}"),
            alt: format!("Imagem premium {id}"),
            tags: vec![tag.to_string()],
            category: category.to_string(),
            likes,
            views,
            is_favorite: false,
            created_at: now - age,
            resolution: RESOLUTION.to_string(),
            size: format!("{size_kb} KB"),
        })
    }
}
