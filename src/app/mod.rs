// SPDX-License-Identifier: MPL-2.0
//! Command-line session: wires settings, the persisted snapshot and the store
//! together and applies the requested operations.
//!
//! Warnings from settings and snapshot loading never abort a session. They are
//! recorded in the store's diagnostics and the session continues with
//! defaults.

pub mod cli;
pub mod config;
pub mod paths;
pub mod report;

pub use cli::Flags;

use crate::domain::gallery::{FiltersPatch, ImageId};
use crate::error::{Error, Result};
use crate::gallery::{GallerySnapshot, GalleryStore, PicsumGenerator};
use self::config::{MAX_IMAGE_COUNT, MIN_IMAGE_COUNT};

/// Runs one session and returns the resulting store.
///
/// # Errors
///
/// Returns [`Error::Load`] when the gallery is empty and generation failed,
/// or an I/O error when the diagnostics export cannot be written.
pub async fn run(flags: &Flags) -> Result<GalleryStore> {
    let (config, config_warning) = config::load_with_override(flags.config_dir.clone());
    let seed = flags.seed.or(config.gallery.seed);
    let source = PicsumGenerator::from_seed_option(seed);

    let (snapshot, snapshot_warning) = GallerySnapshot::load_from(flags.data_dir.clone());
    let mut store =
        GalleryStore::from_snapshot(source, snapshot, config.diagnostics.capacity());

    for key in [config_warning, snapshot_warning].into_iter().flatten() {
        store.record_warning(key);
    }

    if store.images().is_empty() || flags.refresh {
        let count = flags.count.map_or_else(
            || config.gallery.effective_image_count(),
            |count| count.clamp(MIN_IMAGE_COUNT, MAX_IMAGE_COUNT),
        );
        store.fetch_images(count).await;
        if let Some(message) = store.error() {
            if store.images().is_empty() {
                return Err(Error::Load(message.to_string()));
            }
        }
    } else {
        tracing::info!(images = store.images().len(), "using stored gallery");
    }

    for id in &flags.favorites {
        if !store.toggle_favorite(ImageId::new(*id)) {
            store.record_warning(format!("no image with id {id}"));
        }
    }

    let patch = filters_patch(flags);
    if patch != FiltersPatch::default() {
        store.update_filters(patch);
    }

    if let Some(id) = flags.view.map(ImageId::new) {
        match store.image(id).cloned() {
            Some(image) => store.set_selected_image(&image),
            None => store.record_warning(format!("no image with id {id}")),
        }
    }

    if !flags.no_save && config.storage.should_persist() {
        if let Some(key) = store.snapshot().save_to(flags.data_dir.clone()) {
            store.record_warning(key);
        }
    }

    if let Some(path) = &flags.export_diagnostics {
        store.diagnostics().export_to_file(path)?;
        tracing::info!(path = %path.display(), "diagnostics exported");
    }

    Ok(store)
}

fn filters_patch(flags: &Flags) -> FiltersPatch {
    FiltersPatch {
        category: flags.category.clone(),
        tags: (!flags.tags.is_empty()).then(|| flags.tags.clone()),
        author: flags.author.clone(),
        sort_by: flags.sort,
        search_query: flags.search.clone(),
    }
}
