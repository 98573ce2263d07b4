// SPDX-License-Identifier: MPL-2.0
//! Gallery snapshot persistence using CBOR format.
//!
//! Only the image collection, the favorites and the viewing history survive a
//! restart. Filters, loading state, errors, selection and zoom always start
//! fresh.
//!
//! # Path Resolution
//!
//! 1. Use `load_from()`/`save_to()` with explicit directory override
//! 2. Set `GALLERY_LENS_DATA_DIR` environment variable
//! 3. Falls back to platform-specific data directory

use crate::app::paths;
use crate::domain::gallery::{Image, ViewHistory};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Snapshot file name within the app data directory.
pub const SNAPSHOT_FILE: &str = "gallery-storage.cbor";

/// The persisted part of the gallery state.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GallerySnapshot {
    #[serde(default)]
    pub images: Vec<Image>,

    /// Stored as written. The store recomputes favorites from `images` on
    /// restore.
    #[serde(default)]
    pub favorites: Vec<Image>,

    #[serde(default)]
    pub history: ViewHistory,
}

impl GallerySnapshot {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty() && self.favorites.is_empty() && self.history.is_empty()
    }

    /// Loads the snapshot from the default location.
    ///
    /// Returns a tuple of (snapshot, optional_warning). A missing file yields
    /// an empty snapshot without a warning.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads the snapshot from a custom data directory.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::snapshot_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        let file = match fs::File::open(&path) {
            Ok(file) => file,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "cannot open gallery snapshot");
                return (
                    Self::default(),
                    Some("notification-snapshot-read-error".to_string()),
                );
            }
        };

        match ciborium::from_reader(BufReader::new(file)) {
            Ok(snapshot) => (snapshot, None),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "discarding corrupt gallery snapshot");
                (
                    Self::default(),
                    Some("notification-snapshot-parse-error".to_string()),
                )
            }
        }
    }

    /// Saves the snapshot to the default location.
    ///
    /// Returns a warning key if the save failed.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Saves the snapshot to a custom data directory, creating it if needed.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::snapshot_path_with_override(base_dir) else {
            return Some("notification-snapshot-path-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                tracing::warn!(dir = %parent.display(), error = %err, "cannot create data directory");
                return Some("notification-snapshot-dir-error".to_string());
            }
        }

        let file = match fs::File::create(&path) {
            Ok(file) => file,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "cannot create gallery snapshot");
                return Some("notification-snapshot-create-error".to_string());
            }
        };

        if let Err(err) = ciborium::into_writer(self, BufWriter::new(file)) {
            tracing::warn!(path = %path.display(), error = %err, "cannot write gallery snapshot");
            return Some("notification-snapshot-write-error".to_string());
        }

        tracing::debug!(path = %path.display(), images = self.images.len(), "gallery snapshot saved");
        None
    }

    /// Reads a snapshot from an exact file path, propagating failures.
    pub fn read_from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        let snapshot = ciborium::from_reader(BufReader::new(file))?;
        Ok(snapshot)
    }

    /// Writes a snapshot to an exact file path, propagating failures.
    pub fn write_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = fs::File::create(path)?;
        ciborium::into_writer(self, BufWriter::new(file))?;
        Ok(())
    }

    fn snapshot_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(SNAPSHOT_FILE);
            path
        })
    }
}
