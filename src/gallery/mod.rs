// SPDX-License-Identifier: MPL-2.0
//! Gallery application layer.
//!
//! - [`GalleryStore`]: Owner of the collection, filters and derived views
//! - [`ImageSource`] / [`PicsumGenerator`]: Image generation
//! - [`UploadForm`]: Mock upload flow producing drafts
//! - [`GallerySnapshot`]: Persisted images, favorites and history
//! - [`catalog`]: Known categories and tags

pub mod catalog;
pub mod generator;
pub mod snapshot;
pub mod store;
pub mod upload;

pub use generator::{ImageSource, PicsumGenerator, CREATED_AT_WINDOW_MS};
pub use snapshot::{GallerySnapshot, SNAPSHOT_FILE};
pub use store::{GalleryStore, LOAD_ERROR_FALLBACK};
pub use upload::UploadForm;
