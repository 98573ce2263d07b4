// SPDX-License-Identifier: MPL-2.0
//! `gallery_lens` is an image gallery state engine.
//!
//! It keeps a generated image collection with filtering, searching, sorting,
//! favorites, a bounded viewing history and a zoomable detail view. Only
//! images, favorites and history are persisted between sessions.

#![doc(html_root_url = "https://docs.rs/gallery_lens/0.1.0")]

pub mod app;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod gallery;

#[cfg(test)]
pub(crate) mod test_utils;
