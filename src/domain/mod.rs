// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core gallery rules with no I/O.
//!
//! This module contains pure domain types, value objects, and business rules.
//! Nothing here touches the filesystem, the clock or a random source, so every
//! rule can be tested directly.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`gallery`]: Gallery types ([`Image`](gallery::Image), [`GalleryFilters`](gallery::GalleryFilters),
//!   [`ViewHistory`](gallery::ViewHistory), [`ImageStats`](gallery::ImageStats))
//! - [`ui`]: UI value objects ([`ModalZoom`](ui::newtypes::ModalZoom))

pub mod diagnostics;
pub mod gallery;
pub mod ui;
