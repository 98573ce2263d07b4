// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Gallery**: Size of a generated batch
//! - **Storage**: Snapshot persistence
//! - **Diagnostics**: Event buffer sizing

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Number of images generated by a fetch when nothing else is requested.
pub const DEFAULT_IMAGE_COUNT: usize = 12;

/// Minimum number of images per fetch.
pub const MIN_IMAGE_COUNT: usize = 1;

/// Maximum number of images per fetch.
pub const MAX_IMAGE_COUNT: usize = 500;

// ==========================================================================
// Storage Defaults
// ==========================================================================

/// Whether the gallery snapshot is written back after a run.
pub const DEFAULT_PERSIST_SNAPSHOT: bool = true;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

pub use crate::domain::diagnostics::buffer_capacity_bounds::DEFAULT as DEFAULT_BUFFER_CAPACITY;
