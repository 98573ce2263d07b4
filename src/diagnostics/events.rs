// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for gallery activity tracking.
//!
//! Every store operation is recorded as a [`UserAction`]. Load failures and
//! degraded persistence are recorded as errors and warnings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Gallery operations that can be captured for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    // ==========================================================================
    // Collection Actions
    // ==========================================================================
    /// Replace the collection with freshly generated images.
    FetchImages { count: usize },

    /// Insert an uploaded image.
    AddImage { id: u64 },

    /// Remove an image.
    DeleteImage { id: u64 },

    /// Patch fields of an image.
    UpdateImage { id: u64 },

    /// Flip the favorite flag of an image.
    ToggleFavorite { id: u64 },

    // ==========================================================================
    // Detail View Actions
    // ==========================================================================
    /// Open the detail view on an image.
    SelectImage { id: u64 },

    /// Record a view in the history without opening the detail view.
    AddToHistory { id: u64 },

    /// Close the detail view.
    CloseModal,

    ZoomIn,

    ZoomOut,

    ResetZoom,

    // ==========================================================================
    // Filter Actions
    // ==========================================================================
    /// Merge a filter change.
    UpdateFilters {
        /// Number of active narrowing clauses after the change.
        active_filters: usize,
        /// Sort order after the change.
        sort_by: String,
    },

    /// Reset every filter.
    ClearFilters,

    /// Change the free-text search.
    SearchImages { query: String },

    /// Drop one tag from the tag filter.
    RemoveTagFilter { tag: String },
}

/// A timestamped diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticEvent {
    /// When the event occurred (wall clock).
    pub timestamp: DateTime<Utc>,
    /// The type and data of the event
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self::with_timestamp(kind, Utc::now())
    }

    /// Creates a new diagnostic event with a specific timestamp.
    #[must_use]
    pub fn with_timestamp(kind: DiagnosticEventKind, timestamp: DateTime<Utc>) -> Self {
        Self { timestamp, kind }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// Store operation.
    UserAction {
        action: UserAction,
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },

    /// Non-fatal problem (e.g. a snapshot that could not be read).
    Warning { message: String },

    /// Failure surfaced to the user.
    Error { message: String },
}
