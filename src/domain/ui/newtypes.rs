// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Zoom Bounds
// =============================================================================

/// Detail view zoom bounds (50% to 300%).
pub mod zoom_bounds {
    /// Minimum zoom percentage.
    pub const MIN_PERCENT: f32 = 50.0;
    /// Maximum zoom percentage.
    pub const MAX_PERCENT: f32 = 300.0;
    /// Default zoom percentage.
    pub const DEFAULT_PERCENT: f32 = 100.0;
    /// Zoom change per zoom in/out action.
    pub const STEP_PERCENT: f32 = 25.0;
}

// =============================================================================
// ModalZoom
// =============================================================================

/// Zoom of the image detail view, guaranteed to be within 50%–300%.
///
/// # Example
///
/// ```
/// use gallery_lens::domain::ui::ModalZoom;
///
/// let zoom = ModalZoom::default().zoom_in().zoom_in();
/// assert_eq!(zoom.value(), 150.0);
/// assert_eq!(zoom.as_factor(), 1.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModalZoom(f32);

impl ModalZoom {
    /// Creates a new zoom, clamping the value to the valid range.
    #[must_use]
    pub fn new(percent: f32) -> Self {
        Self(percent.clamp(zoom_bounds::MIN_PERCENT, zoom_bounds::MAX_PERCENT))
    }

    /// Returns the raw percentage value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the zoom as a scale multiplier (e.g., 100% → 1.0).
    #[must_use]
    pub fn as_factor(self) -> f32 {
        self.0 / 100.0
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= zoom_bounds::MIN_PERCENT
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= zoom_bounds::MAX_PERCENT
    }

    /// Increases zoom by one step.
    #[must_use]
    pub fn zoom_in(self) -> Self {
        Self::new(self.0 + zoom_bounds::STEP_PERCENT)
    }

    /// Decreases zoom by one step.
    #[must_use]
    pub fn zoom_out(self) -> Self {
        Self::new(self.0 - zoom_bounds::STEP_PERCENT)
    }
}

impl Default for ModalZoom {
    fn default() -> Self {
        Self(zoom_bounds::DEFAULT_PERCENT)
    }
}
