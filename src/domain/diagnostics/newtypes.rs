// SPDX-License-Identifier: MPL-2.0
//! Diagnostics newtypes.

/// Buffer capacity bounds (10 to 10000 events).
pub mod buffer_capacity_bounds {
    /// Minimum buffer capacity.
    pub const MIN: usize = 10;
    /// Maximum buffer capacity.
    pub const MAX: usize = 10_000;
    /// Default buffer capacity.
    pub const DEFAULT: usize = 500;
}

/// Number of diagnostic events kept in memory, clamped to 10–10000.
///
/// # Example
///
/// ```
/// use gallery_lens::domain::diagnostics::BufferCapacity;
///
/// assert_eq!(BufferCapacity::new(50_000).value(), 10_000);
/// assert_eq!(BufferCapacity::default().value(), 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    /// Creates a new buffer capacity, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(buffer_capacity_bounds::MIN, buffer_capacity_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(buffer_capacity_bounds::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_out_of_range_values() {
        assert_eq!(BufferCapacity::new(0).value(), buffer_capacity_bounds::MIN);
        assert_eq!(
            BufferCapacity::new(usize::MAX).value(),
            buffer_capacity_bounds::MAX
        );
    }

    #[test]
    fn keeps_values_in_range() {
        assert_eq!(BufferCapacity::new(64).value(), 64);
    }
}
