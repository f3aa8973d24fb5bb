//! Normalization options and configuration.
//!
//! This module provides the [`NormalizeOptions`] struct for configuring the
//! output canvas of the normalization pipeline.

use crate::canvas::{self, ResampleFilter};
use crate::error::NormalizeError;

/// Default output canvas side length in pixels.
pub const DEFAULT_TARGET_SIZE: u32 = 512;

/// Default fraction of the canvas left empty on each side.
pub const DEFAULT_PADDING_FRACTION: f32 = 0.12;

/// Configuration for the output canvas.
///
/// # Defaults
///
/// - Target size: 512 (output is 512x512)
/// - Padding fraction: 0.12 (content fills the central 76%)
/// - Filter: Lanczos3
///
/// # Example
///
/// ```
/// use logo_normalize::{NormalizeOptions, ResampleFilter};
///
/// let options = NormalizeOptions::new()
///     .target_size(256)
///     .padding_fraction(0.05)
///     .filter(ResampleFilter::Mitchell);
///
/// assert_eq!(options.target_size, 256);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizeOptions {
    /// Side length of the square output canvas.
    pub target_size: u32,

    /// Proportion of the canvas reserved as empty border on each side.
    ///
    /// - 0.0 = content touches the canvas edge
    /// - 0.12 = content fills the central 76% (default)
    /// - must be below 0.5
    pub padding_fraction: f32,

    /// Resampling filter used when scaling content.
    pub filter: ResampleFilter,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            target_size: DEFAULT_TARGET_SIZE,
            padding_fraction: DEFAULT_PADDING_FRACTION,
            filter: ResampleFilter::default(),
        }
    }
}

impl NormalizeOptions {
    /// Create new options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output canvas side length.
    #[inline]
    pub fn target_size(mut self, size: u32) -> Self {
        self.target_size = size;
        self
    }

    /// Set the padding fraction.
    #[inline]
    pub fn padding_fraction(mut self, fraction: f32) -> Self {
        self.padding_fraction = fraction;
        self
    }

    /// Set the resampling filter.
    #[inline]
    pub fn filter(mut self, filter: ResampleFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Check that the options describe a usable canvas.
    pub fn validate(&self) -> Result<(), NormalizeError> {
        canvas::validate_geometry(self.target_size, self.padding_fraction)
    }

    /// Side length of the area available to content.
    pub fn content_size(&self) -> u32 {
        canvas::content_size(self.target_size, self.padding_fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let opts = NormalizeOptions::default();
        assert_eq!(opts.target_size, 512, "target_size should default to 512");
        assert!(
            (opts.padding_fraction - 0.12).abs() < f32::EPSILON,
            "padding_fraction should default to 0.12"
        );
        assert_eq!(opts.filter, ResampleFilter::Lanczos3);
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(NormalizeOptions::new(), NormalizeOptions::default());
    }

    #[test]
    fn test_builder_chaining() {
        let opts = NormalizeOptions::new()
            .target_size(128)
            .padding_fraction(0.25)
            .filter(ResampleFilter::Box);

        assert_eq!(opts.target_size, 128);
        assert!((opts.padding_fraction - 0.25).abs() < f32::EPSILON);
        assert_eq!(opts.filter, ResampleFilter::Box);
        assert_eq!(opts.content_size(), 64);
    }

    #[test]
    fn test_validate() {
        assert!(NormalizeOptions::new().validate().is_ok());
        assert!(NormalizeOptions::new().target_size(0).validate().is_err());
        assert!(NormalizeOptions::new()
            .padding_fraction(0.6)
            .validate()
            .is_err());
    }
}
