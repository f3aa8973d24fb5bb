//! Error types for the normalization pipeline.

use thiserror::Error;

/// Errors raised while normalizing a single logo.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// The source image has no pixels to work with.
    #[error("Empty image: {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("Invalid target size: {0} (must be at least 1)")]
    InvalidTargetSize(u32),

    /// Padding must leave some room for content on each side.
    #[error("Invalid padding fraction: {0} (must be in [0, 0.5))")]
    InvalidPadding(f32),

    #[error("Resize error: {0}")]
    Resize(String),
}

/// Error returned when a color specification cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid color '{input}': {reason}")]
pub struct ParseColorError {
    pub input: String,
    pub reason: &'static str,
}

impl ParseColorError {
    pub(crate) fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}
