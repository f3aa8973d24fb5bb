//! Background removal by color key.
//!
//! A [`ColorKey`] names the background color of a source logo together with
//! a per-channel tolerance. [`remove_key_color`] clears every pixel whose RGB
//! lies within that tolerance of the key.
//!
//! # Matching
//!
//! Matching is a per-pixel threshold, not a flood fill from the border.
//! Pixels inside the subject that happen to match the key are cleared too,
//! so a white logo glyph on a white background loses its interior. Callers
//! that need to keep such regions should lower the tolerance or supply an
//! already-transparent source instead of a key.

use std::fmt;
use std::str::FromStr;

use image::{Rgba, RgbaImage};

use crate::error::ParseColorError;

/// Tolerance used when a key is given without one.
pub const DEFAULT_TOLERANCE: u8 = 40;

/// Value written into cleared pixels. The color is irrelevant once alpha is 0.
pub const CLEARED_PIXEL: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Background color to remove, plus the allowed per-channel deviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorKey {
    pub rgb: [u8; 3],
    pub tolerance: u8,
}

impl ColorKey {
    pub const WHITE: [u8; 3] = [255, 255, 255];
    pub const BLACK: [u8; 3] = [0, 0, 0];

    pub fn new(rgb: [u8; 3], tolerance: u8) -> Self {
        Self { rgb, tolerance }
    }

    /// Parse a key color from `white`, `black`, `r,g,b` or `#rrggbb`.
    pub fn parse(spec: &str, tolerance: u8) -> Result<Self, ParseColorError> {
        Ok(Self::new(parse_rgb(spec)?, tolerance))
    }

    /// Whether `pixel` is within tolerance of the key on all three channels.
    ///
    /// Alpha does not take part in the comparison.
    #[inline]
    pub fn matches(&self, pixel: &Rgba<u8>) -> bool {
        self.rgb
            .iter()
            .zip(pixel.0.iter())
            .all(|(&key, &value)| key.abs_diff(value) <= self.tolerance)
    }
}

impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.rgb;
        write!(f, "({r}, {g}, {b}) ±{}", self.tolerance)
    }
}

impl FromStr for ColorKey {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, DEFAULT_TOLERANCE)
    }
}

/// Parse an RGB triple from `white`, `black`, `r,g,b` or `#rrggbb`.
pub fn parse_rgb(spec: &str) -> Result<[u8; 3], ParseColorError> {
    let trimmed = spec.trim();

    if trimmed.eq_ignore_ascii_case("white") {
        return Ok(ColorKey::WHITE);
    }
    if trimmed.eq_ignore_ascii_case("black") {
        return Ok(ColorKey::BLACK);
    }

    if let Some(hex) = trimmed.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ParseColorError::new(spec, "hex colors must be #rrggbb"));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| ParseColorError::new(spec, "invalid hex digit"))
        };
        return Ok([channel(0)?, channel(2)?, channel(4)?]);
    }

    let parts: Vec<&str> = trimmed.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(ParseColorError::new(
            spec,
            "expected white, black, r,g,b or #rrggbb",
        ));
    }

    let mut rgb = [0u8; 3];
    for (slot, part) in rgb.iter_mut().zip(parts) {
        *slot = part
            .parse()
            .map_err(|_| ParseColorError::new(spec, "channels must be integers 0-255"))?;
    }
    Ok(rgb)
}

/// Clear every pixel matching `key`.
///
/// Returns an unchanged copy when `key` is `None`. Matched pixels become
/// [`CLEARED_PIXEL`]; everything else keeps its original value. Dimensions
/// never change.
pub fn remove_key_color(image: &RgbaImage, key: Option<&ColorKey>) -> RgbaImage {
    let mut output = image.clone();
    let Some(key) = key else {
        return output;
    };

    let mut cleared = 0usize;
    for pixel in output.pixels_mut() {
        if key.matches(pixel) {
            *pixel = CLEARED_PIXEL;
            cleared += 1;
        }
    }

    tracing::debug!(
        key = %key,
        cleared,
        total = image.width() as usize * image.height() as usize,
        "Removed key color"
    );

    output
}
