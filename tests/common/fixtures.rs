//! Synthetic source logos.

use image::{Rgba, RgbaImage};

/// Colors used by the fixtures
pub mod colors {
    pub const WHITE: [u8; 4] = [255, 255, 255, 255];
    pub const BLACK: [u8; 4] = [0, 0, 0, 255];
    pub const BRAND_RED: [u8; 4] = [200, 30, 40, 255];
    pub const BRAND_BLUE: [u8; 4] = [20, 60, 180, 255];
    pub const CLEAR: [u8; 4] = [0, 0, 0, 0];
}

/// Solid background with a solid rectangular subject.
pub fn banner(
    width: u32,
    height: u32,
    background: [u8; 4],
    subject: (u32, u32, u32, u32),
    subject_color: [u8; 4],
) -> RgbaImage {
    let (sx, sy, sw, sh) = subject;
    RgbaImage::from_fn(width, height, |x, y| {
        if x >= sx && x < sx + sw && y >= sy && y < sy + sh {
            Rgba(subject_color)
        } else {
            Rgba(background)
        }
    })
}

/// 300x120 white banner with a 200x80 red subject at (50, 20).
pub fn white_banner() -> RgbaImage {
    banner(300, 120, colors::WHITE, (50, 20, 200, 80), colors::BRAND_RED)
}

/// 160x160 already-transparent logo with a 100x40 blue subject at (30, 60).
pub fn transparent_logo() -> RgbaImage {
    banner(160, 160, colors::CLEAR, (30, 60, 100, 40), colors::BRAND_BLUE)
}

/// JPEG-friendly banner: subject edges on 16px boundaries.
pub fn jpeg_banner() -> RgbaImage {
    banner(256, 128, colors::WHITE, (48, 16, 192, 96), colors::BRAND_BLUE)
}

/// Bytes that no image decoder accepts.
pub const CORRUPT_IMAGE: &[u8] = b"\x89PNG\r\n\x1a\nthis is not really a png";

/// Manifest listing one good task, one with a bad color and one missing file.
pub const MANIFEST_YAML: &str = r#"
defaults:
  size: 128
  padding: 0.1
  format: png
tasks:
  - input: originals/logo_esradio.png
    output: drawable/logo_esradio.png
    color: white
  - input: originals/logo_esradio.png
    output: drawable/logo_broken_color.png
    color: "not-a-color"
  - input: originals/logo_missing.png
    output: drawable/logo_missing.png
"#;
