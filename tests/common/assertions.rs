//! Assertion helpers for normalized output.

use image::RgbaImage;
use logo_normalize::{content_bounds, ContentBounds};
use pretty_assertions::assert_eq;

/// Assert bytes are a WebP container
pub fn assert_webp(bytes: &[u8]) {
    assert!(
        bytes.len() > 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP",
        "Expected WebP, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..12.min(bytes.len())]
    );
}

/// Assert bytes are a PNG file
pub fn assert_png(bytes: &[u8]) {
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "Expected PNG, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}

/// Assert the canvas is square at `size` and its four corners are clear
pub fn assert_square_transparent_canvas(image: &RgbaImage, size: u32) {
    assert_eq!(image.dimensions(), (size, size), "canvas dimensions");
    for (x, y) in [(0, 0), (size - 1, 0), (0, size - 1), (size - 1, size - 1)] {
        assert_eq!(
            image.get_pixel(x, y)[3],
            0,
            "corner ({x},{y}) should be transparent"
        );
    }
}

/// Visible content bounds, panicking when the canvas is empty
pub fn visible_bounds(image: &RgbaImage) -> ContentBounds {
    content_bounds(image).expect("canvas has visible content")
}

/// Assert every visible pixel lies inside the padded content box
pub fn assert_within_padding(image: &RgbaImage, content_size: u32) {
    let (size, _) = image.dimensions();
    let margin = (size - content_size) / 2;
    let bounds = visible_bounds(image);
    assert!(
        bounds.x >= margin.saturating_sub(1)
            && bounds.y >= margin.saturating_sub(1)
            && bounds.x + bounds.width <= size - margin + 1
            && bounds.y + bounds.height <= size - margin + 1,
        "content {bounds:?} leaks into the {margin}px padding"
    );
}

/// Assert a color is within `tolerance` of `expected` on every RGB channel
pub fn assert_color_near(actual: [u8; 4], expected: [u8; 4], tolerance: u8) {
    for channel in 0..3 {
        assert!(
            actual[channel].abs_diff(expected[channel]) <= tolerance,
            "channel {channel}: {actual:?} vs {expected:?} (tolerance {tolerance})"
        );
    }
}
