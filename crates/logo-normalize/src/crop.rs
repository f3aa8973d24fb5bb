//! Cropping to visible content.

use image::{imageops, RgbaImage};

/// Axis-aligned box around the non-transparent pixels of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentBounds {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl ContentBounds {
    /// Whether the bounds cover the whole `width x height` image.
    pub fn covers(&self, width: u32, height: u32) -> bool {
        self.x == 0 && self.y == 0 && self.width == width && self.height == height
    }
}

/// Tightest box containing every pixel with non-zero alpha.
///
/// Returns `None` for fully transparent (or empty) images.
pub fn content_bounds(image: &RgbaImage) -> Option<ContentBounds> {
    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0;
    let mut max_y = 0;
    let mut found = false;

    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel[3] == 0 {
            continue;
        }
        found = true;
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }

    found.then(|| ContentBounds {
        x: min_x,
        y: min_y,
        width: max_x - min_x + 1,
        height: max_y - min_y + 1,
    })
}

/// Crop away fully transparent border rows and columns.
///
/// A fully transparent image is returned unchanged rather than cropped to
/// nothing.
pub fn crop_to_content(image: &RgbaImage) -> RgbaImage {
    match content_bounds(image) {
        Some(bounds) if !bounds.covers(image.width(), image.height()) => {
            tracing::debug!(
                from = ?image.dimensions(),
                to = ?(bounds.width, bounds.height),
                "Cropped to content"
            );
            imageops::crop_imm(image, bounds.x, bounds.y, bounds.width, bounds.height).to_image()
        }
        Some(_) => image.clone(),
        None => {
            tracing::debug!(size = ?image.dimensions(), "No visible content, skipping crop");
            image.clone()
        }
    }
}
