//! Alpha-channel inspection helpers.

use image::RgbaImage;

/// Whether any pixel is less than fully opaque.
pub fn has_transparency(image: &RgbaImage) -> bool {
    image.pixels().any(|p| p[3] < 255)
}

/// Whether every pixel has zero alpha. Empty images count as transparent.
pub fn is_fully_transparent(image: &RgbaImage) -> bool {
    image.pixels().all(|p| p[3] == 0)
}

/// Mean alpha of the four `corner_size x corner_size` corner blocks,
/// averaged over the corners.
///
/// Blocks are clamped to the image, so small images simply use fewer
/// pixels per corner. Returns 0.0 for empty images.
pub fn corner_alpha(image: &RgbaImage, corner_size: u32) -> f32 {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 || corner_size == 0 {
        return 0.0;
    }

    let block_w = corner_size.min(width);
    let block_h = corner_size.min(height);
    let origins = [
        (0, 0),
        (width - block_w, 0),
        (0, height - block_h),
        (width - block_w, height - block_h),
    ];

    let total: f32 = origins
        .iter()
        .map(|&(ox, oy)| {
            let mut sum = 0u64;
            for y in oy..oy + block_h {
                for x in ox..ox + block_w {
                    sum += image.get_pixel(x, y)[3] as u64;
                }
            }
            sum as f32 / (block_w * block_h) as f32
        })
        .sum();

    total / origins.len() as f32
}
