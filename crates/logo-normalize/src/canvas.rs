//! Fitting content onto a square transparent canvas.
//!
//! [`resize_and_center`] scales cropped content uniformly so its longer side
//! fills the padded content area, then pastes it centered on a fully
//! transparent `target_size x target_size` canvas.
//!
//! Resampling goes through `fast_image_resize` with alpha multiplied in
//! before convolution and divided out afterwards, so the placeholder color of
//! cleared pixels never bleeds into the subject's edges.

use fast_image_resize as fr;
use image::{imageops, Rgba, RgbaImage};

use crate::error::NormalizeError;

/// Convolution filters available for scaling.
///
/// Nearest-neighbour sampling is deliberately absent: it aliases the sharp
/// edges typical of logo artwork.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResampleFilter {
    /// Lanczos with a 3-lobe window (sharpest).
    #[default]
    Lanczos3,
    CatmullRom,
    Mitchell,
    /// Box averaging.
    Box,
}

impl ResampleFilter {
    fn to_fast_filter(self) -> fr::FilterType {
        match self {
            ResampleFilter::Lanczos3 => fr::FilterType::Lanczos3,
            ResampleFilter::CatmullRom => fr::FilterType::CatmullRom,
            ResampleFilter::Mitchell => fr::FilterType::Mitchell,
            ResampleFilter::Box => fr::FilterType::Box,
        }
    }
}

/// Check that `target_size` and `padding_fraction` describe a usable canvas.
pub fn validate_geometry(target_size: u32, padding_fraction: f32) -> Result<(), NormalizeError> {
    if target_size == 0 {
        return Err(NormalizeError::InvalidTargetSize(target_size));
    }
    if !padding_fraction.is_finite() || !(0.0..0.5).contains(&padding_fraction) {
        return Err(NormalizeError::InvalidPadding(padding_fraction));
    }
    Ok(())
}

/// Side length of the square area available to content.
///
/// `floor(target_size * (1 - 2 * padding_fraction))`, never less than 1.
pub fn content_size(target_size: u32, padding_fraction: f32) -> u32 {
    // The epsilon absorbs f32 representation error (0.1f32 is slightly above 0.1).
    let size = (target_size as f64 * (1.0 - 2.0 * padding_fraction as f64) + 1e-3).floor();
    (size as u32).clamp(1, target_size.max(1))
}

/// Dimensions of a `width x height` image scaled uniformly to fit in a
/// `content x content` square.
///
/// The limiting axis lands exactly on `content`; the other axis is floored.
/// Integer arithmetic keeps the limiting axis from rounding down by one.
pub fn fit_dimensions(width: u32, height: u32, content: u32) -> (u32, u32) {
    let (w, h, c) = (width as u64, height as u64, content as u64);
    if w >= h {
        (content, ((h * c) / w).max(1) as u32)
    } else {
        (((w * c) / h).max(1) as u32, content)
    }
}

/// Scale `image` into the padded content area and center it on a fully
/// transparent `target_size x target_size` canvas.
///
/// The output is always exactly `target_size x target_size`. Offsets use
/// floor division in both axes.
pub fn resize_and_center(
    image: &RgbaImage,
    target_size: u32,
    padding_fraction: f32,
    filter: ResampleFilter,
) -> Result<RgbaImage, NormalizeError> {
    validate_geometry(target_size, padding_fraction)?;

    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(NormalizeError::EmptyImage { width, height });
    }

    let content = content_size(target_size, padding_fraction);
    let (new_width, new_height) = fit_dimensions(width, height, content);

    tracing::debug!(
        from = ?(width, height),
        to = ?(new_width, new_height),
        ratio = content as f64 / width.max(height) as f64,
        ?filter,
        "Scaling content"
    );

    let resized = if (new_width, new_height) == (width, height) {
        image.clone()
    } else {
        resample(image, new_width, new_height, filter)?
    };

    let mut canvas = RgbaImage::from_pixel(target_size, target_size, Rgba([0, 0, 0, 0]));
    let offset_x = (target_size - new_width) / 2;
    let offset_y = (target_size - new_height) / 2;
    imageops::replace(&mut canvas, &resized, offset_x as i64, offset_y as i64);

    Ok(canvas)
}

fn resample(
    image: &RgbaImage,
    width: u32,
    height: u32,
    filter: ResampleFilter,
) -> Result<RgbaImage, NormalizeError> {
    let (src_width, src_height) = image.dimensions();
    let src = fr::images::Image::from_vec_u8(
        src_width,
        src_height,
        image.as_raw().clone(),
        fr::PixelType::U8x4,
    )
    .map_err(|e| NormalizeError::Resize(format!("source buffer: {e}")))?;

    let mut dst = fr::images::Image::new(width, height, fr::PixelType::U8x4);

    let options = fr::ResizeOptions::new()
        .resize_alg(fr::ResizeAlg::Convolution(filter.to_fast_filter()));
    fr::Resizer::new()
        .resize(&src, &mut dst, Some(&options))
        .map_err(|e| NormalizeError::Resize(e.to_string()))?;

    RgbaImage::from_raw(width, height, dst.into_vec())
        .ok_or_else(|| NormalizeError::Resize("output buffer length mismatch".to_string()))
}
