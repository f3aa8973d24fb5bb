//! The composed normalization pipeline.

use image::{DynamicImage, RgbaImage};

use crate::canvas::resize_and_center;
use crate::color_key::{remove_key_color, ColorKey};
use crate::crop::crop_to_content;
use crate::error::NormalizeError;
use crate::options::NormalizeOptions;
use crate::transparency::{has_transparency, is_fully_transparent};

/// A logo fitted onto its square transparent canvas.
#[derive(Debug, Clone)]
pub struct NormalizedLogo {
    /// The `target_size x target_size` canvas.
    pub image: RgbaImage,

    /// Dimensions of the visible content after cropping, before scaling.
    pub content_width: u32,
    pub content_height: u32,

    /// Whether the source had any transparency once the key color was removed.
    pub had_transparency: bool,

    /// Whether the canvas holds any non-transparent pixel.
    pub has_content: bool,
}

/// Runs key removal, crop, and resize-and-center with fixed options.
///
/// The normalizer holds no state besides its options and can be reused
/// across any number of images.
///
/// # Example
///
/// ```
/// use image::{DynamicImage, Rgba, RgbaImage};
/// use logo_normalize::{ColorKey, NormalizeOptions, Normalizer};
///
/// let mut source = RgbaImage::from_pixel(100, 40, Rgba([255, 255, 255, 255]));
/// for y in 10..30 {
///     for x in 20..80 {
///         source.put_pixel(x, y, Rgba([200, 0, 0, 255]));
///     }
/// }
///
/// let normalizer = Normalizer::new(NormalizeOptions::new().target_size(64)).unwrap();
/// let key = ColorKey::new(ColorKey::WHITE, 40);
/// let logo = normalizer
///     .normalize(&DynamicImage::ImageRgba8(source), Some(&key))
///     .unwrap();
///
/// assert_eq!(logo.image.dimensions(), (64, 64));
/// assert_eq!((logo.content_width, logo.content_height), (60, 20));
/// ```
#[derive(Debug, Clone)]
pub struct Normalizer {
    options: NormalizeOptions,
}

impl Normalizer {
    /// Create a normalizer, rejecting options that cannot produce a canvas.
    pub fn new(options: NormalizeOptions) -> Result<Self, NormalizeError> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    /// Normalize a decoded image. RGB, indexed and grayscale sources are
    /// converted to RGBA first.
    pub fn normalize(
        &self,
        image: &DynamicImage,
        key: Option<&ColorKey>,
    ) -> Result<NormalizedLogo, NormalizeError> {
        self.normalize_rgba(&image.to_rgba8(), key)
    }

    /// Normalize an RGBA image.
    pub fn normalize_rgba(
        &self,
        image: &RgbaImage,
        key: Option<&ColorKey>,
    ) -> Result<NormalizedLogo, NormalizeError> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(NormalizeError::EmptyImage { width, height });
        }

        let keyed = remove_key_color(image, key);
        let had_transparency = has_transparency(&keyed);
        if !had_transparency {
            tracing::debug!("Source has no transparent pixels after keying");
        }

        let cropped = crop_to_content(&keyed);
        let (content_width, content_height) = cropped.dimensions();

        let canvas = resize_and_center(
            &cropped,
            self.options.target_size,
            self.options.padding_fraction,
            self.options.filter,
        )?;
        let has_content = !is_fully_transparent(&canvas);

        Ok(NormalizedLogo {
            image: canvas,
            content_width,
            content_height,
            had_transparency,
            has_content,
        })
    }
}
