//! logo-normalize: square, transparent, padded logo artwork
//!
//! This library turns arbitrary logo images (solid background or already
//! transparent, any dimensions) into a fixed-size square RGBA canvas with the
//! subject centered inside a transparent border.
//!
//! # Quick Start
//!
//! ```
//! use image::{DynamicImage, Rgba, RgbaImage};
//! use logo_normalize::{ColorKey, NormalizeOptions, Normalizer};
//!
//! let source = RgbaImage::from_pixel(300, 120, Rgba([255, 255, 255, 255]));
//! let normalizer = Normalizer::new(NormalizeOptions::default()).unwrap();
//! let key = ColorKey::new(ColorKey::WHITE, 40);
//!
//! let logo = normalizer
//!     .normalize(&DynamicImage::ImageRgba8(source), Some(&key))
//!     .unwrap();
//! assert_eq!(logo.image.dimensions(), (512, 512));
//! ```
//!
//! # Pipeline
//!
//! ```text
//! DynamicImage            (any color mode)
//!     |
//!     v
//! RgbaImage               (to_rgba8)
//!     |
//!     v
//! remove_key_color        (optional ColorKey -> alpha 0)
//!     |
//!     v
//! crop_to_content         (tightest box around alpha > 0)
//!     |
//!     v
//! resize_and_center       (uniform scale, alpha-aware filter, centered paste)
//!     |
//!     v
//! NormalizedLogo          (target_size x target_size)
//! ```
//!
//! Every stage is a pure function of its inputs. Each stage can also be
//! called on its own; see [`remove_key_color`], [`crop_to_content`] and
//! [`resize_and_center`].
//!
//! Encoding is left to the caller. The canvas is plain `image::RgbaImage`.

pub mod canvas;
pub mod color_key;
pub mod crop;
pub mod error;
mod normalizer;
pub mod options;
pub mod transparency;


pub use canvas::{resize_and_center, ResampleFilter};
pub use color_key::{parse_rgb, remove_key_color, ColorKey, DEFAULT_TOLERANCE};
pub use crop::{content_bounds, crop_to_content, ContentBounds};
pub use error::{NormalizeError, ParseColorError};
pub use normalizer::{NormalizedLogo, Normalizer};
pub use options::{NormalizeOptions, DEFAULT_PADDING_FRACTION, DEFAULT_TARGET_SIZE};
pub use transparency::{corner_alpha, has_transparency, is_fully_transparent};
