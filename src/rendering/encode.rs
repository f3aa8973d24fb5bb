use std::io::Cursor;

use image::RgbaImage;

use crate::error::EncodeError;
use crate::models::{EncodeOptions, OutputFormat};

/// Encode a normalized canvas with its alpha channel intact.
///
/// - `webp`: lossy color at `quality`, alpha plane stored losslessly
/// - `png`: 8-bit RGBA, re-compressed with oxipng
pub fn encode(image: &RgbaImage, options: &EncodeOptions) -> Result<Vec<u8>, EncodeError> {
    options.validate()?;

    let bytes = match options.format {
        OutputFormat::Webp => encode_webp(image, options.quality)?,
        OutputFormat::Png => encode_png(image)?,
    };

    tracing::debug!(
        format = ?options.format,
        quality = options.quality,
        bytes = bytes.len(),
        "Encoded canvas"
    );

    Ok(bytes)
}

fn encode_webp(image: &RgbaImage, quality: u8) -> Result<Vec<u8>, EncodeError> {
    let mut config = webp::WebPConfig::new().map_err(|_| EncodeError::WebpConfig)?;
    config.lossless = 0;
    config.quality = quality as f32;
    // Slowest method, best compression
    config.method = 6;
    // Lossless alpha: transparency must survive the lossy color codec
    config.alpha_compression = 1;
    config.alpha_quality = 100;

    let encoder = webp::Encoder::from_rgba(image.as_raw(), image.width(), image.height());
    let memory = encoder
        .encode_advanced(&config)
        .map_err(|e| EncodeError::WebpEncode(format!("{e:?}")))?;

    Ok(memory.to_vec())
}

fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, EncodeError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, image.width(), image.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| EncodeError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(image.as_raw())
            .map_err(|e| EncodeError::PngEncode(e.to_string()))?;
    }
    let png_bytes = buf.into_inner();

    // Re-compress with oxipng (zopfli + adaptive filter selection)
    match oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    ) {
        Ok(optimized) => Ok(optimized),
        Err(e) => {
            tracing::warn!(%e, "oxipng optimization failed, keeping fast PNG");
            Ok(png_bytes)
        }
    }
}
