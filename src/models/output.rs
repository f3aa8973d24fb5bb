use clap::ValueEnum;
use logo_normalize::ResampleFilter;
use serde::Deserialize;

use crate::error::EncodeError;

/// Default lossy quality for WebP color channels.
pub const DEFAULT_QUALITY: u8 = 90;

/// Encoded file format for normalized logos. Both keep the alpha channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Lossy color, lossless alpha
    #[default]
    Webp,
    /// Lossless RGBA, oxipng-optimized
    Png,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Webp => "webp",
            OutputFormat::Png => "png",
        }
    }
}

/// Resampling filter names accepted on the command line and in manifests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterName {
    #[default]
    Lanczos3,
    CatmullRom,
    Mitchell,
    Box,
}

impl From<FilterName> for ResampleFilter {
    fn from(name: FilterName) -> Self {
        match name {
            FilterName::Lanczos3 => ResampleFilter::Lanczos3,
            FilterName::CatmullRom => ResampleFilter::CatmullRom,
            FilterName::Mitchell => ResampleFilter::Mitchell,
            FilterName::Box => ResampleFilter::Box,
        }
    }
}

/// How a normalized canvas is written to bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    pub format: OutputFormat,
    /// 0-100; only affects WebP color channels.
    pub quality: u8,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            quality: DEFAULT_QUALITY,
        }
    }
}

impl EncodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    pub fn validate(&self) -> Result<(), EncodeError> {
        if self.quality > 100 {
            return Err(EncodeError::InvalidQuality(self.quality));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extensions() {
        assert_eq!(OutputFormat::Webp.extension(), "webp");
        assert_eq!(OutputFormat::Png.extension(), "png");
    }

    #[test]
    fn test_encode_options_defaults() {
        let opts = EncodeOptions::default();
        assert_eq!(opts.format, OutputFormat::Webp);
        assert_eq!(opts.quality, 90);
    }

    #[test]
    fn test_validate_quality_range() {
        assert!(EncodeOptions::new().quality(100).validate().is_ok());
        assert!(matches!(
            EncodeOptions::new().quality(150).validate(),
            Err(EncodeError::InvalidQuality(150))
        ));
    }

    #[test]
    fn test_deserialize_names() {
        let format: OutputFormat = serde_yaml::from_str("png").unwrap();
        assert_eq!(format, OutputFormat::Png);
        let filter: FilterName = serde_yaml::from_str("catmull-rom").unwrap();
        assert_eq!(ResampleFilter::from(filter), ResampleFilter::CatmullRom);
    }
}
