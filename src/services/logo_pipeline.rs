use std::fmt;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageReader};
use logo_normalize::{ColorKey, NormalizeOptions, NormalizedLogo, Normalizer};

use crate::error::LogoError;
use crate::models::{EncodeOptions, LogoJob};
use crate::rendering;

/// Outcome quality of a successfully written logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoStatus {
    Ok,
    /// Written, but the source never had transparent pixels (wrong or
    /// missing key color, most likely).
    NoTransparency,
    /// Written, but nothing visible is left (the key removed everything).
    NoContent,
}

impl LogoStatus {
    pub fn is_warning(self) -> bool {
        self != LogoStatus::Ok
    }
}

impl fmt::Display for LogoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogoStatus::Ok => write!(f, "ok"),
            LogoStatus::NoTransparency => write!(f, "no transparent pixels in source"),
            LogoStatus::NoContent => write!(f, "no visible content"),
        }
    }
}

/// Result of processing one job.
#[derive(Debug, Clone)]
pub struct ProcessedLogo {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Encoded size in bytes
    pub size_bytes: usize,
    /// Content size after cropping, before scaling
    pub content_width: u32,
    pub content_height: u32,
    pub status: LogoStatus,
}

/// Load -> normalize -> encode -> write, for one logo at a time.
pub struct LogoPipeline {
    normalizer: Normalizer,
    encode_options: EncodeOptions,
}

impl LogoPipeline {
    pub fn new(
        normalize_options: NormalizeOptions,
        encode_options: EncodeOptions,
    ) -> Result<Self, LogoError> {
        encode_options.validate()?;
        Ok(Self {
            normalizer: Normalizer::new(normalize_options)?,
            encode_options,
        })
    }

    /// Decode an image file, detecting the format from its contents.
    pub fn load(path: &Path) -> Result<DynamicImage, LogoError> {
        if !path.is_file() {
            return Err(LogoError::NotFound(path.to_path_buf()));
        }

        let decode_error = |source: image::ImageError| LogoError::Decode {
            path: path.to_path_buf(),
            source,
        };

        ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| decode_error(image::ImageError::IoError(e)))?
            .decode()
            .map_err(decode_error)
    }

    /// Normalize and encode an in-memory image.
    pub fn render(
        &self,
        image: &DynamicImage,
        key: Option<&ColorKey>,
    ) -> Result<(NormalizedLogo, Vec<u8>), LogoError> {
        let logo = self.normalizer.normalize(image, key)?;
        let bytes = rendering::encode(&logo.image, &self.encode_options)?;
        Ok((logo, bytes))
    }

    /// Run one job end to end and write the result.
    pub fn process(&self, job: &LogoJob) -> Result<ProcessedLogo, LogoError> {
        tracing::debug!(
            input = %job.input.display(),
            output = %job.output.display(),
            key = ?job.color_key,
            target_size = self.normalizer.options().target_size,
            format = ?self.encode_options.format,
            "Processing logo"
        );

        let source = Self::load(&job.input)?;
        tracing::debug!(
            width = source.width(),
            height = source.height(),
            color = ?source.color(),
            "Decoded source"
        );

        let (logo, bytes) = self.render(&source, job.color_key.as_ref())?;
        write_output(&job.output, &bytes)?;

        let status = if !logo.has_content {
            LogoStatus::NoContent
        } else if !logo.had_transparency {
            LogoStatus::NoTransparency
        } else {
            LogoStatus::Ok
        };
        if status.is_warning() {
            tracing::warn!(input = %job.input.display(), %status, "Logo written with warning");
        }

        Ok(ProcessedLogo {
            input: job.input.clone(),
            output: job.output.clone(),
            size_bytes: bytes.len(),
            content_width: logo.content_width,
            content_height: logo.content_height,
            status,
        })
    }
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<(), LogoError> {
    let write_error = |source| LogoError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }
    std::fs::write(path, bytes).map_err(write_error)
}
