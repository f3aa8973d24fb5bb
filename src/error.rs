use std::path::PathBuf;

use logo_normalize::{NormalizeError, ParseColorError};
use thiserror::Error;

/// Failure while processing a single logo. Never aborts a batch.
#[derive(Debug, Error)]
pub enum LogoError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Cannot decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Normalize error: {0}")]
    Normalize(#[from] NormalizeError),

    #[error("Encode error: {0}")]
    Encode(#[from] EncodeError),

    #[error("Cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid task: {0}")]
    InvalidTask(String),
}

impl From<ParseColorError> for LogoError {
    fn from(e: ParseColorError) -> Self {
        LogoError::InvalidTask(e.to_string())
    }
}

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("Failed to initialize WebP encoder config")]
    WebpConfig,

    #[error("WebP encode error: {0}")]
    WebpEncode(String),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Invalid quality: {0} (must be 0-100)")]
    InvalidQuality(u8),
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Cannot read manifest {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot parse manifest {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
