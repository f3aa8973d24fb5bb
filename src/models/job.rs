use std::path::{Path, PathBuf};

use logo_normalize::ColorKey;

use crate::error::LogoError;
use crate::models::OutputFormat;

/// One logo to normalize: where it comes from, where it goes, and which
/// background color (if any) to key out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub color_key: Option<ColorKey>,
}

impl LogoJob {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            color_key: None,
        }
    }

    pub fn with_color_key(mut self, key: Option<ColorKey>) -> Self {
        self.color_key = key;
        self
    }
}

/// A task that could not be turned into a [`LogoJob`] (e.g. a bad color).
#[derive(Debug)]
pub struct RejectedTask {
    pub input: PathBuf,
    pub error: LogoError,
}

/// Output path for `input` inside `output_dir`: same stem, format extension.
pub fn output_path_for(input: &Path, output_dir: &Path, format: OutputFormat) -> PathBuf {
    let mut name = input.file_stem().unwrap_or(input.as_os_str()).to_os_string();
    name.push(".");
    name.push(format.extension());
    output_dir.join(name)
}

/// Default output for single-file mode: the input path with the format
/// extension substituted.
pub fn default_output_path(input: &Path, format: OutputFormat) -> PathBuf {
    input.with_extension(format.extension())
}
