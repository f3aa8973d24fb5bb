use std::path::{Path, PathBuf};

use logo_normalize::{ColorKey, NormalizeOptions, DEFAULT_TOLERANCE};
use serde::Deserialize;

use crate::error::ManifestError;
use crate::models::job::{default_output_path, LogoJob, RejectedTask};
use crate::models::{EncodeOptions, FilterName, OutputFormat};

/// Batch manifest loaded from a YAML file.
///
/// Lists logos to normalize, each with its own background color, plus
/// optional shared defaults for the canvas and encoder.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub defaults: ManifestDefaults,

    #[serde(default)]
    pub tasks: Vec<ManifestTask>,
}

/// Shared settings; anything left out falls back to the built-in defaults.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct ManifestDefaults {
    /// Output canvas side length
    pub size: Option<u32>,
    /// Padding fraction per side
    pub padding: Option<f32>,
    /// WebP color quality (0-100)
    pub quality: Option<u8>,
    pub format: Option<OutputFormat>,
    pub filter: Option<FilterName>,
    /// Key color tolerance for tasks that do not set their own
    pub tolerance: Option<u8>,
}

/// A single logo entry.
#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct ManifestTask {
    /// Source image (relative to the manifest's directory)
    pub input: PathBuf,

    /// Destination; defaults to the input path with the format extension
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Background color to remove: `white`, `black`, `r,g,b` or `#rrggbb`.
    /// Omit for sources that are already transparent.
    #[serde(default)]
    pub color: Option<String>,

    #[serde(default)]
    pub tolerance: Option<u8>,
}

/// A parsed manifest together with the directory relative paths resolve
/// against.
#[derive(Debug, Clone)]
pub struct LoadedManifest {
    pub manifest: Manifest,
    pub base_dir: PathBuf,
}

impl Manifest {
    /// Parse manifest YAML.
    pub fn from_yaml(content: &str, path: &Path) -> Result<Self, ManifestError> {
        serde_yaml::from_str(content).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read and parse a manifest file.
    pub fn load(path: &Path) -> Result<LoadedManifest, ManifestError> {
        let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest = Self::from_yaml(&content, path)?;

        tracing::info!(
            path = %path.display(),
            tasks = manifest.tasks.len(),
            "Loaded manifest"
        );

        let base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Ok(LoadedManifest { manifest, base_dir })
    }

    pub fn normalize_options(&self) -> NormalizeOptions {
        let mut options = NormalizeOptions::new();
        if let Some(size) = self.defaults.size {
            options = options.target_size(size);
        }
        if let Some(padding) = self.defaults.padding {
            options = options.padding_fraction(padding);
        }
        if let Some(filter) = self.defaults.filter {
            options = options.filter(filter.into());
        }
        options
    }

    pub fn encode_options(&self) -> EncodeOptions {
        let mut options = EncodeOptions::new();
        if let Some(format) = self.defaults.format {
            options = options.format(format);
        }
        if let Some(quality) = self.defaults.quality {
            options = options.quality(quality);
        }
        options
    }

    /// Turn every task into a job, resolving paths against `base_dir`.
    ///
    /// A task with an invalid color is rejected on its own; the rest still
    /// produce jobs.
    pub fn jobs(&self, base_dir: &Path) -> Vec<Result<LogoJob, RejectedTask>> {
        let format = self.encode_options().format;
        let default_tolerance = self.defaults.tolerance.unwrap_or(DEFAULT_TOLERANCE);

        self.tasks
            .iter()
            .map(|task| {
                let input = base_dir.join(&task.input);
                let output = match &task.output {
                    Some(output) => base_dir.join(output),
                    None => default_output_path(&input, format),
                };

                let tolerance = task.tolerance.unwrap_or(default_tolerance);
                let color_key = match task.color.as_deref() {
                    Some(spec) => match ColorKey::parse(spec, tolerance) {
                        Ok(key) => Some(key),
                        Err(e) => {
                            return Err(RejectedTask {
                                input,
                                error: e.into(),
                            })
                        }
                    },
                    None => None,
                };

                Ok(LogoJob::new(input, output).with_color_key(color_key))
            })
            .collect()
    }
}
