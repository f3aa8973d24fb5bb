pub mod job;
pub mod manifest;
pub mod output;

pub use job::{default_output_path, output_path_for, LogoJob, RejectedTask};
pub use manifest::{LoadedManifest, Manifest, ManifestDefaults, ManifestTask};
pub use output::{EncodeOptions, FilterName, OutputFormat, DEFAULT_QUALITY};
