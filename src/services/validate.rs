//! Checks already-normalized logos against the output invariants.
//!
//! Each logo is expected to be square at the target size, reasonably small,
//! and genuinely transparent around the subject (judged by the average alpha
//! of its corner blocks).

use std::fmt;
use std::path::{Path, PathBuf};

use image::ImageReader;
use logo_normalize::{corner_alpha, DEFAULT_TARGET_SIZE};

use crate::services::batch::{discover_with, LOGO_PREFIX};

/// Side length of each corner block sampled for transparency.
pub const CORNER_SIZE: u32 = 10;

/// Corners with a mean alpha at or above this are considered opaque.
pub const TRANSPARENT_CORNER_THRESHOLD: f32 = 50.0;

/// Extensions of normalized logos.
const VALIDATED_EXTENSIONS: &[&str] = &["png", "webp"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    pub expected_size: u32,
    pub max_kb: u64,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            expected_size: DEFAULT_TARGET_SIZE,
            max_kb: 50,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Issue {
    LargeFile { kb: u64, max_kb: u64 },
    NonStandardSize { width: u32, height: u32, expected: u32 },
    NoAlpha,
    OpaqueCorners { alpha: f32 },
    Unreadable(String),
}

impl Issue {
    pub fn is_error(&self) -> bool {
        !matches!(self, Issue::LargeFile { .. } | Issue::NonStandardSize { .. })
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::LargeFile { kb, max_kb } => {
                write!(f, "[WARN] Large file: {kb}KB (should be <{max_kb}KB)")
            }
            Issue::NonStandardSize {
                width,
                height,
                expected,
            } => write!(
                f,
                "[WARN] Non-standard size: {width}x{height} (should be {expected}x{expected})"
            ),
            Issue::NoAlpha => write!(f, "[ERROR] No alpha channel (no transparency)"),
            Issue::OpaqueCorners { alpha } => {
                write!(f, "[ERROR] No real transparency (corner alpha: {alpha:.0})")
            }
            Issue::Unreadable(reason) => write!(f, "[ERROR] Unreadable: {reason}"),
        }
    }
}

/// What was found when inspecting one logo file.
#[derive(Debug, Clone)]
pub struct LogoInspection {
    pub path: PathBuf,
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub size_bytes: u64,
    pub format: String,
    pub has_alpha: bool,
    /// Mean corner alpha; 255 when the image has no alpha channel.
    pub corner_alpha: f32,
    pub issues: Vec<Issue>,
}

impl LogoInspection {
    pub fn size_kb(&self) -> u64 {
        self.size_bytes / 1024
    }

    pub fn transparent_corners(&self) -> bool {
        self.has_alpha && self.corner_alpha < TRANSPARENT_CORNER_THRESHOLD
    }

    pub fn passes(&self) -> bool {
        self.issues.is_empty()
    }

    /// True when any issue is an `[ERROR]`, not just a warning.
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(Issue::is_error)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationSummary {
    pub total: usize,
    pub passing: usize,
    pub no_transparency: usize,
    pub oversized: usize,
}

impl ValidationSummary {
    pub fn from_inspections(inspections: &[LogoInspection], rules: &ValidationRules) -> Self {
        Self {
            total: inspections.len(),
            passing: inspections.iter().filter(|i| i.passes()).count(),
            no_transparency: inspections
                .iter()
                .filter(|i| !i.transparent_corners())
                .count(),
            oversized: inspections
                .iter()
                .filter(|i| i.size_kb() > rules.max_kb)
                .count(),
        }
    }
}

fn is_normalized_logo(path: &Path) -> bool {
    let name_ok = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with(LOGO_PREFIX));
    let ext_ok = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| VALIDATED_EXTENSIONS.iter().any(|v| e.eq_ignore_ascii_case(v)));
    name_ok && ext_ok
}

/// Inspect a single file. Read and decode failures become issues.
pub fn inspect_logo(path: &Path, rules: &ValidationRules) -> LogoInspection {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let fallback_format = path
        .extension()
        .map(|e| e.to_string_lossy().to_uppercase())
        .unwrap_or_default();

    let mut inspection = LogoInspection {
        path: path.to_path_buf(),
        name,
        width: 0,
        height: 0,
        size_bytes: std::fs::metadata(path).map(|m| m.len()).unwrap_or(0),
        format: fallback_format,
        has_alpha: false,
        corner_alpha: 255.0,
        issues: Vec::new(),
    };

    let decoded = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| e.to_string())
        .and_then(|reader| {
            let format = reader.format();
            reader
                .decode()
                .map(|image| (format, image))
                .map_err(|e| e.to_string())
        });

    let (format, image) = match decoded {
        Ok(decoded) => decoded,
        Err(reason) => {
            inspection.issues.push(Issue::Unreadable(reason));
            return inspection;
        }
    };

    if let Some(format) = format {
        inspection.format = format!("{format:?}").to_uppercase();
    }
    inspection.width = image.width();
    inspection.height = image.height();
    inspection.has_alpha = image.color().has_alpha();
    if inspection.has_alpha {
        inspection.corner_alpha = corner_alpha(&image.to_rgba8(), CORNER_SIZE);
    }

    if inspection.size_kb() > rules.max_kb {
        inspection.issues.push(Issue::LargeFile {
            kb: inspection.size_kb(),
            max_kb: rules.max_kb,
        });
    }
    if inspection.width != rules.expected_size || inspection.height != rules.expected_size {
        inspection.issues.push(Issue::NonStandardSize {
            width: inspection.width,
            height: inspection.height,
            expected: rules.expected_size,
        });
    }
    if !inspection.has_alpha {
        inspection.issues.push(Issue::NoAlpha);
    } else if !inspection.transparent_corners() {
        inspection.issues.push(Issue::OpaqueCorners {
            alpha: inspection.corner_alpha,
        });
    }

    tracing::debug!(
        name = %inspection.name,
        issues = inspection.issues.len(),
        corner_alpha = inspection.corner_alpha,
        "Inspected logo"
    );

    inspection
}

/// Inspect every `logo_*.{png,webp}` in `dir`.
///
/// Logos with issues come first, then by name.
pub fn validate_dir(dir: &Path, rules: &ValidationRules) -> std::io::Result<Vec<LogoInspection>> {
    let mut inspections: Vec<LogoInspection> = discover_with(dir, is_normalized_logo)?
        .iter()
        .map(|path| inspect_logo(path, rules))
        .collect();
    inspections.sort_by(|a, b| {
        a.passes()
            .cmp(&b.passes())
            .then_with(|| a.name.cmp(&b.name))
    });
    Ok(inspections)
}
