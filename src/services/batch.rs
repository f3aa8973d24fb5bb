use std::path::{Path, PathBuf};

use crate::error::LogoError;
use crate::models::{LogoJob, RejectedTask};
use crate::services::logo_pipeline::{LogoPipeline, ProcessedLogo};

/// File name prefix of logos picked up in directory mode.
pub const LOGO_PREFIX: &str = "logo_";

/// Source extensions picked up in directory mode (case-insensitive).
pub const LOGO_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// Result of one job in a batch.
#[derive(Debug)]
pub struct JobOutcome {
    pub input: PathBuf,
    pub result: Result<ProcessedLogo, LogoError>,
}

/// Totals for a finished batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub total: usize,
    pub succeeded: usize,
    /// Succeeded but flagged (subset of `succeeded`)
    pub warned: usize,
    pub failed: usize,
}

impl BatchReport {
    fn record(&mut self, outcome: &JobOutcome) {
        self.total += 1;
        match &outcome.result {
            Ok(processed) => {
                self.succeeded += 1;
                if processed.status.is_warning() {
                    self.warned += 1;
                }
            }
            Err(_) => self.failed += 1,
        }
    }
}

/// Whether `path` names a logo source file (`logo_*.{png,jpg,jpeg,webp}`).
pub fn is_logo_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    name.starts_with(LOGO_PREFIX)
        && LOGO_EXTENSIONS
            .iter()
            .any(|candidate| ext.eq_ignore_ascii_case(candidate))
}

/// List logo source files directly inside `dir`, sorted by path.
pub fn discover_logos(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    discover_with(dir, is_logo_file)
}

pub(crate) fn discover_with(
    dir: &Path,
    accept: impl Fn(&Path) -> bool,
) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && accept(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Process jobs one after another.
///
/// Every job is attempted: a failure is reported through `on_result` and
/// the batch moves on. Rejected tasks are reported as failures without
/// touching the filesystem.
pub fn run_batch<I, F>(pipeline: &LogoPipeline, jobs: I, mut on_result: F) -> BatchReport
where
    I: IntoIterator<Item = Result<LogoJob, RejectedTask>>,
    F: FnMut(&JobOutcome),
{
    let mut report = BatchReport::default();

    for job in jobs {
        let outcome = match job {
            Ok(job) => JobOutcome {
                result: pipeline.process(&job),
                input: job.input,
            },
            Err(rejected) => JobOutcome {
                input: rejected.input,
                result: Err(rejected.error),
            },
        };

        if let Err(e) = &outcome.result {
            tracing::debug!(input = %outcome.input.display(), %e, "Job failed");
        }

        report.record(&outcome);
        on_result(&outcome);
    }

    tracing::info!(
        total = report.total,
        succeeded = report.succeeded,
        warned = report.warned,
        failed = report.failed,
        "Batch finished"
    );

    report
}
