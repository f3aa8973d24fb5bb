pub mod batch;
pub mod logo_pipeline;
pub mod validate;

pub use batch::{discover_logos, run_batch, BatchReport, JobOutcome};
pub use logo_pipeline::{LogoPipeline, LogoStatus, ProcessedLogo};
pub use validate::{validate_dir, LogoInspection, ValidationRules, ValidationSummary};
