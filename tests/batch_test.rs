//! Directory-mode batches: discovery, output naming and failure isolation.

mod common;

use std::path::PathBuf;

use logo_normalize::{ColorKey, NormalizeOptions};
use logokit::error::LogoError;
use logokit::models::{output_path_for, EncodeOptions, LogoJob, OutputFormat};
use logokit::services::{discover_logos, run_batch, BatchReport, LogoPipeline, LogoStatus};
use pretty_assertions::assert_eq;

use common::fixtures;
use common::TestWorkspace;

fn small_pipeline() -> LogoPipeline {
    LogoPipeline::new(NormalizeOptions::new().target_size(128), EncodeOptions::new()).unwrap()
}

fn directory_jobs(
    files: Vec<PathBuf>,
    output_dir: PathBuf,
    key: Option<ColorKey>,
) -> impl Iterator<Item = Result<LogoJob, logokit::models::RejectedTask>> {
    files.into_iter().map(move |input| {
        let output = output_path_for(&input, &output_dir, OutputFormat::Webp);
        Ok(LogoJob::new(input, output).with_color_key(key))
    })
}

#[test]
fn test_discovery_only_picks_logo_sources() {
    let ws = TestWorkspace::new();
    ws.write_image("logo_b.png", &fixtures::white_banner());
    ws.write_image("logo_a.jpg", &fixtures::jpeg_banner());
    ws.write_image("logo_c.webp", &fixtures::transparent_logo());
    ws.write_image("icon_d.png", &fixtures::white_banner());
    ws.write_bytes("logo_notes.txt", b"not an image");
    ws.write_image("nested/logo_e.png", &fixtures::white_banner());

    let found = discover_logos(ws.path()).unwrap();

    let names: Vec<_> = found
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["logo_a.jpg", "logo_b.png", "logo_c.webp"]);
}

#[test]
fn test_discovery_of_missing_directory_fails() {
    let ws = TestWorkspace::new();
    assert!(discover_logos(&ws.join("does-not-exist")).is_err());
}

#[test]
fn test_corrupt_file_does_not_abort_batch() {
    let ws = TestWorkspace::new();
    ws.write_image("in/logo_a.png", &fixtures::white_banner());
    ws.write_bytes("in/logo_b.png", fixtures::CORRUPT_IMAGE);
    ws.write_image("in/logo_c.jpg", &fixtures::jpeg_banner());

    let files = discover_logos(&ws.join("in")).unwrap();
    let key = Some(ColorKey::new(ColorKey::WHITE, 40));

    let mut seen = Vec::new();
    let report = run_batch(
        &small_pipeline(),
        directory_jobs(files, ws.join("out"), key),
        |outcome| seen.push((outcome.input.clone(), outcome.result.is_ok())),
    );

    assert_eq!(
        report,
        BatchReport {
            total: 3,
            succeeded: 2,
            warned: 0,
            failed: 1
        }
    );
    assert_eq!(
        seen,
        vec![
            (ws.join("in/logo_a.png"), true),
            (ws.join("in/logo_b.png"), false),
            (ws.join("in/logo_c.jpg"), true),
        ]
    );

    assert!(ws.exists("out/logo_a.webp"));
    assert!(!ws.exists("out/logo_b.webp"));
    assert!(ws.exists("out/logo_c.webp"));
    common::assert_square_transparent_canvas(&ws.read_rgba("out/logo_c.webp"), 128);
}

#[test]
fn test_decode_failure_names_the_file() {
    let ws = TestWorkspace::new();
    let input = ws.write_bytes("logo_broken.png", fixtures::CORRUPT_IMAGE);

    let mut errors = Vec::new();
    run_batch(
        &small_pipeline(),
        [Ok(LogoJob::new(&input, ws.join("logo_broken.webp")))],
        |outcome| {
            if let Err(e) = &outcome.result {
                errors.push(e.to_string());
            }
        },
    );

    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("Cannot decode"), "{}", errors[0]);
    assert!(errors[0].contains("logo_broken.png"), "{}", errors[0]);
}

#[test]
fn test_warnings_are_counted_as_successes() {
    let ws = TestWorkspace::new();
    ws.write_image("logo_keyed.png", &fixtures::white_banner());
    ws.write_image("logo_opaque.png", &fixtures::white_banner());

    let jobs = vec![
        Ok(LogoJob::new(ws.join("logo_keyed.png"), ws.join("out/logo_keyed.webp"))
            .with_color_key(Some(ColorKey::new(ColorKey::WHITE, 40)))),
        Ok(LogoJob::new(ws.join("logo_opaque.png"), ws.join("out/logo_opaque.webp"))),
    ];

    let mut statuses = Vec::new();
    let report = run_batch(&small_pipeline(), jobs, |outcome| {
        if let Ok(processed) = &outcome.result {
            statuses.push(processed.status);
        }
    });

    assert_eq!(statuses, vec![LogoStatus::Ok, LogoStatus::NoTransparency]);
    assert_eq!(report.succeeded, 2);
    assert_eq!(report.warned, 1);
    assert_eq!(report.failed, 0);
}

#[test]
fn test_output_name_keeps_inner_dots() {
    let ws = TestWorkspace::new();
    let input = ws.write_image("logo_radio.fm.png", &fixtures::transparent_logo());

    let output = output_path_for(&input, &ws.join("out"), OutputFormat::Webp);
    assert_eq!(output, ws.join("out/logo_radio.fm.webp"));

    let processed = small_pipeline()
        .process(&LogoJob::new(&input, &output))
        .unwrap();
    assert_eq!(processed.output, output);
    common::assert_webp(&ws.read_bytes("out/logo_radio.fm.webp"));
}

#[test]
fn test_unwritable_output_is_reported() {
    let ws = TestWorkspace::new();
    let input = ws.write_image("logo_a.png", &fixtures::transparent_logo());
    // A regular file where the output directory should be
    ws.write_bytes("blocked", b"");

    let result = small_pipeline().process(&LogoJob::new(&input, ws.join("blocked/logo_a.webp")));

    assert!(matches!(result, Err(LogoError::Write { .. })));
}
