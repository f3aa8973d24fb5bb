use anyhow::Context;
use clap::{ArgGroup, Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use logo_normalize::{
    ColorKey, NormalizeOptions, DEFAULT_PADDING_FRACTION, DEFAULT_TARGET_SIZE, DEFAULT_TOLERANCE,
};
use logokit::models::{
    default_output_path, output_path_for, EncodeOptions, FilterName, LogoJob, Manifest,
    OutputFormat, DEFAULT_QUALITY,
};
use logokit::services::{
    discover_logos, run_batch, validate_dir, BatchReport, JobOutcome, LogoPipeline,
    ValidationRules, ValidationSummary,
};

#[derive(Parser)]
#[command(name = "logokit")]
#[command(about = "Normalize radio station logos into square transparent artwork")]
struct Cli {
    /// Print per-stage details
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a single logo or every logo_* file in a directory
    Normalize(NormalizeArgs),
    /// Normalize the logos listed in a YAML manifest
    Manifest {
        /// Manifest file path
        file: PathBuf,
    },
    /// Check normalized logos for size and transparency problems
    Validate {
        /// Directory of normalized logos
        #[arg(short = 'd', long)]
        input_dir: PathBuf,

        /// Expected canvas side length
        #[arg(long, default_value_t = DEFAULT_TARGET_SIZE)]
        size: u32,

        /// Largest acceptable file size in KB
        #[arg(long, default_value_t = 50)]
        max_kb: u64,
    },
}

#[derive(Args)]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .args(["input", "input_dir"])
))]
struct NormalizeArgs {
    /// Single input file
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Input directory (logo_*.png, .jpg, .jpeg, .webp)
    #[arg(short = 'd', long)]
    input_dir: Option<PathBuf>,

    /// Output file (single-file mode; defaults to the input with a new extension)
    #[arg(short, long, conflicts_with = "input_dir")]
    output: Option<PathBuf>,

    /// Output directory (directory mode; defaults to the input directory)
    #[arg(long, conflicts_with = "input")]
    output_dir: Option<PathBuf>,

    /// Background color to remove: white, black, r,g,b or #rrggbb
    #[arg(short, long)]
    color: Option<String>,

    /// Per-channel color tolerance (0-255)
    #[arg(short, long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: u8,

    /// Output canvas side length in pixels
    #[arg(long, default_value_t = DEFAULT_TARGET_SIZE)]
    size: u32,

    /// Fraction of the canvas left empty on each side
    #[arg(long, default_value_t = DEFAULT_PADDING_FRACTION)]
    padding: f32,

    /// WebP color quality (0-100)
    #[arg(short, long, default_value_t = DEFAULT_QUALITY,
          value_parser = clap::value_parser!(u8).range(0..=100))]
    quality: u8,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Webp)]
    format: OutputFormat,

    /// Resampling filter
    #[arg(long, value_enum, default_value_t = FilterName::Lanczos3)]
    filter: FilterName,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Normalize(args)) => run_normalize_command(args, cli.verbose),
        Some(Commands::Manifest { file }) => run_manifest_command(&file, cli.verbose),
        Some(Commands::Validate {
            input_dir,
            size,
            max_kb,
        }) => run_validate_command(
            &input_dir,
            ValidationRules {
                expected_size: size,
                max_kb,
            },
        ),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for CLI; RUST_LOG overrides.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "logokit=debug,logo_normalize=debug"
    } else {
        "logokit=warn,logo_normalize=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Normalize one file or a directory of logos
fn run_normalize_command(args: NormalizeArgs, verbose: bool) -> anyhow::Result<()> {
    let color_key = args
        .color
        .as_deref()
        .map(|spec| ColorKey::parse(spec, args.tolerance))
        .transpose()?;

    let normalize_options = NormalizeOptions::new()
        .target_size(args.size)
        .padding_fraction(args.padding)
        .filter(args.filter.into());
    let encode_options = EncodeOptions::new()
        .format(args.format)
        .quality(args.quality);
    let pipeline = LogoPipeline::new(normalize_options, encode_options)?;

    if let Some(input) = args.input {
        let output = args
            .output
            .unwrap_or_else(|| default_output_path(&input, args.format));
        let job = LogoJob::new(input, output).with_color_key(color_key);
        run_batch(&pipeline, [Ok(job)], |outcome| print_outcome(outcome, verbose));
        return Ok(());
    }

    // The ArgGroup guarantees one of input / input_dir
    let Some(input_dir) = args.input_dir else {
        anyhow::bail!("either --input or --input-dir is required");
    };
    let output_dir = args.output_dir.unwrap_or_else(|| input_dir.clone());

    let files = discover_logos(&input_dir)
        .with_context(|| format!("Cannot read input directory {}", input_dir.display()))?;
    if files.is_empty() {
        println!("No logo files found in {}", input_dir.display());
        return Ok(());
    }
    println!("Found {} logos to normalize\n", files.len());

    let jobs = files.into_iter().map(|input| {
        let output = output_path_for(&input, &output_dir, args.format);
        Ok(LogoJob::new(input, output).with_color_key(color_key))
    });
    let report = run_batch(&pipeline, jobs, |outcome| print_outcome(outcome, verbose));
    print_report(&report);

    Ok(())
}

/// Normalize every task listed in a manifest
fn run_manifest_command(file: &Path, verbose: bool) -> anyhow::Result<()> {
    let loaded = Manifest::load(file)?;
    let manifest = &loaded.manifest;

    if manifest.tasks.is_empty() {
        println!("No tasks in {}", file.display());
        return Ok(());
    }

    let pipeline = LogoPipeline::new(manifest.normalize_options(), manifest.encode_options())?;
    println!("Found {} tasks in {}\n", manifest.tasks.len(), file.display());

    let report = run_batch(&pipeline, manifest.jobs(&loaded.base_dir), |outcome| {
        print_outcome(outcome, verbose)
    });
    print_report(&report);

    Ok(())
}

/// Report size, dimension and transparency issues for normalized logos
fn run_validate_command(input_dir: &Path, rules: ValidationRules) -> anyhow::Result<()> {
    let inspections = validate_dir(input_dir, &rules)
        .with_context(|| format!("Cannot read input directory {}", input_dir.display()))?;

    if inspections.is_empty() {
        println!("No logo files found in {}", input_dir.display());
        return Ok(());
    }
    println!("Found {} logos to validate\n", inspections.len());

    for inspection in &inspections {
        let status = if inspection.has_errors() {
            "[X]"
        } else if inspection.passes() {
            "[OK]"
        } else {
            "[WARN]"
        };
        println!(
            "{status} {} ({}x{}, {}KB, {})",
            inspection.name,
            inspection.width,
            inspection.height,
            inspection.size_kb(),
            inspection.format
        );
        for issue in &inspection.issues {
            println!("    {issue}");
        }
    }

    let summary = ValidationSummary::from_inspections(&inspections, &rules);
    println!("\n{}", "=".repeat(40));
    println!("Total: {} logos", summary.total);
    println!("Passing: {}", summary.passing);
    println!("With issues: {}", summary.total - summary.passing);
    println!("No transparency: {}", summary.no_transparency);
    println!("Oversized (>{}KB): {}", rules.max_kb, summary.oversized);

    Ok(())
}

fn print_outcome(outcome: &JobOutcome, verbose: bool) {
    match &outcome.result {
        Ok(processed) => {
            let tag = if processed.status.is_warning() {
                "[WARN]"
            } else {
                "[OK]"
            };
            let mut line = format!(
                "{tag} {} -> {} ({}KB)",
                file_name(&processed.input),
                file_name(&processed.output),
                processed.size_bytes / 1024
            );
            if processed.status.is_warning() {
                line.push_str(&format!(" - {}", processed.status));
            }
            println!("{line}");
            if verbose {
                println!(
                    "  Content size: {}x{}",
                    processed.content_width, processed.content_height
                );
                println!("  Output: {}", processed.output.display());
            }
        }
        Err(e) => println!("[ERROR] {}: {e}", outcome.input.display()),
    }
}

fn print_report(report: &BatchReport) {
    println!(
        "\n[DONE] Normalized {}/{} logos",
        report.succeeded, report.total
    );
    if report.warned > 0 {
        println!("       {} with warnings", report.warned);
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Display version and available commands
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Logokit v{VERSION}");
    println!("Square transparent logo artwork for radio station apps\n");

    println!("Defaults:");
    println!("  Canvas:    {DEFAULT_TARGET_SIZE}x{DEFAULT_TARGET_SIZE}");
    println!("  Padding:   {DEFAULT_PADDING_FRACTION}");
    println!("  Quality:   {DEFAULT_QUALITY}");
    println!("  Tolerance: {DEFAULT_TOLERANCE}");

    println!("\nCommands:");
    println!("  logokit normalize   Normalize a logo file or directory");
    println!("  logokit manifest    Normalize logos listed in a YAML manifest");
    println!("  logokit validate    Check normalized logos");
    println!("\nRun 'logokit --help' for more details.");
}
