//! Detprep: scale-consistent preprocessing for object-detection training.
//!
//! Detprep takes a raw labeled image (a CHW RGB image, its bounding boxes
//! and their class labels), resizes it under shorter-edge / longer-edge
//! bounds, normalizes its intensities, and randomly mirrors it, re-projecting
//! every box through the same geometry so image and annotations stay
//! aligned.
//!
//! # Modules
//!
//! - [`sample`]: Data model (images, boxes, labels, samples)
//! - [`transform`]: The resize / normalize / flip pipeline
//! - [`source`]: Sample providers (in-memory, Pascal VOC)
//! - [`dataset`]: Indexed, seeded access to transformed samples
//! - [`config`]: Pipeline-wide size bounds
//! - [`error`]: Error types for detprep operations

pub mod config;
pub mod dataset;
pub mod error;
pub mod inspect;
pub mod sample;
pub mod source;
pub mod transform;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub use config::TransformConfig;
pub use dataset::Dataset;
pub use error::PrepError;
pub use transform::SampleTransform;

/// The detprep CLI application.
#[derive(Parser)]
#[command(name = "detprep")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Show the resize scale and output size for an image size.
    Scale(ScaleArgs),
    /// Run the full transform on one Pascal VOC sample and report the result.
    Inspect(InspectArgs),
}

/// Size bounds shared by all subcommands.
#[derive(clap::Args)]
struct SizeArgs {
    /// JSON config file with `min_size` and/or `max_size`.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Target length for the shorter image edge (default 600).
    #[arg(long, env = "DETPREP_MIN_SIZE")]
    min_size: Option<f64>,

    /// Cap on the longer image edge (default 1000).
    #[arg(long, env = "DETPREP_MAX_SIZE")]
    max_size: Option<f64>,
}

impl SizeArgs {
    /// Layer flags over the config file over defaults, then validate.
    fn resolve(&self) -> Result<TransformConfig, PrepError> {
        let mut config = match &self.config {
            Some(path) => TransformConfig::from_json_file(path)?,
            None => TransformConfig::default(),
        };
        if let Some(min_size) = self.min_size {
            config.min_size = min_size;
        }
        if let Some(max_size) = self.max_size {
            config.max_size = max_size;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Arguments for the scale subcommand.
#[derive(clap::Args)]
struct ScaleArgs {
    /// Original image height in pixels.
    #[arg(long)]
    height: usize,

    /// Original image width in pixels.
    #[arg(long)]
    width: usize,

    #[command(flatten)]
    sizes: SizeArgs,

    /// Output format ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

/// Arguments for the inspect subcommand.
#[derive(clap::Args)]
struct InspectArgs {
    /// Pascal VOC root directory (containing Annotations/, JPEGImages/, ImageSets/).
    root: PathBuf,

    /// Split list under ImageSets/Main/ to read ids from.
    #[arg(long, default_value = "trainval")]
    split: String,

    /// Index of the sample within the split.
    #[arg(long, default_value_t = 0)]
    index: usize,

    /// Seed for the flip draw; omit for a random flip.
    #[arg(long)]
    seed: Option<u64>,

    /// Keep objects marked as difficult.
    #[arg(long)]
    use_difficult: bool,

    #[command(flatten)]
    sizes: SizeArgs,

    /// Output format ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

/// Run the detprep CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), PrepError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Scale(args)) => run_scale(args),
        Some(Commands::Inspect(args)) => run_inspect(args),
        None => {
            println!("detprep {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Scale-consistent image and box preprocessing for detection training.");
            println!();
            println!("Run 'detprep --help' for usage information.");
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("detprep={default_level}")));

    // A subscriber may already be installed when embedded; keep the existing one.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init();
}

/// Execute the scale subcommand.
fn run_scale(args: ScaleArgs) -> Result<(), PrepError> {
    let config = args.sizes.resolve()?;
    let report = inspect::inspect_scale(args.height, args.width, &config)?;
    print_report(&report, &args.output)
}

/// Execute the inspect subcommand.
fn run_inspect(args: InspectArgs) -> Result<(), PrepError> {
    let config = args.sizes.resolve()?;
    let source = source::VocSource::open(&args.root, &args.split, args.use_difficult)?;
    let dataset = Dataset::new(source, config, args.seed);
    let report = inspect::inspect_sample(&dataset, args.index)?;
    print_report(&report, &args.output)
}

fn print_report<T>(report: &T, output: &str) -> Result<(), PrepError>
where
    T: serde::Serialize + std::fmt::Display,
{
    match output {
        "json" => println!("{}", serde_json::to_string_pretty(report)?),
        "text" => print!("{}", report),
        other => {
            return Err(PrepError::UnsupportedFormat(format!(
                "'{}' (supported: text, json)",
                other
            )));
        }
    }
    Ok(())
}
