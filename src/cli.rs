//! Command-line interface implementation

use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::bitmap::BitDepth;
use crate::classify::Metric;
use crate::config::{check, load_config, merge_cli_overrides, CliOverrides, HqConfig};
use crate::output::{generate_output_path, load_image, save_image, ImageFormat};
use crate::raster::Image;
use crate::scaler::{ScaleError, Scaler};

/// Exit codes
const EXIT_SUCCESS: u8 = 0;
const EXIT_ERROR: u8 = 1;
const EXIT_INVALID_ARGS: u8 = 2;

/// hqscale - Enlarge pixel art with the HQx edge-aware filter
#[derive(Parser, Debug)]
#[command(name = "hqscale")]
#[command(about = "hqscale - Enlarge pixel art 2x or 3x with the HQx filter (.bmp, .png)")]
#[command(version)]
pub struct Cli {
    /// Input image (.bmp or .png)
    pub input: PathBuf,

    /// Scale factor, 2 or 3 (default: from hqscale.toml, else 2)
    #[arg(value_parser = clap::value_parser!(u32).range(2..=3))]
    pub factor: Option<u32>,

    /// Output file or directory.
    /// If omitted: {input}_hq{N}x.{ext}
    /// If directory (ends with /): dir/{input}_hq{N}x.{ext}
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory for derived output names (overrides [output] dir)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Bits per pixel for BMP output (24 or 32)
    #[arg(long, value_parser = parse_bit_depth)]
    pub bits: Option<BitDepth>,

    /// Pixel difference formula
    #[arg(long, value_enum)]
    pub metric: Option<Metric>,

    /// Process rows on the calling thread only
    #[arg(long)]
    pub sequential: bool,

    /// Worker threads for parallel scaling (0 = one per core)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Config file (default: hqscale.toml discovered from the working directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Flags that override hqscale.toml values.
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            factor: self.factor,
            metric: self.metric,
            parallel: self.sequential.then_some(false),
            threads: self.threads,
            bit_depth: self.bits.map(BitDepth::bits),
            dir: self.out_dir.clone(),
        }
    }
}

fn parse_bit_depth(s: &str) -> Result<BitDepth, String> {
    let bits: u16 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    BitDepth::try_from(bits).map_err(|e| e.to_string())
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let mut config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };
    merge_cli_overrides(&mut config, &cli.overrides());
    if let Err(e) = check(&config) {
        eprintln!("Error: {}", e);
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    run_scale(&cli.input, cli.output.as_deref(), &config)
}

/// Install the stderr log subscriber.
///
/// `-v`/`-q` win over `RUST_LOG`; without either flag `RUST_LOG` is honoured
/// and the default is warnings only.
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Some("hqscale=error")
    } else {
        match verbose {
            0 => None,
            1 => Some("hqscale=debug"),
            _ => Some("hqscale=trace"),
        }
    };
    let filter = match level {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hqscale=warn")),
    };

    // A subscriber may already be installed when run() is called twice in-process
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init();
}

/// Execute the scale command
fn run_scale(input: &Path, output: Option<&Path>, config: &HqConfig) -> ExitCode {
    let factor = config.factor();
    let output_path = generate_output_path(input, factor, output, config.output.dir.as_deref());

    // Reject an unknown output format before doing any work
    if let Err(e) = ImageFormat::from_path(&output_path) {
        eprintln!("Error: {}", e);
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    let image = match load_image(input) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("Error: Cannot read input file '{}': {}", input.display(), e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    println!(
        "Resizing '{}' [{}x{}] by {}",
        input.display(),
        image.width(),
        image.height(),
        factor
    );

    let scaler = Scaler::new(factor, config.classifier());
    let started = Instant::now();
    let scaled = match scale_image(&scaler, &image, config) {
        Ok(scaled) => scaled,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    let elapsed = started.elapsed();
    info!(ms = elapsed.as_millis() as u64, "scaled");
    println!("Processing time: {} ms", elapsed.as_millis());

    if let Err(e) = save_image(scaled, &output_path, config.bit_depth()) {
        eprintln!("Error: Failed to save '{}': {}", output_path.display(), e);
        return ExitCode::from(EXIT_ERROR);
    }
    println!("Saved: {}", output_path.display());

    ExitCode::from(EXIT_SUCCESS)
}

/// Scale on the configured execution path.
fn scale_image(scaler: &Scaler, image: &Image, config: &HqConfig) -> Result<Image, ScaleError> {
    if !config.scale.parallel {
        debug!("sequential scaling");
        return scaler.scale(image);
    }
    scale_on_pool(scaler, image, config.scale.threads)
}

/// Parallel scaling, on a dedicated pool when `threads` is non-zero.
#[cfg(feature = "parallel")]
fn scale_on_pool(scaler: &Scaler, image: &Image, threads: usize) -> Result<Image, ScaleError> {
    if threads == 0 {
        return scaler.scale_parallel(image);
    }
    match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(pool) => {
            debug!(threads, "parallel scaling on dedicated pool");
            pool.install(|| scaler.scale_parallel(image))
        }
        Err(e) => {
            warn!("cannot build thread pool, using global pool: {}", e);
            scaler.scale_parallel(image)
        }
    }
}

#[cfg(not(feature = "parallel"))]
fn scale_on_pool(scaler: &Scaler, image: &Image, _threads: usize) -> Result<Image, ScaleError> {
    scaler.scale_parallel(image)
}
