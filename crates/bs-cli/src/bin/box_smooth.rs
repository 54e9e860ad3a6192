//! Box-smooth a 24-bit bitmap and report how long the kernel took.
//!
//!   box_smooth <input.bmp> <output.bmp> <radius> [--workers N]
//!       [--method direct|summed-area] [--iterations N] [--report out.json]
//!
//! Prints `Algorithm time` (all kernel iterations) and `Total time`
//! (decode through encode) on stdout. Diagnostics go to stderr; set
//! `RUST_LOG=debug` for codec and pool details.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use bs_core::{Bgr8, Image};
use bs_smooth::{BoxSmoother, SmoothConfig, SmoothMethod};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "box_smooth")]
#[command(about = "Apply a box (mean) filter to an uncompressed 24-bit bitmap")]
#[command(version)]
struct Cli {
    /// Input bitmap file.
    input: PathBuf,

    /// Output bitmap file. Replaced only once fully written.
    output: PathBuf,

    /// Half-width of the square window in pixels (0 copies the image).
    radius: usize,

    /// Worker threads used by the kernel.
    #[arg(
        long,
        default_value_t = 4,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    workers: usize,

    /// How window sums are computed. Output is identical for both.
    #[arg(long, value_enum, default_value_t = MethodArg::Direct)]
    method: MethodArg,

    /// Times the kernel runs before the result is written (benchmarking).
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    iterations: u32,

    /// Optional JSON file receiving the run parameters and timings.
    #[arg(long)]
    report: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MethodArg {
    Direct,
    SummedArea,
}

impl From<MethodArg> for SmoothMethod {
    fn from(m: MethodArg) -> Self {
        match m {
            MethodArg::Direct => SmoothMethod::Direct,
            MethodArg::SummedArea => SmoothMethod::SummedArea,
        }
    }
}

// ── JSON report ──────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct RunReport {
    input: String,
    output: String,
    width: usize,
    height: usize,
    radius: usize,
    workers: usize,
    method: &'static str,
    iterations: u32,
    algorithm_secs: f64,
    per_iteration_secs: f64,
    total_secs: f64,
}

// ── Main ─────────────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let total_start = Instant::now();

    let (header, src) = bs_bmp::decode(&cli.input)
        .with_context(|| format!("Cannot read bmp file {}", cli.input.display()))?;

    let mut smoother = BoxSmoother::new(SmoothConfig {
        workers: cli.workers,
        method: cli.method.into(),
    })
    .context("configuring smoother")?;
    let cfg = smoother.config().clone();
    let mut dst = Image::new_fill(src.width(), src.height(), Bgr8::default());

    info!(
        width = src.width(),
        height = src.height(),
        radius = cli.radius,
        workers = cfg.workers,
        method = cfg.method.name(),
        iterations = cli.iterations,
        "smoothing"
    );

    let kernel_start = Instant::now();
    for _ in 0..cli.iterations {
        smoother
            .smooth_into(&src.as_view(), cli.radius, &mut dst)
            .context("smoothing image")?;
    }
    let algorithm_secs = kernel_start.elapsed().as_secs_f64();

    bs_bmp::encode(&cli.output, &header, &dst)
        .with_context(|| format!("Cannot write bmp file {}", cli.output.display()))?;

    let total_secs = total_start.elapsed().as_secs_f64();
    println!("Algorithm time: {algorithm_secs:.2} sec.");
    println!("Total time: {total_secs:.2} sec.");

    if let Some(path) = &cli.report {
        write_json(
            path,
            &RunReport {
                input: cli.input.display().to_string(),
                output: cli.output.display().to_string(),
                width: src.width(),
                height: src.height(),
                radius: cli.radius,
                workers: cfg.workers,
                method: cfg.method.name(),
                iterations: cli.iterations,
                algorithm_secs,
                per_iteration_secs: algorithm_secs / f64::from(cli.iterations),
                total_secs,
            },
        )?;
    }

    Ok(())
}

fn write_json(path: &Path, value: &impl Serialize) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value).context("serializing json")?;
    fs::write(path, bytes).with_context(|| format!("writing json {}", path.display()))
}
