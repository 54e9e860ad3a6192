//! Example: smooth a synthetic checkerboard.
//!
//! Writes `checker.bmp` and `checker_smoothed.bmp` into the output directory.
//! The width defaults to a multiple of 4 so that generic image viewers, which
//! expect padded rows, display both files correctly.
//!
//! Run from the workspace root:
//!   cargo run -p boxsmooth --example synthetic -- --help
//!   cargo run -p boxsmooth --example synthetic -- --radius 4

use std::path::PathBuf;

use anyhow::{Context, Result};
use boxsmooth::{Bgr8, BmpHeader, BoxSmoother, Image, SmoothConfig, SmoothMethod, encode};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(about = "Smooth a generated checkerboard and write both images")]
struct Args {
    /// Output directory
    #[arg(long, default_value = ".")]
    out: PathBuf,

    #[arg(long, default_value_t = 256)]
    width: u32,

    #[arg(long, default_value_t = 192)]
    height: u32,

    /// Checker cell size in pixels
    #[arg(long, default_value_t = 16)]
    cell: usize,

    #[arg(long, default_value_t = 3)]
    radius: usize,

    #[arg(long, default_value_t = 4)]
    workers: usize,

    /// Use the integral-image method instead of direct summation
    #[arg(long)]
    summed_area: bool,
}

fn checkerboard(width: usize, height: usize, cell: usize) -> Result<Image<Bgr8>> {
    let cell = cell.max(1);
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let on = ((x / cell) + (y / cell)) % 2 == 0;
            data.push(if on {
                Bgr8::new(40, 180, 250)
            } else {
                Bgr8::new(90, 20, 10)
            });
        }
    }
    Image::from_vec(width, height, data).context("building checkerboard")
}

fn main() -> Result<()> {
    let args = Args::parse();

    let header = BmpHeader::bgr24(args.width, args.height);
    let src = checkerboard(args.width as usize, args.height as usize, args.cell)?;

    let mut smoother = BoxSmoother::new(SmoothConfig {
        workers: args.workers,
        method: if args.summed_area {
            SmoothMethod::SummedArea
        } else {
            SmoothMethod::Direct
        },
    })?;
    let dst = smoother.smooth(&src.as_view(), args.radius);

    let src_path = args.out.join("checker.bmp");
    let dst_path = args.out.join("checker_smoothed.bmp");
    encode(&src_path, &header, &src).with_context(|| format!("writing {}", src_path.display()))?;
    encode(&dst_path, &header, &dst).with_context(|| format!("writing {}", dst_path.display()))?;

    println!(
        "wrote {} and {} ({}x{}, radius {})",
        src_path.display(),
        dst_path.display(),
        args.width,
        args.height,
        args.radius
    );
    Ok(())
}
