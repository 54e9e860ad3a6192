//! Umbrella crate for the `boxsmooth` workspace.
//!
//! Re-exports the pixel/image primitives, the bitmap codec and the
//! smoothing kernel so that a typical pipeline needs one dependency:
//!
//! ```no_run
//! use boxsmooth::{BoxSmoother, SmoothConfig, decode, encode};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let (header, src) = decode("in.bmp")?;
//! let mut smoother = BoxSmoother::new(SmoothConfig::default())?;
//! let dst = smoother.smooth(&src.as_view(), 2);
//! encode("out.bmp", &header, &dst)?;
//! # Ok(())
//! # }
//! ```

pub use bs_bmp::*;
pub use bs_core::*;
pub use bs_smooth::*;
