//! Box-mean smoothing for 24-bit BGR images.
//!
//! Each output pixel is the per-channel mean of the source pixels inside a
//! square window of half-width `radius` centred on it.
//!
//! Border policy:
//! - The window is clipped to the image. Border pixels average over fewer
//!   samples (a smaller divisor); nothing is padded, reflected or wrapped.
//! - `radius == 0` is the identity.
//!
//! Rounding:
//! - Channel sums are exact integers. The mean is `sum as f32 / count as f32`
//!   and the output byte is `floor(mean + 0.5)`, so `x.5` rounds up.
//!
//! Parallelism:
//! - [`BoxSmoother`] owns a fixed-size worker pool. Destination rows are split
//!   into one contiguous band per worker; each band is written by exactly one
//!   worker and the call returns only after every band is done.
//! - The result does not depend on the worker count or on [`SmoothMethod`].

mod config;
mod direct;
mod error;
mod integral;
mod mean;
mod smoother;

pub use config::{SmoothConfig, SmoothMethod};
pub use error::SmoothError;
pub use integral::SummedArea;
pub use smoother::{BoxSmoother, smooth_bgr8, smooth_bgr8_into};
