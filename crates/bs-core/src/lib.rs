//! Pixel and image buffer primitives shared by the box-smoothing crates.
//!
//! ## Pixels
//! [`Bgr8`] is a byte-exact triple stored in blue, green, red order with no
//! alpha channel. It matches the on-disk order of 24-bit bitmap pixel data.
//!
//! ## Images and Views
//! [`Image`] owns a contiguous row-major buffer where the linear index of
//! `(x, y)` is `y * width + x`. [`ImageView`] is the read-only borrow that
//! filters take, so one source can be shared by every worker.
//!
//! ## Windows
//! Neighborhood windows are clipped to the image bounds: near a border the
//! window shrinks instead of being padded, reflected or wrapped.
//! [`clipped_range`] and [`Window`] implement that policy.

mod error;
mod image;
mod pixel;
mod window;

pub use error::Error;
pub use image::{Image, ImageView};
pub use pixel::Bgr8;
pub use window::{Window, clipped_range};
