//! Reader and writer for the fixed-layout bitmap format used by the
//! box-smoothing tools.
//!
//! ## Layout
//! - A 54-byte header. Width and height are little-endian `u32` values at
//!   byte offsets 18 and 22; every other header byte is carried opaquely and
//!   written back unchanged.
//! - `width * height` pixels follow immediately, 3 bytes each in blue,
//!   green, red order, with no row padding and no alpha.
//!
//! Row order is whatever the file stores. The codec never flips rows, so a
//! decode followed by an encode reproduces the input byte for byte.
//!
//! Bit depth and compression fields are not validated: the data is always
//! read as packed 24-bit pixels.

pub mod consts;
mod decode;
mod encode;
mod error;
mod header;

pub use decode::{decode, decode_from};
pub use encode::{encode, encode_to};
pub use error::{CodecError, FormatError};
pub use header::BmpHeader;
