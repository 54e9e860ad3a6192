//! Byte layout of the bitmap container.

/// Size of the full header (file header plus info header).
pub const HEADER_SIZE: usize = 54;

/// Offset of the little-endian `u32` image width.
pub const WIDTH_OFFSET: usize = 18;

/// Offset of the little-endian `u32` image height.
pub const HEIGHT_OFFSET: usize = 22;

/// Bytes per stored pixel (blue, green, red).
pub const BYTES_PER_PIXEL: usize = 3;

// Fields below are only written by `BmpHeader::bgr24`; decoding ignores them.

pub const FILE_MAGIC: [u8; 2] = *b"BM";
pub const FILE_SIZE_OFFSET: usize = 2;
pub const PIXEL_DATA_OFFSET_OFFSET: usize = 10;
pub const INFO_HEADER_SIZE_OFFSET: usize = 14;
pub const INFO_HEADER_SIZE: u32 = 40;
pub const PLANES_OFFSET: usize = 26;
pub const BIT_COUNT_OFFSET: usize = 28;
pub const BITS_PER_PIXEL: u16 = 24;
pub const COMPRESSION_OFFSET: usize = 30;
pub const IMAGE_SIZE_OFFSET: usize = 34;
pub const X_PPM_OFFSET: usize = 38;
pub const Y_PPM_OFFSET: usize = 42;

/// 72 DPI expressed in pixels per metre.
pub const PIXELS_PER_METRE: u32 = 2835;
