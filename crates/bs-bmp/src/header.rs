use crate::consts::{
    BIT_COUNT_OFFSET, BITS_PER_PIXEL, BYTES_PER_PIXEL, COMPRESSION_OFFSET, FILE_MAGIC,
    FILE_SIZE_OFFSET, HEADER_SIZE, HEIGHT_OFFSET, IMAGE_SIZE_OFFSET, INFO_HEADER_SIZE,
    INFO_HEADER_SIZE_OFFSET, PIXEL_DATA_OFFSET_OFFSET, PIXELS_PER_METRE, PLANES_OFFSET,
    WIDTH_OFFSET, X_PPM_OFFSET, Y_PPM_OFFSET,
};

/// The 54-byte bitmap header.
///
/// Only width and height are interpreted. The remaining bytes are kept
/// verbatim so that an encoded file carries exactly the header it was
/// decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BmpHeader {
    bytes: [u8; HEADER_SIZE],
}

impl BmpHeader {
    pub const fn from_bytes(bytes: [u8; HEADER_SIZE]) -> Self {
        Self { bytes }
    }

    /// Builds a standard header for an uncompressed 24-bit image.
    ///
    /// Generic bitmap readers expect rows padded to 4 bytes and stored
    /// bottom-up. This format writes no padding, so such readers agree with
    /// it only when `3 * width` is a multiple of 4.
    pub fn bgr24(width: u32, height: u32) -> Self {
        let image_size = u64::from(width)
            .checked_mul(u64::from(height))
            .and_then(|n| n.checked_mul(BYTES_PER_PIXEL as u64));
        let file_size = image_size.and_then(|n| n.checked_add(HEADER_SIZE as u64));

        let mut bytes = [0u8; HEADER_SIZE];
        bytes[0..2].copy_from_slice(&FILE_MAGIC);
        put_u32(&mut bytes, FILE_SIZE_OFFSET, file_size.map_or(u32::MAX, saturate_u32));
        put_u32(&mut bytes, PIXEL_DATA_OFFSET_OFFSET, HEADER_SIZE as u32);
        put_u32(&mut bytes, INFO_HEADER_SIZE_OFFSET, INFO_HEADER_SIZE);
        put_u32(&mut bytes, WIDTH_OFFSET, width);
        put_u32(&mut bytes, HEIGHT_OFFSET, height);
        put_u16(&mut bytes, PLANES_OFFSET, 1);
        put_u16(&mut bytes, BIT_COUNT_OFFSET, BITS_PER_PIXEL);
        put_u32(&mut bytes, COMPRESSION_OFFSET, 0);
        put_u32(&mut bytes, IMAGE_SIZE_OFFSET, image_size.map_or(u32::MAX, saturate_u32));
        put_u32(&mut bytes, X_PPM_OFFSET, PIXELS_PER_METRE);
        put_u32(&mut bytes, Y_PPM_OFFSET, PIXELS_PER_METRE);

        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8; HEADER_SIZE] {
        &self.bytes
    }

    pub fn width(&self) -> u32 {
        get_u32(&self.bytes, WIDTH_OFFSET)
    }

    pub fn height(&self) -> u32 {
        get_u32(&self.bytes, HEIGHT_OFFSET)
    }

    /// `width * height`, or `None` if it does not fit in `usize`.
    pub fn pixel_count(&self) -> Option<usize> {
        let width = usize::try_from(self.width()).ok()?;
        let height = usize::try_from(self.height()).ok()?;
        width.checked_mul(height)
    }
}

fn get_u32(bytes: &[u8; HEADER_SIZE], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

fn put_u32(bytes: &mut [u8; HEADER_SIZE], offset: usize, value: u32) {
    bytes[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

fn put_u16(bytes: &mut [u8; HEADER_SIZE], offset: usize, value: u16) {
    bytes[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
}

fn saturate_u32(v: u64) -> u32 {
    u32::try_from(v).unwrap_or(u32::MAX)
}
