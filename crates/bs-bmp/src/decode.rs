use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use bs_core::{Bgr8, Image};
use tracing::debug;

use crate::consts::{BYTES_PER_PIXEL, HEADER_SIZE};
use crate::{BmpHeader, CodecError, FormatError};

/// Decodes the bitmap stored at `path`.
pub fn decode(path: impl AsRef<Path>) -> Result<(BmpHeader, Image<Bgr8>), CodecError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| CodecError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let (header, image) = decode_from(BufReader::new(file))?;
    debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "decoded bitmap"
    );
    Ok((header, image))
}

/// Decodes a bitmap from any byte stream.
///
/// Reads exactly the header and `width * height` pixels; trailing bytes are
/// left unread.
pub fn decode_from<R: Read>(mut reader: R) -> Result<(BmpHeader, Image<Bgr8>), CodecError> {
    let header_bytes = read_up_to(&mut reader, HEADER_SIZE)?;
    let header_bytes: [u8; HEADER_SIZE] =
        header_bytes
            .try_into()
            .map_err(|short: Vec<u8>| FormatError::TruncatedHeader {
                actual: short.len(),
            })?;
    let header = BmpHeader::from_bytes(header_bytes);

    let (width, height) = (header.width(), header.height());
    if width == 0 || height == 0 {
        return Err(FormatError::EmptyImage { width, height }.into());
    }

    let expected = header
        .pixel_count()
        .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
        .ok_or(FormatError::TooLarge { width, height })?;

    let bytes = read_up_to(&mut reader, expected)?;
    if bytes.len() != expected {
        return Err(FormatError::TruncatedPixels {
            expected,
            actual: bytes.len(),
        }
        .into());
    }

    let pixels = bytes
        .chunks_exact(BYTES_PER_PIXEL)
        .map(|c| Bgr8::new(c[0], c[1], c[2]))
        .collect();
    let image =
        Image::from_vec(width as usize, height as usize, pixels).map_err(FormatError::from)?;

    Ok((header, image))
}

/// Reads until `len` bytes or end of stream, whichever comes first.
///
/// The buffer grows with the data actually read, so a header announcing a
/// huge image does not allocate before the bytes exist.
fn read_up_to<R: Read>(reader: &mut R, len: usize) -> Result<Vec<u8>, CodecError> {
    let mut buf = Vec::new();
    reader.by_ref().take(len as u64).read_to_end(&mut buf)?;
    Ok(buf)
}
