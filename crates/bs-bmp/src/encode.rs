use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use bs_core::{Bgr8, Image};
use tracing::{debug, warn};

use crate::consts::BYTES_PER_PIXEL;
use crate::{BmpHeader, CodecError, FormatError};

static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Encodes `image` with `header` into the file at `path`.
///
/// Bytes go to a temporary file next to `path` that is renamed over it once
/// fully written and synced. On failure the temporary is removed and any
/// existing file at `path` is left untouched.
pub fn encode(
    path: impl AsRef<Path>,
    header: &BmpHeader,
    image: &Image<Bgr8>,
) -> Result<(), CodecError> {
    let path = path.as_ref();
    check_dims(header, image)?;

    let tmp = temp_path_for(path).ok_or_else(|| CodecError::Create {
        path: path.to_path_buf(),
        source: io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"),
    })?;
    let file = File::create(&tmp).map_err(|source| CodecError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    let result = write_synced(file, header, image).and_then(|()| {
        fs::rename(&tmp, path).map_err(|source| CodecError::Persist {
            path: path.to_path_buf(),
            source,
        })
    });

    if let Err(err) = result {
        if let Err(cleanup) = fs::remove_file(&tmp) {
            warn!(tmp = %tmp.display(), error = %cleanup, "failed to remove partial output");
        }
        return Err(err);
    }

    debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "encoded bitmap"
    );
    Ok(())
}

/// Writes the header verbatim followed by every pixel in row-major order.
pub fn encode_to<W: Write>(
    mut writer: W,
    header: &BmpHeader,
    image: &Image<Bgr8>,
) -> Result<(), CodecError> {
    check_dims(header, image)?;

    writer.write_all(header.as_bytes())?;

    let mut row_bytes = Vec::with_capacity(image.width() * BYTES_PER_PIXEL);
    for y in 0..image.height() {
        row_bytes.clear();
        for px in image.row(y) {
            row_bytes.extend_from_slice(&px.to_bytes());
        }
        writer.write_all(&row_bytes)?;
    }

    writer.flush()?;
    Ok(())
}

fn write_synced(file: File, header: &BmpHeader, image: &Image<Bgr8>) -> Result<(), CodecError> {
    let mut writer = BufWriter::new(file);
    encode_to(&mut writer, header, image)?;
    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()?;
    Ok(())
}

fn check_dims(header: &BmpHeader, image: &Image<Bgr8>) -> Result<(), FormatError> {
    let (width, height) = (header.width(), header.height());
    if width as usize != image.width() || height as usize != image.height() {
        return Err(FormatError::BufferMismatch {
            width,
            height,
            actual_width: image.width(),
            actual_height: image.height(),
        });
    }
    Ok(())
}

/// Hidden sibling of `path`, unique within this process.
fn temp_path_for(path: &Path) -> Option<PathBuf> {
    let name = path.file_name()?;
    let seq = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);

    let mut tmp_name = OsString::from(".");
    tmp_name.push(name);
    tmp_name.push(format!(".{}.{seq}.tmp", std::process::id()));
    Some(path.with_file_name(tmp_name))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use bs_core::{Bgr8, Image};

    use crate::{BmpHeader, CodecError, FormatError, decode_from, encode_to};

    use super::temp_path_for;

    #[test]
    fn writes_header_then_bgr_triples() {
        let header = BmpHeader::bgr24(2, 1);
        let image = Image::from_vec(2, 1, vec![Bgr8::new(1, 2, 3), Bgr8::new(4, 5, 6)])
            .expect("valid image");

        let mut out = Vec::new();
        encode_to(&mut out, &header, &image).expect("encode to memory");

        assert_eq!(&out[..54], header.as_bytes());
        assert_eq!(&out[54..], &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn opaque_header_bytes_survive_round_trip() {
        let mut raw = [0x5Au8; 54];
        raw[18..22].copy_from_slice(&3u32.to_le_bytes());
        raw[22..26].copy_from_slice(&2u32.to_le_bytes());
        let mut input = raw.to_vec();
        input.extend((0..18).map(|v| v as u8));

        let (header, image) = decode_from(input.as_slice()).expect("valid bitmap");
        let mut out = Vec::new();
        encode_to(&mut out, &header, &image).expect("encode to memory");

        assert_eq!(out, input);
    }

    #[test]
    fn mismatched_buffer_is_rejected() {
        let header = BmpHeader::bgr24(3, 3);
        let image = Image::new_fill(2, 2, Bgr8::default());

        let err = encode_to(Vec::new(), &header, &image).expect_err("dims differ");
        assert!(matches!(
            err,
            CodecError::Format(FormatError::BufferMismatch {
                width: 3,
                height: 3,
                actual_width: 2,
                actual_height: 2
            })
        ));
    }

    #[test]
    fn temp_path_is_hidden_sibling() {
        let tmp = temp_path_for(Path::new("out/blurred.bmp")).expect("has file name");
        assert_eq!(tmp.parent(), Some(Path::new("out")));

        let name = tmp
            .file_name()
            .expect("file name")
            .to_string_lossy()
            .into_owned();
        assert!(name.starts_with(".blurred.bmp."));
        assert!(name.ends_with(".tmp"));
        assert!(temp_path_for(Path::new("..")).is_none());
    }
}
