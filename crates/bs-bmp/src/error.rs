use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::consts::HEADER_SIZE;

/// Failure of a decode or encode call.
///
/// `Open`, `Create`, `Persist` and `Io` are I/O failures; `Format` means the
/// bytes themselves are unusable. See [`CodecError::is_io`] and
/// [`CodecError::is_format`].
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("cannot open {} for reading", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot create {} for writing", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot move finished output to {}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("read or write failed")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Format(#[from] FormatError),
}

impl CodecError {
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            Self::Open { .. } | Self::Create { .. } | Self::Persist { .. } | Self::Io(_)
        )
    }

    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("header truncated: expected {expected} bytes, got {actual}", expected = HEADER_SIZE)]
    TruncatedHeader { actual: usize },
    #[error("image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
    #[error("image dimensions {width}x{height} are too large")]
    TooLarge { width: u32, height: u32 },
    #[error("pixel data truncated: expected {expected} bytes, got {actual}")]
    TruncatedPixels { expected: usize, actual: usize },
    #[error(
        "pixel buffer is {actual_width}x{actual_height} but the header declares {width}x{height}"
    )]
    BufferMismatch {
        width: u32,
        height: u32,
        actual_width: usize,
        actual_height: usize,
    },
    #[error("pixel data does not fill the image")]
    Pixels(#[from] bs_core::Error),
}
