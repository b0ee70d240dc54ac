//! Error types for container codec operations.

use crate::format::CompressionFormat;
use std::io;
use thiserror::Error;

/// Result type for codec operations.
pub type AeiResult<T> = Result<T, AeiError>;

/// Errors raised while reading, decoding or writing AEI containers.
#[derive(Debug, Error)]
pub enum AeiError {
    /// Underlying I/O failure (missing file, short read, write failure).
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The file does not start with the `AEimage\0` magic.
    #[error("not an AEI file: bad magic header")]
    BadMagic,

    /// The descriptor byte's format code does not name a known format.
    #[error("unknown compression format code {0:#04x}")]
    UnknownFormatCode(u8),

    /// The format is recognized but this build carries no codec for it.
    #[error("unsupported compression format: {0}")]
    UnsupportedFormat(CompressionFormat),

    /// The pixel payload does not match the size implied by the header.
    #[error("payload size mismatch: expected at least {expected} bytes, got {actual}")]
    PayloadSizeMismatch { expected: usize, actual: usize },

    /// A texture region extends past the atlas bounds.
    #[error("texture region {index} out of bounds for {width}x{height} atlas")]
    RegionOutOfBounds {
        index: usize,
        width: u32,
        height: u32,
    },

    /// Source image dimensions exceed what the header can represent.
    #[error("image dimensions {width}x{height} exceed the AEI limit of 65535")]
    ImageTooLarge { width: u32, height: u32 },

    /// The encoded payload would not fit the 32-bit length field.
    #[error("{format} payload for {width}x{height} atlas exceeds the 4 GiB container limit")]
    PayloadTooLarge {
        format: CompressionFormat,
        width: u32,
        height: u32,
    },
}
