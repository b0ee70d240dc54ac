//! Error types for conversion requests.
//!
//! The taxonomy mirrors the control flow: [`RequestError`] is a refusal
//! to run at all, raised before any item is touched. Per-item failures
//! never surface as errors; they are folded into
//! [`crate::ConversionOutcome::Failed`] so a batch can continue past
//! them. [`IdentifyError`] is informational only and must never fail a
//! conversion.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A precondition violation that aborts the whole request before any
/// partial work is attempted.
#[derive(Debug, Error)]
pub enum RequestError {
    /// Destination must be an existing, writable directory.
    #[error("destination folder {path} does not exist or is not a directory", path = .0.display())]
    DestinationNotADirectory(PathBuf),

    /// Batch mode requires an existing source directory.
    #[error("source folder {path} does not exist or is not a directory", path = .0.display())]
    SourceFolderNotFound(PathBuf),

    /// Single-file mode requires an existing regular file.
    #[error("source file {path} does not exist or is not a regular file", path = .0.display())]
    SourceFileNotFound(PathBuf),

    /// The source file's extension does not match the conversion mode.
    #[error("{path} is not a .{expected} file", path = .path.display())]
    WrongExtension {
        path: PathBuf,
        expected: &'static str,
    },

    /// Container-producing modes need a compression format.
    #[error("a compression format is required for this conversion mode")]
    FormatRequired,

    /// The requested format name is not in the supported set.
    #[error("unknown or unsupported compression format: {0}")]
    UnknownFormat(String),
}

/// Failure to identify a container's compression variant from its header.
///
/// Callers treat this as purely informational (a display label at most);
/// it must never cause a conversion request to fail.
#[derive(Debug, Error)]
pub enum IdentifyError {
    /// Missing file, unreadable file, or short read.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The descriptor byte does not name a known format.
    #[error("unknown compression format code {0:#04x}")]
    UnknownFormatCode(u8),
}

/// Item-boundary error: everything the codec and image collaborators can
/// throw at a single item. Converted to a `Failed` outcome, never
/// propagated past the item.
#[derive(Debug, Error)]
pub(crate) enum ItemError {
    #[error(transparent)]
    Codec(#[from] aei_porter_codec::AeiError),
    #[error(transparent)]
    Image(#[from] image::ImageError),
}
