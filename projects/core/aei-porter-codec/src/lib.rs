//! Reader and writer for the AEI packed-texture container format.
//!
//! An AEI file holds one or more textures packed into a single pixel atlas,
//! prefixed by a fixed 8-byte magic and a one-byte descriptor that encodes
//! the compression format together with a mipmap flag.
//!
//! This crate provides:
//!
//! - Container parsing and serialization ([`Aei`])
//! - The compression format registry ([`CompressionFormat`])
//! - Encoder lookup for runtime format support queries ([`encoder_for`])
//!
//! Pixel compression itself is delegated: DXT block compression to
//! [`texpresso`], PNG pixel buffers to [`image`].
//!
//! # Example
//!
//! ```no_run
//! use aei_porter_codec::{Aei, CompressionFormat};
//!
//! fn recompress(src: &std::path::Path, dst: &std::path::Path) -> Result<(), aei_porter_codec::AeiError> {
//!     let aei = Aei::read_file(src)?;
//!     aei.write_file(dst, CompressionFormat::Dxt5)?;
//!     Ok(())
//! }
//! ```

pub mod codec;
pub mod container;
pub mod error;
pub mod format;

#[cfg(test)]
pub(crate) mod test_prelude;

// Re-export key types
pub use codec::{encoder_for, Encoder};
pub use container::{Aei, TextureRegion};
pub use error::{AeiError, AeiResult};
pub use format::CompressionFormat;

/// Size of the fixed preamble before the descriptor byte.
pub const MAGIC_LEN: usize = 8;

/// Byte offset of the descriptor within a container file.
pub const DESCRIPTOR_OFFSET: u64 = MAGIC_LEN as u64;

/// The magic header every AEI file starts with.
pub const AEI_MAGIC: [u8; MAGIC_LEN] = *b"AEimage\x00";
