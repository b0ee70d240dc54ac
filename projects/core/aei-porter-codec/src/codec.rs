//! Pixel payload encoding and decoding.
//!
//! Compression support is probed at runtime through [`encoder_for`]: the
//! uncompressed variants map onto raw RGBA8888 copies, the DXT family is
//! delegated to [`texpresso`], and the remaining formats are recognized
//! for identification but carry no codec.

use crate::error::{AeiError, AeiResult};
use crate::format::CompressionFormat;
use image::RgbaImage;

/// Maps a format onto the texpresso block format, when it is one of the
/// DXT family.
fn block_format(format: CompressionFormat) -> Option<texpresso::Format> {
    match format {
        CompressionFormat::Dxt1 => Some(texpresso::Format::Bc1),
        CompressionFormat::Dxt3 => Some(texpresso::Format::Bc2),
        CompressionFormat::Dxt5 => Some(texpresso::Format::Bc3),
        _ => None,
    }
}

fn is_uncompressed(format: CompressionFormat) -> bool {
    matches!(
        format,
        CompressionFormat::UncompressedUi
            | CompressionFormat::UncompressedCubeMapPc
            | CompressionFormat::UncompressedCubeMap
    )
}

/// An encoder handle for one compression format.
///
/// Obtainable only through [`encoder_for`], so holding one is proof the
/// format is encodable by this build.
#[derive(Debug, Clone, Copy)]
pub struct Encoder {
    format: CompressionFormat,
}

impl Encoder {
    /// The format this encoder produces.
    pub fn format(&self) -> CompressionFormat {
        self.format
    }

    /// Payload size in bytes this encoder produces for an atlas of the
    /// given dimensions, without encoding anything.
    pub fn encoded_len(&self, width: u32, height: u32) -> u64 {
        match block_format(self.format) {
            Some(block) => block.compressed_size(width as usize, height as usize) as u64,
            None => width as u64 * height as u64 * 4,
        }
    }

    /// Compresses an RGBA atlas into this format's pixel payload.
    pub fn encode(&self, image: &RgbaImage) -> Vec<u8> {
        let (width, height) = image.dimensions();
        match block_format(self.format) {
            Some(block) => {
                let mut output =
                    vec![0u8; block.compressed_size(width as usize, height as usize)];
                block.compress(
                    image.as_raw(),
                    width as usize,
                    height as usize,
                    texpresso::Params::default(),
                    &mut output,
                );
                output
            }
            // encoder_for only hands out uncompressed or DXT encoders.
            None => image.as_raw().clone(),
        }
    }
}

/// Looks up an encoder for the given format.
///
/// Fails with [`AeiError::UnsupportedFormat`] for formats this build can
/// identify but not produce. The caller-facing supported-formats listing
/// is defined as exactly the set for which this function succeeds.
pub fn encoder_for(format: CompressionFormat) -> AeiResult<Encoder> {
    if is_uncompressed(format) || block_format(format).is_some() {
        Ok(Encoder { format })
    } else {
        Err(AeiError::UnsupportedFormat(format))
    }
}

/// Decodes a pixel payload into an RGBA atlas of the given dimensions.
///
/// Mipmapped payloads carry their base level first; any trailing mip data
/// is ignored. A payload shorter than the base level is rejected.
pub(crate) fn decode_payload(
    format: CompressionFormat,
    width: u32,
    height: u32,
    payload: &[u8],
) -> AeiResult<RgbaImage> {
    let pixel_count = width as usize * height as usize;
    match block_format(format) {
        Some(block) => {
            let expected = block.compressed_size(width as usize, height as usize);
            if payload.len() < expected {
                return Err(AeiError::PayloadSizeMismatch {
                    expected,
                    actual: payload.len(),
                });
            }
            let mut pixels = vec![0u8; pixel_count * 4];
            block.decompress(
                &payload[..expected],
                width as usize,
                height as usize,
                &mut pixels,
            );
            // Dimensions are consistent with the buffer we just sized.
            Ok(RgbaImage::from_raw(width, height, pixels)
                .unwrap_or_else(|| RgbaImage::new(width, height)))
        }
        None if is_uncompressed(format) => {
            let expected = pixel_count * 4;
            if payload.len() < expected {
                return Err(AeiError::PayloadSizeMismatch {
                    expected,
                    actual: payload.len(),
                });
            }
            Ok(RgbaImage::from_raw(width, height, payload[..expected].to_vec())
                .unwrap_or_else(|| RgbaImage::new(width, height)))
        }
        None => Err(AeiError::UnsupportedFormat(format)),
    }
}
