//! AEI container parsing and serialization.
//!
//! Wire layout, little-endian throughout:
//!
//! | offset | size | field                                            |
//! |--------|------|--------------------------------------------------|
//! | 0      | 8    | magic `AEimage\0`                                |
//! | 8      | 1    | descriptor: bits 0-6 format code, bit 7 mipmaps  |
//! | 9      | 2    | atlas width                                      |
//! | 11     | 2    | atlas height                                     |
//! | 13     | 2    | texture count                                    |
//! | 15     | 8·n  | per texture: x, y, width, height                 |
//! | ...    | 4    | payload length                                   |
//! | ...    | len  | compressed atlas pixel data                      |

use crate::codec::{decode_payload, encoder_for};
use crate::error::{AeiError, AeiResult};
use crate::format::CompressionFormat;
use crate::AEI_MAGIC;
use image::{imageops, RgbaImage};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// One texture's placement within the container's pixel atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

/// A decoded AEI container: a pixel atlas plus the texture regions packed
/// into it.
///
/// Reading decodes the atlas eagerly, so a successfully constructed `Aei`
/// can always materialize its textures. Writing re-encodes the atlas under
/// whichever format the caller picks; the format a container was read with
/// is retained for display purposes only.
#[derive(Debug, Clone)]
pub struct Aei {
    format: CompressionFormat,
    mipmapped: bool,
    regions: Vec<TextureRegion>,
    atlas: RgbaImage,
}

fn read_u16(reader: &mut impl Read) -> std::io::Result<u16> {
    let mut buf = [0u8; 2];
    reader.read_exact(&mut buf)?;
    Ok(u16::from_le_bytes(buf))
}

fn read_u32(reader: &mut impl Read) -> std::io::Result<u32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

impl Aei {
    /// Wraps a source image as a single-texture container.
    ///
    /// The sole region covers the whole atlas. Until written, the
    /// container reports [`CompressionFormat::UncompressedUi`].
    pub fn from_image(atlas: RgbaImage) -> AeiResult<Self> {
        let (width, height) = atlas.dimensions();
        if width > u16::MAX as u32 || height > u16::MAX as u32 {
            return Err(AeiError::ImageTooLarge { width, height });
        }
        Ok(Self {
            format: CompressionFormat::UncompressedUi,
            mipmapped: false,
            regions: vec![TextureRegion {
                x: 0,
                y: 0,
                width: width as u16,
                height: height as u16,
            }],
            atlas,
        })
    }

    /// Parses a container from a byte stream, decoding the pixel atlas.
    pub fn read(mut reader: impl Read) -> AeiResult<Self> {
        let mut magic = [0u8; AEI_MAGIC.len()];
        reader.read_exact(&mut magic)?;
        if magic != AEI_MAGIC {
            return Err(AeiError::BadMagic);
        }

        let mut descriptor = [0u8; 1];
        reader.read_exact(&mut descriptor)?;
        let (format, mipmapped) = CompressionFormat::unpack(descriptor[0])?;

        let width = read_u16(&mut reader)? as u32;
        let height = read_u16(&mut reader)? as u32;
        let count = read_u16(&mut reader)?;

        let mut regions = Vec::with_capacity(count as usize);
        for index in 0..count as usize {
            let region = TextureRegion {
                x: read_u16(&mut reader)?,
                y: read_u16(&mut reader)?,
                width: read_u16(&mut reader)?,
                height: read_u16(&mut reader)?,
            };
            if region.x as u32 + region.width as u32 > width
                || region.y as u32 + region.height as u32 > height
            {
                return Err(AeiError::RegionOutOfBounds {
                    index,
                    width,
                    height,
                });
            }
            regions.push(region);
        }

        let payload_len = read_u32(&mut reader)? as usize;
        let mut payload = vec![0u8; payload_len];
        reader.read_exact(&mut payload)?;

        let atlas = decode_payload(format, width, height, &payload)?;
        Ok(Self {
            format,
            mipmapped,
            regions,
            atlas,
        })
    }

    /// Opens and parses a container file.
    pub fn read_file(path: impl AsRef<Path>) -> AeiResult<Self> {
        Self::read(BufReader::new(File::open(path)?))
    }

    /// The compression format this container was read with.
    pub fn format(&self) -> CompressionFormat {
        self.format
    }

    /// Whether the source container carried mipmaps. Only the base level
    /// is decoded; written containers never carry mipmaps.
    pub fn mipmapped(&self) -> bool {
        self.mipmapped
    }

    /// Atlas dimensions in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        self.atlas.dimensions()
    }

    /// The texture regions, in container order.
    pub fn textures(&self) -> &[TextureRegion] {
        &self.regions
    }

    /// Materializes texture `index` as a standalone image.
    pub fn texture_image(&self, index: usize) -> AeiResult<RgbaImage> {
        let (width, height) = self.atlas.dimensions();
        let region = self
            .regions
            .get(index)
            .ok_or(AeiError::RegionOutOfBounds {
                index,
                width,
                height,
            })?;
        Ok(imageops::crop_imm(
            &self.atlas,
            region.x as u32,
            region.y as u32,
            region.width as u32,
            region.height as u32,
        )
        .to_image())
    }

    /// Serializes the container under the given compression format.
    ///
    /// Fails before writing a single byte when no encoder exists for
    /// `format` ([`AeiError::UnsupportedFormat`]) or when the encoded
    /// payload would overflow the 32-bit length field
    /// ([`AeiError::PayloadTooLarge`]).
    pub fn write(&self, mut writer: impl Write, format: CompressionFormat) -> AeiResult<()> {
        let encoder = encoder_for(format)?;
        let (width, height) = self.atlas.dimensions();
        if encoder.encoded_len(width, height) > u32::MAX as u64 {
            return Err(AeiError::PayloadTooLarge {
                format,
                width,
                height,
            });
        }
        let payload = encoder.encode(&self.atlas);

        writer.write_all(&AEI_MAGIC)?;
        writer.write_all(&[format.pack(false)])?;
        writer.write_all(&(width as u16).to_le_bytes())?;
        writer.write_all(&(height as u16).to_le_bytes())?;
        writer.write_all(&(self.regions.len() as u16).to_le_bytes())?;
        for region in &self.regions {
            writer.write_all(&region.x.to_le_bytes())?;
            writer.write_all(&region.y.to_le_bytes())?;
            writer.write_all(&region.width.to_le_bytes())?;
            writer.write_all(&region.height.to_le_bytes())?;
        }
        writer.write_all(&(payload.len() as u32).to_le_bytes())?;
        writer.write_all(&payload)?;
        writer.flush()?;
        Ok(())
    }

    /// Serializes the container to a file.
    pub fn write_file(
        &self,
        path: impl AsRef<Path>,
        format: CompressionFormat,
    ) -> AeiResult<()> {
        self.write(BufWriter::new(File::create(path)?), format)
    }
}
