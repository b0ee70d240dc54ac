//! Compression format registry and descriptor-byte packing.

use crate::error::AeiError;
use derive_enum_all_values::AllValues;

/// Bit within the descriptor byte that marks a mipmapped container.
pub const MIPMAP_FLAG: u8 = 0b1000_0000;

/// Mask selecting the format code bits of the descriptor byte.
pub const FORMAT_CODE_MASK: u8 = !MIPMAP_FLAG;

/// A pixel compression format an AEI container may be stored in.
///
/// Declaration order is significant: it is the order formats are probed
/// for encoder support and the order they appear in user-facing listings.
/// The numeric codes match the descriptor bytes found in existing AEI
/// files, so they must not be renumbered.
///
/// Not every format has an encoder; [`crate::encoder_for`] reports which
/// ones are usable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
#[repr(u8)]
pub enum CompressionFormat {
    /// Raw RGBA8888, UI texture variant.
    UncompressedUi = 1,
    /// Raw RGBA8888, PC cube map variant.
    UncompressedCubeMapPc = 2,
    /// Raw RGBA8888, cube map variant.
    UncompressedCubeMap = 3,
    /// PVRTC 2bpp with alpha. Recognized but not encodable.
    Pvrtc12A = 4,
    /// PVRTC 4bpp with alpha. Recognized but not encodable.
    Pvrtc14A = 5,
    /// ATC. Recognized but not encodable.
    Atc = 6,
    /// a.k.a. BC1
    Dxt1 = 7,
    /// a.k.a. BC2
    Dxt3 = 8,
    /// a.k.a. BC3
    Dxt5 = 9,
    /// ETC1. Recognized but not encodable.
    Etc1 = 10,
}

impl CompressionFormat {
    /// The binary code stored in the descriptor byte.
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Stable display name, as shown in listings and used in output
    /// file names (`<basename>_<name>.aei`).
    pub fn name(self) -> &'static str {
        match self {
            CompressionFormat::UncompressedUi => "Uncompressed_UI",
            CompressionFormat::UncompressedCubeMapPc => "Uncompressed_CubeMap_PC",
            CompressionFormat::UncompressedCubeMap => "Uncompressed_CubeMap",
            CompressionFormat::Pvrtc12A => "PVRTC12A",
            CompressionFormat::Pvrtc14A => "PVRTC14A",
            CompressionFormat::Atc => "ATC",
            CompressionFormat::Dxt1 => "DXT1",
            CompressionFormat::Dxt3 => "DXT3",
            CompressionFormat::Dxt5 => "DXT5",
            CompressionFormat::Etc1 => "ETC1",
        }
    }

    /// Looks up a format by its binary code.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::all_values().iter().copied().find(|f| f.code() == code)
    }

    /// Looks up a format by its display name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all_values()
            .iter()
            .copied()
            .find(|f| f.name().eq_ignore_ascii_case(name))
    }

    /// Packs this format and a mipmap flag into a descriptor byte.
    #[inline]
    pub fn pack(self, mipmapped: bool) -> u8 {
        self.code() | if mipmapped { MIPMAP_FLAG } else { 0 }
    }

    /// Unpacks a descriptor byte into a (format, mipmapped) pair.
    ///
    /// Fails with [`AeiError::UnknownFormatCode`] when the code bits do
    /// not name a known format.
    pub fn unpack(descriptor: u8) -> Result<(Self, bool), AeiError> {
        let code = descriptor & FORMAT_CODE_MASK;
        let format =
            Self::from_code(code).ok_or(AeiError::UnknownFormatCode(code))?;
        Ok((format, descriptor & MIPMAP_FLAG != 0))
    }
}

impl core::fmt::Display for CompressionFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(CompressionFormat::UncompressedUi, 1)]
    #[case(CompressionFormat::UncompressedCubeMapPc, 2)]
    #[case(CompressionFormat::UncompressedCubeMap, 3)]
    #[case(CompressionFormat::Pvrtc12A, 4)]
    #[case(CompressionFormat::Pvrtc14A, 5)]
    #[case(CompressionFormat::Atc, 6)]
    #[case(CompressionFormat::Dxt1, 7)]
    #[case(CompressionFormat::Dxt3, 8)]
    #[case(CompressionFormat::Dxt5, 9)]
    #[case(CompressionFormat::Etc1, 10)]
    fn codes_are_stable(#[case] format: CompressionFormat, #[case] code: u8) {
        assert_eq!(format.code(), code);
        assert_eq!(CompressionFormat::from_code(code), Some(format));
    }

    #[rstest]
    #[case(false)]
    #[case(true)]
    fn pack_unpack_round_trips(#[case] mipmapped: bool) {
        for format in CompressionFormat::all_values().iter().copied() {
            let descriptor = format.pack(mipmapped);
            assert_eq!(
                CompressionFormat::unpack(descriptor).unwrap(),
                (format, mipmapped)
            );
        }
    }

    #[test]
    fn unpack_rejects_unknown_code() {
        assert!(matches!(
            CompressionFormat::unpack(0x00),
            Err(AeiError::UnknownFormatCode(0x00))
        ));
        // Mipmap flag alone does not rescue an unknown code.
        assert!(matches!(
            CompressionFormat::unpack(MIPMAP_FLAG | 0x0B),
            Err(AeiError::UnknownFormatCode(0x0B))
        ));
    }

    #[test]
    fn mipmap_flag_is_the_high_bit() {
        let descriptor = CompressionFormat::Dxt5.pack(true);
        assert_eq!(descriptor, 0x89);
        assert_eq!(descriptor & FORMAT_CODE_MASK, 9);
    }

    #[test]
    fn name_lookup_is_case_insensitive() {
        assert_eq!(
            CompressionFormat::from_name("dxt5"),
            Some(CompressionFormat::Dxt5)
        );
        assert_eq!(
            CompressionFormat::from_name("Uncompressed_UI"),
            Some(CompressionFormat::UncompressedUi)
        );
        assert_eq!(CompressionFormat::from_name("BC9"), None);
    }
}
