//! Compression-variant identification from the container header.

use crate::error::IdentifyError;
use aei_porter_codec::format::FORMAT_CODE_MASK;
use aei_porter_codec::{CompressionFormat, DESCRIPTOR_OFFSET};
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

/// Reads the descriptor byte of a container file and reports its
/// compression format and mipmap flag, without decoding the file.
///
/// Exactly one byte past the 8-byte preamble is read; the remainder of
/// the file is neither read nor validated, so this works on arbitrarily
/// large or even partially corrupt containers. Failures carry the
/// underlying cause and are informational only.
pub fn identify(path: impl AsRef<Path>) -> Result<(CompressionFormat, bool), IdentifyError> {
    let mut file = File::open(path)?;
    file.seek(SeekFrom::Start(DESCRIPTOR_OFFSET))?;

    let mut descriptor = [0u8; 1];
    file.read_exact(&mut descriptor)?;

    CompressionFormat::unpack(descriptor[0])
        .map_err(|_| IdentifyError::UnknownFormatCode(descriptor[0] & FORMAT_CODE_MASK))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_bytes(dir: &TempDir, name: &str, bytes: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(bytes).unwrap();
        path
    }

    #[test]
    fn identifies_format_and_mipmap_flag() {
        let dir = TempDir::new().unwrap();
        // Format code 2 with the mipmap flag set, per the descriptor layout.
        let mut bytes = b"AEimage\x00".to_vec();
        bytes.push(0x80 | 0x02);
        bytes.extend_from_slice(&[0u8; 16]); // trailing bytes are never read
        let path = write_bytes(&dir, "mipmapped.aei", &bytes);

        let (format, mipmapped) = identify(&path).unwrap();
        assert_eq!(format, CompressionFormat::UncompressedCubeMapPc);
        assert_eq!(format.code(), 2);
        assert!(mipmapped);
    }

    #[test]
    fn identifies_without_reading_past_the_descriptor() {
        let dir = TempDir::new().unwrap();
        // Truncated immediately after the descriptor byte.
        let mut bytes = b"AEimage\x00".to_vec();
        bytes.push(CompressionFormat::Dxt5.pack(false));
        let path = write_bytes(&dir, "tiny.aei", &bytes);

        let (format, mipmapped) = identify(&path).unwrap();
        assert_eq!(format, CompressionFormat::Dxt5);
        assert!(!mipmapped);
    }

    #[test]
    fn missing_file_reports_io_cause() {
        let dir = TempDir::new().unwrap();
        let err = identify(dir.path().join("absent.aei")).unwrap_err();
        assert!(matches!(err, IdentifyError::Io(_)));
    }

    #[test]
    fn short_file_reports_io_cause() {
        let dir = TempDir::new().unwrap();
        let path = write_bytes(&dir, "short.aei", b"AEima");
        let err = identify(&path).unwrap_err();
        assert!(matches!(err, IdentifyError::Io(_)));
    }

    #[test]
    fn unknown_code_is_reported_as_such() {
        let dir = TempDir::new().unwrap();
        let mut bytes = b"AEimage\x00".to_vec();
        bytes.push(0x7F);
        let path = write_bytes(&dir, "odd.aei", &bytes);
        let err = identify(&path).unwrap_err();
        assert!(matches!(err, IdentifyError::UnknownFormatCode(0x7F)));
    }
}
