//! Top-level conversion entry point.
//!
//! The orchestrator has exactly two phases: validate, then execute.
//! Validation failures are a refusal to run ([`RequestError`]) with no
//! partial work; once execution starts, a report is always produced, even
//! when every item in it failed or was skipped.

use crate::batch::run_folder_with_cancel;
use crate::catalog;
use crate::error::RequestError;
use crate::item::{convert_item, ConversionPlan};
use crate::outcome::BatchReport;
use crate::request::{has_extension, ConversionRequest};
use aei_porter_codec::CompressionFormat;
use log::info;
use std::sync::atomic::AtomicBool;

/// Validates the request and runs the conversion.
///
/// Single-file requests return a one-entry report for uniformity with
/// batch mode.
pub fn run(request: &ConversionRequest) -> Result<BatchReport, RequestError> {
    run_inner(request, None)
}

/// [`run`] with a cooperative cancellation flag for folder mode, checked
/// between items.
pub fn run_with_cancel(
    request: &ConversionRequest,
    cancel: &AtomicBool,
) -> Result<BatchReport, RequestError> {
    run_inner(request, Some(cancel))
}

fn run_inner(
    request: &ConversionRequest,
    cancel: Option<&AtomicBool>,
) -> Result<BatchReport, RequestError> {
    let format = validate(request)?;

    let plan = ConversionPlan {
        mode: request.mode,
        format,
        dest_folder: &request.dest_folder,
        overwrite: request.overwrite,
    };

    info!(
        "{:?}: {} -> {}",
        request.mode,
        request.source.display(),
        request.dest_folder.display()
    );

    let report = if request.folder {
        run_folder_with_cancel(&plan, &request.source, cancel)
    } else {
        let outcome = convert_item(&plan, &request.source);
        BatchReport::single(request.source.clone(), outcome)
    };
    Ok(report)
}

/// Fail-fast precondition checks, in fixed order: destination directory,
/// source path and extension, then format membership. The first failing
/// check wins; nothing is written during validation.
fn validate(request: &ConversionRequest) -> Result<Option<CompressionFormat>, RequestError> {
    if !request.dest_folder.is_dir() {
        return Err(RequestError::DestinationNotADirectory(
            request.dest_folder.clone(),
        ));
    }

    if request.folder {
        if !request.source.is_dir() {
            return Err(RequestError::SourceFolderNotFound(request.source.clone()));
        }
    } else {
        if !request.source.is_file() {
            return Err(RequestError::SourceFileNotFound(request.source.clone()));
        }
        let expected = request.mode.source_extension();
        if !has_extension(&request.source, expected) {
            return Err(RequestError::WrongExtension {
                path: request.source.clone(),
                expected,
            });
        }
    }

    if !request.mode.requires_format() {
        return Ok(None);
    }
    let name = request.format.as_deref().ok_or(RequestError::FormatRequired)?;
    let format = catalog::format_by_name(name)
        .ok_or_else(|| RequestError::UnknownFormat(name.to_string()))?;
    Ok(Some(format))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::ConversionMode;
    use std::path::Path;
    use tempfile::TempDir;

    fn request(mode: ConversionMode, source: &Path, dest: &Path) -> ConversionRequest {
        ConversionRequest {
            mode,
            source: source.to_path_buf(),
            dest_folder: dest.to_path_buf(),
            format: Some("DXT5".to_string()),
            folder: false,
            overwrite: false,
            verbose: false,
        }
    }

    #[test]
    fn missing_destination_fails_first() {
        let request = request(
            ConversionMode::ContainerToImage,
            Path::new("/also/missing.aei"),
            Path::new("/no/such/dest"),
        );
        assert!(matches!(
            run(&request),
            Err(RequestError::DestinationNotADirectory(_))
        ));
    }

    #[test]
    fn missing_source_file_is_rejected() {
        let dst = TempDir::new().unwrap();
        let request = request(
            ConversionMode::ContainerToImage,
            Path::new("/no/such/file.aei"),
            dst.path(),
        );
        assert!(matches!(
            run(&request),
            Err(RequestError::SourceFileNotFound(_))
        ));
    }

    #[test]
    fn wrong_extension_is_rejected() {
        let src = TempDir::new().unwrap();
        let dst = TempDir::new().unwrap();
        let file = src.path().join("texture.png");
        std::fs::write(&file, b"png bytes").unwrap();

        let request = request(ConversionMode::ContainerToImage, &file, dst.path());
        assert!(matches!(
            run(&request),
            Err(RequestError::WrongExtension { expected: "aei", .. })
        ));
    }

    #[test]
    fn missing_folder_source_is_rejected_in_batch_mode() {
        let dst = TempDir::new().unwrap();
        let mut req = request(
            ConversionMode::ContainerToImage,
            Path::new("/no/such/folder"),
            dst.path(),
        );
        req.folder = true;
        assert!(matches!(
            run(&req),
            Err(RequestError::SourceFolderNotFound(_))
        ));
    }

    #[test]
    fn format_is_checked_after_paths() {
        let src = TempDir::new().unwrap();
        let dst = TempDir::new().unwrap();
        let file = src.path().join("texture.png");
        std::fs::write(&file, b"png bytes").unwrap();

        let mut req = request(ConversionMode::ImageToContainer, &file, dst.path());
        req.format = Some("ETC1".to_string()); // recognized, but no encoder
        assert!(matches!(run(&req), Err(RequestError::UnknownFormat(_))));

        req.format = None;
        assert!(matches!(run(&req), Err(RequestError::FormatRequired)));
    }

    #[test]
    fn container_to_image_needs_no_format() {
        let src = TempDir::new().unwrap();
        let dst = TempDir::new().unwrap();
        let file = src.path().join("bad.aei");
        std::fs::write(&file, b"not really a container").unwrap();

        let mut req = request(ConversionMode::ContainerToImage, &file, dst.path());
        req.format = None;

        // Validation passes; the bad container shows up as a Failed item.
        let report = run(&req).unwrap();
        assert_eq!(report.total(), 1);
        assert_eq!(report.failed_items(), 1);
    }
}
