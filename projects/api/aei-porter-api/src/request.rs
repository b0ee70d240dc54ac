//! Conversion request value types.

use std::path::{Path, PathBuf};

/// Case-insensitive extension match against a mode's source extension.
pub(crate) fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}

/// Which way a conversion runs. Fixed for the duration of one
/// orchestration call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionMode {
    /// `.aei` → one `.png` per packed texture.
    ContainerToImage,
    /// `.png` → `.aei` under a chosen compression format.
    ImageToContainer,
    /// `.aei` → `.aei` re-compression under a chosen format.
    ContainerToContainer,
}

impl ConversionMode {
    /// Extension (without dot) required of source files for this mode.
    pub fn source_extension(self) -> &'static str {
        match self {
            ConversionMode::ContainerToImage | ConversionMode::ContainerToContainer => "aei",
            ConversionMode::ImageToContainer => "png",
        }
    }

    /// Whether this mode produces a container and therefore needs a
    /// compression format.
    pub fn requires_format(self) -> bool {
        !matches!(self, ConversionMode::ContainerToImage)
    }
}

/// An immutable conversion request, constructed once from user input and
/// passed by shared reference into the orchestrator.
///
/// `source` designates a single file, or a folder when `folder` is set.
/// `format` is the user-supplied format name; it is resolved against the
/// supported set during validation, so an unrecognized name is a
/// request-level failure rather than a per-item one. `verbose` keeps the
/// documented polarity `true` = emit per-item output; presentation layers
/// decide how to render it.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub mode: ConversionMode,
    pub source: PathBuf,
    pub dest_folder: PathBuf,
    pub format: Option<String>,
    pub folder: bool,
    pub overwrite: bool,
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_match_ignores_case_and_non_files() {
        assert!(has_extension(Path::new("a.aei"), "aei"));
        assert!(has_extension(Path::new("UPPER.AEI"), "aei"));
        assert!(!has_extension(Path::new("a.png"), "aei"));
        assert!(!has_extension(Path::new("no_extension"), "aei"));
        assert!(!has_extension(Path::new("trailing.aei.txt"), "aei"));
    }
}
