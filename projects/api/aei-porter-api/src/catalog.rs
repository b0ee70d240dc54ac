//! Runtime catalog of compression formats with encoder support.

use aei_porter_codec::{encoder_for, CompressionFormat};

/// Formats the codec collaborator can actually encode, in declaration
/// order of the format registry.
///
/// Computed by probing [`encoder_for`] for every known format and
/// silently dropping the ones that fail; probe order is preserved because
/// it determines default selection and listing order in front ends. Pure
/// query, safe to call repeatedly.
pub fn supported_formats() -> Vec<CompressionFormat> {
    CompressionFormat::all_values()
        .iter()
        .copied()
        .filter(|format| encoder_for(*format).is_ok())
        .collect()
}

/// Resolves a user-supplied format name against the supported set,
/// case-insensitively. `None` means the name is unknown or names a
/// format with no encoder; callers surface that as a request-level
/// failure.
pub fn format_by_name(name: &str) -> Option<CompressionFormat> {
    supported_formats()
        .into_iter()
        .find(|format| format.name().eq_ignore_ascii_case(name))
}
