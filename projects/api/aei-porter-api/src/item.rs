//! Single-item conversion.
//!
//! Every codec and image error is caught at the item boundary and folded
//! into [`ConversionOutcome::Failed`]; nothing propagates past a single
//! item. That isolation is what lets batch mode continue past bad items.

use crate::error::ItemError;
use crate::outcome::ConversionOutcome;
use crate::request::ConversionMode;
use aei_porter_codec::{Aei, CompressionFormat};
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Validated parameters shared by the single-item and batch paths,
/// produced by the orchestrator after request validation.
#[derive(Debug, Clone, Copy)]
pub struct ConversionPlan<'a> {
    pub mode: ConversionMode,
    /// Resolved format; `Some` whenever the mode produces a container.
    pub format: Option<CompressionFormat>,
    pub dest_folder: &'a Path,
    pub overwrite: bool,
}

/// Converts exactly one source item and reports its outcome.
///
/// Writes zero or more files into the destination folder and never
/// touches the source. File handles are scoped to this call on every
/// exit path, so a failed item cannot leak a handle into the next one.
pub fn convert_item(plan: &ConversionPlan<'_>, source: &Path) -> ConversionOutcome {
    let result = match plan.mode {
        ConversionMode::ContainerToImage => container_to_images(plan, source),
        ConversionMode::ImageToContainer => image_to_container(plan, source),
        ConversionMode::ContainerToContainer => container_to_container(plan, source),
    };

    match result {
        Ok(outcome) => {
            debug!("{}: {outcome:?}", source.display());
            outcome
        }
        Err(err) => {
            warn!("failed to convert {}: {err}", source.display());
            ConversionOutcome::Failed(err.to_string())
        }
    }
}

fn file_stem(source: &Path) -> String {
    source
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Output path for the container-producing modes:
/// `<basename>_<formatName>.aei`.
fn container_dest(plan: &ConversionPlan<'_>, source: &Path, format: CompressionFormat) -> PathBuf {
    plan.dest_folder
        .join(format!("{}_{}.aei", file_stem(source), format.name()))
}

/// Exports each packed texture as `<basename>_<index>.png`.
///
/// Every texture is checked against the overwrite policy independently;
/// one existing file does not block the others. The item is `Converted`
/// when at least one texture was written, `Skipped` when the overwrite
/// policy held back every output, and `Failed` for a container that
/// holds no textures at all.
fn container_to_images(
    plan: &ConversionPlan<'_>,
    source: &Path,
) -> Result<ConversionOutcome, ItemError> {
    let aei = Aei::read_file(source)?;
    let stem = file_stem(source);

    let mut written = Vec::new();
    let mut skipped = 0usize;
    for index in 0..aei.textures().len() {
        let dest = plan.dest_folder.join(format!("{stem}_{index}.png"));
        if !plan.overwrite && dest.exists() {
            skipped += 1;
            continue;
        }
        let texture = aei.texture_image(index)?;
        texture.save(&dest)?;
        written.push(dest);
    }

    if !written.is_empty() {
        Ok(ConversionOutcome::Converted(written))
    } else if skipped > 0 {
        // Skipped is reserved for the overwrite policy holding outputs back.
        Ok(ConversionOutcome::Skipped(format!(
            "all {skipped} output file(s) already exist"
        )))
    } else {
        Ok(ConversionOutcome::Failed(
            "container holds no textures to export".to_string(),
        ))
    }
}

fn image_to_container(
    plan: &ConversionPlan<'_>,
    source: &Path,
) -> Result<ConversionOutcome, ItemError> {
    // The orchestrator validates this up front; guard anyway for direct callers.
    let Some(format) = plan.format else {
        return Ok(ConversionOutcome::Failed("no compression format provided".into()));
    };
    let dest = container_dest(plan, source, format);
    if !plan.overwrite && dest.exists() {
        return Ok(ConversionOutcome::Skipped(already_exists(&dest)));
    }

    let image = image::open(source)?.to_rgba8();
    let aei = Aei::from_image(image)?;
    aei.write_file(&dest, format)?;
    Ok(ConversionOutcome::Converted(vec![dest]))
}

fn container_to_container(
    plan: &ConversionPlan<'_>,
    source: &Path,
) -> Result<ConversionOutcome, ItemError> {
    let Some(format) = plan.format else {
        return Ok(ConversionOutcome::Failed("no compression format provided".into()));
    };
    let dest = container_dest(plan, source, format);
    if !plan.overwrite && dest.exists() {
        return Ok(ConversionOutcome::Skipped(already_exists(&dest)));
    }

    let aei = Aei::read_file(source)?;
    aei.write_file(&dest, format)?;
    Ok(ConversionOutcome::Converted(vec![dest]))
}

fn already_exists(dest: &Path) -> String {
    format!("{} already exists", dest.display())
}
