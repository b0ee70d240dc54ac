//! Folder-wide conversion.

use crate::item::{convert_item, ConversionPlan};
use crate::outcome::BatchReport;
use crate::request::has_extension;
use log::{debug, warn};
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

/// Converts every matching file in `source_folder`'s immediate listing.
///
/// Entries are filtered by the mode's source extension and processed
/// sequentially in directory-listing order. A failed item is recorded and
/// iteration continues; the batch has no abort condition of its own.
/// Unreadable directory entries are skipped the same way unreadable files
/// are: logged, never fatal.
pub fn run_folder(plan: &ConversionPlan<'_>, source_folder: &Path) -> BatchReport {
    run_folder_with_cancel(plan, source_folder, None)
}

/// [`run_folder`] with a cooperative cancellation flag, checked at the
/// top of each iteration. A cancelled run returns the report accumulated
/// so far; the item in flight is never interrupted midway.
pub fn run_folder_with_cancel(
    plan: &ConversionPlan<'_>,
    source_folder: &Path,
    cancel: Option<&AtomicBool>,
) -> BatchReport {
    let mut report = BatchReport::new();

    let entries = match fs::read_dir(source_folder) {
        Ok(entries) => entries,
        Err(err) => {
            warn!("cannot list {}: {err}", source_folder.display());
            return report;
        }
    };

    let extension = plan.mode.source_extension();
    for entry in entries {
        if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            debug!("batch cancelled after {} item(s)", report.total());
            break;
        }

        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("skipping unreadable directory entry: {err}");
                continue;
            }
        };

        let path = entry.path();
        if !path.is_file() || !has_extension(&path, extension) {
            continue;
        }

        let outcome = convert_item(plan, &path);
        report.push(path, outcome);
    }

    report
}
