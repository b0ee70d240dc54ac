//! Per-item outcomes and the batch report accumulator.

use std::path::PathBuf;

/// The tri-state result of converting one source item.
///
/// `Failed` is deliberately a value, not an error type: item failures are
/// isolated at the item boundary so batch processing continues past them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionOutcome {
    /// At least one output file was written; paths in creation order.
    /// A container export lists one path per texture written.
    Converted(Vec<PathBuf>),
    /// Output already existed and overwrite was disabled.
    Skipped(String),
    /// The item could not be converted; the batch continues regardless.
    Failed(String),
}

/// One report line: which source item produced which outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub source: PathBuf,
    pub outcome: ConversionOutcome,
}

/// Aggregate result of a conversion run.
///
/// Created empty at batch start, appended to per item by the running
/// batch, and handed back immutable once the listing is exhausted. A
/// single-file run is represented as a one-entry report for uniformity.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    entries: Vec<ReportEntry>,
}

impl BatchReport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Wraps a single item's outcome as a one-entry report.
    pub(crate) fn single(source: PathBuf, outcome: ConversionOutcome) -> Self {
        Self {
            entries: vec![ReportEntry { source, outcome }],
        }
    }

    pub(crate) fn push(&mut self, source: PathBuf, outcome: ConversionOutcome) {
        self.entries.push(ReportEntry { source, outcome });
    }

    /// Number of items examined.
    pub fn total(&self) -> usize {
        self.entries.len()
    }

    /// Number of output files written across all items. For container
    /// exports every texture written counts individually.
    pub fn converted(&self) -> usize {
        self.entries
            .iter()
            .map(|e| match &e.outcome {
                ConversionOutcome::Converted(paths) => paths.len(),
                _ => 0,
            })
            .sum()
    }

    /// Number of items that produced at least one output file.
    pub fn converted_items(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, ConversionOutcome::Converted(_)))
            .count()
    }

    /// Number of items recorded as failed.
    pub fn failed_items(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, ConversionOutcome::Failed(_)))
            .count()
    }

    /// Per-item outcomes, in processing order.
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }
}
