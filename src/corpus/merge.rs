//! Merging per-channel datasets into one corpus.

use crate::error::CorpusError;
use crate::types::{UnifiedCorpus, ValidatedDataset};

/// Merge accepted per-channel datasets into a [`UnifiedCorpus`].
///
/// Rules:
///
/// - An empty input fails with [`CorpusError::NoData`]: training cannot
///   proceed when every channel was skipped. This is the pipeline's one
///   unrecoverable error.
/// - Datasets are concatenated in the order given; row order within each
///   dataset is preserved.
/// - Rows whose text is empty (or whitespace only) are dropped.
/// - No deduplication is performed across channels.
///
/// A single-class result is not an error here; callers check
/// [`crate::types::ClassBalance::is_single_class`] and warn. Downstream
/// stratified splitting fails instead, which is the clearer failure.
pub fn merge(datasets: Vec<ValidatedDataset>) -> Result<UnifiedCorpus, CorpusError> {
    if datasets.is_empty() {
        return Err(CorpusError::NoData);
    }

    let records = datasets
        .into_iter()
        .flat_map(|dataset| dataset.records)
        .filter(|record| !record.text.trim().is_empty())
        .collect();

    Ok(UnifiedCorpus::new(records))
}
