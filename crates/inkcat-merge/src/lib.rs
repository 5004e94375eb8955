//! Reconciles the three scraper feeds into one canonical record per product.

pub mod error;
pub mod feed;
pub mod reconcile;

use std::path::Path;

pub use error::MergeError;
pub use feed::{load_feed, load_optional_feed, FeedKind};
pub use reconcile::reconcile;

use inkcat_core::CanonicalProduct;

/// Input and output locations for one merge run.
#[derive(Debug, Clone, Copy)]
pub struct MergePaths<'a> {
    pub primary: &'a Path,
    pub supplementary: &'a Path,
    pub cosmetics: &'a Path,
    pub output: &'a Path,
}

/// Record counts observed during a merge run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeSummary {
    pub primary: usize,
    pub supplementary: usize,
    pub cosmetics: usize,
    pub merged: usize,
}

/// Loads all feeds, reconciles them, and writes the merged list.
///
/// # Errors
///
/// Returns [`MergeError::MissingInputFile`] when the primary or supplementary
/// feed is absent, [`MergeError::MalformedInput`] when any feed is not a JSON
/// array of product objects, [`MergeError::MalformedRecord`] for a record with
/// no name, and [`MergeError::Write`] if the output cannot be written.
pub fn run_merge(paths: MergePaths<'_>) -> Result<MergeSummary, MergeError> {
    let primary = load_feed(paths.primary)?;
    let supplementary = load_feed(paths.supplementary)?;
    let cosmetics = load_optional_feed(paths.cosmetics)?;

    let merged = reconcile(&primary, &supplementary, &cosmetics)?;
    write_merged(paths.output, &merged)?;

    let summary = MergeSummary {
        primary: primary.len(),
        supplementary: supplementary.len(),
        cosmetics: cosmetics.len(),
        merged: merged.len(),
    };
    tracing::info!(
        path = %paths.output.display(),
        primary = summary.primary,
        supplementary = summary.supplementary,
        cosmetics = summary.cosmetics,
        merged = summary.merged,
        "merged product list written"
    );
    Ok(summary)
}

/// Writes the reconciled records as a flat JSON array.
///
/// # Errors
///
/// Returns [`MergeError::Write`] on any I/O or serialization failure.
pub fn write_merged(path: &Path, products: &[CanonicalProduct]) -> Result<(), MergeError> {
    inkcat_core::write_pretty_atomic(path, products).map_err(|source| MergeError::Write {
        path: path.display().to_string(),
        source,
    })
}
