//! Stage runners called from `main` once configuration is resolved.

use anyhow::Context;
use inkcat_core::AppConfig;
use inkcat_merge::MergePaths;

/// Runs the reconciler with the configured feed paths.
///
/// # Errors
///
/// Returns an error if a required feed is missing or malformed, a record has
/// no name, or the merged list cannot be written.
pub(crate) fn run_merge_stage(config: &AppConfig) -> anyhow::Result<()> {
    let paths = MergePaths {
        primary: &config.primary_feed_path,
        supplementary: &config.supplementary_feed_path,
        cosmetics: &config.cosmetics_feed_path,
        output: &config.merged_path,
    };
    let summary = inkcat_merge::run_merge(paths).context("merge stage failed")?;

    tracing::info!(
        primary = summary.primary,
        supplementary = summary.supplementary,
        cosmetics = summary.cosmetics,
        merged = summary.merged,
        path = %config.merged_path.display(),
        "merge complete"
    );
    Ok(())
}

/// Runs the classifier over the merged list and regenerates the output tree.
///
/// # Errors
///
/// Returns an error if the merged list is missing or malformed, or the output
/// tree cannot be written.
pub(crate) fn run_classify_stage(config: &AppConfig) -> anyhow::Result<()> {
    let summary = inkcat_classify::run_classify(&config.merged_path, &config.output_dir)
        .with_context(|| {
            format!(
                "classify stage failed for {}",
                config.merged_path.display()
            )
        })?;

    for (category, count) in &summary.per_category {
        tracing::info!(%category, count, "category classified");
    }
    tracing::info!(
        products = summary.products,
        categories = summary.per_category.len(),
        files = summary.files_written,
        path = %config.output_dir.display(),
        "classification complete"
    );
    Ok(())
}
