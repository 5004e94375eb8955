use std::path::PathBuf;

/// Locations of every file the pipeline reads or writes, plus logging setup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// JSON-LD scrape output: authoritative for prices and material types.
    pub primary_feed_path: PathBuf,
    /// Listing-page scrape output: authoritative for variant options.
    pub supplementary_feed_path: PathBuf,
    /// Cosmetics scrape output. Optional; absence is not an error.
    pub cosmetics_feed_path: PathBuf,
    /// Reconciler output and classifier input.
    pub merged_path: PathBuf,
    /// Root of the per-category, per-brand output tree. Regenerated on every run.
    pub output_dir: PathBuf,
}
