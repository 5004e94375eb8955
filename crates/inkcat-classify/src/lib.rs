//! Categorization of reconciled products and the per-category, per-brand
//! output tree.

pub mod category;
pub mod classify;
pub mod error;
pub mod extract;
pub mod keywords;
pub mod parse;
pub mod persist;
pub mod price;
pub mod types;

use std::path::Path;

pub use category::Category;
pub use classify::{classify, structure_product, CategorizedOutput};
pub use error::ClassifyError;
pub use persist::{check_output_dir, load_merged, write_outputs, OutputSummary};
pub use types::{Extension, StructuredProduct};

/// Reads the merged list, classifies it, and regenerates `output_dir`.
///
/// # Errors
///
/// Returns [`ClassifyError::MissingInputFile`] or [`ClassifyError::MalformedInput`]
/// when the merged list cannot be loaded, [`ClassifyError::UnsafeOutputDir`]
/// when `output_dir` is or contains `input` (or is otherwise unsafe to
/// delete), and [`ClassifyError::Io`] if the output tree cannot be written.
pub fn run_classify(input: &Path, output_dir: &Path) -> Result<OutputSummary, ClassifyError> {
    let products = load_merged(input)?;
    check_output_dir(output_dir, Some(input))?;
    let categorized = classify(products);
    write_outputs(output_dir, &categorized)
}
