//! Reading the merged list and writing the category tree.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::Path;

use inkcat_core::{brand_file_stem, write_pretty_atomic, CanonicalProduct, NO_BRAND};
use serde::Serialize;

use crate::category::Category;
use crate::classify::CategorizedOutput;
use crate::error::ClassifyError;
use crate::types::StructuredProduct;

/// Name of the consolidated cosmetics file at the root of the output tree.
pub const COSMETICS_AGGREGATE_FILE: &str = "cosmeticos.json";

/// What [`write_outputs`] produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputSummary {
    /// Per-brand files plus the cosmetics aggregate.
    pub files_written: usize,
    pub products: usize,
    /// Product count for each category that had at least one product, in
    /// [`Category`] order.
    pub per_category: Vec<(Category, usize)>,
}

/// Reads the reconciler's output.
///
/// # Errors
///
/// Returns [`ClassifyError::MissingInputFile`] if `path` does not exist,
/// [`ClassifyError::Io`] for other read failures, and
/// [`ClassifyError::MalformedInput`] if a record is not a valid product.
pub fn load_merged(path: &Path) -> Result<Vec<CanonicalProduct>, ClassifyError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            ClassifyError::MissingInputFile {
                path: path.display().to_string(),
            }
        } else {
            ClassifyError::io(path, e)
        }
    })?;

    let products: Vec<CanonicalProduct> =
        serde_json::from_str(&content).map_err(|source| ClassifyError::MalformedInput {
            path: path.display().to_string(),
            source,
        })?;
    tracing::info!(path = %path.display(), count = products.len(), "merged list loaded");
    Ok(products)
}

#[derive(Serialize)]
struct CosmeticsAggregate<'a> {
    produtos: CosmeticsProducts<'a>,
}

#[derive(Serialize)]
struct CosmeticsProducts<'a> {
    materiais_para_stencil: &'a [StructuredProduct],
    outros_cosmeticos: &'a [StructuredProduct],
    higiene_e_limpeza_corporal: &'a [StructuredProduct],
    cremes_e_pos_tatuagem: &'a [StructuredProduct],
}

/// Replaces `output_dir` with a fresh tree for `categorized`.
///
/// Layout:
/// - `<output_dir>/<category>/<brand>.json` for each non-empty category, one
///   file per brand, products sorted by name;
/// - `<output_dir>/cosmeticos.json` with the four cosmetics sub-categories,
///   always written.
///
/// Anything previously under `output_dir` is deleted first.
///
/// # Errors
///
/// Returns [`ClassifyError::UnsafeOutputDir`] if `output_dir` fails
/// [`check_output_dir`], and [`ClassifyError::Io`] if the directory cannot be
/// cleared or any file cannot be written.
pub fn write_outputs(
    output_dir: &Path,
    categorized: &CategorizedOutput,
) -> Result<OutputSummary, ClassifyError> {
    check_output_dir(output_dir, None)?;
    reset_dir(output_dir)?;

    let mut summary = OutputSummary {
        products: categorized.len(),
        ..OutputSummary::default()
    };

    for (category, items) in categorized.categories() {
        if items.is_empty() {
            continue;
        }
        summary.per_category.push((category, items.len()));
        let category_dir = output_dir.join(category.key());

        for (stem, mut products) in group_by_brand_file(items) {
            products.sort_by(|a, b| a.name.cmp(&b.name));
            let path = category_dir.join(format!("{stem}.json"));
            write_json(&path, &products)?;
            summary.files_written += 1;
            tracing::info!(
                %category,
                brand = %stem,
                count = products.len(),
                path = %path.display(),
                "brand file written"
            );
        }
    }

    let aggregate = CosmeticsAggregate {
        produtos: CosmeticsProducts {
            materiais_para_stencil: categorized.get(Category::StencilMaterials),
            outros_cosmeticos: categorized.get(Category::OtherCosmetics),
            higiene_e_limpeza_corporal: categorized.get(Category::BodyHygiene),
            cremes_e_pos_tatuagem: categorized.get(Category::AftercareCreams),
        },
    };
    let aggregate_path = output_dir.join(COSMETICS_AGGREGATE_FILE);
    write_json(&aggregate_path, &aggregate)?;
    summary.files_written += 1;
    tracing::info!(path = %aggregate_path.display(), "cosmetics aggregate written");

    Ok(summary)
}

/// Verifies that `output_dir` can be deleted and recreated.
///
/// Rejects an empty path, a filesystem root, the working directory or any of
/// its ancestors, and, when `input` is given, any directory that is or
/// contains the input file. Paths are compared after symlink resolution. A
/// non-empty directory path that does not exist yet is always accepted.
///
/// # Errors
///
/// Returns [`ClassifyError::UnsafeOutputDir`] naming the rejected path, or
/// [`ClassifyError::Io`] if an existing path or `input` cannot be resolved.
pub fn check_output_dir(output_dir: &Path, input: Option<&Path>) -> Result<(), ClassifyError> {
    let unsafe_dir = |reason| ClassifyError::UnsafeOutputDir {
        path: output_dir.display().to_string(),
        reason,
    };

    if output_dir.as_os_str().is_empty() {
        return Err(unsafe_dir("path is empty"));
    }
    let resolved = match output_dir.canonicalize() {
        Ok(resolved) => resolved,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(ClassifyError::io(output_dir, e)),
    };

    let cwd = std::env::current_dir().and_then(|d| d.canonicalize()).ok();
    let input = input
        .map(|path| path.canonicalize().map_err(|e| ClassifyError::io(path, e)))
        .transpose()?;

    match unsafe_reason(&resolved, cwd.as_deref(), input.as_deref()) {
        Some(reason) => Err(unsafe_dir(reason)),
        None => Ok(()),
    }
}

/// Decides on already-resolved paths why `output_dir` must not be removed.
fn unsafe_reason(
    output_dir: &Path,
    cwd: Option<&Path>,
    input: Option<&Path>,
) -> Option<&'static str> {
    if output_dir.parent().is_none() {
        return Some("path is a filesystem root");
    }
    if cwd.is_some_and(|cwd| cwd.starts_with(output_dir)) {
        return Some("path is the working directory or one of its ancestors");
    }
    if input.is_some_and(|input| input.starts_with(output_dir)) {
        return Some("path contains the merged input file");
    }
    None
}

/// Groups products by the file their brand maps to. Blank brands share the
/// no-brand file; distinct brands that normalize to the same stem share one file.
fn group_by_brand_file(items: &[StructuredProduct]) -> BTreeMap<String, Vec<&StructuredProduct>> {
    let mut groups: BTreeMap<String, Vec<&StructuredProduct>> = BTreeMap::new();
    for item in items {
        let brand = if item.brand.trim().is_empty() {
            NO_BRAND
        } else {
            item.brand.as_str()
        };
        let mut stem = brand_file_stem(brand);
        if stem.is_empty() {
            stem = brand_file_stem(NO_BRAND);
        }
        groups.entry(stem).or_default().push(item);
    }
    groups
}

fn reset_dir(dir: &Path) -> Result<(), ClassifyError> {
    match std::fs::remove_dir_all(dir) {
        Ok(()) => tracing::debug!(path = %dir.display(), "previous output removed"),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(ClassifyError::io(dir, e)),
    }
    std::fs::create_dir_all(dir).map_err(|e| ClassifyError::io(dir, e))
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), ClassifyError> {
    write_pretty_atomic(path, value).map_err(|e| ClassifyError::io(path, e))
}
