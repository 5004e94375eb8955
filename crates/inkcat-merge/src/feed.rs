//! Loading of the raw scraper feeds.

use std::io::ErrorKind;
use std::path::Path;

use inkcat_core::RawProduct;

use crate::error::MergeError;

/// Which scraper produced a feed. Order of declaration is merge order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedKind {
    /// JSON-LD metadata scrape.
    Primary,
    /// Rendered listing-page scrape.
    Supplementary,
    /// Cosmetics section scrape.
    Cosmetics,
}

impl std::fmt::Display for FeedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedKind::Primary => write!(f, "primary"),
            FeedKind::Supplementary => write!(f, "supplementary"),
            FeedKind::Cosmetics => write!(f, "cosmetics"),
        }
    }
}

/// Reads a required feed.
///
/// # Errors
///
/// Returns [`MergeError::MissingInputFile`] if `path` does not exist,
/// [`MergeError::Io`] for other read failures, and
/// [`MergeError::MalformedInput`] if the content is not a JSON array of objects.
pub fn load_feed(path: &Path) -> Result<Vec<RawProduct>, MergeError> {
    read_feed(path)?.ok_or_else(|| MergeError::MissingInputFile {
        path: path.display().to_string(),
    })
}

/// Reads a feed that may legitimately be absent, yielding an empty list.
///
/// # Errors
///
/// Same as [`load_feed`], except a missing file is not an error.
pub fn load_optional_feed(path: &Path) -> Result<Vec<RawProduct>, MergeError> {
    if let Some(products) = read_feed(path)? {
        tracing::info!(path = %path.display(), count = products.len(), "optional feed loaded");
        Ok(products)
    } else {
        tracing::warn!(
            path = %path.display(),
            "optional feed not found; continuing without it"
        );
        Ok(Vec::new())
    }
}

fn read_feed(path: &Path) -> Result<Option<Vec<RawProduct>>, MergeError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(MergeError::Io {
                path: path.display().to_string(),
                source,
            })
        }
    };

    let products: Vec<RawProduct> =
        serde_json::from_str(&content).map_err(|source| MergeError::MalformedInput {
            path: path.display().to_string(),
            source,
        })?;
    tracing::debug!(path = %path.display(), count = products.len(), "feed parsed");
    Ok(Some(products))
}
