//! Multi-feed reconciliation.
//!
//! Each feed is turned into patches (one per record) and folded left-to-right
//! into a map keyed by trimmed product name. A patch either seeds a new entry
//! or is applied to the existing one according to its feed's [`MergePolicy`].

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use inkcat_core::{
    infer_brand, CanonicalProduct, RawProduct, COSMETICS_DEFAULT_MATERIAL_TYPE, DEFAULT_BRAND,
    DEFAULT_MATERIAL_TYPE,
};

use crate::error::MergeError;
use crate::feed::FeedKind;

/// How a later feed's value combines with the value already merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldPolicy {
    /// Always replace, even with an empty value.
    Overwrite,
    /// Replace only while the existing value is empty.
    FillIfEmpty,
    /// Never touch the existing value.
    Keep,
}

impl FieldPolicy {
    fn apply_list(self, existing: &mut Vec<String>, incoming: Vec<String>) {
        match self {
            FieldPolicy::Overwrite => *existing = incoming,
            FieldPolicy::FillIfEmpty if existing.is_empty() => *existing = incoming,
            FieldPolicy::FillIfEmpty | FieldPolicy::Keep => {}
        }
    }

    fn apply_text(self, existing: &mut String, incoming: String) {
        match self {
            FieldPolicy::Overwrite => *existing = incoming,
            FieldPolicy::FillIfEmpty if existing.is_empty() => *existing = incoming,
            FieldPolicy::FillIfEmpty | FieldPolicy::Keep => {}
        }
    }
}

/// Per-field policies a feed uses when its product is already in the map.
#[derive(Debug, Clone, Copy)]
struct MergePolicy {
    brand: FieldPolicy,
    options: FieldPolicy,
    price: FieldPolicy,
    material_type: FieldPolicy,
}

impl FeedKind {
    fn policy(self) -> MergePolicy {
        use FieldPolicy::{FillIfEmpty, Keep, Overwrite};
        match self {
            // A repeated name within the primary feed replaces the whole entry.
            FeedKind::Primary => MergePolicy {
                brand: Overwrite,
                options: Overwrite,
                price: Overwrite,
                material_type: Overwrite,
            },
            FeedKind::Supplementary => MergePolicy {
                brand: Keep,
                options: Overwrite,
                price: Keep,
                material_type: Keep,
            },
            FeedKind::Cosmetics => MergePolicy {
                brand: Keep,
                options: FillIfEmpty,
                price: FillIfEmpty,
                material_type: Overwrite,
            },
        }
    }

    /// Builds the record this feed contributes for `raw`, named `key`.
    fn patch(self, key: &str, raw: &RawProduct) -> CanonicalProduct {
        match self {
            FeedKind::Primary | FeedKind::Supplementary => {
                let inference = infer_brand(key);
                let material_type =
                    inference.material_type(raw.material_type_or(DEFAULT_MATERIAL_TYPE));
                // Options on the primary feed are ignored; the listing scrape owns them.
                let available_options = if self == FeedKind::Primary {
                    Vec::new()
                } else {
                    raw.available_options.clone()
                };
                CanonicalProduct {
                    name: key.to_string(),
                    brand: inference.brand.to_string(),
                    available_options,
                    available_price: raw.available_price.clone(),
                    material_type: material_type.to_string(),
                }
            }
            FeedKind::Cosmetics => CanonicalProduct {
                name: key.to_string(),
                brand: raw.brand().unwrap_or(DEFAULT_BRAND).to_string(),
                available_options: raw.available_options.clone(),
                available_price: raw.available_price.clone(),
                material_type: raw
                    .material_type_or(COSMETICS_DEFAULT_MATERIAL_TYPE)
                    .to_string(),
            },
        }
    }
}

impl MergePolicy {
    fn apply(self, existing: &mut CanonicalProduct, patch: CanonicalProduct) {
        self.brand.apply_text(&mut existing.brand, patch.brand);
        self.options
            .apply_list(&mut existing.available_options, patch.available_options);
        self.price
            .apply_list(&mut existing.available_price, patch.available_price);
        self.material_type
            .apply_text(&mut existing.material_type, patch.material_type);
    }
}

/// Merges the three feeds into one record per distinct trimmed name.
///
/// Feeds are applied in order primary, supplementary, cosmetics:
/// - primary seeds price and material type, with brand inferred from the name;
/// - supplementary always replaces options and seeds products primary lacks;
/// - cosmetics fills empty options and prices and always sets material type.
///
/// The result is sorted by name.
///
/// # Errors
///
/// Returns [`MergeError::MalformedRecord`] for the first record in any feed
/// that has no `name`.
pub fn reconcile(
    primary: &[RawProduct],
    supplementary: &[RawProduct],
    cosmetics: &[RawProduct],
) -> Result<Vec<CanonicalProduct>, MergeError> {
    let feeds = [
        (FeedKind::Primary, primary),
        (FeedKind::Supplementary, supplementary),
        (FeedKind::Cosmetics, cosmetics),
    ];

    let merged = feeds.iter().try_fold(
        BTreeMap::<String, CanonicalProduct>::new(),
        |mut map, &(feed, records)| {
            for (index, raw) in records.iter().enumerate() {
                let key = raw
                    .key()
                    .ok_or(MergeError::MalformedRecord { feed, index })?;
                let patch = feed.patch(key, raw);
                match map.entry(patch.name.clone()) {
                    Entry::Vacant(slot) => {
                        tracing::debug!(%feed, name = key, "product added");
                        slot.insert(patch);
                    }
                    Entry::Occupied(mut slot) => {
                        tracing::debug!(%feed, name = key, "product merged");
                        feed.policy().apply(slot.get_mut(), patch);
                    }
                }
            }
            tracing::info!(%feed, records = records.len(), total = map.len(), "feed merged");
            Ok::<_, MergeError>(map)
        },
    )?;

    Ok(merged.into_values().collect())
}

#[cfg(test)]
#[path = "reconcile_test.rs"]
mod tests;
