use serde::{Deserialize, Deserializer, Serialize};

/// Fallback label for primary and supplementary records without a `materialType`.
pub const DEFAULT_MATERIAL_TYPE: &str = "Outros";
/// Fallback label for cosmetics-feed records without a `materialType`.
pub const COSMETICS_DEFAULT_MATERIAL_TYPE: &str = "Outros Cosméticos";
/// Label forced onto products whose name marks them as an ink line.
pub const INKS_MATERIAL_TYPE: &str = "Tintas";

/// A product exactly as one of the scrapers emitted it.
///
/// Every field is optional at the serde layer so a record without a `name`
/// can be reported by its position in the feed instead of surfacing as an
/// opaque parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProduct {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub material_type: Option<String>,
    /// Variant descriptors as shown on the listing page, e.g. `"30ml"`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub available_options: Vec<String>,
    /// Locale-formatted prices, e.g. `"R$ 1.234,56"`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub available_price: Vec<String>,
}

impl RawProduct {
    /// Returns the join key: the name with surrounding whitespace removed.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.name.as_deref().map(str::trim)
    }

    /// Returns the brand when it carries any non-whitespace text.
    #[must_use]
    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref().filter(|b| !b.trim().is_empty())
    }

    /// Returns the material type, or `default` when the scraper omitted it.
    #[must_use]
    pub fn material_type_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.material_type.as_deref().unwrap_or(default)
    }
}

/// The single reconciled record for one product name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalProduct {
    pub name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub available_options: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub available_price: Vec<String>,
    #[serde(default = "default_material_type")]
    pub material_type: String,
}

fn default_material_type() -> String {
    DEFAULT_MATERIAL_TYPE.to_string()
}

/// Treats an explicit JSON `null` the same as a missing list.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
