//! Per-record structuring and category routing.

use std::collections::BTreeMap;

use inkcat_core::CanonicalProduct;

use crate::category::Category;
use crate::extract::extension_for;
use crate::keywords::{first_match, KeywordRule};
use crate::price::summarize_prices;
use crate::types::StructuredProduct;

/// Umbrella label the cosmetics scrape applies before sub-typing.
const COSMETICS_MARKER: &str = "Cosméticos";

const COSMETICS_SUBCATEGORIES: &[KeywordRule<Category>] = &[
    KeywordRule {
        keywords: &["stencil", "transfer", "thermal", "spirit paper", "slip"],
        value: Category::StencilMaterials,
    },
    KeywordRule {
        keywords: &[
            "after all",
            "clean up",
            "cleaning water",
            "the gloo",
            "scrub out",
        ],
        value: Category::BodyHygiene,
    },
    KeywordRule {
        keywords: &["manteiga", "butter", "cat slobber", "cream derma"],
        value: Category::AftercareCreams,
    },
];

/// Picks the specific cosmetics sub-category for a product whose material
/// type carries the umbrella label. Returns `None` for any other product.
fn reclassify_cosmetic(material_type: &str, lower_name: &str) -> Option<Category> {
    if !material_type.contains(COSMETICS_MARKER) {
        return None;
    }
    Some(first_match(COSMETICS_SUBCATEGORIES, lower_name).unwrap_or(Category::OtherCosmetics))
}

/// Derives prices, final material type, and category fields for one product.
#[must_use]
pub fn structure_product(product: CanonicalProduct) -> (Category, StructuredProduct) {
    let lower_name = product.name.to_lowercase();
    let prices = summarize_prices(&product.available_price);

    let (category, material_type) =
        match reclassify_cosmetic(&product.material_type, &lower_name) {
            Some(category) => {
                let label = category.material_type().unwrap_or(COSMETICS_MARKER);
                (category, label.to_string())
            }
            None => (
                Category::from_material_type(&product.material_type),
                product.material_type,
            ),
        };

    let extension = extension_for(category, &lower_name, &product.available_options);

    let structured = StructuredProduct {
        name: product.name,
        brand: product.brand,
        available_options_raw: product.available_options,
        all_available_prices: prices.all,
        lowest_price: prices.lowest,
        highest_price: prices.highest,
        material_type,
        extension,
    };
    (category, structured)
}

/// Products partitioned by category. Every [`Category`] has an entry, empty
/// or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorizedOutput {
    buckets: BTreeMap<Category, Vec<StructuredProduct>>,
}

impl CategorizedOutput {
    fn empty() -> Self {
        Self {
            buckets: Category::ALL.into_iter().map(|c| (c, Vec::new())).collect(),
        }
    }

    /// Products routed into `category`, in input order.
    #[must_use]
    pub fn get(&self, category: Category) -> &[StructuredProduct] {
        self.buckets
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// All categories with their products, in [`Category`] order.
    pub fn categories(&self) -> impl Iterator<Item = (Category, &[StructuredProduct])> {
        self.buckets.iter().map(|(c, items)| (*c, items.as_slice()))
    }

    /// Total number of products across every category.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Structures every product and routes it into exactly one category.
#[must_use]
pub fn classify(products: Vec<CanonicalProduct>) -> CategorizedOutput {
    let mut output = CategorizedOutput::empty();
    for product in products {
        let (category, structured) = structure_product(product);
        output.buckets.entry(category).or_default().push(structured);
    }

    for (category, items) in output.categories() {
        if !items.is_empty() {
            tracing::debug!(%category, count = items.len(), "category populated");
        }
    }
    output
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod tests;
