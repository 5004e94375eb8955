//! Category-specific field extraction.
//!
//! Every keyword test runs on the lowercased product name; only the option
//! extractors look at option labels.

use crate::category::Category;
use crate::keywords::{contains_any, first_match, KeywordRule};
use crate::parse::{liquid_volume, unit_count, volume_or_weight};
use crate::types::{
    AftercareCreamFields, BodyHygieneFields, Extension, OtherCosmeticFields, PlainFields,
    StencilFields, StencilOption, VolumeOption,
};

const STENCIL_TIPOS: &[KeywordRule<&str>] = &[
    KeywordRule {
        keywords: &["transfer"],
        value: "Transfer",
    },
    KeywordRule {
        keywords: &["vaseline", "slip"],
        value: "Vaselina",
    },
    KeywordRule {
        keywords: &["thermal", "spirit paper"],
        value: "Papel Térmico",
    },
];

const BODY_HYGIENE_TIPOS: &[KeywordRule<&str>] = &[
    KeywordRule {
        keywords: &["after all"],
        value: "Hidratante Pós-Tatuagem",
    },
    KeywordRule {
        keywords: &["clean up"],
        value: "Solução de Limpeza",
    },
    KeywordRule {
        keywords: &["cleaning water"],
        value: "Água de Limpeza",
    },
    KeywordRule {
        keywords: &["the gloo"],
        value: "Cola para Estêncil",
    },
    KeywordRule {
        keywords: &["scrub out"],
        value: "Esfoliante",
    },
];

const AFTERCARE_CREAM_TIPOS: &[KeywordRule<&str>] = &[
    KeywordRule {
        keywords: &["vaselina"],
        value: "Vaselina",
    },
    KeywordRule {
        keywords: &["manteiga", "butter", "cat slobber"],
        value: "Manteiga",
    },
    KeywordRule {
        keywords: &["aftercare"],
        value: "Aftercare",
    },
    KeywordRule {
        keywords: &["creme", "cream"],
        value: "Creme",
    },
];

const OTHER_COSMETIC_TIPOS: &[KeywordRule<&str>] = &[
    KeywordRule {
        keywords: &["impressora"],
        value: "Impressora",
    },
    KeywordRule {
        keywords: &["bateria"],
        value: "Bateria",
    },
    KeywordRule {
        keywords: &["estojo"],
        value: "Estojo",
    },
    KeywordRule {
        keywords: &["kit"],
        value: "Kit",
    },
    KeywordRule {
        keywords: &["tattoo to go"],
        value: "Protetor Portátil",
    },
    KeywordRule {
        keywords: &["protection"],
        value: "Protetor",
    },
];

const EQUIPMENT_KEYWORDS: &[&str] = &["impressora", "bateria", "estojo"];

/// Builds the extension fields for a product routed into `category`.
///
/// `lower_name` must be the lowercased product name.
#[must_use]
pub fn extension_for(category: Category, lower_name: &str, options: &[String]) -> Extension {
    match category {
        Category::StencilMaterials => Extension::Stencil(StencilFields {
            tipo: first_match(STENCIL_TIPOS, lower_name),
            volume: volume_or_weight(lower_name),
            opcoes: stencil_options(options),
        }),
        Category::BodyHygiene => Extension::BodyHygiene(BodyHygieneFields {
            tipo: first_match(BODY_HYGIENE_TIPOS, lower_name),
            volume: liquid_volume(lower_name),
            opcoes_volume: volume_options(options),
        }),
        Category::AftercareCreams => Extension::AftercareCream(AftercareCreamFields {
            tipo: first_match(AFTERCARE_CREAM_TIPOS, lower_name),
            volume: volume_or_weight(lower_name),
            kit: lower_name.contains("kit"),
            monodose: lower_name.contains("monodose"),
        }),
        Category::OtherCosmetics => Extension::OtherCosmetic(OtherCosmeticFields {
            tipo: first_match(OTHER_COSMETIC_TIPOS, lower_name),
            equipamento: contains_any(lower_name, EQUIPMENT_KEYWORDS),
            kit: lower_name.contains("kit"),
        }),
        _ => Extension::Plain(PlainFields::default()),
    }
}

/// For each option, a measure entry (if any) followed by a quantity entry (if any).
fn stencil_options(options: &[String]) -> Vec<StencilOption> {
    options
        .iter()
        .flat_map(|opt| {
            let measure = volume_or_weight(opt).map(|valor| StencilOption::Measure {
                medida_string: opt.clone(),
                medida_valor: valor,
            });
            let quantity = unit_count(opt).map(|quantidade| StencilOption::Quantity {
                medida_string: opt.clone(),
                quantidade,
            });
            measure.into_iter().chain(quantity)
        })
        .collect()
}

fn volume_options(options: &[String]) -> Vec<VolumeOption> {
    options
        .iter()
        .filter_map(|opt| {
            liquid_volume(opt).map(|valor| VolumeOption {
                volume_string: opt.clone(),
                volume_valor: valor,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
