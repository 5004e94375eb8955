//! Output record shapes.
//!
//! Field names are Portuguese because downstream consumers of the generated
//! files read them by these exact keys.

use serde::Serialize;

/// A canonical product with derived price fields and its category extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructuredProduct {
    pub name: String,
    pub brand: String,
    /// Variant descriptors exactly as merged.
    pub available_options_raw: Vec<String>,
    /// Every parsable price, ascending, formatted as `"R$ 1234,56"`.
    pub all_available_prices: Vec<String>,
    pub lowest_price: Option<String>,
    pub highest_price: Option<String>,
    /// Final material type, after cosmetics reclassification.
    pub material_type: String,
    #[serde(flatten)]
    pub extension: Extension,
}

/// Category-specific fields, flattened into the product object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Extension {
    /// Categories without a sub-schema carry only an empty sub-type.
    Plain(PlainFields),
    Stencil(StencilFields),
    BodyHygiene(BodyHygieneFields),
    AftercareCream(AftercareCreamFields),
    OtherCosmetic(OtherCosmeticFields),
}

impl Extension {
    /// The sub-type label, present on every variant.
    #[must_use]
    pub fn tipo(&self) -> Option<&'static str> {
        match self {
            Extension::Plain(f) => f.tipo,
            Extension::Stencil(f) => f.tipo,
            Extension::BodyHygiene(f) => f.tipo,
            Extension::AftercareCream(f) => f.tipo,
            Extension::OtherCosmetic(f) => f.tipo,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlainFields {
    pub tipo: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StencilFields {
    pub tipo: Option<&'static str>,
    pub volume: Option<String>,
    pub opcoes: Vec<StencilOption>,
}

/// A measure extracted from one option label. A single label can yield both
/// a [`StencilOption::Measure`] and a [`StencilOption::Quantity`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StencilOption {
    Measure {
        medida_string: String,
        medida_valor: String,
    },
    Quantity {
        medida_string: String,
        quantidade: u64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BodyHygieneFields {
    pub tipo: Option<&'static str>,
    pub volume: Option<String>,
    pub opcoes_volume: Vec<VolumeOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VolumeOption {
    pub volume_string: String,
    pub volume_valor: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AftercareCreamFields {
    pub tipo: Option<&'static str>,
    pub volume: Option<String>,
    pub kit: bool,
    pub monodose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OtherCosmeticFields {
    pub tipo: Option<&'static str>,
    pub equipamento: bool,
    pub kit: bool,
}
