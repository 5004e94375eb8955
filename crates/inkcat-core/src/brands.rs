//! Brand attribution for products scraped from a single multi-brand storefront.
//!
//! The storefront does not expose a reliable brand field, so brand is derived
//! from markers embedded in the product name.

use crate::products::INKS_MATERIAL_TYPE;

/// House brand assigned when no marker matches.
pub const DEFAULT_BRAND: &str = "Electric Ink";
/// Bucket used when writing records whose brand is missing or blank.
pub const NO_BRAND: &str = "Sem Marca";

/// Result of applying the brand markers to a product name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandInference {
    pub brand: &'static str,
    /// Set when the marker also pins the material type, overriding the feed.
    pub forced_material_type: Option<&'static str>,
}

impl BrandInference {
    /// Returns the material type to store: the forced one, else `scraped`.
    #[must_use]
    pub fn material_type<'a>(&self, scraped: &'a str) -> &'a str {
        match self.forced_material_type {
            Some(forced) => forced,
            None => scraped,
        }
    }
}

/// Markers checked in order; the first one contained in the name wins.
const BRAND_MARKERS: &[(&str, &str)] = &[(" EG", "Easy Glow"), ("INTZ", "Intenze")];

/// Derives the brand from a trimmed product name.
///
/// `" EG"` (Easy Glow) is checked before `"INTZ"` (Intenze); both are ink
/// lines, so either marker also forces the material type to `"Tintas"`.
/// Matching is case-sensitive.
#[must_use]
pub fn infer_brand(name: &str) -> BrandInference {
    BRAND_MARKERS
        .iter()
        .find(|(marker, _)| name.contains(marker))
        .map_or(
            BrandInference {
                brand: DEFAULT_BRAND,
                forced_material_type: None,
            },
            |&(_, brand)| BrandInference {
                brand,
                forced_material_type: Some(INKS_MATERIAL_TYPE),
            },
        )
}

/// Converts a brand into the stem of its output file name.
///
/// Spaces, `/` and `-` become `_`, parentheses are dropped, and the result is
/// lowercased: `"Easy Glow"` → `"easy_glow"`.
#[must_use]
pub fn brand_file_stem(brand: &str) -> String {
    brand
        .chars()
        .filter(|c| !matches!(c, '(' | ')'))
        .map(|c| if matches!(c, ' ' | '/' | '-') { '_' } else { c })
        .collect::<String>()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eg_marker_infers_easy_glow_and_forces_inks() {
        let inference = infer_brand("Black EG 30ml");
        assert_eq!(inference.brand, "Easy Glow");
        assert_eq!(inference.material_type("Outros"), "Tintas");
    }

    #[test]
    fn eg_marker_at_end_of_name() {
        assert_eq!(infer_brand("Acqua Ink EG").brand, "Easy Glow");
    }

    #[test]
    fn intz_marker_infers_intenze() {
        let inference = infer_brand("INTZ Red");
        assert_eq!(inference.brand, "Intenze");
        assert_eq!(inference.forced_material_type, Some("Tintas"));
    }

    #[test]
    fn eg_takes_precedence_over_intz() {
        assert_eq!(infer_brand("INTZ Mix EG").brand, "Easy Glow");
    }

    #[test]
    fn no_marker_defaults_to_house_brand() {
        let inference = infer_brand("Random Needle Cartridge");
        assert_eq!(inference.brand, "Electric Ink");
        assert_eq!(
            inference.material_type("Agulhas e Cartuchos"),
            "Agulhas e Cartuchos"
        );
    }

    #[test]
    fn eg_marker_requires_leading_space() {
        // "EGO" at the start has no leading space.
        assert_eq!(infer_brand("EGO Grip").brand, "Electric Ink");
    }

    #[test]
    fn markers_are_case_sensitive() {
        assert_eq!(infer_brand("Intz lowercase").brand, "Electric Ink");
        assert_eq!(infer_brand("black eg").brand, "Electric Ink");
    }

    #[test]
    fn file_stem_replaces_separators() {
        assert_eq!(brand_file_stem("Easy Glow"), "easy_glow");
        assert_eq!(brand_file_stem("Electric Ink"), "electric_ink");
        assert_eq!(brand_file_stem("Dermo-Care/BR"), "dermo_care_br");
    }

    #[test]
    fn file_stem_drops_parentheses() {
        assert_eq!(brand_file_stem("Solid Ink (USA)"), "solid_ink_usa");
    }

    #[test]
    fn file_stem_lowercases_non_ascii() {
        assert_eq!(brand_file_stem("Sem Marca"), "sem_marca");
        assert_eq!(brand_file_stem("ÉLITE"), "élite");
    }
}
