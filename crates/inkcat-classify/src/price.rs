//! Brazilian-real price strings: `"R$ 1.234,56"` in, `"R$ 1234,56"` out.

const CURRENCY_PREFIX: &str = "R$";

/// Parses a scraped price string.
///
/// Strips the currency prefix, drops `.` thousands separators, and reads `,`
/// as the decimal point. Returns `None` for blank, unparsable, or non-finite
/// input.
#[must_use]
pub fn parse_price(raw: &str) -> Option<f64> {
    let cleaned = raw
        .replace(CURRENCY_PREFIX, "")
        .replace('.', "")
        .replace(',', ".");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Formats a price with two decimals, a comma separator, and no grouping.
///
/// Rounding follows the exact binary value, so `10.135` (stored just below
/// the midpoint) becomes `"R$ 10,13"`.
#[must_use]
pub fn format_price(value: f64) -> String {
    format!("{CURRENCY_PREFIX} {value:.2}").replace('.', ",")
}

/// Parsed and re-formatted prices for one product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceSummary {
    /// Every parsable price, ascending.
    pub all: Vec<String>,
    pub lowest: Option<String>,
    pub highest: Option<String>,
}

/// Parses, sorts, and re-formats a product's price list.
///
/// Unparsable entries are dropped; duplicates are kept.
#[must_use]
pub fn summarize_prices(raw: &[String]) -> PriceSummary {
    let mut values: Vec<f64> = raw.iter().filter_map(|p| parse_price(p)).collect();
    values.sort_by(f64::total_cmp);

    PriceSummary {
        lowest: values.first().copied().map(format_price),
        highest: values.last().copied().map(format_price),
        all: values.into_iter().map(format_price).collect(),
    }
}
