//! Measurement extraction from product names and option labels.
//!
//! All functions lowercase their input first and return the matched text as
//! it appears in the lowercased string (e.g. `"120 ml"`), not a parsed number.

use std::sync::LazyLock;

use regex::Regex;

static VOLUME_OR_WEIGHT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\s?ml|\d+\s?g").expect("valid volume/weight regex"));
static LIQUID_VOLUME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\s?ml|\d+\s?l").expect("valid liquid volume regex"));
static UNIT_COUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*(?:un\.|unidades)").expect("valid unit count regex"));

/// Finds the first `"<n>ml"` or `"<n>g"` measure, e.g. `"Stencil Gel 120 ML"` → `"120 ml"`.
#[must_use]
pub fn volume_or_weight(text: &str) -> Option<String> {
    first_match(&VOLUME_OR_WEIGHT_RE, text)
}

/// Finds the first `"<n>ml"` or `"<n>l"` measure, e.g. `"Clean Up 1L"` → `"1l"`.
#[must_use]
pub fn liquid_volume(text: &str) -> Option<String> {
    first_match(&LIQUID_VOLUME_RE, text)
}

/// Finds a pack size such as `"50 Un."` or `"10 unidades"` and returns the count.
///
/// Counts beyond `u64` (twenty or more digits) are treated as absent.
#[must_use]
pub fn unit_count(text: &str) -> Option<u64> {
    let lower = text.to_lowercase();
    UNIT_COUNT_RE
        .captures(&lower)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

fn first_match(re: &Regex, text: &str) -> Option<String> {
    let lower = text.to_lowercase();
    re.find(&lower).map(|m| m.as_str().to_owned())
}
